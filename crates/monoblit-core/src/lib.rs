#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

//! Packed 1-bpp bitmap engine: geometry, fill patterns, primitives, and blit.
//!
//! # Role in monoblit
//! `monoblit-core` is the deterministic pixel engine. It draws points,
//! lines, rectangle frames and fills, and block-transfers ("blits") packed
//! monochrome pixel data into a caller-supplied framebuffer.
//!
//! # Primary responsibilities
//! - **Geometry**: signed 16-bit coordinates, points, and rectangles.
//! - **Pattern**: 8-byte vertically tiled fill masks.
//! - **Bitmap/BitmapView**: non-owning views over MSB-first packed stores.
//! - **Blit**: byte-aligned, sub-byte, and misaligned row transfer with
//!   `Replace`/`Or` modes and full clipping.
//!
//! # How it fits in the system
//! `monoblit-text` unpacks font glyphs into small bitmaps and blits them
//! through this crate. The demo front ends own a framebuffer store, wrap it
//! in a [`Bitmap`], and present the resulting bytes on a terminal or panel.
//!
//! Every pixel position and every byte written is fully determined by the
//! inputs: no floating point, no allocation, no global state. The crate is
//! `no_std`-capable; the default `std` feature only adds conveniences.

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod bitmap;
mod blit;
mod dump;
pub mod geometry;
pub mod pattern;

pub use bitmap::{Bitmap, BitmapView, TransferMode};
pub use geometry::{Coordinate, Point, Rect};
pub use pattern::{BLACK, GRAY, LIGHT_GRAY, Pattern, WHITE};

#[cfg(feature = "alloc")]
pub use bitmap::BitmapBuf;
