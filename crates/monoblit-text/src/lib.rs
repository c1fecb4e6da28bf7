#![forbid(unsafe_code)]
#![cfg_attr(not(feature = "std"), no_std)]

//! Text rendering for packed 1-bpp bitmaps: fonts, glyph caching, and a
//! UTF-8 scanner.
//!
//! # Role in monoblit
//! `monoblit-text` turns UTF-8 bytes into blits. It owns the read-only font
//! contract (compact column-major glyph data plus kerning), a fixed-capacity
//! set-associative [`PlruCache`], and the [`GlyphCache`] that lazily unpacks
//! glyphs into row-major bitmaps backed by a single pre-sized arena.
//!
//! # Primary responsibilities
//! - **Font**: glyph lookup with fallbacks, kerning pairs, width computation.
//! - **PlruCache**: deterministic Tree-PLRU eviction, compile-time geometry.
//! - **GlyphCache**: unpack-on-miss into an arena slot; no steady-state
//!   allocation.
//! - **Scanner**: one pass over UTF-8 bytes shared by measurement and
//!   drawing, so layout and rendering can never disagree.
//!
//! # How it fits in the system
//! [`draw_string`] scans bytes, consults the font for metrics and kerning,
//! asks the glyph cache for a rendered [`BitmapView`], and blits it through
//! `monoblit-core` at the computed pen position. [`string_width`] runs the
//! identical scan with drawing disabled.
//!
//! [`BitmapView`]: monoblit_core::BitmapView

extern crate alloc;

pub mod font;
pub mod fonts;
pub mod glyph_cache;
pub mod plru;
pub mod scan;
pub mod utf8;

pub use font::{Font, FontError, Glyph, KerningPair, WHITE_SQUARE};
pub use glyph_cache::GlyphCache;
pub use plru::PlruCache;
pub use scan::{draw_char, draw_string, scan_string, string_width};
pub use utf8::Utf8Decoder;
