//! Baked fonts and the registry that sizes the glyph-cache arena.

mod micro8;
mod seg16;

pub use micro8::MICRO8;
pub use seg16::SEG16;

use crate::font::Font;

/// Every font baked into the library. [`crate::GlyphCache::new`] sizes its
/// arena over this registry, so any of these fonts can be rendered from the
/// default cache.
pub static ALL: [&Font; 2] = [&MICRO8, &SEG16];
