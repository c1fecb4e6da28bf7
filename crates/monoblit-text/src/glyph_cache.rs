//! Lazy unpacking of font glyphs into row-major bitmaps, cached in a
//! single pre-sized byte arena.
//!
//! Construction computes one slot size — large enough for the biggest glyph
//! of any font the cache will serve — and allocates `capacity * slot_size`
//! bytes once. Cache misses unpack column-major font data straight into the
//! arena slot selected by the PLRU cache; hits reborrow the slot. Nothing
//! allocates after construction.
//!
//! The cache key is the bare 32-bit code point, which assumes a single
//! active font: when a caller switches fonts, previously cached glyphs are
//! stale and must be dropped with [`GlyphCache::clear`].

use alloc::boxed::Box;
use alloc::vec;

use monoblit_core::{Bitmap, BitmapView, Point};

use crate::font::{Font, Glyph};
use crate::fonts;
use crate::plru::PlruCache;

/// Number of sets in the glyph PLRU cache.
const SETS: usize = 8;
/// Number of ways per set.
const WAYS: usize = 4;

/// Where in the arena a cached glyph lives, and its unpacked shape.
#[derive(Debug, Clone, Copy)]
struct GlyphSlot {
    /// Arena slot index (the PLRU global index).
    slot: usize,
    width: u16,
    height: u16,
    stride: u16,
}

/// A fixed-capacity cache of unpacked glyph bitmaps.
///
/// Returned [`BitmapView`]s borrow the cache's arena, so they are valid for
/// as long as the cache is not accessed again (the next [`GlyphCache::get`]
/// may evict and overwrite any slot).
pub struct GlyphCache {
    cache: PlruCache<u32, GlyphSlot, SETS, WAYS>,
    arena: Box<[u8]>,
    slot_size: usize,
}

impl GlyphCache {
    /// A cache sized for the baked font registry ([`fonts::ALL`]).
    #[must_use]
    pub fn new() -> Self {
        Self::with_fonts(&fonts::ALL)
    }

    /// A cache sized for a caller-chosen set of fonts.
    ///
    /// Only glyphs from these fonts may be requested: a wider font would
    /// overflow its arena slot (debug-asserted in [`GlyphCache::get`]).
    #[must_use]
    pub fn with_fonts(fonts: &[&Font]) -> Self {
        let slot_size = fonts
            .iter()
            .map(|font| font.max_glyph_store_size())
            .max()
            .unwrap_or(0);
        let cache = PlruCache::new();
        let capacity = cache.capacity();
        Self {
            cache,
            arena: vec![0u8; capacity * slot_size].into_boxed_slice(),
            slot_size,
        }
    }

    /// Total number of glyphs the cache can hold.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cache.capacity()
    }

    /// Number of currently cached glyphs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// True when nothing is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// True when a glyph for `code_point` is cached. No recency update.
    #[must_use]
    pub fn contains(&self, code_point: char) -> bool {
        self.cache.contains(code_point as u32)
    }

    /// Drop every cached glyph.
    ///
    /// Required when switching to a different font, since cache keys do not
    /// carry the font id.
    pub fn clear(&mut self) {
        self.cache.clear();
    }

    /// The rendered bitmap for `code_point`, unpacking it on a miss.
    ///
    /// Unknown code points resolve through the font's fallback chain and
    /// still yield a valid bitmap.
    #[must_use]
    pub fn get(&mut self, font: &Font, code_point: char) -> BitmapView<'_> {
        debug_assert!(
            font.max_glyph_store_size() <= self.slot_size,
            "font {} is too large for this cache's arena slots",
            font.id()
        );
        let arena = &mut self.arena;
        let slot_size = self.slot_size;
        let slot = *self.cache.access(code_point as u32, |key, index| {
            #[cfg(feature = "std")]
            tracing::trace!(code_point = key, slot = index, "glyph cache miss");
            let bytes = &mut arena[index * slot_size..(index + 1) * slot_size];
            unpack(font, key, index, bytes)
        });
        let bytes = &self.arena[slot.slot * slot_size..(slot.slot + 1) * slot_size];
        let len = usize::from(slot.stride) * usize::from(slot.height);
        BitmapView::with_stride(&bytes[..len], slot.width, slot.height, slot.stride)
    }
}

impl Default for GlyphCache {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for GlyphCache {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GlyphCache")
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("slot_size", &self.slot_size)
            .finish()
    }
}

/// Unpack a glyph's column-major pixels into `bytes` as a row-major packed
/// bitmap, returning the slot descriptor.
///
/// For widths of 8 or more, eight source columns at a time are gathered into
/// one output byte; the remaining `width % 8` columns go through per-pixel
/// sets. The slot is zeroed first so a reused arena slot cannot leak a
/// previous glyph's padding bits.
fn unpack(font: &Font, code_point: u32, slot_index: usize, bytes: &mut [u8]) -> GlyphSlot {
    let glyph: &Glyph = font.find_glyph(char::from_u32(code_point).unwrap_or(char::REPLACEMENT_CHARACTER));
    let width = font.glyph_width(glyph);
    let height = font.pixel_height();
    let bands = usize::from(font.height_bands());
    let stride = Bitmap::required_stride(width);
    let pixels = glyph.pixels();

    bytes.fill(0);
    let mut bitmap = Bitmap::with_stride(bytes, width, height, stride);

    for y in 0..usize::from(height) {
        let band = y / 8;
        let row_bit = 1u8 << (y % 8) as u32;
        let mut x = 0usize;

        if width >= 8 {
            // Eight columns gathered into one output byte.
            while x < (usize::from(width) & !0b111) {
                let mut out = 0u8;
                for bit in 0..8usize {
                    if pixels[(x + bit) * bands + band] & row_bit != 0 {
                        out |= 0x80 >> bit as u32;
                    }
                }
                bitmap.store_mut()[y * usize::from(stride) + x / 8] = out;
                x += 8;
            }
        }

        for x in x..usize::from(width) {
            let on = pixels[x * bands + band] & row_bit != 0;
            bitmap.set(Point::new(x as i16, y as i16), on);
        }
    }

    GlyphSlot {
        slot: slot_index,
        width,
        height,
        stride,
    }
}
