//! The read-only font contract: glyph lookup, kerning, and widths.
//!
//! # Glyph data layout
//!
//! Glyphs in a font are always a multiple of 8 pixels tall, given by the
//! font's `height` in 8-row bands. The pixel bytes are column-major and
//! grouped by band: a height of 2 means each column is 2 bytes (16 pixels).
//! Within each byte, bit 0 holds the topmost pixel of its band. A glyph's
//! pixel width is therefore `pixels.len() / height`.
//!
//! # Lookup fallbacks
//!
//! [`Font::find_glyph`] resolves any code point: an exact match, else
//! U+25A1 WHITE SQUARE, else the font's first glyph. A font with no glyphs
//! at all is ill-formed and rejected by [`Font::validate`].

use thiserror::Error;

/// The missing-glyph fallback code point.
pub const WHITE_SQUARE: char = '\u{25A1}';

/// A kerning adjustment, packed bit-exactly into 32 bits: the low 21 bits
/// are the preceding code point, 3 bits of padding, and the high 8 bits the
/// distance (in pixels) to subtract from the font's default spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KerningPair(u32);

impl KerningPair {
    const PRECEDING_MASK: u32 = 0x001F_FFFF;

    /// Pack a kerning pair.
    #[must_use]
    pub const fn new(preceding: char, distance: u8) -> Self {
        Self((preceding as u32 & Self::PRECEDING_MASK) | ((distance as u32) << 24))
    }

    /// The code point of the preceding glyph (21 bits).
    #[inline]
    #[must_use]
    pub const fn preceding(self) -> u32 {
        self.0 & Self::PRECEDING_MASK
    }

    /// Pixel distance subtracted from the default inter-glyph spacing.
    #[inline]
    #[must_use]
    pub const fn distance(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// The raw 32-bit encoding.
    #[inline]
    #[must_use]
    pub const fn to_bits(self) -> u32 {
        self.0
    }

    /// Reconstruct a pair from its 32-bit encoding.
    #[inline]
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }
}

/// One drawable glyph: its kerning pairs and column-major pixel bytes.
#[derive(Debug, Clone, Copy)]
pub struct Glyph {
    kerning: &'static [KerningPair],
    pixels: &'static [u8],
}

impl Glyph {
    /// Build a glyph from static kerning and pixel tables.
    #[must_use]
    pub const fn new(kerning: &'static [KerningPair], pixels: &'static [u8]) -> Self {
        Self { kerning, pixels }
    }

    /// Kerning pairs, ordered by priority: the first match wins.
    #[inline]
    #[must_use]
    pub const fn kerning(&self) -> &'static [KerningPair] {
        self.kerning
    }

    /// Column-major pixel bytes, `height` bytes per column.
    #[inline]
    #[must_use]
    pub const fn pixels(&self) -> &'static [u8] {
        self.pixels
    }
}

/// Static font-data validation failures.
///
/// These never arise at draw time; they exist so baked or generated font
/// tables can be checked once, in tests or at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FontError {
    /// The font has no glyphs, so the last-resort lookup fallback would
    /// have nothing to return.
    #[error("font {id} has no glyphs")]
    Empty { id: u8 },
    /// The font claims a height of zero bands.
    #[error("font {id} has a height of zero bands")]
    ZeroHeight { id: u8 },
    /// `height` and `spacing` share a packed byte in the font header, four
    /// bits each; larger values cannot be encoded.
    #[error("font {id}: {field} of {value} exceeds the 4-bit header field")]
    HeaderFieldRange {
        id: u8,
        field: &'static str,
        value: u8,
    },
    /// A glyph's pixel bytes do not divide evenly into columns.
    #[error("glyph U+{code_point:04X}: {len} pixel bytes is not a multiple of {bands} bands")]
    RaggedGlyph {
        code_point: u32,
        len: usize,
        bands: u8,
    },
    /// A glyph is wider than the font's declared `widest`, which would
    /// overflow a glyph-cache arena slot.
    #[error("glyph U+{code_point:04X} is {width} pixels wide; the font declares widest {widest}")]
    WiderThanWidest {
        code_point: u32,
        width: u16,
        widest: u8,
    },
    /// The glyph table is not sorted by code point, breaking lookup.
    #[error("glyph table entry U+{code_point:04X} is out of order")]
    Unsorted { code_point: u32 },
}

/// An immutable bitmap font.
///
/// Typically `'static` data baked into the binary; see [`crate::fonts`].
#[derive(Debug, Clone, Copy)]
pub struct Font {
    id: u8,
    baseline: u8,
    widest: u8,
    /// Height in 8-pixel bands, not pixels.
    height: u8,
    /// Default inter-glyph gap in pixels.
    spacing: u8,
    /// Glyph table sorted by code point.
    glyphs: &'static [(u32, Glyph)],
}

impl Font {
    /// Assemble a font from its header fields and sorted glyph table.
    #[must_use]
    pub const fn new(
        id: u8,
        baseline: u8,
        widest: u8,
        height: u8,
        spacing: u8,
        glyphs: &'static [(u32, Glyph)],
    ) -> Self {
        Self {
            id,
            baseline,
            widest,
            height,
            spacing,
            glyphs,
        }
    }

    /// Font identifier byte.
    #[inline]
    #[must_use]
    pub const fn id(&self) -> u8 {
        self.id
    }

    /// Baseline row, measured from the glyph top.
    #[inline]
    #[must_use]
    pub const fn baseline(&self) -> u8 {
        self.baseline
    }

    /// Width of the widest glyph in pixels.
    #[inline]
    #[must_use]
    pub const fn widest(&self) -> u8 {
        self.widest
    }

    /// Glyph height in 8-pixel bands.
    #[inline]
    #[must_use]
    pub const fn height_bands(&self) -> u8 {
        self.height
    }

    /// Glyph height in pixels.
    #[inline]
    #[must_use]
    pub const fn pixel_height(&self) -> u16 {
        self.height as u16 * 8
    }

    /// Default inter-glyph gap in pixels.
    #[inline]
    #[must_use]
    pub const fn spacing(&self) -> u8 {
        self.spacing
    }

    /// The sorted glyph table.
    #[inline]
    #[must_use]
    pub const fn glyphs(&self) -> &'static [(u32, Glyph)] {
        self.glyphs
    }

    /// Pixel width of a glyph from this font.
    #[inline]
    #[must_use]
    pub fn glyph_width(&self, glyph: &Glyph) -> u16 {
        debug_assert!(self.height > 0, "font height must be non-zero");
        (glyph.pixels.len() / usize::from(self.height)) as u16
    }

    /// Pixel width of the glyph that `code_point` resolves to.
    #[must_use]
    pub fn char_width(&self, code_point: char) -> u16 {
        self.glyph_width(self.find_glyph(code_point))
    }

    /// Look up the glyph for `code_point`.
    ///
    /// Falls back to U+25A1 WHITE SQUARE, then to the first glyph in the
    /// table. The font must contain at least one glyph ([`Font::validate`]
    /// rejects one that does not).
    #[must_use]
    pub fn find_glyph(&self, code_point: char) -> &Glyph {
        debug_assert!(!self.glyphs.is_empty(), "font has no glyphs");
        self.lookup(code_point as u32)
            .or_else(|| self.lookup(WHITE_SQUARE as u32))
            .unwrap_or(&self.glyphs[0].1)
    }

    fn lookup(&self, code_point: u32) -> Option<&Glyph> {
        self.glyphs
            .binary_search_by_key(&code_point, |&(cp, _)| cp)
            .ok()
            .map(|index| &self.glyphs[index].1)
    }

    /// Bytes needed to hold this font's largest unpacked glyph: the arena
    /// slot size used by the glyph cache.
    #[must_use]
    pub fn max_glyph_store_size(&self) -> usize {
        let stride = usize::from(self.widest).div_ceil(8);
        stride * usize::from(self.pixel_height())
    }

    /// Check the static font data against the contract invariants.
    pub fn validate(&self) -> Result<(), FontError> {
        if self.height == 0 {
            return Err(FontError::ZeroHeight { id: self.id });
        }
        if self.height > 0x0F {
            return Err(FontError::HeaderFieldRange {
                id: self.id,
                field: "height",
                value: self.height,
            });
        }
        if self.spacing > 0x0F {
            return Err(FontError::HeaderFieldRange {
                id: self.id,
                field: "spacing",
                value: self.spacing,
            });
        }
        if self.glyphs.is_empty() {
            return Err(FontError::Empty { id: self.id });
        }
        let mut prev: Option<u32> = None;
        for &(code_point, ref glyph) in self.glyphs {
            if prev.is_some_and(|p| p >= code_point) {
                return Err(FontError::Unsorted { code_point });
            }
            prev = Some(code_point);

            let len = glyph.pixels.len();
            if len % usize::from(self.height) != 0 {
                return Err(FontError::RaggedGlyph {
                    code_point,
                    len,
                    bands: self.height,
                });
            }
            let width = self.glyph_width(glyph);
            if width > u16::from(self.widest) {
                return Err(FontError::WiderThanWidest {
                    code_point,
                    width,
                    widest: self.widest,
                });
            }
        }
        Ok(())
    }
}
