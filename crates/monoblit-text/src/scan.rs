//! The UTF-8 text scanner: one pass shared by measurement and drawing.
//!
//! [`string_width`] and [`draw_string`] both run [`scan_string`], which
//! decodes bytes, applies kerning, invokes a per-glyph callback at the
//! computed pen position, and advances by the glyph width. Because the two
//! entry points share every step, a measured width always matches the pen
//! advance produced by drawing the same bytes.

use monoblit_core::{Bitmap, Coordinate, Point, TransferMode};

use crate::font::{Font, Glyph};
use crate::glyph_cache::GlyphCache;
use crate::utf8::Utf8Decoder;

/// The gap to place before `glyph`, given the preceding code point.
///
/// The first glyph on a line gets no gap. Otherwise the font's default
/// spacing applies, reduced by the first matching kerning pair.
fn glyph_spacing(font: &Font, glyph: &Glyph, prev: Option<char>) -> Coordinate {
    let Some(prev) = prev else {
        return 0;
    };
    let mut space = Coordinate::from(font.spacing());
    if let Some(pair) = glyph
        .kerning()
        .iter()
        .find(|pair| pair.preceding() == prev as u32)
    {
        space -= Coordinate::from(pair.distance());
    }
    space
}

fn scan_code_point(
    font: &Font,
    code_point: char,
    prev: Option<char>,
    mut x: Coordinate,
    draw: &mut impl FnMut(char, Coordinate),
) -> Coordinate {
    let glyph = font.find_glyph(code_point);
    x += glyph_spacing(font, glyph, prev);
    draw(code_point, x);
    x + font.glyph_width(glyph) as Coordinate
}

/// Scan `bytes` as UTF-8, invoking `draw(code_point, pen_x)` for each code
/// point, and return the final pen x position.
///
/// Malformed sequences decode to U+FFFD and render through the font's
/// fallback chain; the scan never fails.
pub fn scan_string(
    font: &Font,
    bytes: &[u8],
    mut draw: impl FnMut(char, Coordinate),
) -> Coordinate {
    let mut x: Coordinate = 0;
    let mut prev: Option<char> = None;
    let mut decoder = Utf8Decoder::new();

    for &byte in bytes {
        if let Some(code_point) = decoder.advance(byte) {
            x = scan_code_point(font, code_point, prev, x, &mut draw);
            prev = Some(code_point);
        }
    }
    if let Some(code_point) = decoder.finish() {
        x = scan_code_point(font, code_point, prev, x, &mut draw);
    }
    x
}

/// The pixel width of `bytes` rendered in `font`, including kerning.
#[must_use]
pub fn string_width(font: &Font, bytes: &[u8]) -> Coordinate {
    scan_string(font, bytes, |_, _| {})
}

/// Draw a single glyph with its top-left corner at `pos`.
///
/// Short-circuits when `pos` lies past the bitmap's right or bottom edge;
/// otherwise the cached glyph is blitted in `Or` mode, so overlapping
/// glyphs merge rather than erase each other.
pub fn draw_char(
    bitmap: &mut Bitmap<'_>,
    cache: &mut GlyphCache,
    font: &Font,
    code_point: char,
    pos: Point,
) {
    if pos.x > bitmap.width() as Coordinate || pos.y > bitmap.height() as Coordinate {
        return;
    }
    bitmap.copy(cache.get(font, code_point), pos, TransferMode::Or);
}

/// Draw `bytes` starting at `pos` and return the final pen position.
///
/// The returned x equals `pos.x + string_width(font, bytes)`.
pub fn draw_string(
    bitmap: &mut Bitmap<'_>,
    cache: &mut GlyphCache,
    font: &Font,
    bytes: &[u8],
    pos: Point,
) -> Point {
    let end_x = scan_string(font, bytes, |code_point, x| {
        draw_char(bitmap, cache, font, code_point, Point::new(pos.x + x, pos.y));
    });
    Point::new(pos.x + end_x, pos.y)
}
