//! SEG16: a 16-pixel seven-segment numeric font.
//!
//! Digits are built at compile time from segment masks rather than baked by
//! hand: a `const fn` rasterises the seven classic segments into the
//! column-major two-band layout the font contract expects. Covers the
//! digits, the separators a counter or clock needs, and U+25A1.

use crate::font::{Font, Glyph};

const WIDTH: usize = 10;
const BANDS: usize = 2;
const PIXEL_HEIGHT: usize = BANDS * 8;

type Columns = [u8; WIDTH * BANDS];

// Segment bits, following the conventional seven-segment naming:
//
//      aaaa
//     f    b
//     f    b
//      gggg
//     e    c
//     e    c
//      dddd
const SEG_A: u8 = 1 << 0;
const SEG_B: u8 = 1 << 1;
const SEG_C: u8 = 1 << 2;
const SEG_D: u8 = 1 << 3;
const SEG_E: u8 = 1 << 4;
const SEG_F: u8 = 1 << 5;
const SEG_G: u8 = 1 << 6;

const fn segment_pixel(segments: u8, x: usize, y: usize) -> bool {
    let left = x <= 1;
    let right = x >= WIDTH - 2;
    let mid_x = x >= 1 && x <= WIDTH - 2;
    let top_half = y >= 1 && y <= 7;
    let bottom_half = y >= 8 && y <= 14;

    (segments & SEG_A != 0 && y <= 1 && mid_x)
        || (segments & SEG_D != 0 && y >= PIXEL_HEIGHT - 2 && mid_x)
        || (segments & SEG_G != 0 && (y == 7 || y == 8) && mid_x)
        || (segments & SEG_F != 0 && left && top_half)
        || (segments & SEG_B != 0 && right && top_half)
        || (segments & SEG_E != 0 && left && bottom_half)
        || (segments & SEG_C != 0 && right && bottom_half)
}

/// Rasterise a segment mask into column-major bytes, band by band.
const fn segment_columns(segments: u8) -> Columns {
    let mut columns = [0u8; WIDTH * BANDS];
    let mut x = 0;
    while x < WIDTH {
        let mut y = 0;
        while y < PIXEL_HEIGHT {
            if segment_pixel(segments, x, y) {
                columns[x * BANDS + y / 8] |= 1 << (y % 8);
            }
            y += 1;
        }
        x += 1;
    }
    columns
}

/// The hollow rectangle used for U+25A1.
const fn box_columns() -> Columns {
    let mut columns = [0u8; WIDTH * BANDS];
    let mut x = 0;
    while x < WIDTH {
        let mut y = 0;
        while y < PIXEL_HEIGHT {
            if x == 0 || x == WIDTH - 1 || y == 0 || y == PIXEL_HEIGHT - 1 {
                columns[x * BANDS + y / 8] |= 1 << (y % 8);
            }
            y += 1;
        }
        x += 1;
    }
    columns
}

static D0: Columns = segment_columns(SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F);
static D1: Columns = segment_columns(SEG_B | SEG_C);
static D2: Columns = segment_columns(SEG_A | SEG_B | SEG_G | SEG_E | SEG_D);
static D3: Columns = segment_columns(SEG_A | SEG_B | SEG_G | SEG_C | SEG_D);
static D4: Columns = segment_columns(SEG_F | SEG_G | SEG_B | SEG_C);
static D5: Columns = segment_columns(SEG_A | SEG_F | SEG_G | SEG_C | SEG_D);
static D6: Columns = segment_columns(SEG_A | SEG_F | SEG_G | SEG_E | SEG_C | SEG_D);
static D7: Columns = segment_columns(SEG_A | SEG_B | SEG_C);
static D8: Columns = segment_columns(SEG_A | SEG_B | SEG_C | SEG_D | SEG_E | SEG_F | SEG_G);
static D9: Columns = segment_columns(SEG_A | SEG_B | SEG_C | SEG_D | SEG_F | SEG_G);
static MINUS: Columns = segment_columns(SEG_G);
static SQUARE: Columns = box_columns();

#[rustfmt::skip]
static SPACE: [u8; 8] = [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00];
// Two 2x2 dots on the colon, one per half.
#[rustfmt::skip]
static COLON: [u8; 8] = [0x00, 0x00, 0x30, 0x0C, 0x30, 0x0C, 0x00, 0x00];
// A single dot on the bottom row.
#[rustfmt::skip]
static DOT: [u8; 6] = [0x00, 0x60, 0x00, 0x60, 0x00, 0x60];
// Percent: small squares top-left and bottom-right around a diagonal.
#[rustfmt::skip]
static PERCENT: [u8; 20] = [
    0x0F, 0x00, // x0: left edge of the upper square
    0x09, 0x40, // x1
    0x09, 0x20, // x2
    0x0F, 0x10, // x3: right edge of the upper square
    0x00, 0x08, // x4: diagonal
    0x80, 0x04, // x5
    0x40, 0xF0, // x6: left edge of the lower square
    0x20, 0x90, // x7
    0x10, 0x90, // x8
    0x00, 0xF0, // x9: right edge of the lower square
];

static GLYPHS: [(u32, Glyph); 16] = [
    (0x20, Glyph::new(&[], &SPACE)),
    (0x25, Glyph::new(&[], &PERCENT)),
    (0x2D, Glyph::new(&[], &MINUS)),
    (0x2E, Glyph::new(&[], &DOT)),
    (0x30, Glyph::new(&[], &D0)),
    (0x31, Glyph::new(&[], &D1)),
    (0x32, Glyph::new(&[], &D2)),
    (0x33, Glyph::new(&[], &D3)),
    (0x34, Glyph::new(&[], &D4)),
    (0x35, Glyph::new(&[], &D5)),
    (0x36, Glyph::new(&[], &D6)),
    (0x37, Glyph::new(&[], &D7)),
    (0x38, Glyph::new(&[], &D8)),
    (0x39, Glyph::new(&[], &D9)),
    (0x3A, Glyph::new(&[], &COLON)),
    (0x25A1, Glyph::new(&[], &SQUARE)),
];

/// The SEG16 font: id 2, baseline on the bottom segment row, widest glyph
/// 10 px, two bands, 2 px default spacing.
pub static SEG16: Font = Font::new(2, 15, 10, 2, 2, &GLYPHS);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seg16_validates() {
        SEG16.validate().expect("SEG16 font data is well-formed");
    }

    #[test]
    fn digit_widths_are_uniform() {
        for d in '0'..='9' {
            assert_eq!(SEG16.char_width(d), 10, "width of {d:?}");
        }
        assert_eq!(SEG16.char_width(':'), 4);
        assert_eq!(SEG16.char_width('.'), 3);
    }

    #[test]
    fn eight_lights_every_segment() {
        let glyph = SEG16.find_glyph('8');
        let pixels = glyph.pixels();
        // Top row lit in the middle, both edge columns lit mid-height.
        assert_eq!(pixels[BANDS] & 0x01, 0x01, "top segment at x=1");
        assert_eq!(pixels[0] & 0x02, 0x02, "segment f at x=0, y=1");
        assert_eq!(
            pixels[(WIDTH - 1) * BANDS + 1] & 0x40,
            0x40,
            "segment c at the right edge, y=14"
        );
    }

    #[test]
    fn one_is_only_the_right_segments() {
        let glyph = SEG16.find_glyph('1');
        let pixels = glyph.pixels();
        for x in 0..WIDTH - 2 {
            assert_eq!(pixels[x * BANDS], 0, "column {x} top band should be dark");
            assert_eq!(pixels[x * BANDS + 1], 0, "column {x} bottom band should be dark");
        }
    }

    #[test]
    fn unknown_code_point_falls_back_to_square() {
        let glyph = SEG16.find_glyph('A');
        assert_eq!(glyph.pixels(), SEG16.find_glyph('\u{25A1}').pixels());
    }
}
