//! MICRO8: an 8-pixel proportional dot-matrix font.
//!
//! Covers printable ASCII plus the degree sign and U+25A1 WHITE SQUARE (the
//! missing-glyph fallback). One 8-row band; columns are single bytes with
//! bit 0 at the top. Most glyphs are five columns wide, with narrow
//! punctuation trimmed to its ink.

use crate::font::{Font, Glyph, KerningPair};

/// Glyphs with an open lower-left tuck under a preceding right overhang.
static KERN_TUCK: [KerningPair; 4] = [
    KerningPair::new('T', 1),
    KerningPair::new('V', 1),
    KerningPair::new('W', 1),
    KerningPair::new('Y', 1),
];

/// Tall right-overhang glyphs that close up after an 'L' foot.
static KERN_AFTER_L: [KerningPair; 1] = [KerningPair::new('L', 1)];

#[rustfmt::skip]
mod px {
    pub static SPACE:  [u8; 2] = [0x00, 0x00];
    pub static BANG:   [u8; 1] = [0x5F];
    pub static DQUOTE: [u8; 3] = [0x07, 0x00, 0x07];
    pub static HASH:   [u8; 5] = [0x14, 0x7F, 0x14, 0x7F, 0x14];
    pub static DOLLAR: [u8; 5] = [0x24, 0x2A, 0x7F, 0x2A, 0x12];
    pub static PCT:    [u8; 5] = [0x23, 0x13, 0x08, 0x64, 0x62];
    pub static AMP:    [u8; 5] = [0x36, 0x49, 0x55, 0x22, 0x50];
    pub static QUOTE:  [u8; 2] = [0x05, 0x03];
    pub static LPAREN: [u8; 3] = [0x1C, 0x22, 0x41];
    pub static RPAREN: [u8; 3] = [0x41, 0x22, 0x1C];
    pub static STAR:   [u8; 5] = [0x14, 0x08, 0x3E, 0x08, 0x14];
    pub static PLUS:   [u8; 5] = [0x08, 0x08, 0x3E, 0x08, 0x08];
    pub static COMMA:  [u8; 2] = [0x50, 0x30];
    pub static MINUS:  [u8; 5] = [0x08, 0x08, 0x08, 0x08, 0x08];
    pub static DOT:    [u8; 2] = [0x60, 0x60];
    pub static SLASH:  [u8; 5] = [0x20, 0x10, 0x08, 0x04, 0x02];
    pub static D0: [u8; 5] = [0x3E, 0x51, 0x49, 0x45, 0x3E];
    pub static D1: [u8; 3] = [0x42, 0x7F, 0x40];
    pub static D2: [u8; 5] = [0x42, 0x61, 0x51, 0x49, 0x46];
    pub static D3: [u8; 5] = [0x21, 0x41, 0x45, 0x4B, 0x31];
    pub static D4: [u8; 5] = [0x18, 0x14, 0x12, 0x7F, 0x10];
    pub static D5: [u8; 5] = [0x27, 0x45, 0x45, 0x45, 0x39];
    pub static D6: [u8; 5] = [0x3C, 0x4A, 0x49, 0x49, 0x30];
    pub static D7: [u8; 5] = [0x01, 0x71, 0x09, 0x05, 0x03];
    pub static D8: [u8; 5] = [0x36, 0x49, 0x49, 0x49, 0x36];
    pub static D9: [u8; 5] = [0x06, 0x49, 0x49, 0x29, 0x1E];
    pub static COLON:  [u8; 2] = [0x36, 0x36];
    pub static SEMI:   [u8; 2] = [0x56, 0x36];
    pub static LT:     [u8; 4] = [0x08, 0x14, 0x22, 0x41];
    pub static EQ:     [u8; 5] = [0x14, 0x14, 0x14, 0x14, 0x14];
    pub static GT:     [u8; 4] = [0x41, 0x22, 0x14, 0x08];
    pub static QMARK:  [u8; 5] = [0x02, 0x01, 0x51, 0x09, 0x06];
    pub static AT:     [u8; 5] = [0x32, 0x49, 0x79, 0x41, 0x3E];
    pub static UA: [u8; 5] = [0x7E, 0x11, 0x11, 0x11, 0x7E];
    pub static UB: [u8; 5] = [0x7F, 0x49, 0x49, 0x49, 0x36];
    pub static UC: [u8; 5] = [0x3E, 0x41, 0x41, 0x41, 0x22];
    pub static UD: [u8; 5] = [0x7F, 0x41, 0x41, 0x22, 0x1C];
    pub static UE: [u8; 5] = [0x7F, 0x49, 0x49, 0x49, 0x41];
    pub static UF: [u8; 5] = [0x7F, 0x09, 0x09, 0x09, 0x01];
    pub static UG: [u8; 5] = [0x3E, 0x41, 0x49, 0x49, 0x7A];
    pub static UH: [u8; 5] = [0x7F, 0x08, 0x08, 0x08, 0x7F];
    pub static UI: [u8; 3] = [0x41, 0x7F, 0x41];
    pub static UJ: [u8; 5] = [0x20, 0x40, 0x41, 0x3F, 0x01];
    pub static UK: [u8; 5] = [0x7F, 0x08, 0x14, 0x22, 0x41];
    pub static UL: [u8; 5] = [0x7F, 0x40, 0x40, 0x40, 0x40];
    pub static UM: [u8; 5] = [0x7F, 0x02, 0x0C, 0x02, 0x7F];
    pub static UN: [u8; 5] = [0x7F, 0x04, 0x08, 0x10, 0x7F];
    pub static UO: [u8; 5] = [0x3E, 0x41, 0x41, 0x41, 0x3E];
    pub static UP: [u8; 5] = [0x7F, 0x09, 0x09, 0x09, 0x06];
    pub static UQ: [u8; 5] = [0x3E, 0x41, 0x51, 0x21, 0x5E];
    pub static UR: [u8; 5] = [0x7F, 0x09, 0x19, 0x29, 0x46];
    pub static US: [u8; 5] = [0x46, 0x49, 0x49, 0x49, 0x31];
    pub static UT: [u8; 5] = [0x01, 0x01, 0x7F, 0x01, 0x01];
    pub static UU: [u8; 5] = [0x3F, 0x40, 0x40, 0x40, 0x3F];
    pub static UV: [u8; 5] = [0x1F, 0x20, 0x40, 0x20, 0x1F];
    pub static UW: [u8; 5] = [0x3F, 0x40, 0x38, 0x40, 0x3F];
    pub static UX: [u8; 5] = [0x63, 0x14, 0x08, 0x14, 0x63];
    pub static UY: [u8; 5] = [0x07, 0x08, 0x70, 0x08, 0x07];
    pub static UZ: [u8; 5] = [0x61, 0x51, 0x49, 0x45, 0x43];
    pub static LBRACK: [u8; 3] = [0x7F, 0x41, 0x41];
    pub static BSLASH: [u8; 5] = [0x02, 0x04, 0x08, 0x10, 0x20];
    pub static RBRACK: [u8; 3] = [0x41, 0x41, 0x7F];
    pub static CARET:  [u8; 5] = [0x04, 0x02, 0x01, 0x02, 0x04];
    pub static UNDER:  [u8; 5] = [0x40, 0x40, 0x40, 0x40, 0x40];
    pub static GRAVE:  [u8; 3] = [0x01, 0x02, 0x04];
    pub static LA: [u8; 5] = [0x20, 0x54, 0x54, 0x54, 0x78];
    pub static LB: [u8; 5] = [0x7F, 0x48, 0x44, 0x44, 0x38];
    pub static LC: [u8; 5] = [0x38, 0x44, 0x44, 0x44, 0x20];
    pub static LD: [u8; 5] = [0x38, 0x44, 0x44, 0x48, 0x7F];
    pub static LE: [u8; 5] = [0x38, 0x54, 0x54, 0x54, 0x18];
    pub static LF: [u8; 5] = [0x08, 0x7E, 0x09, 0x01, 0x02];
    pub static LG: [u8; 5] = [0x0C, 0x52, 0x52, 0x52, 0x3E];
    pub static LH: [u8; 5] = [0x7F, 0x08, 0x04, 0x04, 0x78];
    pub static LI: [u8; 3] = [0x44, 0x7D, 0x40];
    pub static LJ: [u8; 4] = [0x20, 0x40, 0x44, 0x3D];
    pub static LK: [u8; 4] = [0x7F, 0x10, 0x28, 0x44];
    pub static LL: [u8; 3] = [0x41, 0x7F, 0x40];
    pub static LM: [u8; 5] = [0x7C, 0x04, 0x18, 0x04, 0x78];
    pub static LN: [u8; 5] = [0x7C, 0x08, 0x04, 0x04, 0x78];
    pub static LO: [u8; 5] = [0x38, 0x44, 0x44, 0x44, 0x38];
    pub static LP: [u8; 5] = [0x7C, 0x14, 0x14, 0x14, 0x08];
    pub static LQ: [u8; 5] = [0x08, 0x14, 0x14, 0x18, 0x7C];
    pub static LR: [u8; 5] = [0x7C, 0x08, 0x04, 0x04, 0x08];
    pub static LS: [u8; 5] = [0x48, 0x54, 0x54, 0x54, 0x20];
    pub static LT_: [u8; 5] = [0x04, 0x3F, 0x44, 0x40, 0x20];
    pub static LU: [u8; 5] = [0x3C, 0x40, 0x40, 0x20, 0x7C];
    pub static LV: [u8; 5] = [0x1C, 0x20, 0x40, 0x20, 0x1C];
    pub static LW: [u8; 5] = [0x3C, 0x40, 0x30, 0x40, 0x3C];
    pub static LX: [u8; 5] = [0x44, 0x28, 0x10, 0x28, 0x44];
    pub static LY: [u8; 5] = [0x0C, 0x50, 0x50, 0x50, 0x3C];
    pub static LZ: [u8; 5] = [0x44, 0x64, 0x54, 0x4C, 0x44];
    pub static LBRACE: [u8; 3] = [0x08, 0x36, 0x41];
    pub static PIPE:   [u8; 1] = [0x7F];
    pub static RBRACE: [u8; 3] = [0x41, 0x36, 0x08];
    pub static TILDE:  [u8; 5] = [0x08, 0x04, 0x08, 0x10, 0x08];
    pub static DEGREE: [u8; 3] = [0x07, 0x05, 0x07];
    pub static SQUARE: [u8; 5] = [0x7F, 0x41, 0x41, 0x41, 0x7F];
}

#[rustfmt::skip]
static GLYPHS: [(u32, Glyph); 97] = [
    (0x20, Glyph::new(&[], &px::SPACE)),
    (0x21, Glyph::new(&[], &px::BANG)),
    (0x22, Glyph::new(&[], &px::DQUOTE)),
    (0x23, Glyph::new(&[], &px::HASH)),
    (0x24, Glyph::new(&[], &px::DOLLAR)),
    (0x25, Glyph::new(&[], &px::PCT)),
    (0x26, Glyph::new(&[], &px::AMP)),
    (0x27, Glyph::new(&[], &px::QUOTE)),
    (0x28, Glyph::new(&[], &px::LPAREN)),
    (0x29, Glyph::new(&[], &px::RPAREN)),
    (0x2A, Glyph::new(&[], &px::STAR)),
    (0x2B, Glyph::new(&[], &px::PLUS)),
    (0x2C, Glyph::new(&KERN_TUCK, &px::COMMA)),
    (0x2D, Glyph::new(&[], &px::MINUS)),
    (0x2E, Glyph::new(&KERN_TUCK, &px::DOT)),
    (0x2F, Glyph::new(&[], &px::SLASH)),
    (0x30, Glyph::new(&[], &px::D0)),
    (0x31, Glyph::new(&[], &px::D1)),
    (0x32, Glyph::new(&[], &px::D2)),
    (0x33, Glyph::new(&[], &px::D3)),
    (0x34, Glyph::new(&[], &px::D4)),
    (0x35, Glyph::new(&[], &px::D5)),
    (0x36, Glyph::new(&[], &px::D6)),
    (0x37, Glyph::new(&[], &px::D7)),
    (0x38, Glyph::new(&[], &px::D8)),
    (0x39, Glyph::new(&[], &px::D9)),
    (0x3A, Glyph::new(&[], &px::COLON)),
    (0x3B, Glyph::new(&[], &px::SEMI)),
    (0x3C, Glyph::new(&[], &px::LT)),
    (0x3D, Glyph::new(&[], &px::EQ)),
    (0x3E, Glyph::new(&[], &px::GT)),
    (0x3F, Glyph::new(&[], &px::QMARK)),
    (0x40, Glyph::new(&[], &px::AT)),
    (0x41, Glyph::new(&KERN_TUCK, &px::UA)),
    (0x42, Glyph::new(&[], &px::UB)),
    (0x43, Glyph::new(&[], &px::UC)),
    (0x44, Glyph::new(&[], &px::UD)),
    (0x45, Glyph::new(&[], &px::UE)),
    (0x46, Glyph::new(&[], &px::UF)),
    (0x47, Glyph::new(&[], &px::UG)),
    (0x48, Glyph::new(&[], &px::UH)),
    (0x49, Glyph::new(&[], &px::UI)),
    (0x4A, Glyph::new(&[], &px::UJ)),
    (0x4B, Glyph::new(&[], &px::UK)),
    (0x4C, Glyph::new(&[], &px::UL)),
    (0x4D, Glyph::new(&[], &px::UM)),
    (0x4E, Glyph::new(&[], &px::UN)),
    (0x4F, Glyph::new(&[], &px::UO)),
    (0x50, Glyph::new(&[], &px::UP)),
    (0x51, Glyph::new(&[], &px::UQ)),
    (0x52, Glyph::new(&[], &px::UR)),
    (0x53, Glyph::new(&[], &px::US)),
    (0x54, Glyph::new(&KERN_AFTER_L, &px::UT)),
    (0x55, Glyph::new(&[], &px::UU)),
    (0x56, Glyph::new(&KERN_AFTER_L, &px::UV)),
    (0x57, Glyph::new(&[], &px::UW)),
    (0x58, Glyph::new(&[], &px::UX)),
    (0x59, Glyph::new(&KERN_AFTER_L, &px::UY)),
    (0x5A, Glyph::new(&[], &px::UZ)),
    (0x5B, Glyph::new(&[], &px::LBRACK)),
    (0x5C, Glyph::new(&[], &px::BSLASH)),
    (0x5D, Glyph::new(&[], &px::RBRACK)),
    (0x5E, Glyph::new(&[], &px::CARET)),
    (0x5F, Glyph::new(&[], &px::UNDER)),
    (0x60, Glyph::new(&[], &px::GRAVE)),
    (0x61, Glyph::new(&KERN_TUCK, &px::LA)),
    (0x62, Glyph::new(&[], &px::LB)),
    (0x63, Glyph::new(&KERN_TUCK, &px::LC)),
    (0x64, Glyph::new(&KERN_TUCK, &px::LD)),
    (0x65, Glyph::new(&KERN_TUCK, &px::LE)),
    (0x66, Glyph::new(&[], &px::LF)),
    (0x67, Glyph::new(&KERN_TUCK, &px::LG)),
    (0x68, Glyph::new(&[], &px::LH)),
    (0x69, Glyph::new(&[], &px::LI)),
    (0x6A, Glyph::new(&[], &px::LJ)),
    (0x6B, Glyph::new(&[], &px::LK)),
    (0x6C, Glyph::new(&[], &px::LL)),
    (0x6D, Glyph::new(&[], &px::LM)),
    (0x6E, Glyph::new(&[], &px::LN)),
    (0x6F, Glyph::new(&KERN_TUCK, &px::LO)),
    (0x70, Glyph::new(&[], &px::LP)),
    (0x71, Glyph::new(&KERN_TUCK, &px::LQ)),
    (0x72, Glyph::new(&[], &px::LR)),
    (0x73, Glyph::new(&KERN_TUCK, &px::LS)),
    (0x74, Glyph::new(&[], &px::LT_)),
    (0x75, Glyph::new(&KERN_TUCK, &px::LU)),
    (0x76, Glyph::new(&[], &px::LV)),
    (0x77, Glyph::new(&[], &px::LW)),
    (0x78, Glyph::new(&[], &px::LX)),
    (0x79, Glyph::new(&[], &px::LY)),
    (0x7A, Glyph::new(&[], &px::LZ)),
    (0x7B, Glyph::new(&[], &px::LBRACE)),
    (0x7C, Glyph::new(&[], &px::PIPE)),
    (0x7D, Glyph::new(&[], &px::RBRACE)),
    (0x7E, Glyph::new(&[], &px::TILDE)),
    (0xB0, Glyph::new(&[], &px::DEGREE)),
    (0x25A1, Glyph::new(&[], &px::SQUARE)),
];

/// The MICRO8 font: id 1, 7-row baseline, widest glyph 5 px, one band,
/// 1 px default spacing.
pub static MICRO8: Font = Font::new(1, 7, 5, 1, 1, &GLYPHS);
