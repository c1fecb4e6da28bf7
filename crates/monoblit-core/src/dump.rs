//! ASCII rendering of a packed store for tests and debugging.

use core::fmt;

/// Write each store byte as 8 `'0'`/`'1'` characters, one line per row,
/// then a ruler of `width` underscores marking the pixel columns (the
/// trailing bits of the last byte in a row are padding, not pixels).
pub(crate) fn write_ascii<W: fmt::Write>(
    store: &[u8],
    width: u16,
    height: u16,
    stride: u16,
    out: &mut W,
) -> fmt::Result {
    let size = usize::from(stride) * usize::from(height);
    let mut xb = 0u16;
    for byte in &store[..size] {
        write!(out, "{byte:08b}")?;
        xb += 1;
        if xb >= stride {
            out.write_char('\n')?;
            xb = 0;
        }
    }
    for _ in 0..width {
        out.write_char('_')?;
    }
    out.write_char('\n')
}
