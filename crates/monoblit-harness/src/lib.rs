#![forbid(unsafe_code)]

//! Pixel-level test scaffolding shared by the monoblit test suites.
//!
//! Fixture tests in this workspace assert on raw store bytes. This crate
//! centralizes the two things every such test needs: canvas builders with a
//! known starting pattern (blank, solid, framed, gray) and an assertion that
//! renders both bitmaps as ASCII when the bytes differ, so a failing blit is
//! readable instead of a wall of hex.

use monoblit_core::{BLACK, BitmapBuf, BitmapView, GRAY};

/// A zeroed `width x height` canvas.
#[must_use]
pub fn blank(width: u16, height: u16) -> BitmapBuf {
    BitmapBuf::new(width, height)
}

/// A canvas with every pixel set.
#[must_use]
pub fn filled(width: u16, height: u16) -> BitmapBuf {
    let mut buf = BitmapBuf::new(width, height);
    let mut bmp = buf.bitmap();
    let bounds = bmp.bounds();
    bmp.paint_rect(&bounds, &BLACK);
    buf
}

/// A canvas painted with the 50% gray checker.
#[must_use]
pub fn gray_filled(width: u16, height: u16) -> BitmapBuf {
    let mut buf = BitmapBuf::new(width, height);
    let mut bmp = buf.bitmap();
    let bounds = bmp.bounds();
    bmp.paint_rect(&bounds, &GRAY);
    buf
}

/// A canvas with a single-pixel frame around its outermost rows and columns.
#[must_use]
pub fn framed(width: u16, height: u16) -> BitmapBuf {
    let mut buf = BitmapBuf::new(width, height);
    let mut bmp = buf.bitmap();
    let mut r = bmp.bounds();
    // frame_rect is endpoint-inclusive; bounds is half-open.
    r.right -= 1;
    r.bottom -= 1;
    bmp.frame_rect(&r);
    buf
}

/// Assert that a view's store equals `expected` byte-for-byte.
///
/// On mismatch, panics with the ASCII dump of both the actual store and the
/// expected bytes reinterpreted at the same dimensions.
///
/// # Panics
/// Panics when the store differs from `expected` (or the lengths differ).
#[track_caller]
pub fn expect_store(actual: BitmapView<'_>, expected: &[u8]) {
    if actual.store() == expected {
        return;
    }
    let mut got = String::new();
    actual
        .dump(&mut got)
        .expect("dump of actual bitmap cannot fail");
    let mut want = String::new();
    if expected.len() == actual.store().len() {
        let view = BitmapView::with_stride(expected, actual.width(), actual.height(), actual.stride());
        view.dump(&mut want)
            .expect("dump of expected bitmap cannot fail");
    } else {
        want = format!(
            "(expected {} bytes, store has {})",
            expected.len(),
            actual.store().len()
        );
    }
    panic!("store mismatch\n--- actual ---\n{got}--- expected ---\n{want}");
}
