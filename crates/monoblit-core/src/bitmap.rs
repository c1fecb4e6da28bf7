//! Non-owning views over packed 1-bpp pixel stores, and the drawing
//! primitives that mutate them.
//!
//! # Packing
//!
//! Pixel `(x, y)` occupies bit `7 - (x % 8)` of byte `y * stride + x / 8`:
//! scan order is little-endian across bytes but big-endian within a byte, so
//! horizontal pixel 0 is bit 7 of byte 0. This makes a left edge mask
//! `0xFF >> (x % 8)` and keeps blit output byte-exact across platforms.
//!
//! # Ownership
//!
//! A [`Bitmap`] borrows its store mutably from the caller; a [`BitmapView`]
//! is the shared-borrow counterpart used as a blit source. Neither owns
//! memory. [`BitmapBuf`] (with the `alloc` feature) owns a store allocated
//! once and hands out views.
//!
//! # Error discipline
//!
//! Drawing is total: out-of-range arguments clip or no-op, they never fail.
//! Store-size and dimension invariants are debug assertions — violating them
//! is a programming error, not a runtime condition.

use core::fmt;

use crate::blit;
use crate::dump;
use crate::geometry::{Coordinate, Point, Rect};
use crate::pattern::Pattern;

/// Pixel transfer mode for [`Bitmap::copy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferMode {
    /// Destination bits in the masked region are replaced by source bits.
    Replace,
    /// Source bits are ORed into the destination; bits are only ever set.
    Or,
}

/// Largest value representable by a [`Coordinate`]; dimensions must not
/// exceed it so that every pixel position remains addressable.
const MAX_DIMENSION: u16 = Coordinate::MAX as u16;

macro_rules! common_view_methods {
    () => {
        /// Width in pixels.
        #[inline]
        #[must_use]
        pub const fn width(&self) -> u16 {
            self.width
        }

        /// Height in pixels.
        #[inline]
        #[must_use]
        pub const fn height(&self) -> u16 {
            self.height
        }

        /// Bytes per row.
        #[inline]
        #[must_use]
        pub const fn stride(&self) -> u16 {
            self.stride
        }

        /// The full pixel area as a rectangle anchored at the origin.
        #[inline]
        #[must_use]
        pub const fn bounds(&self) -> Rect {
            Rect {
                top: 0,
                left: 0,
                bottom: self.height as Coordinate,
                right: self.width as Coordinate,
            }
        }

        /// The backing bytes.
        #[inline]
        #[must_use]
        pub fn store(&self) -> &[u8] {
            &self.store[..]
        }

        /// The `stride` bytes of row `y`.
        ///
        /// # Panics
        /// Panics if `y >= height`.
        #[must_use]
        pub fn row(&self, y: u16) -> &[u8] {
            assert!(y < self.height, "row {y} out of range");
            let start = usize::from(y) * usize::from(self.stride);
            &self.store[start..start + usize::from(self.stride)]
        }

        /// Read a single pixel. Out-of-range positions read as unset.
        #[must_use]
        pub fn pixel(&self, p: Point) -> bool {
            if p.x < 0 || p.y < 0 {
                return false;
            }
            let (x, y) = (p.x as u16, p.y as u16);
            if x >= self.width || y >= self.height {
                return false;
            }
            let index = usize::from(y) * usize::from(self.stride) + usize::from(x / 8);
            self.store[index] & (0x80 >> u32::from(x % 8)) != 0
        }

        /// Render the store as ASCII `'0'`/`'1'` rows followed by an
        /// underscore ruler marking `width` columns.
        ///
        /// Intended for tests and debugging. A sink failure is reported
        /// through the result and leaves the bitmap untouched.
        pub fn dump<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
            dump::write_ascii(&self.store[..], self.width, self.height, self.stride, out)
        }
    };
}

/// A read-only view over a packed 1-bpp pixel store.
///
/// Used as the source side of [`Bitmap::copy`] and as the return type of the
/// glyph cache. The view is `Copy`; the pixels it references are not.
#[derive(Debug, Clone, Copy)]
pub struct BitmapView<'a> {
    store: &'a [u8],
    width: u16,
    height: u16,
    stride: u16,
}

impl<'a> BitmapView<'a> {
    /// View `store` as `width x height` pixels with the minimal stride.
    #[must_use]
    pub fn new(store: &'a [u8], width: u16, height: u16) -> Self {
        Self::with_stride(store, width, height, Bitmap::required_stride(width))
    }

    /// View `store` with an explicit stride (`stride >= ceil(width / 8)`).
    #[must_use]
    pub fn with_stride(store: &'a [u8], width: u16, height: u16, stride: u16) -> Self {
        debug_assert_dimensions(store.len(), width, height, stride);
        Self {
            store,
            width,
            height,
            stride,
        }
    }

    common_view_methods!();
}

/// A mutable view over a packed 1-bpp pixel store: the drawing surface.
///
/// All drawing operates under a total-function discipline: coordinates
/// outside the surface clip silently, and no drawing call can fail.
#[derive(Debug)]
pub struct Bitmap<'a> {
    store: &'a mut [u8],
    width: u16,
    height: u16,
    stride: u16,
}

impl<'a> Bitmap<'a> {
    /// Wrap `store` as a `width x height` surface with the minimal stride.
    #[must_use]
    pub fn new(store: &'a mut [u8], width: u16, height: u16) -> Self {
        Self::with_stride(store, width, height, Self::required_stride(width))
    }

    /// Wrap `store` with an explicit stride (`stride >= ceil(width / 8)`).
    #[must_use]
    pub fn with_stride(store: &'a mut [u8], width: u16, height: u16, stride: u16) -> Self {
        debug_assert_dimensions(store.len(), width, height, stride);
        Self {
            store,
            width,
            height,
            stride,
        }
    }

    /// Bytes per row for a bitmap `width` pixels wide.
    #[inline]
    #[must_use]
    pub const fn required_stride(width: u16) -> u16 {
        width.div_ceil(8)
    }

    /// Store size in bytes required for the supplied dimensions.
    #[inline]
    #[must_use]
    pub const fn required_store_size(width: u16, height: u16) -> usize {
        Self::required_stride(width) as usize * height as usize
    }

    common_view_methods!();

    /// The backing bytes, mutably.
    #[inline]
    #[must_use]
    pub fn store_mut(&mut self) -> &mut [u8] {
        &mut self.store[..]
    }

    /// Reborrow as a read-only view, e.g. to use `self` as a blit source.
    #[inline]
    #[must_use]
    pub fn as_view(&self) -> BitmapView<'_> {
        BitmapView {
            store: &self.store[..],
            width: self.width,
            height: self.height,
            stride: self.stride,
        }
    }

    /// Clear every pixel.
    pub fn clear(&mut self) {
        let size = usize::from(self.stride) * usize::from(self.height);
        self.store[..size].fill(0);
    }

    /// Set or clear the pixel at `p`.
    ///
    /// Returns `false` (and changes nothing) when `p` lies outside the
    /// surface.
    pub fn set(&mut self, p: Point, on: bool) -> bool {
        if p.x < 0 || p.y < 0 {
            return false;
        }
        let (x, y) = (p.x as u16, p.y as u16);
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = usize::from(y) * usize::from(self.stride) + usize::from(x / 8);
        let bit = 0x80u8 >> u32::from(x % 8);
        if on {
            self.store[index] |= bit;
        } else {
            self.store[index] &= !bit;
        }
        true
    }

    /// Draw a line from `p0` to `p1`, inclusive at both ends.
    ///
    /// Horizontal and vertical lines take a clamped byte-mask fast path;
    /// everything else is Bresenham plotted through [`Bitmap::set`], which
    /// clips per pixel.
    pub fn line(&mut self, p0: Point, p1: Point) {
        if p0.y == p1.y {
            if p0.y >= 0 && (p0.y as u16) < self.height {
                self.line_horizontal(
                    p0.x.max(0) as u16,
                    p1.x.max(0) as u16,
                    p0.y as u16,
                    0xFF,
                );
            }
            return;
        }
        if p0.x == p1.x {
            if p0.x >= 0 && (p0.x as u16) < self.width {
                self.line_vertical(p0.x as u16, p0.y.max(0) as u16, p1.y.max(0) as u16);
            }
            return;
        }

        let sx: Coordinate = if p0.x < p1.x { 1 } else { -1 };
        let sy: Coordinate = if p0.y < p1.y { 1 } else { -1 };
        let dx = (i32::from(p1.x) - i32::from(p0.x)).abs();
        let dy = -(i32::from(p1.y) - i32::from(p0.y)).abs();
        let mut err = dx + dy;
        let mut p = p0;

        loop {
            self.set(p, true);
            let e2 = err * 2;
            if e2 >= dy {
                if p.x == p1.x {
                    break;
                }
                err += dy;
                p.x += sx;
            }
            if e2 <= dx {
                if p.y == p1.y {
                    break;
                }
                err += dx;
                p.y += sy;
            }
        }
    }

    /// Draw the four edges of `r`, all endpoint-inclusive.
    ///
    /// A rectangle with `right < left` or `bottom < top` is a no-op; corner
    /// pixels are drawn once each regardless of overlap.
    pub fn frame_rect(&mut self, r: &Rect) {
        if r.right < r.left || r.bottom < r.top {
            return;
        }
        // Top and bottom edges.
        self.line(Point::new(r.left, r.top), Point::new(r.right, r.top));
        self.line(Point::new(r.left, r.bottom), Point::new(r.right, r.bottom));
        // Left and right edges.
        self.line(Point::new(r.left, r.top), Point::new(r.left, r.bottom));
        self.line(Point::new(r.right, r.top), Point::new(r.right, r.bottom));
    }

    /// Fill `r` (endpoint-inclusive) with `pat`, row byte chosen by the
    /// absolute destination row (`pat[y % 8]`).
    pub fn paint_rect(&mut self, r: &Rect, pat: &Pattern) {
        if r.bottom < r.top || r.right < r.left || r.bottom < 0 || r.right < 0 {
            return;
        }
        if r.top >= 0 && (r.top as u16) >= self.height {
            return;
        }
        let x0 = r.left.max(0) as u16;
        let x1 = r.right.max(0) as u16;
        let y0 = r.top.max(0) as u16;
        let y1 = (r.bottom as u16).min(self.height - 1);
        for y in y0..=y1 {
            self.line_horizontal(x0, x1, y, pat.row(y));
        }
    }

    /// Blit `source` so that its top-left corner lands at `dest_pos`.
    ///
    /// `dest_pos` may be negative or otherwise out of range; the transfer is
    /// clipped to the intersection of both surfaces. Row transfer dispatches
    /// on the sub-byte alignment of the clipped source and destination x
    /// positions.
    pub fn copy(&mut self, source: BitmapView<'_>, dest_pos: Point, mode: TransferMode) {
        let dest_w = i32::from(self.width);
        let dest_h = i32::from(self.height);
        let src_w = i32::from(source.width);
        let src_h = i32::from(source.height);
        let px = i32::from(dest_pos.x);
        let py = i32::from(dest_pos.y);

        // Gross clipping: reject entirely off-surface transfers.
        if px >= dest_w || px + src_w < 0 || py >= dest_h || py + src_h < 0 {
            return;
        }

        let mut dest_y = py.max(0) as usize;
        let src_y_init = if py < 0 { (-py) as usize } else { 0 };
        let src_y_end = (src_h as usize).min(src_y_init + dest_h as usize - dest_y);

        let src_x_init = if px < 0 { (-px) as usize } else { 0 };
        let src_x_end = (src_w as usize).min(src_x_init + (dest_w - px.max(0)) as usize);

        let dest_x = px.max(0) as usize;
        let src_stride = usize::from(source.stride);
        let dest_stride = usize::from(self.stride);
        for src_y in src_y_init..src_y_end {
            let src_row = &source.store[src_y * src_stride..(src_y + 1) * src_stride];
            let dest_row = &mut self.store[dest_y * dest_stride..(dest_y + 1) * dest_stride];
            blit::copy_row(src_x_init, src_x_end, src_row, dest_x, dest_row, mode);
            dest_y += 1;
        }
    }

    /// Fill row `y` from `x0` to `x1` inclusive with `fill`.
    ///
    /// Partial edge bytes are masked read-modify-write; whole bytes take the
    /// fill byte verbatim. `x1` is clamped to the right edge.
    fn line_horizontal(&mut self, x0: u16, x1: u16, y: u16, fill: u8) {
        let (x0, x1) = if x0 > x1 { (x1, x0) } else { (x0, x1) };
        if x0 >= self.width || y >= self.height {
            return;
        }
        let x1 = x1.min(self.width - 1);

        let mut index = usize::from(y) * usize::from(self.stride) + usize::from(x0 / 8);

        // Masks for the line's left-most and right-most partial bytes.
        let mask_low = 0xFFu8 >> u32::from(x0 % 8);
        let mask_high = 0xFFu8 << (7 - u32::from(x1 % 8));

        let mut bytes = usize::from(x1 / 8) - usize::from(x0 / 8);
        if bytes == 0 {
            // The whole line lies within a single byte.
            let mask = mask_low & mask_high;
            self.store[index] = (self.store[index] & !mask) | (mask & fill);
            return;
        }

        self.store[index] = (self.store[index] & !mask_low) | (mask_low & fill);
        index += 1;
        bytes -= 1;

        for _ in 0..bytes {
            self.store[index] = fill;
            index += 1;
        }

        self.store[index] = (self.store[index] & !mask_high) | (mask_high & fill);
    }

    /// Set column `x` from `y0` to `y1` inclusive, OR-ing into each row.
    fn line_vertical(&mut self, x: u16, y0: u16, y1: u16) {
        if x >= self.width {
            return;
        }
        let (y0, y1) = if y0 > y1 { (y1, y0) } else { (y0, y1) };
        if y0 >= self.height {
            return;
        }
        let y1 = (y1 + 1).min(self.height);

        let mut index = usize::from(y0) * usize::from(self.stride) + usize::from(x / 8);
        let bit = 0x80u8 >> u32::from(x % 8);
        for _ in y0..y1 {
            self.store[index] |= bit;
            index += usize::from(self.stride);
        }
    }
}

fn debug_assert_dimensions(store_len: usize, width: u16, height: u16, stride: u16) {
    debug_assert!(width <= MAX_DIMENSION, "width {width} exceeds coordinate range");
    debug_assert!(
        height <= MAX_DIMENSION,
        "height {height} exceeds coordinate range"
    );
    debug_assert!(
        stride >= Bitmap::required_stride(width),
        "stride {stride} too small for width {width}"
    );
    debug_assert!(
        store_len >= usize::from(stride) * usize::from(height),
        "store of {store_len} bytes is too small for {stride}x{height} rows"
    );
}

/// An owned pixel store plus dimensions: a heap-backed framebuffer.
///
/// The store is allocated once at construction; drawing through
/// [`BitmapBuf::bitmap`] never reallocates.
#[cfg(feature = "alloc")]
#[derive(Debug, Clone)]
pub struct BitmapBuf {
    store: alloc::boxed::Box<[u8]>,
    width: u16,
    height: u16,
    stride: u16,
}

#[cfg(feature = "alloc")]
impl BitmapBuf {
    /// Allocate a zeroed `width x height` framebuffer with minimal stride.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        let stride = Bitmap::required_stride(width);
        let store = alloc::vec![0u8; usize::from(stride) * usize::from(height)];
        Self {
            store: store.into_boxed_slice(),
            width,
            height,
            stride,
        }
    }

    /// Width in pixels.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Borrow as a drawing surface.
    #[must_use]
    pub fn bitmap(&mut self) -> Bitmap<'_> {
        Bitmap::with_stride(&mut self.store, self.width, self.height, self.stride)
    }

    /// Borrow as a read-only view.
    #[must_use]
    pub fn view(&self) -> BitmapView<'_> {
        BitmapView::with_stride(&self.store, self.width, self.height, self.stride)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bitmap_of(store: &mut [u8], width: u16, height: u16) -> Bitmap<'_> {
        Bitmap::new(store, width, height)
    }

    #[test]
    fn required_sizes() {
        assert_eq!(Bitmap::required_stride(1), 1);
        assert_eq!(Bitmap::required_stride(8), 1);
        assert_eq!(Bitmap::required_stride(9), 2);
        assert_eq!(Bitmap::required_store_size(128, 32), 16 * 32);
    }

    #[test]
    fn set_in_bounds_flips_exactly_one_bit() {
        let mut store = [0u8; 16];
        let mut bmp = bitmap_of(&mut store, 16, 8);
        assert!(bmp.set(Point::new(10, 3), true));
        let mut expected = [0u8; 16];
        expected[3 * 2 + 1] = 0b0010_0000;
        assert_eq!(bmp.store(), expected);

        assert!(bmp.set(Point::new(10, 3), false));
        assert_eq!(bmp.store(), [0u8; 16]);
    }

    #[test]
    fn set_out_of_bounds_is_a_no_op() {
        let mut store = [0u8; 16];
        let mut bmp = bitmap_of(&mut store, 16, 8);
        assert!(!bmp.set(Point::new(-1, 0), true));
        assert!(!bmp.set(Point::new(0, -1), true));
        assert!(!bmp.set(Point::new(16, 0), true));
        assert!(!bmp.set(Point::new(0, 8), true));
        assert_eq!(bmp.store(), [0u8; 16]);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut store = [0xFFu8; 16];
        let mut bmp = bitmap_of(&mut store, 16, 8);
        bmp.clear();
        assert_eq!(bmp.store(), [0u8; 16]);
        bmp.clear();
        assert_eq!(bmp.store(), [0u8; 16]);
    }

    #[test]
    fn pixel_reads_back_set_bits() {
        let mut store = [0u8; 4];
        let mut bmp = bitmap_of(&mut store, 16, 2);
        bmp.set(Point::new(9, 1), true);
        assert!(bmp.pixel(Point::new(9, 1)));
        assert!(!bmp.pixel(Point::new(8, 1)));
        assert!(!bmp.pixel(Point::new(-1, 0)));
        assert!(!bmp.pixel(Point::new(0, 5)));
    }

    #[test]
    fn horizontal_line_fills_span() {
        let mut store = [0u8; 16];
        let mut bmp = bitmap_of(&mut store, 16, 8);
        bmp.line(Point::new(2, 5), Point::new(11, 5));
        let mut expected = [0u8; 16];
        expected[5 * 2] = 0b0011_1111;
        expected[5 * 2 + 1] = 0b1111_0000;
        assert_eq!(bmp.store(), expected);
    }

    #[test]
    fn horizontal_line_swapped_endpoints() {
        let mut store = [0u8; 16];
        let mut bmp = bitmap_of(&mut store, 16, 8);
        bmp.line(Point::new(11, 5), Point::new(2, 5));
        let mut swapped = [0u8; 16];
        swapped[10] = 0b0011_1111;
        swapped[11] = 0b1111_0000;
        assert_eq!(bmp.store(), swapped);
    }

    #[test]
    fn horizontal_line_single_byte_combines_masks() {
        let mut store = [0u8; 8];
        let mut bmp = bitmap_of(&mut store, 8, 8);
        bmp.line(Point::new(2, 0), Point::new(5, 0));
        assert_eq!(bmp.store()[0], 0b0011_1100);
    }

    #[test]
    fn horizontal_line_clips_right_edge() {
        let mut store = [0u8; 8];
        let mut bmp = bitmap_of(&mut store, 16, 4);
        bmp.line(Point::new(2, 1), Point::new(21, 1));
        assert_eq!(bmp.store()[2], 0b0011_1111);
        assert_eq!(bmp.store()[3], 0b1111_1111);
    }

    #[test]
    fn horizontal_line_off_surface_is_no_op() {
        let mut store = [0u8; 8];
        let mut bmp = bitmap_of(&mut store, 16, 4);
        bmp.line(Point::new(16, 3), Point::new(25, 3));
        bmp.line(Point::new(2, 4), Point::new(11, 4));
        bmp.line(Point::new(2, -1), Point::new(11, -1));
        assert_eq!(bmp.store(), [0u8; 8]);
    }

    #[test]
    fn vertical_line_ors_column() {
        let mut store = [0u8; 16];
        let mut bmp = bitmap_of(&mut store, 16, 8);
        bmp.line(Point::new(2, 2), Point::new(2, 5));
        for y in 0..8u16 {
            let want = (2..=5).contains(&y);
            assert_eq!(bmp.pixel(Point::new(2, y as Coordinate)), want, "row {y}");
        }
    }

    #[test]
    fn vertical_line_clips_bottom() {
        let mut store = [0u8; 8];
        let mut bmp = bitmap_of(&mut store, 16, 4);
        bmp.line(Point::new(1, 4), Point::new(1, 10));
        assert_eq!(bmp.store(), [0u8; 8]);

        bmp.line(Point::new(1, 2), Point::new(1, 10));
        assert!(bmp.pixel(Point::new(1, 2)));
        assert!(bmp.pixel(Point::new(1, 3)));
    }

    #[test]
    fn vertical_line_last_column() {
        let mut store = [0u8; 16];
        let mut bmp = bitmap_of(&mut store, 16, 8);
        bmp.line(Point::new(15, 2), Point::new(15, 6));
        for y in 2..=6 {
            assert!(bmp.pixel(Point::new(15, y)));
        }
        assert!(!bmp.pixel(Point::new(15, 1)));
        assert!(!bmp.pixel(Point::new(15, 7)));
    }

    #[test]
    fn diagonal_line_descending() {
        let mut store = [0u8; 8];
        let mut bmp = bitmap_of(&mut store, 16, 4);
        bmp.line(Point::new(0, 0), Point::new(15, 3));
        assert_eq!(
            bmp.store(),
            [
                0b1110_0000, 0b0000_0000, // row 0
                0b0001_1111, 0b0000_0000, // row 1
                0b0000_0000, 0b1111_1000, // row 2
                0b0000_0000, 0b0000_0111, // row 3
            ]
        );
    }

    #[test]
    fn diagonal_line_ascending() {
        let mut store = [0u8; 8];
        let mut bmp = bitmap_of(&mut store, 16, 4);
        bmp.line(Point::new(0, 3), Point::new(15, 0));
        assert_eq!(
            bmp.store(),
            [
                0b0000_0000, 0b0000_0111, // row 0
                0b0000_0000, 0b1111_1000, // row 1
                0b0001_1111, 0b0000_0000, // row 2
                0b1110_0000, 0b0000_0000, // row 3
            ]
        );
    }

    #[test]
    fn dump_renders_rows_and_ruler() {
        let mut store = [0u8; 2];
        let mut bmp = bitmap_of(&mut store, 5, 2);
        bmp.set(Point::new(0, 0), true);
        bmp.set(Point::new(4, 1), true);
        let mut out = String::new();
        bmp.dump(&mut out).unwrap();
        assert_eq!(out, "10000000\n00001000\n_____\n");
    }

    #[cfg(feature = "alloc")]
    #[test]
    fn bitmap_buf_round_trips_views() {
        let mut buf = BitmapBuf::new(12, 3);
        assert_eq!(buf.view().stride(), 2);
        buf.bitmap().set(Point::new(11, 2), true);
        assert!(buf.view().pixel(Point::new(11, 2)));
    }
}
