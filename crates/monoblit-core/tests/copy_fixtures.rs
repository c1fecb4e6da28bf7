//! Byte-exact blit fixtures: clipping, alignment regimes, and transfer modes.
//!
//! Every test drives `Bitmap::copy` against a destination with known
//! contents and asserts the full store afterwards, so a regression in any
//! alignment regime shows up as a readable pixel diff.

use monoblit_core::{Point, TransferMode};
use monoblit_harness::{blank, expect_store, filled, framed, gray_filled};

const EMPTY_8X8: [u8; 8] = [0; 8];

#[test]
fn smaller_copied_to_top_left() {
    let mut dest = blank(8, 8);
    let src = filled(5, 4);
    dest.bitmap()
        .copy(src.view(), Point::new(0, 0), TransferMode::Replace);
    expect_store(
        dest.view(),
        &[
            0b1111_1000,
            0b1111_1000,
            0b1111_1000,
            0b1111_1000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
    );
}

#[test]
fn smaller_copied_to_middle() {
    let mut dest = blank(8, 8);
    let src = filled(4, 4);
    dest.bitmap()
        .copy(src.view(), Point::new(2, 2), TransferMode::Replace);
    expect_store(
        dest.view(),
        &[
            0b0000_0000,
            0b0000_0000,
            0b0011_1100,
            0b0011_1100,
            0b0011_1100,
            0b0011_1100,
            0b0000_0000,
            0b0000_0000,
        ],
    );
}

#[test]
fn negative_x_partially_visible() {
    let mut dest = blank(8, 8);
    let src = filled(4, 4);
    dest.bitmap()
        .copy(src.view(), Point::new(-2, 0), TransferMode::Replace);
    expect_store(
        dest.view(),
        &[
            0b1100_0000,
            0b1100_0000,
            0b1100_0000,
            0b1100_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
    );
}

#[test]
fn very_negative_x_rejected() {
    let mut dest = blank(8, 8);
    let src = filled(4, 4);
    dest.bitmap()
        .copy(src.view(), Point::new(-8, 0), TransferMode::Replace);
    expect_store(dest.view(), &EMPTY_8X8);
}

#[test]
fn positive_x_partially_visible() {
    let mut dest = blank(8, 8);
    let src = filled(4, 4);
    dest.bitmap()
        .copy(src.view(), Point::new(6, 0), TransferMode::Replace);
    expect_store(
        dest.view(),
        &[
            0b0000_0011,
            0b0000_0011,
            0b0000_0011,
            0b0000_0011,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
    );
}

#[test]
fn large_x_rejected() {
    let mut dest = blank(8, 8);
    let src = filled(4, 4);
    dest.bitmap()
        .copy(src.view(), Point::new(10, 0), TransferMode::Replace);
    expect_store(dest.view(), &EMPTY_8X8);
}

#[test]
fn negative_y_partially_visible() {
    let mut dest = blank(8, 8);
    let src = filled(4, 4);
    dest.bitmap()
        .copy(src.view(), Point::new(0, -2), TransferMode::Replace);
    expect_store(
        dest.view(),
        &[
            0b1111_0000,
            0b1111_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
    );
}

#[test]
fn very_negative_y_rejected() {
    let mut dest = blank(8, 8);
    let src = filled(4, 4);
    dest.bitmap()
        .copy(src.view(), Point::new(0, -10), TransferMode::Replace);
    expect_store(dest.view(), &EMPTY_8X8);
}

#[test]
fn positive_y_partially_visible() {
    let mut dest = blank(8, 8);
    let src = filled(4, 4);
    dest.bitmap()
        .copy(src.view(), Point::new(0, 6), TransferMode::Replace);
    expect_store(
        dest.view(),
        &[
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b1111_0000,
            0b1111_0000,
        ],
    );
}

#[test]
fn large_y_rejected() {
    let mut dest = blank(8, 8);
    let src = filled(4, 4);
    dest.bitmap()
        .copy(src.view(), Point::new(0, 10), TransferMode::Replace);
    expect_store(dest.view(), &EMPTY_8X8);
}

#[test]
fn larger_source_fills_destination() {
    let mut dest = blank(8, 8);
    let src = filled(16, 16);
    dest.bitmap()
        .copy(src.view(), Point::new(0, 0), TransferMode::Replace);
    expect_store(dest.view(), &[0xFF; 8]);
}

#[test]
fn larger_source_negative_x_shows_right_edge() {
    let mut dest = blank(8, 8);
    let src = filled(16, 16);
    dest.bitmap()
        .copy(src.view(), Point::new(-14, 0), TransferMode::Replace);
    expect_store(dest.view(), &[0b1100_0000; 8]);
}

#[test]
fn larger_source_very_negative_x_rejected() {
    let mut dest = blank(8, 8);
    let src = filled(16, 16);
    dest.bitmap()
        .copy(src.view(), Point::new(-24, 0), TransferMode::Replace);
    expect_store(dest.view(), &EMPTY_8X8);
}

#[test]
fn larger_source_positive_x_shows_left_edge() {
    let mut dest = blank(8, 8);
    let src = filled(16, 16);
    dest.bitmap()
        .copy(src.view(), Point::new(6, 0), TransferMode::Replace);
    expect_store(dest.view(), &[0b0000_0011; 8]);
}

#[test]
fn larger_source_negative_y_shows_bottom_rows() {
    let mut dest = blank(8, 8);
    let src = filled(16, 16);
    dest.bitmap()
        .copy(src.view(), Point::new(0, -12), TransferMode::Replace);
    expect_store(
        dest.view(),
        &[0xFF, 0xFF, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x00],
    );
}

#[test]
fn larger_source_positive_y_shows_top_rows() {
    let mut dest = blank(8, 8);
    let src = filled(16, 16);
    dest.bitmap()
        .copy(src.view(), Point::new(0, 6), TransferMode::Replace);
    expect_store(
        dest.view(),
        &[0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0xFF, 0xFF],
    );
}

#[test]
fn framed_source_or_onto_blank() {
    let mut dest = blank(8, 8);
    let src = framed(4, 4);
    dest.bitmap()
        .copy(src.view(), Point::new(0, 0), TransferMode::Or);
    expect_store(
        dest.view(),
        &[
            0b1111_0000,
            0b1001_0000,
            0b1001_0000,
            0b1111_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
            0b0000_0000,
        ],
    );
}

#[test]
fn framed_source_replace_onto_gray() {
    let mut dest = gray_filled(8, 8);
    expect_store(
        dest.view(),
        &[0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55, 0xAA, 0x55],
    );
    let src = framed(4, 4);
    dest.bitmap()
        .copy(src.view(), Point::new(0, 0), TransferMode::Replace);
    expect_store(
        dest.view(),
        &[
            0b1111_1010,
            0b1001_0101,
            0b1001_1010,
            0b1111_0101,
            0b1010_1010,
            0b0101_0101,
            0b1010_1010,
            0b0101_0101,
        ],
    );
}

#[test]
fn framed_source_or_onto_gray() {
    let mut dest = gray_filled(8, 8);
    let src = framed(4, 4);
    dest.bitmap()
        .copy(src.view(), Point::new(0, 0), TransferMode::Or);
    expect_store(
        dest.view(),
        &[
            0b1111_1010,
            0b1101_0101,
            0b1011_1010,
            0b1111_0101,
            0b1010_1010,
            0b0101_0101,
            0b1010_1010,
            0b0101_0101,
        ],
    );
}

#[test]
fn aligned_whole_bytes_replace_onto_gray() {
    let mut dest = gray_filled(32, 8);
    let src = framed(16, 4);
    dest.bitmap()
        .copy(src.view(), Point::new(8, 2), TransferMode::Replace);
    expect_store(
        dest.view(),
        &[
            0b1010_1010, 0b1010_1010, 0b1010_1010, 0b1010_1010, // row 0
            0b0101_0101, 0b0101_0101, 0b0101_0101, 0b0101_0101, // row 1
            0b1010_1010, 0b1111_1111, 0b1111_1111, 0b1010_1010, // row 2
            0b0101_0101, 0b1000_0000, 0b0000_0001, 0b0101_0101, // row 3
            0b1010_1010, 0b1000_0000, 0b0000_0001, 0b1010_1010, // row 4
            0b0101_0101, 0b1111_1111, 0b1111_1111, 0b0101_0101, // row 5
            0b1010_1010, 0b1010_1010, 0b1010_1010, 0b1010_1010, // row 6
            0b0101_0101, 0b0101_0101, 0b0101_0101, 0b0101_0101, // row 7
        ],
    );
}

#[test]
fn aligned_partial_right_edge_replace_onto_gray() {
    let mut dest = gray_filled(32, 8);
    let src = framed(12, 4);
    dest.bitmap()
        .copy(src.view(), Point::new(8, 2), TransferMode::Replace);
    expect_store(
        dest.view(),
        &[
            0b1010_1010, 0b1010_1010, 0b1010_1010, 0b1010_1010, // row 0
            0b0101_0101, 0b0101_0101, 0b0101_0101, 0b0101_0101, // row 1
            0b1010_1010, 0b1111_1111, 0b1111_1010, 0b1010_1010, // row 2
            0b0101_0101, 0b1000_0000, 0b0001_0101, 0b0101_0101, // row 3
            0b1010_1010, 0b1000_0000, 0b0001_1010, 0b1010_1010, // row 4
            0b0101_0101, 0b1111_1111, 0b1111_0101, 0b0101_0101, // row 5
            0b1010_1010, 0b1010_1010, 0b1010_1010, 0b1010_1010, // row 6
            0b0101_0101, 0b0101_0101, 0b0101_0101, 0b0101_0101, // row 7
        ],
    );
}

#[test]
fn aligned_whole_bytes_or_onto_gray() {
    let mut dest = gray_filled(32, 8);
    let src = framed(16, 4);
    dest.bitmap()
        .copy(src.view(), Point::new(8, 2), TransferMode::Or);
    expect_store(
        dest.view(),
        &[
            0b1010_1010, 0b1010_1010, 0b1010_1010, 0b1010_1010, // row 0
            0b0101_0101, 0b0101_0101, 0b0101_0101, 0b0101_0101, // row 1
            0b1010_1010, 0b1111_1111, 0b1111_1111, 0b1010_1010, // row 2
            0b0101_0101, 0b1101_0101, 0b0101_0101, 0b0101_0101, // row 3
            0b1010_1010, 0b1010_1010, 0b1010_1011, 0b1010_1010, // row 4
            0b0101_0101, 0b1111_1111, 0b1111_1111, 0b0101_0101, // row 5
            0b1010_1010, 0b1010_1010, 0b1010_1010, 0b1010_1010, // row 6
            0b0101_0101, 0b0101_0101, 0b0101_0101, 0b0101_0101, // row 7
        ],
    );
}

#[test]
fn misaligned_multibyte_replace_shifts_across_rows() {
    let mut dest = gray_filled(32, 6);
    let src = framed(24, 4);
    dest.bitmap()
        .copy(src.view(), Point::new(3, 1), TransferMode::Replace);
    expect_store(
        dest.view(),
        &[
            0b1010_1010, 0b1010_1010, 0b1010_1010, 0b1010_1010, // row 0
            0b0101_1111, 0b1111_1111, 0b1111_1111, 0b1111_0101, // row 1
            0b1011_0000, 0b0000_0000, 0b0000_0000, 0b0010_1010, // row 2
            0b0101_0000, 0b0000_0000, 0b0000_0000, 0b0011_0101, // row 3
            0b1011_1111, 0b1111_1111, 0b1111_1111, 0b1110_1010, // row 4
            0b0101_0101, 0b0101_0101, 0b0101_0101, 0b0101_0101, // row 5
        ],
    );
}

#[test]
fn misaligned_tiny_replace() {
    let mut dest = blank(16, 1);
    let src = filled(8, 1);
    dest.bitmap()
        .copy(src.view(), Point::new(2, 0), TransferMode::Replace);
    expect_store(dest.view(), &[0b0011_1111, 0b1100_0000]);
}

#[test]
fn misaligned_wide_replace() {
    let mut dest = gray_filled(24, 5);
    let src = framed(16, 3);
    dest.bitmap()
        .copy(src.view(), Point::new(2, 1), TransferMode::Replace);
    expect_store(
        dest.view(),
        &[
            0b1010_1010, 0b1010_1010, 0b1010_1010, // row 0
            0b0111_1111, 0b1111_1111, 0b1101_0101, // row 1
            0b1010_0000, 0b0000_0000, 0b0110_1010, // row 2
            0b0111_1111, 0b1111_1111, 0b1101_0101, // row 3
            0b1010_1010, 0b1010_1010, 0b1010_1010, // row 4
        ],
    );
}

#[test]
fn misaligned_wide_or() {
    let mut dest = gray_filled(24, 5);
    let src = framed(16, 3);
    dest.bitmap()
        .copy(src.view(), Point::new(2, 1), TransferMode::Or);
    expect_store(
        dest.view(),
        &[
            0b1010_1010, 0b1010_1010, 0b1010_1010, // row 0
            0b0111_1111, 0b1111_1111, 0b1101_0101, // row 1
            0b1010_1010, 0b1010_1010, 0b1110_1010, // row 2
            0b0111_1111, 0b1111_1111, 0b1101_0101, // row 3
            0b1010_1010, 0b1010_1010, 0b1010_1010, // row 4
        ],
    );
}

#[test]
fn replace_round_trips_into_matching_destination() {
    let src = framed(16, 3);
    let mut dest = blank(16, 3);
    dest.bitmap()
        .copy(src.view(), Point::new(0, 0), TransferMode::Replace);
    expect_store(dest.view(), src.view().store());
}
