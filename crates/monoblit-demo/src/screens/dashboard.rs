#![forbid(unsafe_code)]

//! A live counter with a thermometer bar, redrawn at a fixed tick.

use std::io;
use std::thread;
use std::time::Duration;

use monoblit_core::{Bitmap, BitmapBuf, Coordinate, GRAY, Point, Rect, WHITE};
use monoblit_text::fonts::SEG16;
use monoblit_text::{GlyphCache, draw_string, string_width};

use crate::cli::Opts;
use crate::terminal::Presenter;

/// Draw a horizontal progress bar: frame, gray fill up to `percent`, a
/// solid end line, and a white wipe of the remainder.
fn thermometer(bitmap: &mut Bitmap<'_>, bar: &Rect, percent: u16) {
    debug_assert!(percent <= 100);
    bitmap.frame_rect(bar);

    let mut fill = bar.inset(1, 1);
    fill.right = bar.left + (i32::from(bar.width()) * i32::from(percent) / 100) as Coordinate;
    bitmap.paint_rect(&fill, &GRAY);
    bitmap.line(
        Point::new(fill.right, fill.top),
        Point::new(fill.right, fill.bottom),
    );

    // Wipe the part the bar has not reached yet.
    fill.left = fill.right + 1;
    fill.right = bar.right - 1;
    bitmap.paint_rect(&fill, &WHITE);
}

pub fn run(opts: &Opts) -> io::Result<()> {
    let width = opts.width;
    let height = opts.height;
    let mut framebuffer = BitmapBuf::new(width, height);
    let mut cache = GlyphCache::new();
    let mut presenter = Presenter::live(io::stdout().lock())?;

    tracing::debug!(width, height, "dashboard starting");

    let mut count: u64 = 0;
    let mut last_width: Coordinate = 0;
    loop {
        let mut bitmap = framebuffer.bitmap();

        // Erase the previous counter glyphs.
        bitmap.paint_rect(
            &Rect::new(
                0,
                width as Coordinate - last_width,
                SEG16.pixel_height() as Coordinate,
                width as Coordinate - 1,
            ),
            &WHITE,
        );

        thermometer(
            &mut bitmap,
            &Rect::new(
                height as Coordinate - 6,
                0,
                height as Coordinate - 1,
                width as Coordinate - 1,
            ),
            (count % 100) as u16,
        );

        let text = count.to_string();
        last_width = string_width(&SEG16, text.as_bytes()).min(width as Coordinate);
        draw_string(
            &mut bitmap,
            &mut cache,
            &SEG16,
            text.as_bytes(),
            Point::new(width as Coordinate - last_width, 0),
        );

        presenter.present(framebuffer.view())?;
        count += 1;
        if opts.frames.is_some_and(|frames| count >= frames) {
            return Ok(());
        }
        thread::sleep(Duration::from_millis(opts.tick_ms));
    }
}
