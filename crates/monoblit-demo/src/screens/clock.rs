#![forbid(unsafe_code)]

//! Render the current time of day once and print the bitmap.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use monoblit_core::{BitmapBuf, Point};
use monoblit_text::fonts::SEG16;
use monoblit_text::{GlyphCache, draw_string};

use crate::cli::Opts;

/// `HH:MM:SS` for the given seconds-since-midnight.
fn format_time(seconds_of_day: u64) -> String {
    let hours = seconds_of_day / 3600;
    let minutes = (seconds_of_day / 60) % 60;
    let seconds = seconds_of_day % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

pub fn run(opts: &Opts) -> io::Result<()> {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let text = format_time(now % 86_400);
    tracing::debug!(%text, "rendering clock (UTC)");

    let mut framebuffer = BitmapBuf::new(opts.width, opts.height);
    let mut cache = GlyphCache::new();
    let mut bitmap = framebuffer.bitmap();
    draw_string(
        &mut bitmap,
        &mut cache,
        &SEG16,
        text.as_bytes(),
        Point::new(0, 0),
    );

    let mut rendered = String::new();
    framebuffer
        .view()
        .dump(&mut rendered)
        .expect("dump to String cannot fail");
    io::stdout().write_all(rendered.as_bytes())
}
