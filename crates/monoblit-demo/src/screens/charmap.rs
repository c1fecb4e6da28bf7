#![forbid(unsafe_code)]

//! Lay out every glyph of the small font and print the bitmap.

use std::io::{self, Write};

use monoblit_core::{BitmapBuf, Coordinate, Point};
use monoblit_text::fonts::MICRO8;
use monoblit_text::{GlyphCache, draw_char};

use crate::cli::Opts;

pub fn run(opts: &Opts) -> io::Result<()> {
    let mut framebuffer = BitmapBuf::new(opts.width, opts.height);
    let mut cache = GlyphCache::new();
    let row_height = MICRO8.pixel_height() as Coordinate;

    let mut bitmap = framebuffer.bitmap();
    let mut pos = Point::default();
    for &(code_point, _) in MICRO8.glyphs() {
        let Some(c) = char::from_u32(code_point) else {
            continue;
        };
        if c <= ' ' {
            continue;
        }
        let advance = MICRO8.char_width(c) as Coordinate + 1;
        if pos.x + advance > bitmap.width() as Coordinate {
            pos.x = 0;
            pos.y += row_height;
            if pos.y >= bitmap.height() as Coordinate {
                break;
            }
        }
        draw_char(&mut bitmap, &mut cache, &MICRO8, c, pos);
        pos.x += advance;
    }

    let mut rendered = String::new();
    framebuffer
        .view()
        .dump(&mut rendered)
        .expect("dump to String cannot fail");
    io::stdout().write_all(rendered.as_bytes())
}
