#![forbid(unsafe_code)]

//! ANSI presentation of a 1-bpp framebuffer on a terminal.
//!
//! Each terminal line shows two pixel rows using half-block characters, so a
//! 128x32 framebuffer occupies a 128x16 character region. The presenter
//! homes the cursor between frames instead of clearing, which keeps live
//! redraws flicker-free.

use std::io::{self, Write};

use monoblit_core::{BitmapView, Point};

/// Stateful frame presenter for one output stream.
pub struct Presenter<W: Write> {
    out: W,
    live: bool,
}

impl<W: Write> Presenter<W> {
    /// A presenter for live redrawing: hides the cursor and clears once.
    pub fn live(mut out: W) -> io::Result<Self> {
        write!(out, "\x1b[?25l\x1b[2J")?;
        Ok(Self { out, live: true })
    }

    /// A presenter that just prints one frame with no cursor control.
    pub fn plain(out: W) -> Self {
        Self { out, live: false }
    }

    /// Draw the framebuffer at the top-left of the terminal.
    pub fn present(&mut self, view: BitmapView<'_>) -> io::Result<()> {
        if self.live {
            write!(self.out, "\x1b[H")?;
        }
        let mut y = 0;
        while y < view.height() {
            let mut line = String::with_capacity(usize::from(view.width()));
            for x in 0..view.width() {
                let top = view.pixel(Point::new(x as i16, y as i16));
                let bottom = y + 1 < view.height() && view.pixel(Point::new(x as i16, y as i16 + 1));
                line.push(match (top, bottom) {
                    (true, true) => '█',
                    (true, false) => '▀',
                    (false, true) => '▄',
                    (false, false) => ' ',
                });
            }
            writeln!(self.out, "{line}")?;
            y += 2;
        }
        self.out.flush()
    }
}

impl<W: Write> Drop for Presenter<W> {
    fn drop(&mut self) {
        if self.live {
            // Restore the cursor; a failing terminal is past caring.
            let _ = write!(self.out, "\x1b[?25h");
            let _ = self.out.flush();
        }
    }
}
