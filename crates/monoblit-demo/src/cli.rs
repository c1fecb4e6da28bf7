#![forbid(unsafe_code)]

//! Command-line argument parsing for the demo binary.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.
//! Supports environment variable overrides via the `MONOBLIT_DEMO_*` prefix.

use std::env;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
monoblit demo — 1-bpp framebuffer rendering on your terminal

USAGE:
    monoblit-demo [OPTIONS]

OPTIONS:
    --screen=NAME     Screen to run: 'dashboard', 'clock', or 'charmap'
                      (default: dashboard)
    --width=N         Framebuffer width in pixels (default: 128)
    --height=N        Framebuffer height in pixels (default: 32)
    --frames=N        Stop the dashboard after N frames (default: run
                      until interrupted)
    --tick-ms=N       Dashboard frame interval in milliseconds (default: 100)
    --help, -h        Show this help message
    --version, -V     Show version

SCREENS:
    dashboard   Incrementing counter with a thermometer bar, redrawn live
    clock       Render the current time once and print the bitmap
    charmap     Lay out every glyph of the small font and print the bitmap

ENVIRONMENT:
    MONOBLIT_DEMO_SCREEN, MONOBLIT_DEMO_WIDTH, MONOBLIT_DEMO_HEIGHT,
    MONOBLIT_DEMO_FRAMES, MONOBLIT_DEMO_TICK_MS override the defaults and
    are themselves overridden by command-line flags.
";

/// Which demo screen to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Dashboard,
    Clock,
    Charmap,
}

/// Parsed command-line options.
#[derive(Debug, Clone)]
pub struct Opts {
    pub screen: Screen,
    pub width: u16,
    pub height: u16,
    pub frames: Option<u64>,
    pub tick_ms: u64,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            screen: Screen::Dashboard,
            width: 128,
            height: 32,
            frames: None,
            tick_ms: 100,
        }
    }
}

impl Opts {
    /// Parse process arguments, exiting on `--help`/`--version` or a
    /// malformed flag.
    pub fn parse() -> Self {
        let mut opts = Self::default();
        opts.apply_env();

        for arg in env::args().skip(1) {
            match arg.as_str() {
                "--help" | "-h" => {
                    print!("{HELP_TEXT}");
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("monoblit-demo {VERSION}");
                    process::exit(0);
                }
                _ => {
                    if let Some(value) = arg.strip_prefix("--screen=") {
                        opts.screen = parse_screen(value);
                    } else if let Some(value) = arg.strip_prefix("--width=") {
                        opts.width = parse_num(value, "--width");
                    } else if let Some(value) = arg.strip_prefix("--height=") {
                        opts.height = parse_num(value, "--height");
                    } else if let Some(value) = arg.strip_prefix("--frames=") {
                        opts.frames = Some(parse_num(value, "--frames"));
                    } else if let Some(value) = arg.strip_prefix("--tick-ms=") {
                        opts.tick_ms = parse_num(value, "--tick-ms");
                    } else {
                        eprintln!("unknown option: {arg}\n\n{HELP_TEXT}");
                        process::exit(2);
                    }
                }
            }
        }
        opts
    }

    fn apply_env(&mut self) {
        if let Ok(value) = env::var("MONOBLIT_DEMO_SCREEN") {
            self.screen = parse_screen(&value);
        }
        if let Ok(value) = env::var("MONOBLIT_DEMO_WIDTH") {
            self.width = parse_num(&value, "MONOBLIT_DEMO_WIDTH");
        }
        if let Ok(value) = env::var("MONOBLIT_DEMO_HEIGHT") {
            self.height = parse_num(&value, "MONOBLIT_DEMO_HEIGHT");
        }
        if let Ok(value) = env::var("MONOBLIT_DEMO_FRAMES") {
            self.frames = Some(parse_num(&value, "MONOBLIT_DEMO_FRAMES"));
        }
        if let Ok(value) = env::var("MONOBLIT_DEMO_TICK_MS") {
            self.tick_ms = parse_num(&value, "MONOBLIT_DEMO_TICK_MS");
        }
    }
}

fn parse_screen(value: &str) -> Screen {
    match value {
        "dashboard" => Screen::Dashboard,
        "clock" => Screen::Clock,
        "charmap" => Screen::Charmap,
        other => {
            eprintln!("unknown screen '{other}' (expected dashboard, clock, or charmap)");
            process::exit(2);
        }
    }
}

fn parse_num<T: std::str::FromStr>(value: &str, flag: &str) -> T {
    value.parse().unwrap_or_else(|_| {
        eprintln!("invalid value '{value}' for {flag}");
        process::exit(2);
    })
}
