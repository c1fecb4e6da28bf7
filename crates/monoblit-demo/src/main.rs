#![forbid(unsafe_code)]

//! monoblit demo binary entry point.

mod cli;
mod screens;
mod terminal;

use std::process;

use cli::{Opts, Screen};

fn main() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    let opts = Opts::parse();
    tracing::info!(?opts, "starting demo");

    let result = match opts.screen {
        Screen::Dashboard => screens::dashboard::run(&opts),
        Screen::Clock => screens::clock::run(&opts),
        Screen::Charmap => screens::charmap::run(&opts),
    };

    if let Err(e) = result {
        eprintln!("demo failed: {e}");
        process::exit(1);
    }
}
