#![forbid(unsafe_code)]

//! The demo screens.

pub mod charmap;
pub mod clock;
pub mod dashboard;
