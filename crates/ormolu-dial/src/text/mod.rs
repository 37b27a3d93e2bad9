//! Text measurement.
//!
//! The host supplies font bytes and rasterizes glyphs; this crate only needs
//! metrics so the brand and date labels can be centered.

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem};
