//! Presentation constants for the dial.
//!
//! These are reproduced literally from the reference face; none of them is
//! derived at runtime. Geometric proportions are fractions of the dial
//! radius, widths are logical pixels.

use crate::paint::{Color, ColorStop};

pub const BRAND_TEXT: &str = "YongqiGou";
pub const BRAND_SIZE: f32 = 17.0;
/// The brand baseline sits this many pixels above the dial center.
pub const BRAND_LIFT: f32 = 30.0;

pub const MONTH_ABBREV: [&str; 12] = [
    "JAN", "FEB", "MAR", "APR", "MAY", "JUN", "JUL", "AUG", "SEP", "OCT", "NOV", "DEC",
];

pub const RIPPLE_COUNT: usize = 4;
pub const TEXTURE_RING_COUNT: usize = 5;

/// (length as a radius fraction, base width in pixels). Hour < minute < second.
pub const HOUR_HAND: (f32, f32) = (0.45, 6.0);
pub const MINUTE_HAND: (f32, f32) = (0.65, 4.0);
pub const SECOND_HAND: (f32, f32) = (0.8, 2.0);
pub const PIVOT_RADIUS: f32 = 4.0;

/// Hour tick radial extents (radius fractions) and angular widths (radians).
pub const TICK_INNER: f32 = 0.75;
pub const TICK_OUTER: f32 = 0.95;
pub const TICK_HALF_WIDTH: f32 = 0.026;
pub const TICK_CTRL_SPREAD: f32 = 0.01;
/// Curve control points sit this deep into the tick, tip to base.
pub const TICK_CTRL_DEPTH: f32 = 0.3;
pub const TICK_SHEEN_SPREAD: f32 = 0.02;

pub fn brand_color() -> Color {
    Color::from_srgb_u8(0xb7, 0x6e, 0x5d, 0xff)
}

/// Rose-metal tone shared by the date window borders and labels.
pub fn date_metal() -> Color {
    Color::from_srgb_u8(0xd4, 0xb5, 0xac, 0xff)
}

/// Rose-gold base disc, light falling in from the upper left.
pub fn base_disc_stops() -> Vec<ColorStop> {
    vec![
        ColorStop::new(0.0, Color::from_srgb_u8(0xf7, 0xe8, 0xe3, 0xff)),
        ColorStop::new(0.5, Color::from_srgb_u8(0xf2, 0xdc, 0xd4, 0xff)),
        ColorStop::new(1.0, Color::from_srgb_u8(0xe8, 0xce, 0xc7, 0xff)),
    ]
}

/// Soft white wash over the dial center.
pub fn center_fade_stops() -> Vec<ColorStop> {
    vec![
        ColorStop::new(0.0, Color::white_alpha(1.0)),
        ColorStop::new(0.3, Color::white_alpha(0.95)),
        ColorStop::new(0.6, Color::white_alpha(0.7)),
        ColorStop::new(0.8, Color::white_alpha(0.3)),
        ColorStop::new(1.0, Color::white_alpha(0.0)),
    ]
}

/// Dark-light-dark sweep across a tick's width.
pub fn tick_metal_stops() -> Vec<ColorStop> {
    vec![
        ColorStop::new(0.0, Color::gray_u8(0x66)),
        ColorStop::new(0.3, Color::gray_u8(0xcc)),
        ColorStop::new(0.5, Color::gray_u8(0xee)),
        ColorStop::new(0.7, Color::gray_u8(0xcc)),
        ColorStop::new(1.0, Color::gray_u8(0x66)),
    ]
}

/// Cross-width metal bands of the hour and minute hands.
pub fn hand_metal_stops() -> Vec<ColorStop> {
    vec![
        ColorStop::new(0.0, Color::gray_u8(0x66)),
        ColorStop::new(0.2, Color::gray_u8(0x88)),
        ColorStop::new(0.35, Color::gray_u8(0xaa)),
        ColorStop::new(0.5, Color::gray_u8(0xcc)),
        ColorStop::new(0.65, Color::gray_u8(0xaa)),
        ColorStop::new(0.8, Color::gray_u8(0x88)),
        ColorStop::new(1.0, Color::gray_u8(0x66)),
    ]
}

/// The second hand's sharper, brighter sweep.
pub fn second_hand_stops() -> Vec<ColorStop> {
    vec![
        ColorStop::new(0.0, Color::gray_u8(0x44)),
        ColorStop::new(0.2, Color::gray_u8(0x99)),
        ColorStop::new(0.3, Color::gray_u8(0xf0)),
        ColorStop::new(0.4, Color::gray_u8(0xff)),
        ColorStop::new(0.5, Color::gray_u8(0xf0)),
        ColorStop::new(0.6, Color::gray_u8(0x99)),
        ColorStop::new(0.8, Color::gray_u8(0x66)),
        ColorStop::new(1.0, Color::gray_u8(0x44)),
    ]
}

pub fn pivot_stops() -> Vec<ColorStop> {
    vec![
        ColorStop::new(0.0, Color::gray_u8(0xe8)),
        ColorStop::new(0.5, Color::gray_u8(0x99)),
        ColorStop::new(1.0, Color::gray_u8(0x66)),
    ]
}

pub fn counterweight_stops() -> Vec<ColorStop> {
    vec![
        ColorStop::new(0.0, Color::gray_u8(0xff)),
        ColorStop::new(0.3, Color::gray_u8(0xcc)),
        ColorStop::new(0.6, Color::gray_u8(0x99)),
        ColorStop::new(1.0, Color::gray_u8(0x66)),
    ]
}
