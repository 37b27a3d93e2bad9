pub mod circle;
pub mod path;
pub mod rounded_rect;
pub mod text;

use crate::coords::Vec2;
use crate::paint::Color;

/// Stroke drawn along the outer edge of a shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    pub width: f32,
    pub color: Color,
}

impl Border {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

/// Drop-shadow parameters attached to a shape.
///
/// The host composites the blurred, offset silhouette below the shape
/// itself; the dial uses this for the hour ticks and the date windows.
#[derive(Debug, Clone, PartialEq)]
pub struct Shadow {
    pub color: Color,
    pub blur: f32,
    pub offset: Vec2,
}

impl Shadow {
    #[inline]
    pub fn new(color: Color, blur: f32, offset: Vec2) -> Self {
        Self { color, blur, offset }
    }
}
