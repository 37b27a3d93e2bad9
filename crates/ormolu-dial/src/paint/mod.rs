//! Paint model shared between the dial renderers and the host compositor.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - paint sources (solid, linear and radial gradients)
//!
//! Geometry types remain in `coords`.

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::{ColorStop, LinearGradient, RadialGradient, SpreadMode};

/// Paint source for filling or stroking geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Paint {
    Solid(Color),
    LinearGradient(LinearGradient),
    RadialGradient(RadialGradient),
}

impl Paint {
    #[inline]
    pub fn solid(color: Color) -> Self {
        Paint::Solid(color)
    }

    /// Structural validity of the paint definition.
    ///
    /// Renderers may impose additional constraints (stop sorting, minimum
    /// counts); this only rejects definitions no renderer could consume.
    pub fn is_valid(&self) -> bool {
        match self {
            Paint::Solid(c) => c.is_finite(),
            Paint::LinearGradient(g) => g.is_valid(),
            Paint::RadialGradient(g) => g.is_valid(),
        }
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        match self {
            Paint::Solid(c) => c.a >= 1.0,
            Paint::LinearGradient(g) => g.stops.iter().all(|s| s.color.a >= 1.0),
            Paint::RadialGradient(g) => g.stops.iter().all(|s| s.color.a >= 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;

    #[test]
    fn solid_opacity() {
        assert!(Paint::solid(Color::from_srgb_u8(10, 20, 30, 255)).is_opaque());
        assert!(!Paint::solid(Color::from_straight(1.0, 1.0, 1.0, 0.5)).is_opaque());
    }

    #[test]
    fn degenerate_gradient_is_invalid() {
        let g = LinearGradient::new(
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 1.0),
            vec![
                ColorStop::new(0.0, Color::transparent()),
                ColorStop::new(1.0, Color::transparent()),
            ],
            SpreadMode::Pad,
        );
        assert!(!Paint::LinearGradient(g).is_valid());
    }
}
