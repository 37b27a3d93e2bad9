use crate::coords::Vec2;

use super::Color;

/// Gradient spread behavior outside [0, 1] range.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SpreadMode {
    /// Clamp to edge stops.
    Pad,
    /// Repeat the gradient pattern.
    Repeat,
    /// Mirror-repeat the gradient pattern.
    Reflect,
}

/// A single gradient stop.
///
/// `t` is expected in [0, 1] in typical usage, but is not strictly enforced.
/// Renderers may clamp/sort stops at build time.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    pub t: f32,
    pub color: Color,
}

impl ColorStop {
    #[inline]
    pub const fn new(t: f32, color: Color) -> Self {
        Self { t, color }
    }
}

/// Linear gradient definition in logical pixel space.
///
/// `start` and `end` are positions in the same coordinate space as geometry;
/// hand renderers map them through the same transform as the outline points.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearGradient {
    pub start: Vec2,
    pub end: Vec2,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl LinearGradient {
    pub fn new(start: Vec2, end: Vec2, stops: Vec<ColorStop>, spread: SpreadMode) -> Self {
        Self { start, end, stops, spread }
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.start.is_finite()
            && self.end.is_finite()
            && self.stops.len() >= 2
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
            && (self.end.x != self.start.x || self.end.y != self.start.y)
    }
}

/// Radial gradient definition in logical pixel space.
///
/// `focal` is where the gradient's `t = 0` color sits; offsetting it from
/// `center` produces the off-axis sheen the dial uses on its base disc and
/// metal caps. `t = 1` is reached on the circle of `radius` around `center`.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialGradient {
    pub focal: Vec2,
    pub center: Vec2,
    pub radius: f32,
    pub stops: Vec<ColorStop>,
    pub spread: SpreadMode,
}

impl RadialGradient {
    pub fn new(
        focal: Vec2,
        center: Vec2,
        radius: f32,
        stops: Vec<ColorStop>,
        spread: SpreadMode,
    ) -> Self {
        Self { focal, center, radius, stops, spread }
    }

    /// Radial gradient with the focal point on the center.
    pub fn centered(center: Vec2, radius: f32, stops: Vec<ColorStop>) -> Self {
        Self::new(center, center, radius, stops, SpreadMode::Pad)
    }

    /// Returns true when the gradient definition is structurally usable.
    pub fn is_valid(&self) -> bool {
        self.focal.is_finite()
            && self.center.is_finite()
            && self.radius.is_finite()
            && self.radius > 0.0
            && self.stops.len() >= 2
            && self.stops.iter().all(|s| s.t.is_finite() && s.color.is_finite())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stops() -> Vec<ColorStop> {
        vec![
            ColorStop::new(0.0, Color::white_alpha(1.0)),
            ColorStop::new(1.0, Color::black_alpha(1.0)),
        ]
    }

    #[test]
    fn linear_requires_distinct_endpoints() {
        let ok = LinearGradient::new(Vec2::zero(), Vec2::new(1.0, 0.0), stops(), SpreadMode::Pad);
        assert!(ok.is_valid());

        let bad = LinearGradient::new(Vec2::zero(), Vec2::zero(), stops(), SpreadMode::Pad);
        assert!(!bad.is_valid());
    }

    #[test]
    fn linear_requires_two_stops() {
        let bad = LinearGradient::new(
            Vec2::zero(),
            Vec2::new(1.0, 0.0),
            vec![ColorStop::new(0.0, Color::white_alpha(1.0))],
            SpreadMode::Pad,
        );
        assert!(!bad.is_valid());
    }

    #[test]
    fn radial_requires_positive_radius() {
        let ok = RadialGradient::centered(Vec2::zero(), 5.0, stops());
        assert!(ok.is_valid());

        let bad = RadialGradient::centered(Vec2::zero(), 0.0, stops());
        assert!(!bad.is_valid());
    }

    #[test]
    fn radial_focal_may_differ_from_center() {
        let g = RadialGradient::new(
            Vec2::new(-3.0, -3.0),
            Vec2::zero(),
            10.0,
            stops(),
            SpreadMode::Pad,
        );
        assert!(g.is_valid());
    }
}
