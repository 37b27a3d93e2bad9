use crate::coords::Vec2;

/// Immutable render geometry for one dial instance.
///
/// Fixed at scheduler construction and shared by every render function;
/// nothing in the pipeline mutates it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DialGeometry {
    pub radius: f32,
    pub center: Vec2,
}

impl DialGeometry {
    #[inline]
    pub const fn new(radius: f32, center: Vec2) -> Self {
        Self { radius, center }
    }

    /// Point at `radians`, `radial_frac` of the radius out from the center.
    ///
    /// Tick tips, bases and curve controls are all phrased this way.
    #[inline]
    pub fn point_at(&self, radians: f32, radial_frac: f32) -> Vec2 {
        self.center + Vec2::polar(radians, self.radius * radial_frac)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        self.radius.is_finite() && self.center.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::FRAC_PI_2;

    #[test]
    fn point_at_twelve_oclock() {
        let geo = DialGeometry::new(100.0, Vec2::new(100.0, 100.0));
        let p = geo.point_at(-FRAC_PI_2, 0.75);
        assert!((p.x - 100.0).abs() < 1e-4);
        assert!((p.y - 25.0).abs() < 1e-4);
    }

    #[test]
    fn point_at_center() {
        let geo = DialGeometry::new(100.0, Vec2::new(50.0, 60.0));
        assert_eq!(geo.point_at(1.234, 0.0), geo.center);
    }
}
