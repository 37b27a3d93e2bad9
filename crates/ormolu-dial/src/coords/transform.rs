use super::Vec2;

/// 2D affine map in column form:
///
/// ```text
/// | a  c  tx |   | x |
/// | b  d  ty | * | y |
/// ```
///
/// Hand and tick outlines are built in local coordinates (tip up, pivot at
/// the origin) and mapped into dial space with one of these, so the render
/// functions stay stateless instead of mutating a surface transform stack.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Transform2 {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub tx: f32,
    pub ty: f32,
}

impl Transform2 {
    pub const IDENTITY: Self = Self {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    #[inline]
    pub const fn translation(offset: Vec2) -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            tx: offset.x,
            ty: offset.y,
        }
    }

    /// Rotation by `radians`, clockwise on screen (+Y down).
    #[inline]
    pub fn rotation(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            tx: 0.0,
            ty: 0.0,
        }
    }

    #[inline]
    pub const fn scale(factor: f32) -> Self {
        Self {
            a: factor,
            b: 0.0,
            c: 0.0,
            d: factor,
            tx: 0.0,
            ty: 0.0,
        }
    }

    /// Composes `self` followed by `next`: `result.apply(p) == next.apply(self.apply(p))`.
    #[inline]
    pub fn then(self, next: Self) -> Self {
        Self {
            a: next.a * self.a + next.c * self.b,
            b: next.b * self.a + next.d * self.b,
            c: next.a * self.c + next.c * self.d,
            d: next.b * self.c + next.d * self.d,
            tx: next.a * self.tx + next.c * self.ty + next.tx,
            ty: next.b * self.tx + next.d * self.ty + next.ty,
        }
    }

    #[inline]
    pub fn apply(self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.a.is_finite()
            && self.b.is_finite()
            && self.c.is_finite()
            && self.d.is_finite()
            && self.tx.is_finite()
            && self.ty.is_finite()
    }
}

impl Default for Transform2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::FRAC_PI_2;

    const EPS: f32 = 1e-5;

    fn close(a: Vec2, b: Vec2) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn identity_is_noop() {
        let p = Vec2::new(3.0, -4.0);
        assert_eq!(Transform2::IDENTITY.apply(p), p);
    }

    #[test]
    fn rotation_is_clockwise_on_screen() {
        // +90 degrees takes 3 o'clock to 6 o'clock in a Y-down space.
        let r = Transform2::rotation(FRAC_PI_2);
        assert!(close(r.apply(Vec2::new(1.0, 0.0)), Vec2::new(0.0, 1.0)));
    }

    #[test]
    fn rotate_then_translate_places_a_hand_tip() {
        // A tip built pointing up, swung to 3 o'clock around a pivot.
        let t = Transform2::rotation(FRAC_PI_2).then(Transform2::translation(Vec2::new(100.0, 100.0)));
        let tip = t.apply(Vec2::new(0.0, -50.0));
        assert!(close(tip, Vec2::new(150.0, 100.0)));
    }

    #[test]
    fn then_matches_sequential_application() {
        let first = Transform2::rotation(0.7).then(Transform2::scale(2.0));
        let second = Transform2::translation(Vec2::new(5.0, -3.0));
        let composed = first.then(second);

        let p = Vec2::new(1.25, -2.5);
        assert!(close(composed.apply(p), second.apply(first.apply(p))));
    }
}
