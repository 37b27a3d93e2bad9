use crate::coords::{Transform2, Vec2};
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::{Border, Shadow};

/// One path construction step, with points already in dial space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathVerb {
    MoveTo(Vec2),
    LineTo(Vec2),
    /// Quadratic curve: control point, end point.
    QuadTo(Vec2, Vec2),
    /// Cubic curve: two control points, end point.
    CubicTo(Vec2, Vec2, Vec2),
    Close,
}

/// Free-form path draw payload.
///
/// `paint == None` records a stroke-only path (the brand underlines, the
/// hand highlights); `border == None` records a fill-only path (the hand
/// shadows).
#[derive(Debug, Clone, PartialEq)]
pub struct PathCmd {
    pub verbs: Vec<PathVerb>,
    pub paint: Option<Paint>,
    pub border: Option<Border>,
    pub shadow: Option<Shadow>,
}

/// Records path verbs, mapping every point through a fixed transform.
///
/// Render functions build outlines in local coordinates (hand pivot at the
/// origin, tip up) and let the builder place them, so no transform state
/// lives on the draw list itself.
#[derive(Debug)]
pub struct PathBuilder {
    verbs: Vec<PathVerb>,
    transform: Transform2,
}

impl PathBuilder {
    #[inline]
    pub fn new() -> Self {
        Self {
            verbs: Vec::new(),
            transform: Transform2::IDENTITY,
        }
    }

    #[inline]
    pub fn with_transform(transform: Transform2) -> Self {
        Self {
            verbs: Vec::new(),
            transform,
        }
    }

    #[inline]
    pub fn move_to(&mut self, p: Vec2) -> &mut Self {
        let p = self.transform.apply(p);
        self.verbs.push(PathVerb::MoveTo(p));
        self
    }

    #[inline]
    pub fn line_to(&mut self, p: Vec2) -> &mut Self {
        let p = self.transform.apply(p);
        self.verbs.push(PathVerb::LineTo(p));
        self
    }

    #[inline]
    pub fn quad_to(&mut self, ctrl: Vec2, end: Vec2) -> &mut Self {
        let ctrl = self.transform.apply(ctrl);
        let end = self.transform.apply(end);
        self.verbs.push(PathVerb::QuadTo(ctrl, end));
        self
    }

    #[inline]
    pub fn cubic_to(&mut self, ctrl1: Vec2, ctrl2: Vec2, end: Vec2) -> &mut Self {
        let ctrl1 = self.transform.apply(ctrl1);
        let ctrl2 = self.transform.apply(ctrl2);
        let end = self.transform.apply(end);
        self.verbs.push(PathVerb::CubicTo(ctrl1, ctrl2, end));
        self
    }

    #[inline]
    pub fn close(&mut self) -> &mut Self {
        self.verbs.push(PathVerb::Close);
        self
    }

    /// Maps a point through the builder's transform without recording it.
    ///
    /// Gradient endpoints defined in local coordinates go through here so
    /// they stay attached to the outline they paint.
    #[inline]
    pub fn map(&self, p: Vec2) -> Vec2 {
        self.transform.apply(p)
    }

    pub fn build(
        self,
        paint: Option<Paint>,
        border: Option<Border>,
        shadow: Option<Shadow>,
    ) -> PathCmd {
        PathCmd {
            verbs: self.verbs,
            paint,
            border,
            shadow,
        }
    }
}

impl Default for PathBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawList {
    /// Records a path draw command.
    #[inline]
    pub fn push_path(&mut self, z: ZIndex, cmd: PathCmd) {
        self.push(z, DrawCmd::Path(cmd));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f32::consts::FRAC_PI_2;

    #[test]
    fn builder_applies_transform_to_every_point() {
        let t = Transform2::rotation(FRAC_PI_2).then(Transform2::translation(Vec2::new(10.0, 0.0)));
        let mut b = PathBuilder::with_transform(t);
        b.move_to(Vec2::new(0.0, -5.0)).line_to(Vec2::new(0.0, 0.0)).close();
        let cmd = b.build(None, None, None);

        match cmd.verbs[0] {
            PathVerb::MoveTo(p) => {
                assert!((p.x - 15.0).abs() < 1e-4);
                assert!(p.y.abs() < 1e-4);
            }
            _ => panic!("expected MoveTo"),
        }
        assert_eq!(cmd.verbs.len(), 3);
    }

    #[test]
    fn map_matches_recorded_points() {
        let t = Transform2::translation(Vec2::new(3.0, 4.0));
        let mut b = PathBuilder::with_transform(t);
        let mapped = b.map(Vec2::new(1.0, 1.0));
        b.move_to(Vec2::new(1.0, 1.0));
        let cmd = b.build(None, None, None);

        match cmd.verbs[0] {
            PathVerb::MoveTo(p) => assert_eq!(p, mapped),
            _ => panic!("expected MoveTo"),
        }
    }
}
