use crate::coords::Rect;
use crate::paint::Paint;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::{Border, Shadow};

/// Rounded rectangle draw payload.
///
/// The dial only needs uniform corner rounding (the date windows), so the
/// radius is a single value rather than per-corner radii.
#[derive(Debug, Clone, PartialEq)]
pub struct RoundedRectCmd {
    pub rect: Rect,
    pub corner_radius: f32,
    pub paint: Paint,
    pub border: Option<Border>,
    pub shadow: Option<Shadow>,
}

impl RoundedRectCmd {
    #[inline]
    pub fn new(
        rect: Rect,
        corner_radius: f32,
        paint: Paint,
        border: Option<Border>,
        shadow: Option<Shadow>,
    ) -> Self {
        Self { rect, corner_radius, paint, border, shadow }
    }
}

impl DrawList {
    /// Records a rounded rectangle draw command.
    #[inline]
    pub fn push_rounded_rect(
        &mut self,
        z: ZIndex,
        rect: Rect,
        corner_radius: f32,
        paint: Paint,
        border: Option<Border>,
        shadow: Option<Shadow>,
    ) {
        self.push(
            z,
            DrawCmd::RoundedRect(RoundedRectCmd::new(rect, corner_radius, paint, border, shadow)),
        );
    }
}
