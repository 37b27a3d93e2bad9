use anyhow::{Result, ensure};

use crate::coords::Vec2;
use crate::dial::{self, DialGeometry, SteppingState};
use crate::scene::DrawList;
use crate::text::{FontId, FontSystem};
use crate::time::{Clock, ClockSample};

use super::throttle::ThrottleState;

/// Fixed tuning knobs of a dial instance.
///
/// Everything else about the face is a presentation constant; these three
/// are the recognized configuration surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialConfig {
    /// Dial radius in logical pixels.
    pub radius: f32,
    /// Minimum gap between two full draw passes.
    pub target_frame_interval_ms: f64,
    /// Length of the second hand's conceptual snap phase.
    pub step_duration_ms: f64,
}

impl Default for DialConfig {
    fn default() -> Self {
        Self {
            radius: 120.0,
            target_frame_interval_ms: 1000.0 / 60.0,
            step_duration_ms: 30.0,
        }
    }
}

/// Pixel dimensions of the host drawing surface.
///
/// Only used for the construction-time fit check; the dial is centered in
/// it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceInfo {
    pub width: f32,
    pub height: f32,
}

impl SurfaceInfo {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }
}

/// Result of one scheduler invocation.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TickOutcome {
    /// A full draw pass was recorded; the host should drain the draw list.
    Drawn,
    /// Inside the throttle interval; nothing was recorded.
    Throttled,
    /// The draw pass failed; the error was logged and the frame dropped.
    Skipped,
}

/// The animation loop, restructured as an owned object.
///
/// The host's refresh driver calls [`tick`](Self::tick) once per callback;
/// the scheduler samples the clock, applies the throttle, and on an eligible
/// tick records one full draw pass (face, date window, hands) into its draw
/// list. There is no stop operation; teardown is simply the host ceasing to
/// call `tick`.
pub struct DialScheduler<C: Clock> {
    geometry: DialGeometry,
    font: FontId,
    clock: C,

    throttle: ThrottleState,
    stepping: SteppingState,
    list: DrawList,

    frame_index: u64,
    draw_count: u64,
}

impl<C: Clock> DialScheduler<C> {
    /// Validates the configuration and surface up front; a dial that cannot
    /// render must fail here, not on frame one.
    pub fn new(
        config: DialConfig,
        surface: SurfaceInfo,
        fonts: &FontSystem,
        font: FontId,
        clock: C,
    ) -> Result<Self> {
        ensure!(
            config.radius.is_finite() && config.radius > 0.0,
            "dial radius must be finite and positive, got {}",
            config.radius,
        );
        ensure!(
            surface.width.is_finite()
                && surface.height.is_finite()
                && surface.width > 0.0
                && surface.height > 0.0,
            "surface dimensions must be finite and positive, got {}x{}",
            surface.width,
            surface.height,
        );
        ensure!(
            surface.width.min(surface.height) >= config.radius * 2.0,
            "surface {}x{} cannot hold a dial of radius {}",
            surface.width,
            surface.height,
            config.radius,
        );
        ensure!(fonts.contains(font), "font {font:?} is not loaded");
        ensure!(
            config.target_frame_interval_ms.is_finite() && config.target_frame_interval_ms > 0.0,
            "target frame interval must be finite and positive, got {}",
            config.target_frame_interval_ms,
        );
        ensure!(
            config.step_duration_ms.is_finite()
                && config.step_duration_ms > 0.0
                && config.step_duration_ms <= 1000.0,
            "step duration must be within (0, 1000] ms, got {}",
            config.step_duration_ms,
        );

        let now = clock.now_ms();
        let geometry = DialGeometry::new(config.radius, surface.center());

        log::debug!(
            "dial scheduler ready: radius {}, target interval {:.2} ms",
            config.radius,
            config.target_frame_interval_ms,
        );

        Ok(Self {
            geometry,
            font,
            clock,
            throttle: ThrottleState::new(now, config.target_frame_interval_ms),
            stepping: SteppingState::new(now, config.step_duration_ms),
            list: DrawList::new(),
            frame_index: 0,
            draw_count: 0,
        })
    }

    /// One refresh callback.
    ///
    /// A failed frame is logged and dropped without advancing the throttle
    /// gate. A skipped frame is acceptable; a stalled clock is not.
    pub fn tick(&mut self, fonts: &FontSystem) -> TickOutcome {
        self.frame_index = self.frame_index.wrapping_add(1);

        let now = self.clock.now_ms();
        if !self.throttle.should_draw(now) {
            return TickOutcome::Throttled;
        }

        let sample = self.clock.sample();
        match self.draw_pass(fonts, &sample, now) {
            Ok(()) => {
                self.throttle.mark_drawn(now);
                self.draw_count += 1;
                TickOutcome::Drawn
            }
            Err(err) => {
                log::warn!("skipping frame {}: {err:#}", self.frame_index);
                TickOutcome::Skipped
            }
        }
    }

    fn draw_pass(&mut self, fonts: &FontSystem, sample: &ClockSample, now_ms: f64) -> Result<()> {
        self.list.clear();

        dial::face::draw_face(&mut self.list, fonts, self.font, &self.geometry)?;
        dial::date_window::draw_date_window(&mut self.list, fonts, self.font, &self.geometry, sample)?;

        let (stepping, second_angle) =
            dial::compute_second_angle(self.stepping, now_ms, sample.seconds);
        self.stepping = stepping;
        dial::hands::draw_hands(&mut self.list, &self.geometry, sample, second_angle);

        Ok(())
    }

    /// The most recently recorded frame. Valid after a `Drawn` tick.
    pub fn draw_list(&self) -> &DrawList {
        &self.list
    }

    /// Mutable access for hosts draining in paint order.
    pub fn draw_list_mut(&mut self) -> &mut DrawList {
        &mut self.list
    }

    pub fn geometry(&self) -> DialGeometry {
        self.geometry
    }

    /// Total ticks observed, drawn or not.
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Completed draw passes.
    pub fn draw_count(&self) -> u64 {
        self.draw_count
    }
}
