//! Mechanical stepping for the second hand.
//!
//! A mechanical movement does not sweep: the second hand holds a constant
//! angle for a full second and snaps at each boundary. The machine here is
//! quantize-and-hold: the displayed angle is always
//! `floor(seconds) * (PI/30) - PI/2`, with no interpolation, overshoot or
//! bounce anywhere in the cycle.

use core::f32::consts::{FRAC_PI_2, PI};

/// Angle between two adjacent second positions.
pub const SECOND_STEP_RAD: f32 = PI / 30.0;

/// Timing state of the stepping machine.
///
/// Owned by the scheduler, passed into [`compute_second_angle`] by value and
/// returned updated. Invariant: after every evaluation
/// `last_step_boundary_ms <= now` and it marks the start instant of the most
/// recently completed whole second.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SteppingState {
    /// Start of the most recently completed whole second, epoch ms.
    pub last_step_boundary_ms: f64,
    /// Length of the conceptual snap phase right after a boundary.
    ///
    /// Carried as configuration; under quantize-and-hold it bounds the step
    /// window but never changes the displayed angle.
    pub step_duration_ms: f64,
}

impl SteppingState {
    /// State anchored to the start of the current second.
    pub fn new(now_ms: f64, step_duration_ms: f64) -> Self {
        Self {
            last_step_boundary_ms: second_start(now_ms),
            step_duration_ms,
        }
    }

    /// True while `now_ms` is inside the snap phase after the last boundary.
    pub fn in_step_window(&self, now_ms: f64) -> bool {
        let elapsed = now_ms - self.last_step_boundary_ms;
        (0.0..self.step_duration_ms).contains(&elapsed)
    }
}

#[inline]
fn second_start(now_ms: f64) -> f64 {
    now_ms - now_ms.rem_euclid(1000.0)
}

/// Advances the stepping machine and returns the held second-hand angle.
///
/// Resync rule: if more than 1000 ms has elapsed since the recorded boundary
/// (a suspended host, a stalled callback), or the clock has moved backward,
/// the boundary snaps forward to the start of the current second, bounding
/// drift to under one second after correction.
pub fn compute_second_angle(
    mut state: SteppingState,
    now_ms: f64,
    seconds: u32,
) -> (SteppingState, f32) {
    let elapsed = now_ms - state.last_step_boundary_ms;
    if !(0.0..=1000.0).contains(&elapsed) {
        state.last_step_boundary_ms = second_start(now_ms);
    }

    let angle = seconds as f32 * SECOND_STEP_RAD - FRAC_PI_2;
    (state, angle)
}
