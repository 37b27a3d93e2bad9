//! Animation loop.
//!
//! The dial does not own a callback registration: the host's refresh driver
//! calls [`DialScheduler::tick`] at whatever cadence it has, and the
//! scheduler throttles actual draw work down to its target interval.

mod scheduler;
mod throttle;

pub use scheduler::{DialConfig, DialScheduler, SurfaceInfo, TickOutcome};
pub use throttle::ThrottleState;
