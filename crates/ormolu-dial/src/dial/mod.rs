//! The dial itself.
//!
//! Style constants, immutable render geometry, the stateless face/date/hand
//! render functions and the second-hand stepping machine. Everything here is
//! a pure function of its inputs; the only mutable timing state lives in
//! `sched`.

pub mod date_window;
pub mod face;
pub mod geometry;
pub mod hands;
pub mod stepping;
pub mod style;

pub use geometry::DialGeometry;
pub use stepping::{SteppingState, compute_second_angle};
