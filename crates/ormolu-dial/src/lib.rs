//! Ormolu dial crate.
//!
//! Renders a stylized analog clock face as a renderer-agnostic draw stream
//! and keeps it animated through a host-driven scheduler. The host owns the
//! actual raster target and the refresh callback; this crate owns the face
//! geometry, the time-to-angle math, the mechanical second-hand stepping and
//! the frame throttle.

pub mod coords;
pub mod dial;
pub mod logging;
pub mod paint;
pub mod scene;
pub mod sched;
pub mod text;
pub mod time;
