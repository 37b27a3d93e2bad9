//! Scene (draw stream) types.
//!
//! The dial never touches a raster surface directly: each draw pass records
//! renderer-agnostic commands into a [`DrawList`] which the host compositor
//! drains. Responsibilities:
//! - store the draw commands for one frame
//! - provide deterministic ordering (z-index + insertion order)
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod key;
mod list;
mod z_index;

pub mod shapes;

pub use cmd::DrawCmd;
pub use key::SortKey;
pub use list::{DrawItem, DrawList};
pub use shapes::circle::CircleCmd;
pub use shapes::path::{PathBuilder, PathCmd, PathVerb};
pub use shapes::rounded_rect::RoundedRectCmd;
pub use shapes::text::TextCmd;
pub use shapes::{Border, Shadow};
pub use z_index::ZIndex;
