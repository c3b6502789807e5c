/*! Core types for stage discovery and activation. */

#![allow(missing_docs)]

mod error;
mod geometry;
mod group;
mod ids;
mod window;

pub use error::{SwitchError, SwitchResult};
pub use geometry::Bounds;
pub use group::StageGroup;
pub use ids::{ProcessId, WindowId};
pub use window::{WindowInfo, WindowRecord};
