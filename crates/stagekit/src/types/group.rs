/*! Stage group type: one Stage Manager window grouping. */

use super::{Bounds, WindowId};
use serde::{Deserialize, Serialize};

/// A window grouping as exposed by the Stage Manager strip.
///
/// `window_ids` is non-empty by construction: the resolver discards
/// buttons with a missing or empty id list before building a group.
/// Groups are a point-in-time snapshot, never mutated after discovery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageGroup {
  /// On-screen frame of the group's strip button, in screen coordinates.
  pub frame: Bounds,
  /// Member windows, in the platform's own ordering within the group.
  pub window_ids: Vec<WindowId>,
}
