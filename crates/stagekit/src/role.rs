//! Semantic roles for accessibility elements.
//!
//! Only the handful of roles the stage walk cares about; everything
//! else normalizes to [`Role::Unknown`] rather than failing.

use serde::{Deserialize, Serialize};

/// Classification tag for an accessibility element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  /// Application window (`AXWindow`).
  Window,
  /// Generic container (`AXGroup`). The stage strip's top-level shape.
  Group,
  /// List container (`AXList`). One per stage strip column.
  List,
  /// Button (`AXButton`). One per stage group in the strip.
  Button,
  /// Anything else, including a missing or unreadable role attribute.
  Unknown,
}

/// Platform role strings, as macOS reports them.
pub(crate) mod ax_role {
  pub(crate) const WINDOW: &str = "AXWindow";
  pub(crate) const GROUP: &str = "AXGroup";
  pub(crate) const LIST: &str = "AXList";
  pub(crate) const BUTTON: &str = "AXButton";
}

impl Role {
  /// Map a raw platform role string to a [`Role`].
  pub fn from_platform(raw: &str) -> Self {
    match raw {
      ax_role::WINDOW => Self::Window,
      ax_role::GROUP => Self::Group,
      ax_role::LIST => Self::List,
      ax_role::BUTTON => Self::Button,
      _ => Self::Unknown,
    }
  }
}
