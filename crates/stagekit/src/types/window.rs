/*! Window-server registry metadata for one window. */

use super::{Bounds, ProcessId, WindowId};
use serde::{Deserialize, Serialize};

/// One raw record from the window-server registry, before validation.
///
/// Every field is optional because the registry does not guarantee any
/// key's presence. [`WindowInfo::from_record`] enforces the all-fields
/// rule in one place, keeping the platform enumeration code a plain
/// field-by-field extraction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WindowRecord {
  pub id: Option<WindowId>,
  pub owner_pid: Option<ProcessId>,
  pub owner_name: Option<String>,
  pub alpha: Option<f32>,
  pub is_on_screen: Option<bool>,
  pub layer: Option<i32>,
  pub bounds: Option<Bounds>,
}

/// Window-server metadata for one window.
///
/// An instance exists only if every required field was present in the
/// source registry record; partial records are dropped, not defaulted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowInfo {
  pub id: WindowId,
  pub owner_pid: ProcessId,
  /// Owning application's name. Present in the record, but may be empty.
  pub owner_name: String,
  pub alpha: f32,
  pub is_on_screen: bool,
  /// Compositing layer.
  pub layer: i32,
  pub x: i32,
  pub y: i32,
  pub width: i32,
  pub height: i32,
}

impl WindowInfo {
  /// Validate a raw registry record. Any missing field drops the record.
  pub fn from_record(record: WindowRecord) -> Option<Self> {
    let bounds = record.bounds?;
    Some(Self {
      id: record.id?,
      owner_pid: record.owner_pid?,
      owner_name: record.owner_name?,
      alpha: record.alpha?,
      is_on_screen: record.is_on_screen?,
      layer: record.layer?,
      x: bounds.x as i32,
      y: bounds.y as i32,
      width: bounds.w as i32,
      height: bounds.h as i32,
    })
  }

  /// Registry bounds as screen-coordinate `Bounds`, for correlation
  /// against accessibility frames.
  pub fn bounds(&self) -> Bounds {
    Bounds {
      x: f64::from(self.x),
      y: f64::from(self.y),
      w: f64::from(self.width),
      h: f64::from(self.height),
    }
  }
}
