/*!
Platform abstraction traits.

These traits define the contract between core code and platform
implementations. Core code only uses these traits - never
platform-specific types directly.

Every accessor is total: the external tree is owned by another process
and can change or reject requests at any time, so failure is reported
as an absent value (`None`, empty `Vec`, `false`), never as a panic or
an error type. Callers treat absence as a normal outcome.
*/

use crate::role::Role;
use crate::types::{Bounds, ProcessId, WindowId, WindowInfo};

/// Platform-global operations (not tied to a specific element).
pub trait Platform {
  type Handle: PlatformHandle;

  /// Check if accessibility permissions are granted.
  fn has_permissions(&self) -> bool;

  /// PID of the running Stage Manager service, if any.
  ///
  /// `None` means the service is not running - which is
  /// indistinguishable from "running with zero stages" further up.
  fn window_manager_pid(&self) -> Option<ProcessId>;

  /// Root accessibility element for a process.
  ///
  /// Always constructible; a dead or unreachable process shows up as
  /// an element with no readable attributes.
  fn app_element(&self, pid: ProcessId) -> Self::Handle;

  /// Look up one window in the window-server registry.
  ///
  /// `None` when the window no longer exists or its record was partial.
  fn window_info(&self, id: WindowId) -> Option<WindowInfo>;

  /// Bring a process to the foreground at the OS level.
  ///
  /// Returns whether the platform accepted the request.
  fn activate_process(&self, pid: ProcessId) -> bool;
}

/// Per-element operations: an opaque reference into a live external
/// UI tree. Not owned data - every read is a fresh round-trip to the
/// tree owner's process, and nothing is cached between reads.
pub trait PlatformHandle: Clone {
  /// Element role, normalized. Missing or unreadable roles are
  /// [`Role::Unknown`].
  fn role(&self) -> Role;

  /// Child elements, or empty if none/unavailable.
  fn children(&self) -> Vec<Self>;

  /// On-screen frame, if the element exposes a geometry attribute.
  fn frame(&self) -> Option<Bounds>;

  /// Window ids carried by a stage strip button, if present.
  fn window_ids(&self) -> Option<Vec<WindowId>>;

  /// Mark this element as its application's main window.
  ///
  /// Returns whether the platform accepted the write.
  fn set_main(&self) -> bool;
}
