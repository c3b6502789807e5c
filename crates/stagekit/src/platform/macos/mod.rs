/*!
macOS platform implementation.

All macOS-specific code (AXUIElement, CoreFoundation, AppKit) stays
within this module; the rest of the crate sees only the traits.
*/

mod cf_utils;
mod handles;
mod registry;
mod util;

pub use handles::ElementHandle;

use super::Platform;
use crate::types::{ProcessId, WindowId, WindowInfo};

/// macOS platform implementation.
#[derive(Debug, Clone, Copy, Default)]
pub struct MacOS;

impl Platform for MacOS {
  type Handle = ElementHandle;

  fn has_permissions(&self) -> bool {
    util::has_permissions()
  }

  fn window_manager_pid(&self) -> Option<ProcessId> {
    util::window_manager_pid()
  }

  fn app_element(&self, pid: ProcessId) -> ElementHandle {
    ElementHandle::new(util::app_element(pid))
  }

  fn window_info(&self, id: WindowId) -> Option<WindowInfo> {
    registry::window_info(id)
  }

  fn activate_process(&self, pid: ProcessId) -> bool {
    util::activate_process(pid)
  }
}
