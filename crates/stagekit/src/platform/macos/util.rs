/*! AppKit and AX utilities for macOS. */

#![allow(unsafe_code)]
#![allow(clippy::cast_possible_wrap, clippy::cast_sign_loss)]

use objc2_app_kit::{NSApplicationActivationOptions, NSRunningApplication};
use objc2_application_services::{AXIsProcessTrusted, AXUIElement};
use objc2_core_foundation::CFRetained;
use objc2_foundation::NSString;

use crate::types::ProcessId;

/// Bundle id of the Stage Manager service.
const WINDOW_MANAGER_BUNDLE_ID: &str = "com.apple.WindowManager";

/// Create an `AXUIElement` for an application by PID.
/// Encapsulates the unsafe FFI call.
pub(super) fn app_element(pid: ProcessId) -> CFRetained<AXUIElement> {
  unsafe { AXUIElement::new_application(pid.0 as i32) }
}

/// Check if accessibility permissions are granted.
pub(super) fn has_permissions() -> bool {
  unsafe { AXIsProcessTrusted() }
}

/// PID of the running Stage Manager service, if any.
///
/// Absence usually means Stage Manager is unavailable on this system;
/// callers treat it the same as "zero stages".
pub(super) fn window_manager_pid() -> Option<ProcessId> {
  let bundle_id = NSString::from_str(WINDOW_MANAGER_BUNDLE_ID);
  let apps = unsafe { NSRunningApplication::runningApplicationsWithBundleIdentifier(&bundle_id) };
  let app = apps.iter().next()?;
  Some(ProcessId(app.processIdentifier() as u32))
}

/// Bring a process to the foreground. Returns whether the request was
/// accepted; false when the process no longer exists.
pub(super) fn activate_process(pid: ProcessId) -> bool {
  match unsafe { NSRunningApplication::runningApplicationWithProcessIdentifier(pid.0 as i32) } {
    Some(app) => unsafe { app.activateWithOptions(NSApplicationActivationOptions::empty()) },
    None => {
      log::debug!("activate: process {pid} is no longer running");
      false
    }
  }
}
