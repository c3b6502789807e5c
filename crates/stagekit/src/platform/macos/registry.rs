/*! Window-server registry lookups for macOS.

Uses `CGWindowListCopyWindowInfo` to read window records. Records
missing any required field are dropped by `WindowInfo::from_record`.
*/

#![allow(unsafe_code)]

use objc2_core_foundation::{CFArray, CFDictionary};
use objc2_core_graphics::{CGWindowListCopyWindowInfo, CGWindowListOption};

use super::cf_utils::{
  get_cf_boolean, get_cf_float, get_cf_number, get_cf_string, get_cf_window_bounds,
  retain_cf_dictionary,
};
use crate::types::{Bounds, ProcessId, WindowId, WindowInfo, WindowRecord};

/// Look up a single window by id. `None` if it no longer exists or its
/// record was partial.
pub(super) fn window_info(id: WindowId) -> Option<WindowInfo> {
  // IMPORTANT: Wrap in autorelease pool to prevent memory leaks.
  objc2::rc::autoreleasepool(|_pool| {
    copy_windows(CGWindowListOption::OptionIncludingWindow, id.0)
      .into_iter()
      .find(|window| window.id == id)
  })
}

fn copy_windows(option: CGWindowListOption, relative_to: u32) -> Vec<WindowInfo> {
  let mut windows = Vec::new();

  let Some(window_list_info) = CGWindowListCopyWindowInfo(option, relative_to) else {
    return windows;
  };

  let count = CFArray::count(&window_list_info);
  for idx in 0..count {
    let dict_ref =
      unsafe { CFArray::value_at_index(&window_list_info, idx).cast::<CFDictionary>() };

    let Some(dict) = retain_cf_dictionary(dict_ref) else {
      continue;
    };

    if let Some(info) = WindowInfo::from_record(parse_record(&dict)) {
      windows.push(info);
    }
  }

  windows
}

#[allow(clippy::cast_sign_loss)]
fn parse_record(dict: &CFDictionary) -> WindowRecord {
  WindowRecord {
    id: get_cf_number(dict, "kCGWindowNumber").map(|id| WindowId(id as u32)),
    owner_pid: get_cf_number(dict, "kCGWindowOwnerPID").map(|pid| ProcessId(pid as u32)),
    owner_name: get_cf_string(dict, "kCGWindowOwnerName"),
    alpha: get_cf_float(dict, "kCGWindowAlpha"),
    is_on_screen: get_cf_boolean(dict, "kCGWindowIsOnscreen"),
    layer: get_cf_number(dict, "kCGWindowLayer"),
    bounds: get_cf_window_bounds(dict).map(|rect| Bounds {
      x: rect.origin.x,
      y: rect.origin.y,
      w: rect.size.width,
      h: rect.size.height,
    }),
  }
}
