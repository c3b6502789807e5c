/*!
Window activator.

Brings a specific window to the foreground as its application's main
window. Plain process activation is not enough for multi-window apps:
the frontmost window of the activated app may not be the one asked
for, so the window's own accessibility element is marked `AXMain`
first, and only then is the owning process activated.

Every failure point - window gone from the registry, no accessibility
windows, attribute write rejected - is a logged no-op. A failed focus
attempt must never crash or steal focus toward the wrong window.
*/

use crate::platform::{Platform, PlatformHandle};
use crate::role::Role;
use crate::types::{StageGroup, WindowInfo};

/// Margin (in points) for correlating a registry record's bounds with
/// an accessibility window frame.
const FRAME_MATCH_MARGIN: f64 = 2.0;

/// Focus the `window_index`-th window of a stage group. Out-of-range
/// indices are a no-op.
pub fn focus<P: Platform>(platform: &P, group: &StageGroup, window_index: usize) {
  let Some(&id) = group.window_ids.get(window_index) else {
    return;
  };
  let Some(window) = platform.window_info(id) else {
    log::debug!("focus: window {id} no longer exists in the registry");
    return;
  };
  activate(platform, &window);
}

/// Mark the window's accessibility element as main, then activate its
/// owning process. The process-level call happens only if the `AXMain`
/// write was accepted: if the right window can't be targeted, focus is
/// not stolen at all.
pub fn activate<P: Platform>(platform: &P, window: &WindowInfo) {
  let Some(target) = target_window_element(platform, window) else {
    log::debug!(
      "activate: no accessibility windows for process {}",
      window.owner_pid
    );
    return;
  };

  if !target.set_main() {
    log::debug!("activate: AXMain write rejected for window {}", window.id);
    return;
  }

  platform.activate_process(window.owner_pid);
}

/// Pick the accessibility window element to target.
///
/// The registry and the accessibility tree share no key except the
/// window id, which plain window elements don't expose - so the two
/// are correlated by geometry: prefer the element whose frame matches
/// the registry bounds, falling back to the process's first window
/// element when nothing matches.
fn target_window_element<P: Platform>(platform: &P, window: &WindowInfo) -> Option<P::Handle> {
  let app = platform.app_element(window.owner_pid);
  let windows: Vec<P::Handle> = app
    .children()
    .into_iter()
    .filter(|child| child.role() == Role::Window)
    .collect();

  let bounds = window.bounds();
  windows
    .iter()
    .find(|element| {
      element
        .frame()
        .is_some_and(|frame| frame.matches(&bounds, FRAME_MATCH_MARGIN))
    })
    .or_else(|| windows.first())
    .cloned()
}
