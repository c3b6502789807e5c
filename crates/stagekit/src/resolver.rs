/*!
Stage group resolver.

Walks the Stage Manager service's accessibility tree and recovers the
current set of stage groups. The strip has a fixed three-level shape
beneath the application root: group containers, each holding lists,
each holding one button per stage. A button carries the stage's
on-screen frame and the ids of its member windows.

Discovery never fails: subtrees that don't match the expected shape,
buttons missing attributes, or an absent service all just mean fewer
(or zero) groups.
*/

use crate::platform::{Platform, PlatformHandle};
use crate::role::Role;
use crate::types::StageGroup;

/// Discover the current stage groups, sorted top-to-bottom by the
/// frame's vertical origin.
///
/// An empty result means the service is not running *or* it exposes no
/// groups; the two are indistinguishable at this layer.
pub fn stage_groups<P: Platform>(platform: &P) -> Vec<StageGroup> {
  let Some(pid) = platform.window_manager_pid() else {
    log::debug!("stage discovery: window manager service not running");
    return Vec::new();
  };

  let root = platform.app_element(pid);
  let mut groups = Vec::new();

  for group in children_with_role(&root, Role::Group) {
    for list in children_with_role(&group, Role::List) {
      for button in children_with_role(&list, Role::Button) {
        let Some(frame) = button.frame() else {
          log::debug!("stage discovery: skipping button without a frame");
          continue;
        };
        let Some(window_ids) = button.window_ids() else {
          log::debug!("stage discovery: skipping button without window ids");
          continue;
        };
        if window_ids.is_empty() {
          continue;
        }
        groups.push(StageGroup { frame, window_ids });
      }
    }
  }

  // Stable sort: groups at equal height keep their traversal order.
  groups.sort_by(|a, b| a.frame.y.total_cmp(&b.frame.y));
  groups
}

fn children_with_role<H: PlatformHandle>(element: &H, role: Role) -> Vec<H> {
  element
    .children()
    .into_iter()
    .filter(|child| child.role() == role)
    .collect()
}
