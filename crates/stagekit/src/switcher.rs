/*!
Orchestration surface: rendering and selection.

The thin layer a caller (the CLI) drives: render the discovered groups
as text, or validate a user's group/window selection and hand it to
the activator. Index validation errors are the only errors this crate
ever surfaces.
*/

use std::io;

use crate::activator;
use crate::platform::Platform;
use crate::types::{StageGroup, SwitchError, SwitchResult};

/// Render groups in display order: one `group #<i>:` header per group,
/// one line per member window, with the owner's name when the registry
/// still knows the window and the name is non-empty.
pub fn render_groups<P: Platform, W: io::Write>(
  platform: &P,
  groups: &[StageGroup],
  out: &mut W,
) -> io::Result<()> {
  for (index, group) in groups.iter().enumerate() {
    writeln!(out, "group #{index}:")?;
    for &id in &group.window_ids {
      match platform.window_info(id) {
        Some(window) if !window.owner_name.is_empty() => {
          writeln!(out, "- window #{id}: {}", window.owner_name)?;
        }
        _ => writeln!(out, "- window #{id}")?,
      }
    }
  }
  Ok(())
}

/// Validate a selection against the discovered groups, then focus it.
///
/// Activation itself stays best-effort: once the indices are in range
/// this returns `Ok` whether or not the platform accepted the focus.
pub fn focus_selection<P: Platform>(
  platform: &P,
  groups: &[StageGroup],
  group_index: usize,
  window_index: usize,
) -> SwitchResult<()> {
  let Some(group) = groups.get(group_index) else {
    return Err(SwitchError::GroupIndexOutOfRange {
      index: group_index,
      count: groups.len(),
    });
  };
  if window_index >= group.window_ids.len() {
    return Err(SwitchError::WindowIndexOutOfRange {
      index: window_index,
      count: group.window_ids.len(),
    });
  }

  activator::focus(platform, group, window_index);
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::platform::fake::{registry_window, FakeElement, FakePlatform};
  use crate::resolver::stage_groups;
  use crate::role::Role;
  use crate::types::Bounds;

  fn strip_button(y: f64, ids: &[u32]) -> FakeElement {
    FakeElement::new(Role::Button)
      .with_frame(0.0, y, 64.0, 64.0)
      .with_window_ids(ids)
  }

  fn window_manager_tree(buttons: Vec<FakeElement>) -> FakeElement {
    let list = FakeElement::new(Role::List).with_children(buttons);
    let group = FakeElement::new(Role::Group).with_children(vec![list]);
    FakeElement::new(Role::Unknown).with_children(vec![group])
  }

  // End-to-end: one group with a named and an unnamed window renders
  // with the owner suffix only where a non-empty name exists.
  #[test]
  fn renders_owner_names_from_the_registry() {
    let platform = FakePlatform::new()
      .with_window_manager(42, window_manager_tree(vec![strip_button(50.0, &[100, 200])]))
      .with_window(registry_window(100, 7, "Mail"))
      .with_window(registry_window(200, 9, ""));

    let groups = stage_groups(&platform);
    assert_eq!(groups.len(), 1);

    let mut out = Vec::new();
    render_groups(&platform, &groups, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text, "group #0:\n- window #100: Mail\n- window #200\n");
  }

  #[test]
  fn renders_bare_line_when_window_left_the_registry() {
    let platform = FakePlatform::new();
    let groups = vec![StageGroup {
      frame: Bounds { x: 0.0, y: 0.0, w: 64.0, h: 64.0 },
      window_ids: vec![300.into()],
    }];

    let mut out = Vec::new();
    render_groups(&platform, &groups, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "group #0:\n- window #300\n");
  }

  // End-to-end: traversal order [80, 20] renders reordered as [20, 80].
  #[test]
  fn renders_groups_in_vertical_order() {
    let platform = FakePlatform::new()
      .with_window_manager(
        42,
        window_manager_tree(vec![strip_button(80.0, &[100]), strip_button(20.0, &[200])]),
      )
      .with_window(registry_window(100, 7, "Mail"))
      .with_window(registry_window(200, 9, "Safari"));

    let groups = stage_groups(&platform);

    let mut out = Vec::new();
    render_groups(&platform, &groups, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(
      text,
      "group #0:\n- window #200: Safari\ngroup #1:\n- window #100: Mail\n"
    );
  }

  // End-to-end: selecting group 5 of 3 surfaces both numbers and
  // issues no activation.
  #[test]
  fn out_of_range_group_index_is_surfaced() {
    let platform = FakePlatform::new().with_window_manager(
      42,
      window_manager_tree(vec![
        strip_button(10.0, &[100]),
        strip_button(20.0, &[200]),
        strip_button(30.0, &[300]),
      ]),
    );
    let groups = stage_groups(&platform);

    let err = focus_selection(&platform, &groups, 5, 0).unwrap_err();
    assert_eq!(err, SwitchError::GroupIndexOutOfRange { index: 5, count: 3 });
    let message = err.to_string();
    assert!(message.contains('5') && message.contains('3'), "{message}");
    assert!(platform.activated().is_empty());
  }

  #[test]
  fn out_of_range_window_index_is_surfaced() {
    let platform = FakePlatform::new()
      .with_window_manager(42, window_manager_tree(vec![strip_button(10.0, &[100])]));
    let groups = stage_groups(&platform);

    let err = focus_selection(&platform, &groups, 0, 2).unwrap_err();
    assert_eq!(err, SwitchError::WindowIndexOutOfRange { index: 2, count: 1 });
    assert!(platform.activated().is_empty());
  }

  #[test]
  fn in_range_selection_reaches_the_activator() {
    let window_element = FakeElement::new(Role::Window);
    let platform = FakePlatform::new()
      .with_window_manager(42, window_manager_tree(vec![strip_button(10.0, &[100])]))
      .with_window(registry_window(100, 7, "Mail"))
      .with_app(7, FakeElement::new(Role::Unknown).with_children(vec![window_element]));
    let groups = stage_groups(&platform);

    focus_selection(&platform, &groups, 0, 0).unwrap();
    assert_eq!(platform.activated(), vec![7.into()]);
  }
}
