/*! In-memory platform fake for tests.

Owns a whole element tree and a registry snapshot, and records every
activation request and `AXMain` write so tests can assert on what the
core did (and, more importantly, did not) touch.
*/

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use super::{Platform, PlatformHandle};
use crate::role::Role;
use crate::types::{Bounds, ProcessId, WindowId, WindowInfo};

#[derive(Debug)]
struct Node {
  role: Role,
  frame: Option<Bounds>,
  window_ids: Option<Vec<WindowId>>,
  children: Vec<FakeElement>,
  accepts_main: bool,
  main_writes: Cell<usize>,
}

/// Fake element: a shared node in an owned tree.
#[derive(Debug, Clone)]
pub(crate) struct FakeElement(Rc<Node>);

impl FakeElement {
  pub(crate) fn new(role: Role) -> Self {
    Self(Rc::new(Node {
      role,
      frame: None,
      window_ids: None,
      children: Vec::new(),
      accepts_main: true,
      main_writes: Cell::new(0),
    }))
  }

  pub(crate) fn with_frame(self, x: f64, y: f64, w: f64, h: f64) -> Self {
    self.map(|node| node.frame = Some(Bounds { x, y, w, h }))
  }

  pub(crate) fn with_window_ids(self, ids: &[u32]) -> Self {
    self.map(|node| node.window_ids = Some(ids.iter().copied().map(WindowId).collect()))
  }

  pub(crate) fn with_children(self, children: Vec<FakeElement>) -> Self {
    self.map(|node| node.children = children)
  }

  /// Make `set_main` report failure for this element.
  pub(crate) fn rejecting_main(self) -> Self {
    self.map(|node| node.accepts_main = false)
  }

  /// Number of `set_main` writes this element has received.
  pub(crate) fn main_writes(&self) -> usize {
    self.0.main_writes.get()
  }

  fn map(self, f: impl FnOnce(&mut Node)) -> Self {
    let mut node = Rc::try_unwrap(self.0).unwrap_or_else(|_| panic!("builder used on shared node"));
    f(&mut node);
    Self(Rc::new(node))
  }
}

impl PlatformHandle for FakeElement {
  fn role(&self) -> Role {
    self.0.role
  }

  fn children(&self) -> Vec<Self> {
    self.0.children.clone()
  }

  fn frame(&self) -> Option<Bounds> {
    self.0.frame
  }

  fn window_ids(&self) -> Option<Vec<WindowId>> {
    self.0.window_ids.clone()
  }

  fn set_main(&self) -> bool {
    self.0.main_writes.set(self.0.main_writes.get() + 1);
    self.0.accepts_main
  }
}

/// Fake platform: owned trees per process, an in-memory registry, and
/// a log of activation requests.
#[derive(Debug, Default)]
pub(crate) struct FakePlatform {
  wm_pid: Option<ProcessId>,
  apps: HashMap<ProcessId, FakeElement>,
  windows: Vec<WindowInfo>,
  activated: RefCell<Vec<ProcessId>>,
}

impl FakePlatform {
  pub(crate) fn new() -> Self {
    Self::default()
  }

  /// Register the Stage Manager service with the given element tree.
  pub(crate) fn with_window_manager(mut self, pid: u32, root: FakeElement) -> Self {
    self.wm_pid = Some(ProcessId(pid));
    self.apps.insert(ProcessId(pid), root);
    self
  }

  /// Register an ordinary application's element tree.
  pub(crate) fn with_app(mut self, pid: u32, root: FakeElement) -> Self {
    self.apps.insert(ProcessId(pid), root);
    self
  }

  /// Add a window record to the registry snapshot.
  pub(crate) fn with_window(mut self, info: WindowInfo) -> Self {
    self.windows.push(info);
    self
  }

  /// Processes that were activated, in order.
  pub(crate) fn activated(&self) -> Vec<ProcessId> {
    self.activated.borrow().clone()
  }
}

impl Platform for FakePlatform {
  type Handle = FakeElement;

  fn has_permissions(&self) -> bool {
    true
  }

  fn window_manager_pid(&self) -> Option<ProcessId> {
    self.wm_pid
  }

  fn app_element(&self, pid: ProcessId) -> FakeElement {
    // An unknown process still yields a handle; it just has nothing
    // readable behind it, same as a dead AXUIElement.
    self
      .apps
      .get(&pid)
      .cloned()
      .unwrap_or_else(|| FakeElement::new(Role::Unknown))
  }

  fn window_info(&self, id: WindowId) -> Option<WindowInfo> {
    self.windows.iter().find(|w| w.id == id).cloned()
  }

  fn activate_process(&self, pid: ProcessId) -> bool {
    self.activated.borrow_mut().push(pid);
    true
  }
}

/// Shorthand for a fully-populated registry record.
pub(crate) fn registry_window(id: u32, pid: u32, name: &str) -> WindowInfo {
  WindowInfo {
    id: WindowId(id),
    owner_pid: ProcessId(pid),
    owner_name: name.to_string(),
    alpha: 1.0,
    is_on_screen: true,
    layer: 0,
    x: 0,
    y: 0,
    width: 1280,
    height: 800,
  }
}
