/*! Opaque element handle with safe accessor methods.

Wraps an `AXUIElement` reference into another process's UI tree. The
tree can mutate between reads, so every accessor is a fresh round-trip
and any of them can legitimately come back empty.
*/

#![allow(unsafe_code)]
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

use objc2_application_services::{AXError, AXUIElement, AXValue as AXValueRef, AXValueType};
use objc2_core_foundation::{CFArray, CFNumber, CFRetained, CFString, CFType, CGRect};
use std::ffi::c_void;
use std::ptr::NonNull;

use crate::platform::PlatformHandle;
use crate::role::Role;
use crate::types::{Bounds, WindowId};

/// Opaque handle to a UI element.
///
/// Clone is cheap (reference counted via `CFRetained`).
#[derive(Clone)]
pub struct ElementHandle(CFRetained<AXUIElement>);

impl ElementHandle {
  pub(super) fn new(element: CFRetained<AXUIElement>) -> Self {
    Self(element)
  }

  /// Fetch a raw CFType attribute. `None` on any platform-level
  /// failure: attribute absent, wrong type, element died.
  fn get_raw_attr(&self, attr: &CFString) -> Option<CFRetained<CFType>> {
    unsafe {
      let mut value: *const CFType = std::ptr::null();
      let result = self.0.copy_attribute_value(attr, NonNull::new(&mut value)?);
      if result != AXError::Success || value.is_null() {
        return None;
      }
      Some(CFRetained::from_raw(NonNull::new_unchecked(
        value as *mut _,
      )))
    }
  }

  fn get_string(&self, attr: &CFString) -> Option<String> {
    let value = self.get_raw_attr(attr)?;
    Some(value.downcast_ref::<CFString>()?.to_string())
  }
}

impl PlatformHandle for ElementHandle {
  fn role(&self) -> Role {
    self
      .get_string(&CFString::from_static_str("AXRole"))
      .map_or(Role::Unknown, |raw| Role::from_platform(&raw))
  }

  fn children(&self) -> Vec<Self> {
    let Some(value) = self.get_raw_attr(&CFString::from_static_str("AXChildren")) else {
      return Vec::new();
    };
    let Ok(array) = value.downcast::<CFArray>() else {
      return Vec::new();
    };
    // SAFETY: AXChildren always returns an array of AXUIElements
    let typed_array: CFRetained<CFArray<AXUIElement>> =
      unsafe { CFRetained::cast_unchecked(array) };

    let len = typed_array.len();
    let mut children = Vec::with_capacity(len);
    for i in 0..len {
      if let Some(child) = typed_array.get(i) {
        children.push(ElementHandle::new(child));
      }
    }
    children
  }

  fn frame(&self) -> Option<Bounds> {
    let value = self.get_raw_attr(&CFString::from_static_str("AXFrame"))?;
    let ax_value = value.downcast_ref::<AXValueRef>()?;

    unsafe {
      if ax_value.r#type() != AXValueType::CGRect {
        return None;
      }
      let mut rect = CGRect::default();
      if !ax_value.value(
        AXValueType::CGRect,
        NonNull::new((&raw mut rect).cast::<c_void>())?,
      ) {
        return None;
      }
      Some(Bounds {
        x: rect.origin.x,
        y: rect.origin.y,
        w: rect.size.width,
        h: rect.size.height,
      })
    }
  }

  fn window_ids(&self) -> Option<Vec<WindowId>> {
    let value = self.get_raw_attr(&CFString::from_static_str("AXWindowsIDs"))?;
    let array = value.downcast::<CFArray>().ok()?;
    // SAFETY: AXWindowsIDs is an array of CFNumbers (CGWindowIDs)
    let typed_array: CFRetained<CFArray<CFNumber>> = unsafe { CFRetained::cast_unchecked(array) };

    let len = typed_array.len();
    let mut ids = Vec::with_capacity(len);
    for i in 0..len {
      let Some(number) = typed_array.get(i) else {
        continue;
      };
      if let Some(id) = number.as_i64() {
        ids.push(WindowId(id as u32));
      }
    }
    Some(ids)
  }

  fn set_main(&self) -> bool {
    // The write takes CFNumber 1, not CFBoolean (same convention as
    // checkbox values elsewhere in the AX API).
    let attr = CFString::from_static_str("AXMain");
    let value = CFNumber::new_i32(1);
    unsafe { self.0.set_attribute_value(&attr, &value) == AXError::Success }
  }
}
