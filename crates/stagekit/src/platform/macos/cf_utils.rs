/*! Core Foundation utilities for macOS.

Type-safe wrappers around CF types for dictionary access. All getters
return `Option`: key presence matters here, because a registry record
missing any required field must be dropped rather than defaulted.
*/

#![allow(unsafe_code)]

use objc2_core_foundation::{
  CFBoolean, CFDictionary, CFNumber, CFNumberType, CFRetained, CFString, CGRect,
};
use objc2_core_graphics::CGRectMakeWithDictionaryRepresentation;
use std::ffi::c_void;

/// Safely get a value from a `CFDictionary` by key.
fn get_cf_dictionary_value<T>(dict: &CFDictionary, key: &str) -> Option<*const T> {
  let key = CFString::from_str(key);
  let key_ref = key.as_ref() as *const CFString;
  if unsafe { CFDictionary::contains_ptr_key(dict, key_ref.cast()) } {
    let value = unsafe { CFDictionary::value(dict, key_ref.cast()) };
    Some(value.cast::<T>())
  } else {
    None
  }
}

/// Extract an i32 number from a `CFDictionary`.
pub(super) fn get_cf_number(dict: &CFDictionary, key: &str) -> Option<i32> {
  let number = get_cf_dictionary_value::<CFNumber>(dict, key)?;
  unsafe {
    let mut value: i32 = 0;
    if CFNumber::value(
      &*number,
      CFNumberType::IntType,
      (&raw mut value).cast::<c_void>(),
    ) {
      Some(value)
    } else {
      None
    }
  }
}

/// Extract an f32 number from a `CFDictionary`.
pub(super) fn get_cf_float(dict: &CFDictionary, key: &str) -> Option<f32> {
  let number = get_cf_dictionary_value::<CFNumber>(dict, key)?;
  unsafe {
    let mut value: f32 = 0.0;
    if CFNumber::value(
      &*number,
      CFNumberType::Float32Type,
      (&raw mut value).cast::<c_void>(),
    ) {
      Some(value)
    } else {
      None
    }
  }
}

/// Extract a boolean from a `CFDictionary`.
pub(super) fn get_cf_boolean(dict: &CFDictionary, key: &str) -> Option<bool> {
  let value = get_cf_dictionary_value::<CFBoolean>(dict, key)?;
  Some(unsafe { CFBoolean::value(&*value) })
}

/// Extract a string from a `CFDictionary`. Present-but-empty is `Some("")`.
pub(super) fn get_cf_string(dict: &CFDictionary, key: &str) -> Option<String> {
  let value = get_cf_dictionary_value::<CFString>(dict, key)?;
  Some(unsafe { (*value).to_string() })
}

/// Extract window bounds (`CGRect`) from a `CFDictionary`.
pub(super) fn get_cf_window_bounds(dict: &CFDictionary) -> Option<CGRect> {
  let dict_rect = get_cf_dictionary_value::<CFDictionary>(dict, "kCGWindowBounds")?;
  unsafe {
    let mut cg_rect = CGRect::default();
    if !dict_rect.is_null()
      && CGRectMakeWithDictionaryRepresentation(Some(&*dict_rect), &raw mut cg_rect)
    {
      Some(cg_rect)
    } else {
      None
    }
  }
}

/// Retain a `CFDictionary` from a raw pointer.
pub(super) fn retain_cf_dictionary(ptr: *const CFDictionary) -> Option<CFRetained<CFDictionary>> {
  if ptr.is_null() {
    None
  } else {
    Some(unsafe { CFRetained::retain(std::ptr::NonNull::from(&*ptr)) })
  }
}
