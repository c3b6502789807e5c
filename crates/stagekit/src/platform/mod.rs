/*!
Platform layer: the seam between core logic and the host OS.

`traits` defines the contract; `macos` is the only real backend;
`fake` is the in-memory test double the core tests run against.
*/

mod traits;

pub use traits::{Platform, PlatformHandle};

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "macos")]
pub use macos::{ElementHandle, MacOS};

#[cfg(test)]
pub(crate) mod fake;
