/*! Error types for the selection surface.

Platform-level failures never become errors: discovery degrades to
fewer (or zero) groups and activation degrades to a no-op. The only
errors surfaced to a caller are out-of-range user selections.
*/

/// Errors reported back to the invoking user.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum SwitchError {
  #[error("invalid group index `{index}` >= `{count}`")]
  GroupIndexOutOfRange { index: usize, count: usize },

  #[error("invalid window index `{index}` >= `{count}`")]
  WindowIndexOutOfRange { index: usize, count: usize },
}

/// Result type for selection operations.
pub type SwitchResult<T> = Result<T, SwitchError>;
