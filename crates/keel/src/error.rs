//! Error kind for internal/programmer-error conditions.

use thiserror::Error;

/// An error that indicates a defect in the program's own logic, as opposed
/// to a recoverable runtime condition.
///
/// The rendered message is exactly the `reason` text, with no added prefix
/// or suffix. This crate never raises it itself; callers construct one
/// wherever an "unreachable" state is reached.
///
/// ```
/// let err = keel::InternalError::new("unreachable branch");
/// assert_eq!(err.to_string(), "unreachable branch");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct InternalError {
    reason: String,
}

impl InternalError {
    /// Create an internal error carrying the given reason text.
    pub fn new(reason: impl Into<String>) -> Self {
        InternalError {
            reason: reason.into(),
        }
    }

    /// The reason text, verbatim.
    pub fn reason(&self) -> &str {
        &self.reason
    }
}
