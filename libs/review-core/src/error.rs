//! Error types for review-core.

use thiserror::Error;

/// Result type alias using SessionError.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors raised by the review session state machine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("no session is active")]
    NotActive,

    #[error("cannot grade before the answer is revealed")]
    AnswerHidden,
}
