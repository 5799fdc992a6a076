//! Error types for the StudySync client.

use review_core::SessionError;
use thiserror::Error;

use crate::api::ApiError;

/// Errors surfaced by the review controller.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("a grade is already being submitted")]
    GradeInFlight,
}
