//! Shared error types for the services crate.

use thiserror::Error;

use storage::StorageError;

/// Errors emitted by the lesson loop.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LessonError {
    #[error("no questions or exercises available for this lesson")]
    Empty,
    #[error("lesson already completed")]
    Completed,
    #[error("lesson is not completed yet")]
    NotCompleted,
    #[error("response does not match the current item kind")]
    ResponseMismatch,
    #[error("failed to record progress: {0}")]
    Progress(#[source] StorageError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Errors emitted by assistant strategies.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum AiError {
    #[error("nothing to analyze")]
    EmptyInput,
}
