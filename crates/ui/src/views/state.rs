use dioxus::prelude::*;
use thiserror::Error;

use services::{AiError, LessonError};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ViewError {
    #[error("Something went wrong. Please try again.")]
    Unknown,
    #[error("Your answer could not be saved: {0}")]
    ProgressUnavailable(String),
    #[error("Give the assistant some code or a topic to work with.")]
    EmptyInput,
}

impl ViewError {
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Errors that end the lesson and go to the error boundary.
    #[must_use]
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::ProgressUnavailable(_))
    }
}

impl From<LessonError> for ViewError {
    fn from(err: LessonError) -> Self {
        match err {
            LessonError::Progress(source) => Self::ProgressUnavailable(source.to_string()),
            _ => Self::Unknown,
        }
    }
}

impl From<AiError> for ViewError {
    fn from(err: AiError) -> Self {
        match err {
            AiError::EmptyInput => Self::EmptyInput,
            _ => Self::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(err.clone()),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::StorageError;

    #[test]
    fn only_progress_failures_are_fatal() {
        let fatal = ViewError::from(LessonError::Progress(StorageError::Unavailable(
            "offline".into(),
        )));
        assert!(fatal.is_fatal());
        assert!(fatal.message().contains("offline"));

        assert_eq!(
            ViewError::from(LessonError::ResponseMismatch),
            ViewError::Unknown
        );
        assert!(!ViewError::from(AiError::EmptyInput).is_fatal());
    }
}
