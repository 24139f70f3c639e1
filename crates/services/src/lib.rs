#![forbid(unsafe_code)]

pub mod ai;
pub mod error;
pub mod exercise_runner;
pub mod lessons;
mod seed;

pub use codequest_core::Clock;

pub use error::{AiError, LessonError};
pub use exercise_runner::{SimulatedTestRunner, TestRunner};
pub use lessons::{
    ItemResponse, ItemResult, LessonLoopService, LessonProgress, LessonReport, LessonSession,
    LessonSessionId, LessonStart, Navigation, SubmitOutcome, SubmitTarget, SubmitTrigger,
};
