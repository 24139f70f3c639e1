//! Domain model for CodeQuest: tracks, questions, exercises, scoring,
//! the track theme registry and the question bank.

#![forbid(unsafe_code)]

pub mod bank;
pub mod catalog;
pub mod error;
pub mod model;
pub mod scoring;
pub mod theme;
pub mod time;

pub use bank::QuestionBank;
pub use error::Error;
pub use time::Clock;
