//! Simulated assistant behind a pluggable strategy.

mod generator;
mod heuristics;
mod mock;
mod strategy;

pub use generator::generate;
pub use heuristics::review;
pub use mock::MockAssistant;
pub use strategy::{AiInput, AiOutput, AiStrategy, CodeFeedback, GeneratedQuestion};
