use async_trait::async_trait;

use codequest_core::model::{DifficultyLevel, LearningTrack};

use crate::error::AiError;

/// Request sent to an assistant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiInput {
    ReviewCode { code: String },
    GenerateQuestion { topic: String, difficulty: DifficultyLevel },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeFeedback {
    /// 0..=100.
    pub score: u8,
    pub strengths: Vec<String>,
    pub suggestions: Vec<String>,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedQuestion {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiOutput {
    CodeFeedback(CodeFeedback),
    GeneratedQuestion(GeneratedQuestion),
}

/// Pluggable assistant backend.
#[async_trait]
pub trait AiStrategy: Send + Sync {
    /// Analyze `input` in the context of `track`.
    ///
    /// # Errors
    ///
    /// Returns `AiError::EmptyInput` when there is nothing to work with.
    async fn analyze(&self, input: &AiInput, track: LearningTrack) -> Result<AiOutput, AiError>;
}
