use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use codequest_core::model::LearningTrack;

use super::strategy::{AiInput, AiOutput, AiStrategy};
use super::{generator, heuristics};
use crate::error::AiError;

/// Simulated assistant: waits `latency`, then answers from templates and heuristics.
///
/// Output depends only on the input, the track and `seed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockAssistant {
    latency: Duration,
    seed: u64,
}

impl Default for MockAssistant {
    fn default() -> Self {
        Self::new(Duration::from_millis(1500), 0)
    }
}

impl MockAssistant {
    #[must_use]
    pub fn new(latency: Duration, seed: u64) -> Self {
        Self { latency, seed }
    }

    #[must_use]
    pub fn latency(&self) -> Duration {
        self.latency
    }
}

#[async_trait]
impl AiStrategy for MockAssistant {
    async fn analyze(&self, input: &AiInput, track: LearningTrack) -> Result<AiOutput, AiError> {
        let blank = match input {
            AiInput::ReviewCode { code } => code.trim().is_empty(),
            AiInput::GenerateQuestion { topic, .. } => topic.trim().is_empty(),
        };
        if blank {
            return Err(AiError::EmptyInput);
        }

        debug!(%track, latency_ms = self.latency.as_millis() as u64, "mock assistant thinking");
        tokio::time::sleep(self.latency).await;

        Ok(match input {
            AiInput::ReviewCode { code } => AiOutput::CodeFeedback(heuristics::review(code, track)),
            AiInput::GenerateQuestion { topic, difficulty } => AiOutput::GeneratedQuestion(
                generator::generate(topic, *difficulty, track, self.seed),
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codequest_core::model::DifficultyLevel;

    #[tokio::test(start_paused = true)]
    async fn review_waits_for_latency() {
        let assistant = MockAssistant::new(Duration::from_secs(2), 3);
        let started = tokio::time::Instant::now();
        let output = assistant
            .analyze(
                &AiInput::ReviewCode {
                    code: "const x = 1;".into(),
                },
                LearningTrack::Javascript,
            )
            .await
            .unwrap();
        assert!(started.elapsed() >= Duration::from_secs(2));
        assert!(matches!(output, AiOutput::CodeFeedback(_)));
    }

    #[tokio::test(start_paused = true)]
    async fn blank_input_fails_immediately() {
        let assistant = MockAssistant::new(Duration::from_secs(5), 0);
        let started = tokio::time::Instant::now();
        let err = assistant
            .analyze(
                &AiInput::GenerateQuestion {
                    topic: "   ".into(),
                    difficulty: DifficultyLevel::Beginner,
                },
                LearningTrack::Html,
            )
            .await
            .unwrap_err();
        assert_eq!(err, AiError::EmptyInput);
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
