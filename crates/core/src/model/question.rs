use std::collections::{BTreeMap, HashSet};

use thiserror::Error;

use crate::model::ids::QuestionId;
use crate::model::track::{DifficultyLevel, LearningTrack};

//
// ─── QUESTION TYPES ────────────────────────────────────────────────────────────
//

/// Unvalidated multiple-choice question, as authored in the catalog or a fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionDraft {
    pub id: QuestionId,
    pub track: LearningTrack,
    pub difficulty: DifficultyLevel,
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
    pub code_sample: Option<String>,
    pub points: u32,
    /// Feedback shown for a specific chosen option.
    pub feedback: BTreeMap<String, String>,
    pub time_limit_secs: Option<u32>,
}

impl QuestionDraft {
    /// Minimal draft with no code sample, feedback or time limit.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        track: LearningTrack,
        difficulty: DifficultyLevel,
        prompt: impl Into<String>,
        options: &[&str],
        correct_answer: impl Into<String>,
        points: u32,
    ) -> Self {
        Self {
            id: QuestionId::new(id),
            track,
            difficulty,
            prompt: prompt.into(),
            options: options.iter().map(|opt| (*opt).to_string()).collect(),
            correct_answer: correct_answer.into(),
            explanation: String::new(),
            code_sample: None,
            points,
            feedback: BTreeMap::new(),
            time_limit_secs: None,
        }
    }

    /// Validate the draft into an immutable `Question`.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` when the prompt is blank, the options are too few or
    /// repeated, the correct answer is not an option, or points/time limit are zero.
    pub fn validate(self) -> Result<Question, QuestionError> {
        if self.id.as_str().trim().is_empty() {
            return Err(QuestionError::EmptyId);
        }
        if self.prompt.trim().is_empty() {
            return Err(QuestionError::EmptyPrompt);
        }
        if self.options.len() < 2 {
            return Err(QuestionError::TooFewOptions);
        }

        let mut seen = HashSet::with_capacity(self.options.len());
        for option in &self.options {
            if !seen.insert(option.as_str()) {
                return Err(QuestionError::DuplicateOption(option.clone()));
            }
        }
        if !seen.contains(self.correct_answer.as_str()) {
            return Err(QuestionError::CorrectAnswerNotAnOption(self.correct_answer));
        }
        if let Some(key) = self.feedback.keys().find(|key| !seen.contains(key.as_str())) {
            return Err(QuestionError::UnknownFeedbackOption(key.clone()));
        }
        if self.points == 0 {
            return Err(QuestionError::ZeroPoints);
        }
        if self.time_limit_secs == Some(0) {
            return Err(QuestionError::ZeroTimeLimit);
        }

        Ok(Question {
            id: self.id,
            track: self.track,
            difficulty: self.difficulty,
            prompt: self.prompt,
            options: self.options,
            correct_answer: self.correct_answer,
            explanation: self.explanation,
            code_sample: self.code_sample.filter(|code| !code.trim().is_empty()),
            points: self.points,
            feedback: self.feedback,
            time_limit_secs: self.time_limit_secs,
        })
    }
}

/// A validated multiple-choice question. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    id: QuestionId,
    track: LearningTrack,
    difficulty: DifficultyLevel,
    prompt: String,
    options: Vec<String>,
    correct_answer: String,
    explanation: String,
    code_sample: Option<String>,
    points: u32,
    feedback: BTreeMap<String, String>,
    time_limit_secs: Option<u32>,
}

impl Question {
    #[must_use]
    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    #[must_use]
    pub fn track(&self) -> LearningTrack {
        self.track
    }

    #[must_use]
    pub fn difficulty(&self) -> DifficultyLevel {
        self.difficulty
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn code_sample(&self) -> Option<&str> {
        self.code_sample.as_deref()
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    #[must_use]
    pub fn time_limit_secs(&self) -> Option<u32> {
        self.time_limit_secs
    }

    /// Exact string comparison against the correct option.
    #[must_use]
    pub fn is_correct(&self, choice: &str) -> bool {
        choice == self.correct_answer
    }

    /// Feedback authored for a particular option, if any.
    #[must_use]
    pub fn feedback_for(&self, choice: &str) -> Option<&str> {
        self.feedback.get(choice).map(String::as_str)
    }
}

//
// ─── QUESTION VALIDATION ERRORS ────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question id cannot be empty")]
    EmptyId,

    #[error("question prompt cannot be empty")]
    EmptyPrompt,

    #[error("question needs at least two options")]
    TooFewOptions,

    #[error("duplicate option: {0}")]
    DuplicateOption(String),

    #[error("correct answer is not one of the options: {0}")]
    CorrectAnswerNotAnOption(String),

    #[error("feedback refers to an unknown option: {0}")]
    UnknownFeedbackOption(String),

    #[error("question points must be > 0")]
    ZeroPoints,

    #[error("time limit must be > 0 seconds")]
    ZeroTimeLimit,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> QuestionDraft {
        QuestionDraft::new(
            "html-b-1",
            LearningTrack::Html,
            DifficultyLevel::Beginner,
            "Which tag defines a paragraph?",
            &["<p>", "<para>", "<text>"],
            "<p>",
            10,
        )
    }

    #[test]
    fn correct_answer_must_be_an_option() {
        let mut draft = draft();
        draft.correct_answer = "<pg>".into();
        assert_eq!(
            draft.validate().unwrap_err(),
            QuestionError::CorrectAnswerNotAnOption("<pg>".into())
        );
    }

    #[test]
    fn duplicate_options_are_rejected() {
        let mut draft = draft();
        draft.options.push("<p>".into());
        assert!(matches!(
            draft.validate(),
            Err(QuestionError::DuplicateOption(_))
        ));
    }

    #[test]
    fn feedback_keys_must_name_options() {
        let mut draft = draft();
        draft
            .feedback
            .insert("<span>".into(), "Inline, not a block".into());
        assert!(matches!(
            draft.validate(),
            Err(QuestionError::UnknownFeedbackOption(_))
        ));
    }

    #[test]
    fn blank_prompt_and_zero_points_are_rejected() {
        let mut blank = draft();
        blank.prompt = "   ".into();
        assert_eq!(blank.validate().unwrap_err(), QuestionError::EmptyPrompt);

        let mut zero = draft();
        zero.points = 0;
        assert_eq!(zero.validate().unwrap_err(), QuestionError::ZeroPoints);
    }

    #[test]
    fn valid_question_exposes_feedback_and_checks_exact_answers() {
        let mut draft = draft();
        draft
            .feedback
            .insert("<para>".into(), "Close, but that tag does not exist".into());
        let question = draft.validate().unwrap();

        assert!(question.is_correct("<p>"));
        assert!(!question.is_correct("<P>"));
        assert!(!question.is_correct(""));
        assert_eq!(
            question.feedback_for("<para>"),
            Some("Close, but that tag does not exist")
        );
        assert_eq!(question.feedback_for("<text>"), None);
    }
}
