use thiserror::Error;

use crate::model::ids::ExerciseId;
use crate::model::track::{DifficultyLevel, LearningTrack};

//
// ─── TEST CASES ────────────────────────────────────────────────────────────────
//

/// A descriptive test case. Both fields are prose, not executable assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub input: String,
    pub expected_output: String,
}

impl TestCase {
    #[must_use]
    pub fn new(input: impl Into<String>, expected_output: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            expected_output: expected_output.into(),
        }
    }
}

/// Outcome of one test case in a test run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestOutcome {
    pub case_index: usize,
    pub passed: bool,
    pub message: String,
}

/// Result of running an exercise's test cases against submitted code.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TestRunReport {
    outcomes: Vec<TestOutcome>,
}

impl TestRunReport {
    #[must_use]
    pub fn new(outcomes: Vec<TestOutcome>) -> Self {
        Self { outcomes }
    }

    #[must_use]
    pub fn outcomes(&self) -> &[TestOutcome] {
        &self.outcomes
    }

    #[must_use]
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.passed).count()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        !self.outcomes.is_empty() && self.passed() == self.total()
    }
}

//
// ─── EXERCISE TYPES ────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeExerciseDraft {
    pub id: ExerciseId,
    pub track: LearningTrack,
    pub difficulty: DifficultyLevel,
    pub prompt: String,
    pub starter_code: String,
    pub test_cases: Vec<TestCase>,
    pub explanation: String,
    pub hints: Vec<String>,
    pub points: u32,
    pub time_limit_secs: Option<u32>,
}

impl CodeExerciseDraft {
    /// Validate the draft into an immutable `CodeExercise`.
    ///
    /// # Errors
    ///
    /// Returns `ExerciseError` for a blank id/prompt, no test cases, zero points,
    /// or a zero time limit.
    pub fn validate(self) -> Result<CodeExercise, ExerciseError> {
        if self.id.as_str().trim().is_empty() {
            return Err(ExerciseError::EmptyId);
        }
        if self.prompt.trim().is_empty() {
            return Err(ExerciseError::EmptyPrompt);
        }
        if self.test_cases.is_empty() {
            return Err(ExerciseError::NoTestCases);
        }
        if self.points == 0 {
            return Err(ExerciseError::ZeroPoints);
        }
        if self.time_limit_secs == Some(0) {
            return Err(ExerciseError::ZeroTimeLimit);
        }

        Ok(CodeExercise {
            id: self.id,
            track: self.track,
            difficulty: self.difficulty,
            prompt: self.prompt,
            starter_code: self.starter_code,
            test_cases: self.test_cases,
            explanation: self.explanation,
            hints: self
                .hints
                .into_iter()
                .filter(|hint| !hint.trim().is_empty())
                .collect(),
            points: self.points,
            time_limit_secs: self.time_limit_secs,
        })
    }
}

/// A validated code exercise. Never mutated after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeExercise {
    id: ExerciseId,
    track: LearningTrack,
    difficulty: DifficultyLevel,
    prompt: String,
    starter_code: String,
    test_cases: Vec<TestCase>,
    explanation: String,
    hints: Vec<String>,
    points: u32,
    time_limit_secs: Option<u32>,
}

impl CodeExercise {
    #[must_use]
    pub fn id(&self) -> &ExerciseId {
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
    pub fn starter_code(&self) -> &str {
        &self.starter_code
    }

    #[must_use]
    pub fn test_cases(&self) -> &[TestCase] {
        &self.test_cases
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    #[must_use]
    pub fn time_limit_secs(&self) -> Option<u32> {
        self.time_limit_secs
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExerciseError {
    #[error("exercise id cannot be empty")]
    EmptyId,

    #[error("exercise prompt cannot be empty")]
    EmptyPrompt,

    #[error("exercise needs at least one test case")]
    NoTestCases,

    #[error("exercise points must be > 0")]
    ZeroPoints,

    #[error("time limit must be > 0 seconds")]
    ZeroTimeLimit,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> CodeExerciseDraft {
        CodeExerciseDraft {
            id: ExerciseId::new("css-ex-1"),
            track: LearningTrack::Css,
            difficulty: DifficultyLevel::Beginner,
            prompt: "Center a box with flexbox".into(),
            starter_code: ".parent {\n}\n".into(),
            test_cases: vec![TestCase::new(".parent", "display: flex")],
            explanation: String::new(),
            hints: vec!["Try justify-content".into(), "  ".into()],
            points: 30,
            time_limit_secs: None,
        }
    }

    #[test]
    fn exercise_requires_test_cases() {
        let mut draft = draft();
        draft.test_cases.clear();
        assert_eq!(draft.validate().unwrap_err(), ExerciseError::NoTestCases);
    }

    #[test]
    fn blank_hints_are_dropped() {
        let exercise = draft().validate().unwrap();
        assert_eq!(exercise.hints(), ["Try justify-content".to_string()]);
    }

    #[test]
    fn report_counts_passed_cases() {
        let report = TestRunReport::new(vec![
            TestOutcome {
                case_index: 0,
                passed: true,
                message: String::new(),
            },
            TestOutcome {
                case_index: 1,
                passed: false,
                message: String::new(),
            },
        ]);
        assert_eq!(report.passed(), 1);
        assert_eq!(report.total(), 2);
        assert!(!report.all_passed());
        assert!(!TestRunReport::default().all_passed());
    }
}
