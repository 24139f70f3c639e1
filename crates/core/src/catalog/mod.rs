//! Built-in curriculum. Authored as compact seed tables and validated on load.

mod css;
mod html;
mod javascript;

use crate::model::{
    CodeExercise, CodeExerciseDraft, DifficultyLevel, ExerciseError, ExerciseId, LearningTrack,
    Question, QuestionDraft, QuestionError, QuestionId, TestCase,
};

pub(crate) struct QuestionSeed {
    pub id: &'static str,
    pub difficulty: DifficultyLevel,
    pub prompt: &'static str,
    pub options: &'static [&'static str],
    pub correct: &'static str,
    pub explanation: &'static str,
    pub code: Option<&'static str>,
    pub points: u32,
    pub feedback: &'static [(&'static str, &'static str)],
    pub time_limit_secs: Option<u32>,
}

pub(crate) struct ExerciseSeed {
    pub id: &'static str,
    pub difficulty: DifficultyLevel,
    pub prompt: &'static str,
    pub starter_code: &'static str,
    pub tests: &'static [(&'static str, &'static str)],
    pub explanation: &'static str,
    pub hints: &'static [&'static str],
    pub points: u32,
}

fn track_seeds() -> [(LearningTrack, &'static [QuestionSeed], &'static [ExerciseSeed]); 3] {
    [
        (LearningTrack::Html, html::QUESTIONS, html::EXERCISES),
        (LearningTrack::Css, css::QUESTIONS, css::EXERCISES),
        (
            LearningTrack::Javascript,
            javascript::QUESTIONS,
            javascript::EXERCISES,
        ),
    ]
}

impl QuestionSeed {
    fn to_draft(&self, track: LearningTrack) -> QuestionDraft {
        QuestionDraft {
            id: QuestionId::new(self.id),
            track,
            difficulty: self.difficulty,
            prompt: self.prompt.to_string(),
            options: self.options.iter().map(|o| (*o).to_string()).collect(),
            correct_answer: self.correct.to_string(),
            explanation: self.explanation.to_string(),
            code_sample: self.code.map(str::to_string),
            points: self.points,
            feedback: self
                .feedback
                .iter()
                .map(|(option, text)| ((*option).to_string(), (*text).to_string()))
                .collect(),
            time_limit_secs: self.time_limit_secs,
        }
    }
}

impl ExerciseSeed {
    fn to_draft(&self, track: LearningTrack) -> CodeExerciseDraft {
        CodeExerciseDraft {
            id: ExerciseId::new(self.id),
            track,
            difficulty: self.difficulty,
            prompt: self.prompt.to_string(),
            starter_code: self.starter_code.to_string(),
            test_cases: self
                .tests
                .iter()
                .map(|(input, expected)| TestCase::new(*input, *expected))
                .collect(),
            explanation: self.explanation.to_string(),
            hints: self.hints.iter().map(|h| (*h).to_string()).collect(),
            points: self.points,
            time_limit_secs: None,
        }
    }
}

/// All built-in questions, grouped by track in curriculum order.
///
/// # Errors
///
/// Returns the first `QuestionError` found in the seed tables.
pub fn builtin_questions() -> Result<Vec<Question>, QuestionError> {
    track_seeds()
        .into_iter()
        .flat_map(|(track, questions, _)| questions.iter().map(move |seed| seed.to_draft(track)))
        .map(QuestionDraft::validate)
        .collect()
}

/// All built-in code exercises, grouped by track in curriculum order.
///
/// # Errors
///
/// Returns the first `ExerciseError` found in the seed tables.
pub fn builtin_exercises() -> Result<Vec<CodeExercise>, ExerciseError> {
    track_seeds()
        .into_iter()
        .flat_map(|(track, _, exercises)| exercises.iter().map(move |seed| seed.to_draft(track)))
        .map(CodeExerciseDraft::validate)
        .collect()
}
