use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use codequest_core::QuestionBank;
use codequest_core::model::{DifficultyLevel, LearningTrack, LessonItem};

/// Items selected for one lesson, already in play order.
#[derive(Debug, Clone, PartialEq)]
pub struct LessonPlan {
    pub items: Vec<LessonItem>,
    pub questions_selected: usize,
    pub exercises_selected: usize,
}

impl LessonPlan {
    #[must_use]
    pub fn total(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Merges a track/difficulty's questions and exercises and shuffles them once.
pub struct LessonBuilder {
    track: LearningTrack,
    difficulty: DifficultyLevel,
    seed: Option<u64>,
}

impl LessonBuilder {
    #[must_use]
    pub fn new(track: LearningTrack, difficulty: DifficultyLevel) -> Self {
        Self {
            track,
            difficulty,
            seed: None,
        }
    }

    /// Use a deterministic shuffle. Without a seed the thread RNG is used.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn build(self, bank: &QuestionBank) -> LessonPlan {
        let questions = bank.questions_by_track_and_difficulty(self.track, self.difficulty);
        let exercises = bank.code_exercises_by_track_and_difficulty(self.track, self.difficulty);
        let questions_selected = questions.len();
        let exercises_selected = exercises.len();

        let mut items: Vec<LessonItem> = questions
            .into_iter()
            .map(LessonItem::from)
            .chain(exercises.into_iter().map(LessonItem::from))
            .collect();

        match self.seed {
            Some(seed) => items.shuffle(&mut StdRng::seed_from_u64(seed)),
            None => items.shuffle(&mut rand::rng()),
        }

        LessonPlan {
            items,
            questions_selected,
            exercises_selected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codequest_core::model::{CodeExerciseDraft, ExerciseId, QuestionDraft, TestCase};
    use std::collections::HashSet;

    fn bank() -> QuestionBank {
        use DifficultyLevel::{Advanced, Beginner};
        use LearningTrack::{Css, Html};
        let q = |id: &str, track, difficulty| {
            QuestionDraft::new(id, track, difficulty, "prompt", &["a", "b"], "a", 10)
                .validate()
                .unwrap()
        };
        let exercise = CodeExerciseDraft {
            id: ExerciseId::new("ex-1"),
            track: Html,
            difficulty: Beginner,
            prompt: "write it".into(),
            starter_code: String::new(),
            test_cases: vec![TestCase::new("in", "out")],
            explanation: String::new(),
            hints: Vec::new(),
            points: 20,
            time_limit_secs: None,
        }
        .validate()
        .unwrap();
        QuestionBank::new(
            vec![
                q("h1", Html, Beginner),
                q("h2", Html, Beginner),
                q("h3", Html, Advanced),
                q("c1", Css, Beginner),
            ],
            vec![exercise],
        )
    }

    #[test]
    fn plan_merges_matching_questions_and_exercises() {
        let plan = LessonBuilder::new(LearningTrack::Html, DifficultyLevel::Beginner)
            .with_seed(Some(3))
            .build(&bank());

        assert_eq!(plan.total(), 3);
        assert_eq!(plan.questions_selected, 2);
        assert_eq!(plan.exercises_selected, 1);
        let ids: HashSet<_> = plan
            .items
            .iter()
            .map(|item| item.id().as_str().to_string())
            .collect();
        let expected: HashSet<String> = ["h1", "h2", "ex-1"].map(String::from).into();
        assert_eq!(ids, expected);
    }

    #[test]
    fn same_seed_gives_same_order() {
        let bank = bank();
        let a = LessonBuilder::new(LearningTrack::Html, DifficultyLevel::Beginner)
            .with_seed(Some(42))
            .build(&bank);
        let b = LessonBuilder::new(LearningTrack::Html, DifficultyLevel::Beginner)
            .with_seed(Some(42))
            .build(&bank);
        assert_eq!(a, b);
    }

    #[test]
    fn no_matches_yields_empty_plan() {
        let plan = LessonBuilder::new(LearningTrack::Javascript, DifficultyLevel::Beginner)
            .build(&bank());
        assert!(plan.is_empty());
    }
}
