use std::sync::Arc;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::catalog;
use crate::error::Error;
use crate::model::{
    CodeExercise, DifficultyLevel, ExerciseId, ItemId, LearningTrack, LessonItem, Question,
    QuestionId,
};

/// Immutable, shareable source of questions and exercises.
///
/// Accessors never mutate the backing lists; random selections work on copies.
#[derive(Debug, Clone, Default)]
pub struct QuestionBank {
    questions: Arc<[Question]>,
    exercises: Arc<[CodeExercise]>,
}

impl QuestionBank {
    #[must_use]
    pub fn new(questions: Vec<Question>, exercises: Vec<CodeExercise>) -> Self {
        Self {
            questions: questions.into(),
            exercises: exercises.into(),
        }
    }

    /// Bank backed by the built-in catalog.
    ///
    /// # Errors
    ///
    /// Returns `Error` if a catalog entry fails validation.
    pub fn builtin() -> Result<Self, Error> {
        Ok(Self::new(
            catalog::builtin_questions()?,
            catalog::builtin_exercises()?,
        ))
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn exercises(&self) -> &[CodeExercise] {
        &self.exercises
    }

    /// Questions matching both filters, in declaration order.
    #[must_use]
    pub fn questions_by_track_and_difficulty(
        &self,
        track: LearningTrack,
        difficulty: DifficultyLevel,
    ) -> Vec<Question> {
        self.questions
            .iter()
            .filter(|q| q.track() == track && q.difficulty() == difficulty)
            .cloned()
            .collect()
    }

    /// Exercises matching both filters, in declaration order.
    #[must_use]
    pub fn code_exercises_by_track_and_difficulty(
        &self,
        track: LearningTrack,
        difficulty: DifficultyLevel,
    ) -> Vec<CodeExercise> {
        self.exercises
            .iter()
            .filter(|e| e.track() == track && e.difficulty() == difficulty)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn questions_by_track(&self, track: LearningTrack) -> Vec<Question> {
        self.questions
            .iter()
            .filter(|q| q.track() == track)
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn code_exercises_by_track(&self, track: LearningTrack) -> Vec<CodeExercise> {
        self.exercises
            .iter()
            .filter(|e| e.track() == track)
            .cloned()
            .collect()
    }

    /// Uniformly shuffled subset of `min(count, available)` matching questions.
    pub fn random_questions<R: Rng + ?Sized>(
        &self,
        track: LearningTrack,
        difficulty: DifficultyLevel,
        count: usize,
        rng: &mut R,
    ) -> Vec<Question> {
        let mut pool = self.questions_by_track_and_difficulty(track, difficulty);
        pool.shuffle(rng);
        pool.truncate(count);
        pool
    }

    /// Uniformly shuffled subset of `min(count, available)` matching exercises.
    pub fn random_code_exercises<R: Rng + ?Sized>(
        &self,
        track: LearningTrack,
        difficulty: DifficultyLevel,
        count: usize,
        rng: &mut R,
    ) -> Vec<CodeExercise> {
        let mut pool = self.code_exercises_by_track_and_difficulty(track, difficulty);
        pool.shuffle(rng);
        pool.truncate(count);
        pool
    }

    #[must_use]
    pub fn question_by_id(&self, id: &QuestionId) -> Option<&Question> {
        self.questions.iter().find(|q| q.id() == id)
    }

    #[must_use]
    pub fn code_exercise_by_id(&self, id: &ExerciseId) -> Option<&CodeExercise> {
        self.exercises.iter().find(|e| e.id() == id)
    }

    #[must_use]
    pub fn item_by_id(&self, id: &ItemId) -> Option<LessonItem> {
        match id {
            ItemId::Question(id) => self.question_by_id(id).cloned().map(LessonItem::from),
            ItemId::Exercise(id) => self.code_exercise_by_id(id).cloned().map(LessonItem::from),
        }
    }

    #[must_use]
    pub fn total_questions_count(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn total_exercises_count(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn questions_count_by_track(&self, track: LearningTrack) -> usize {
        self.questions.iter().filter(|q| q.track() == track).count()
    }

    #[must_use]
    pub fn questions_count_by_difficulty(&self, difficulty: DifficultyLevel) -> usize {
        self.questions
            .iter()
            .filter(|q| q.difficulty() == difficulty)
            .count()
    }

    #[must_use]
    pub fn exercises_count_by_track(&self, track: LearningTrack) -> usize {
        self.exercises.iter().filter(|e| e.track() == track).count()
    }

    /// Questions plus exercises available for one lesson.
    #[must_use]
    pub fn items_count(&self, track: LearningTrack, difficulty: DifficultyLevel) -> usize {
        let questions = self
            .questions
            .iter()
            .filter(|q| q.track() == track && q.difficulty() == difficulty)
            .count();
        let exercises = self
            .exercises
            .iter()
            .filter(|e| e.track() == track && e.difficulty() == difficulty)
            .count();
        questions + exercises
    }
}
