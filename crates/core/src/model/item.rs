use crate::model::exercise::CodeExercise;
use crate::model::ids::ItemId;
use crate::model::question::Question;
use crate::model::track::{DifficultyLevel, LearningTrack};

/// One step of a lesson: either a multiple-choice question or a code exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LessonItem {
    Question(Question),
    Exercise(CodeExercise),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Question,
    Exercise,
}

impl LessonItem {
    #[must_use]
    pub fn id(&self) -> ItemId {
        match self {
            LessonItem::Question(q) => q.id().clone().into(),
            LessonItem::Exercise(e) => e.id().clone().into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ItemKind {
        match self {
            LessonItem::Question(_) => ItemKind::Question,
            LessonItem::Exercise(_) => ItemKind::Exercise,
        }
    }

    #[must_use]
    pub fn track(&self) -> LearningTrack {
        match self {
            LessonItem::Question(q) => q.track(),
            LessonItem::Exercise(e) => e.track(),
        }
    }

    #[must_use]
    pub fn difficulty(&self) -> DifficultyLevel {
        match self {
            LessonItem::Question(q) => q.difficulty(),
            LessonItem::Exercise(e) => e.difficulty(),
        }
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        match self {
            LessonItem::Question(q) => q.prompt(),
            LessonItem::Exercise(e) => e.prompt(),
        }
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        match self {
            LessonItem::Question(q) => q.points(),
            LessonItem::Exercise(e) => e.points(),
        }
    }

    #[must_use]
    pub fn time_limit_secs(&self) -> Option<u32> {
        match self {
            LessonItem::Question(q) => q.time_limit_secs(),
            LessonItem::Exercise(e) => e.time_limit_secs(),
        }
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        match self {
            LessonItem::Question(q) => q.explanation(),
            LessonItem::Exercise(e) => e.explanation(),
        }
    }
}

impl From<Question> for LessonItem {
    fn from(question: Question) -> Self {
        LessonItem::Question(question)
    }
}

impl From<CodeExercise> for LessonItem {
    fn from(exercise: CodeExercise) -> Self {
        LessonItem::Exercise(exercise)
    }
}
