mod exercise;
mod ids;
mod item;
mod level;
mod progress;
mod question;
mod settings;
mod track;

pub use ids::{ExerciseId, ItemId, QuestionId};

pub use exercise::{
    CodeExercise, CodeExerciseDraft, ExerciseError, TestCase, TestOutcome, TestRunReport,
};
pub use item::{ItemKind, LessonItem};
pub use level::{LevelInfo, XP_PER_LEVEL_STEP, level_start_xp};
pub use progress::{CompletedCounts, GoalMetric, StreakInfo};
pub use question::{Question, QuestionDraft, QuestionError};
pub use settings::{LessonSettings, SettingsError};
pub use track::{DifficultyLevel, LearningTrack, ParseEnumError};
