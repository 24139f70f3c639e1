use thiserror::Error;

use crate::model::item::LessonItem;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("question time limit must be between 5 and 3600 seconds")]
    InvalidQuestionSeconds,

    #[error("exercise time limit must be between 5 and 3600 seconds")]
    InvalidExerciseSeconds,
}

//
// ─── SETTINGS ──────────────────────────────────────────────────────────────────
//

const TIME_LIMIT_RANGE: std::ops::RangeInclusive<u32> = 5..=3600;

/// Lesson-wide knobs for the per-item countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonSettings {
    timer_enabled: bool,
    question_secs: u32,
    exercise_secs: u32,
}

impl Default for LessonSettings {
    /// One minute per question, five per exercise, timer on.
    fn default() -> Self {
        Self {
            timer_enabled: true,
            question_secs: 60,
            exercise_secs: 300,
        }
    }
}

impl LessonSettings {
    /// Creates custom lesson settings.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if a default time limit is outside 5..=3600 seconds.
    pub fn new(
        timer_enabled: bool,
        question_secs: u32,
        exercise_secs: u32,
    ) -> Result<Self, SettingsError> {
        if !TIME_LIMIT_RANGE.contains(&question_secs) {
            return Err(SettingsError::InvalidQuestionSeconds);
        }
        if !TIME_LIMIT_RANGE.contains(&exercise_secs) {
            return Err(SettingsError::InvalidExerciseSeconds);
        }

        Ok(Self {
            timer_enabled,
            question_secs,
            exercise_secs,
        })
    }

    #[must_use]
    pub fn timer_enabled(&self) -> bool {
        self.timer_enabled
    }

    #[must_use]
    pub fn question_secs(&self) -> u32 {
        self.question_secs
    }

    #[must_use]
    pub fn exercise_secs(&self) -> u32 {
        self.exercise_secs
    }

    /// Countdown length for an item: its own limit, else the default for its kind.
    ///
    /// Returns `None` when the timer is disabled.
    #[must_use]
    pub fn time_limit_for(&self, item: &LessonItem) -> Option<u32> {
        if !self.timer_enabled {
            return None;
        }
        let fallback = match item {
            LessonItem::Question(_) => self.question_secs,
            LessonItem::Exercise(_) => self.exercise_secs,
        };
        Some(item.time_limit_secs().unwrap_or(fallback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::question::QuestionDraft;
    use crate::model::track::{DifficultyLevel, LearningTrack};

    fn question(limit: Option<u32>) -> LessonItem {
        let mut draft = QuestionDraft::new(
            "q",
            LearningTrack::Html,
            DifficultyLevel::Beginner,
            "prompt",
            &["a", "b"],
            "a",
            10,
        );
        draft.time_limit_secs = limit;
        draft.validate().unwrap().into()
    }

    #[test]
    fn rejects_out_of_range_limits() {
        assert_eq!(
            LessonSettings::new(true, 4, 300).unwrap_err(),
            SettingsError::InvalidQuestionSeconds
        );
        assert_eq!(
            LessonSettings::new(true, 60, 3601).unwrap_err(),
            SettingsError::InvalidExerciseSeconds
        );
    }

    #[test]
    fn item_limit_overrides_default() {
        let settings = LessonSettings::default();
        assert_eq!(settings.time_limit_for(&question(Some(15))), Some(15));
        assert_eq!(settings.time_limit_for(&question(None)), Some(60));
    }

    #[test]
    fn disabled_timer_has_no_limit() {
        let settings = LessonSettings::new(false, 60, 300).unwrap();
        assert_eq!(settings.time_limit_for(&question(Some(15))), None);
    }
}
