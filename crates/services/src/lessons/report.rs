use chrono::{DateTime, Utc};

use codequest_core::model::{DifficultyLevel, LearningTrack, LevelInfo};
use codequest_core::time::elapsed_secs;

use super::response::ItemResult;
use super::session::LessonSession;

/// Completion-screen summary of a finished lesson.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonReport {
    pub track: LearningTrack,
    pub difficulty: DifficultyLevel,
    pub total_items: usize,
    pub correct_count: usize,
    pub total_xp: u32,
    pub total_time_secs: u32,
    pub results: Vec<ItemResult>,
    /// `None` when the leveling collaborator could not be read.
    pub level: Option<LevelInfo>,
}

impl LessonReport {
    #[must_use]
    pub fn from_session(
        session: &LessonSession,
        finished_at: DateTime<Utc>,
        level: Option<LevelInfo>,
    ) -> Self {
        let results = session.results().to_vec();
        let correct_count = results.iter().filter(|r| r.score.is_correct).count();
        let total_xp = results
            .iter()
            .fold(0u32, |acc, r| acc.saturating_add(r.score.xp_earned));
        let end = session.completed_at().unwrap_or(finished_at);

        Self {
            track: session.track(),
            difficulty: session.difficulty(),
            total_items: session.total_items(),
            correct_count,
            total_xp,
            total_time_secs: elapsed_secs(session.started_at(), end),
            results,
            level,
        }
    }

    /// Correct share of all lesson items, 0..=100.
    #[must_use]
    pub fn accuracy_percent(&self) -> u8 {
        if self.total_items == 0 {
            return 0;
        }
        let pct = (self.correct_count * 100 / self.total_items).min(100);
        u8::try_from(pct).unwrap_or(100)
    }

    /// Whole minutes and leftover seconds of the lesson.
    #[must_use]
    pub fn duration_parts(&self) -> (u32, u32) {
        (self.total_time_secs / 60, self.total_time_secs % 60)
    }
}
