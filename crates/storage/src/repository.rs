use std::sync::Arc;

use async_trait::async_trait;
use codequest_core::Clock;
use codequest_core::model::{
    CompletedCounts, GoalMetric, ItemId, LearningTrack, LevelInfo, StreakInfo,
};
use thiserror::Error;

use crate::memory::InMemoryRepository;

/// Errors surfaced by progress collaborators.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

/// Records answered items. Failures here abort a lesson transition.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Record one answered item.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the answer cannot be recorded.
    async fn record_answer(
        &self,
        track: LearningTrack,
        item_id: &ItemId,
        is_correct: bool,
        time_taken_secs: u32,
    ) -> Result<(), StorageError>;

    /// Distinct items answered correctly, per track.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the counts cannot be read.
    async fn completed_counts(&self) -> Result<CompletedCounts, StorageError>;
}

#[async_trait]
pub trait StreakRepository: Send + Sync {
    /// Register activity for today's streak and the XP ledger.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the activity cannot be recorded.
    async fn record_activity(
        &self,
        xp_earned: u32,
        activity_count: u32,
        tracks: &[LearningTrack],
    ) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the streak cannot be read.
    async fn current_streak(&self) -> Result<StreakInfo, StorageError>;
}

#[async_trait]
pub trait DailyGoalRepository: Send + Sync {
    /// Add `amount` to today's total for `metric`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the progress cannot be recorded.
    async fn record_progress(&self, metric: GoalMetric, amount: u32) -> Result<(), StorageError>;

    /// Today's total for `metric`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the total cannot be read.
    async fn progress(&self, metric: GoalMetric) -> Result<u32, StorageError>;
}

#[async_trait]
pub trait LevelRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the XP ledger cannot be read.
    async fn level_info(&self) -> Result<LevelInfo, StorageError>;
}

/// Aggregates the collaborators behind trait objects so backends can be swapped.
#[derive(Clone)]
pub struct Storage {
    pub progress: Arc<dyn ProgressRepository>,
    pub streaks: Arc<dyn StreakRepository>,
    pub goals: Arc<dyn DailyGoalRepository>,
    pub levels: Arc<dyn LevelRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        let repo = InMemoryRepository::new(clock);
        let progress: Arc<dyn ProgressRepository> = Arc::new(repo.clone());
        let streaks: Arc<dyn StreakRepository> = Arc::new(repo.clone());
        let goals: Arc<dyn DailyGoalRepository> = Arc::new(repo.clone());
        let levels: Arc<dyn LevelRepository> = Arc::new(repo);
        Self {
            progress,
            streaks,
            goals,
            levels,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codequest_core::model::QuestionId;
    use codequest_core::time::fixed_clock;

    #[tokio::test]
    async fn in_memory_storage_shares_one_ledger() {
        let storage = Storage::in_memory(fixed_clock());
        let id = ItemId::from(QuestionId::new("html-b-1"));

        storage
            .progress
            .record_answer(LearningTrack::Html, &id, true, 4)
            .await
            .unwrap();
        storage
            .streaks
            .record_activity(150, 1, &[LearningTrack::Html])
            .await
            .unwrap();

        let counts = storage.progress.completed_counts().await.unwrap();
        assert_eq!(counts.get(LearningTrack::Html), 1);

        let level = storage.levels.level_info().await.unwrap();
        assert_eq!(level.current_level, 2);
        assert_eq!(level.xp_into_level, 50);
    }
}
