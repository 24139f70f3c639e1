use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::NaiveDate;
use codequest_core::Clock;
use codequest_core::model::{
    CompletedCounts, GoalMetric, ItemId, LearningTrack, LevelInfo, StreakInfo,
};

use crate::repository::{
    DailyGoalRepository, LevelRepository, ProgressRepository, StorageError, StreakRepository,
};

/// One recorded answer, kept for inspection in tests and the history view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub track: LearningTrack,
    pub item_id: ItemId,
    pub is_correct: bool,
    pub time_taken_secs: u32,
}

#[derive(Debug, Default)]
struct MemoryState {
    answers: Vec<AnswerRecord>,
    completed: HashSet<(LearningTrack, ItemId)>,
    total_xp: u64,
    streak: StreakInfo,
    goals: HashMap<(NaiveDate, GoalMetric), u32>,
}

/// In-memory implementation of every collaborator, for the desktop build and tests.
///
/// Clones share state, so one instance can back all four trait objects.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    clock: Clock,
    state: Arc<Mutex<MemoryState>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            state: Arc::new(Mutex::new(MemoryState::default())),
        }
    }

    /// Every answer recorded so far, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the state lock is poisoned.
    pub fn answers(&self) -> Result<Vec<AnswerRecord>, StorageError> {
        Ok(self.lock()?.answers.clone())
    }

    /// Total XP credited through `record_activity`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Connection` if the state lock is poisoned.
    pub fn total_xp(&self) -> Result<u64, StorageError> {
        Ok(self.lock()?.total_xp)
    }

    fn today(&self) -> NaiveDate {
        self.clock.now().date_naive()
    }

    fn lock(&self) -> Result<MutexGuard<'_, MemoryState>, StorageError> {
        self.state
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn record_answer(
        &self,
        track: LearningTrack,
        item_id: &ItemId,
        is_correct: bool,
        time_taken_secs: u32,
    ) -> Result<(), StorageError> {
        let mut guard = self.lock()?;
        guard.answers.push(AnswerRecord {
            track,
            item_id: item_id.clone(),
            is_correct,
            time_taken_secs,
        });
        if is_correct {
            guard.completed.insert((track, item_id.clone()));
        }
        Ok(())
    }

    async fn completed_counts(&self) -> Result<CompletedCounts, StorageError> {
        let guard = self.lock()?;
        let mut counts = CompletedCounts::default();
        for (track, _) in &guard.completed {
            counts.increment(*track);
        }
        Ok(counts)
    }
}

#[async_trait]
impl StreakRepository for InMemoryRepository {
    async fn record_activity(
        &self,
        xp_earned: u32,
        activity_count: u32,
        _tracks: &[LearningTrack],
    ) -> Result<(), StorageError> {
        let today = self.today();
        let mut guard = self.lock()?;
        guard.total_xp = guard.total_xp.saturating_add(u64::from(xp_earned));
        if activity_count > 0 {
            guard.streak.record(today);
        }
        Ok(())
    }

    async fn current_streak(&self) -> Result<StreakInfo, StorageError> {
        Ok(self.lock()?.streak)
    }
}

#[async_trait]
impl DailyGoalRepository for InMemoryRepository {
    async fn record_progress(&self, metric: GoalMetric, amount: u32) -> Result<(), StorageError> {
        let today = self.today();
        let mut guard = self.lock()?;
        let slot = guard.goals.entry((today, metric)).or_insert(0);
        *slot = slot.saturating_add(amount);
        Ok(())
    }

    async fn progress(&self, metric: GoalMetric) -> Result<u32, StorageError> {
        let today = self.today();
        let guard = self.lock()?;
        Ok(guard.goals.get(&(today, metric)).copied().unwrap_or(0))
    }
}

#[async_trait]
impl LevelRepository for InMemoryRepository {
    async fn level_info(&self) -> Result<LevelInfo, StorageError> {
        Ok(LevelInfo::from_xp(self.lock()?.total_xp))
    }
}

// ─── TESTS ─────────────────────────────────────────────────────────────────────
