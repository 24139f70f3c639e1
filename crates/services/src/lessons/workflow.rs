use std::sync::Arc;

use tracing::{debug, error, info, warn};

use codequest_core::QuestionBank;
use codequest_core::model::{
    CompletedCounts, DifficultyLevel, GoalMetric, LearningTrack, LessonSettings, LevelInfo,
};
use storage::{
    DailyGoalRepository, LevelRepository, ProgressRepository, Storage, StreakRepository,
};

use super::plan::LessonBuilder;
use super::report::LessonReport;
use super::response::{
    ItemResponse, ItemResult, LessonSessionId, Navigation, SubmitOutcome, SubmitTarget,
    SubmitTrigger,
};
use super::session::LessonSession;
use crate::Clock;
use crate::error::LessonError;

/// Result of starting a lesson.
#[derive(Debug)]
pub enum LessonStart {
    /// No questions or exercises exist for this track and difficulty.
    Empty {
        track: LearningTrack,
        difficulty: DifficultyLevel,
    },
    Ready(LessonSession),
}

/// Orchestrates lesson start, submission and collaborator notifications.
#[derive(Clone)]
pub struct LessonLoopService {
    clock: Clock,
    bank: QuestionBank,
    settings: LessonSettings,
    progress: Arc<dyn ProgressRepository>,
    streaks: Arc<dyn StreakRepository>,
    goals: Arc<dyn DailyGoalRepository>,
    levels: Arc<dyn LevelRepository>,
    shuffle_seed: Option<u64>,
}

impl LessonLoopService {
    #[must_use]
    pub fn new(clock: Clock, bank: QuestionBank, storage: &Storage) -> Self {
        Self {
            clock,
            bank,
            settings: LessonSettings::default(),
            progress: Arc::clone(&storage.progress),
            streaks: Arc::clone(&storage.streaks),
            goals: Arc::clone(&storage.goals),
            levels: Arc::clone(&storage.levels),
            shuffle_seed: None,
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: LessonSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Shuffle lessons deterministically.
    #[must_use]
    pub fn with_shuffle_seed(mut self, seed: Option<u64>) -> Self {
        self.shuffle_seed = seed;
        self
    }

    #[must_use]
    pub fn bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn settings(&self) -> LessonSettings {
        self.settings
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Build a freshly shuffled lesson for `track` and `difficulty`.
    #[must_use]
    pub fn start_lesson(&self, track: LearningTrack, difficulty: DifficultyLevel) -> LessonStart {
        let plan = LessonBuilder::new(track, difficulty)
            .with_seed(self.shuffle_seed)
            .build(&self.bank);
        if plan.is_empty() {
            info!(%track, %difficulty, "no lesson items available");
            return LessonStart::Empty { track, difficulty };
        }

        let (questions, exercises) = (plan.questions_selected, plan.exercises_selected);
        match LessonSession::new(track, difficulty, plan, self.settings, self.clock.now()) {
            Ok(session) => {
                info!(
                    session = %session.id(),
                    %track,
                    %difficulty,
                    questions,
                    exercises,
                    "lesson started"
                );
                LessonStart::Ready(session)
            }
            Err(_) => LessonStart::Empty { track, difficulty },
        }
    }

    /// Start the same track and difficulty again after completion.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::NotCompleted` if `session` is still in progress, or
    /// `LessonError::Empty` if the bank no longer has items for the lesson.
    pub fn retry(&self, session: &LessonSession) -> Result<LessonSession, LessonError> {
        if !session.is_complete() {
            return Err(LessonError::NotCompleted);
        }
        match self.start_lesson(session.track(), session.difficulty()) {
            LessonStart::Ready(next) => Ok(next),
            LessonStart::Empty { .. } => Err(LessonError::Empty),
        }
    }

    /// Move within `session`. Returns `false` when the current item did not change.
    pub fn navigate(&self, session: &mut LessonSession, navigation: Navigation) -> bool {
        let now = self.clock.now();
        let moved = match navigation {
            Navigation::Previous => session.previous(now),
            Navigation::Next => session.next(now),
            Navigation::Skip => session.skip(now),
            Navigation::GoTo(index) => session.go_to(index, now),
        };
        if moved {
            debug!(
                session = %session.id(),
                ?navigation,
                index = session.current_index(),
                "navigated"
            );
        }
        moved
    }

    /// Submit `response` for the item named by `target`.
    ///
    /// Records the answer (mandatory), then notifies the streak and daily-goal
    /// collaborators (best-effort), then advances or completes the lesson.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::ResponseMismatch` if the response kind does not fit the
    /// item, or `LessonError::Progress` if the answer could not be recorded. In both
    /// cases the session is unchanged and the item can be submitted again.
    pub async fn submit(
        &self,
        session: &mut LessonSession,
        target: SubmitTarget,
        response: ItemResponse,
        trigger: SubmitTrigger,
    ) -> Result<SubmitOutcome, LessonError> {
        if !session.accepts(target) {
            debug!(session = %target.session, index = target.index, "submission ignored");
            return Ok(SubmitOutcome::Ignored);
        }
        let score = session.score_current(&response)?;
        let item_id = session
            .current_item()
            .map(|item| item.id())
            .ok_or(LessonError::Completed)?;
        let track = session.track();
        let now = self.clock.now();
        let time_taken_secs = session.time_on_item(now);

        session.claim_current();
        if let Err(err) = self
            .progress
            .record_answer(track, &item_id, score.is_correct, time_taken_secs)
            .await
        {
            session.release_current();
            error!(item = %item_id, error = %err, "failed to record answer");
            return Err(LessonError::Progress(err));
        }

        self.notify_best_effort(track, score.xp_earned).await;

        let result = ItemResult {
            item_id,
            index: target.index,
            score,
            time_taken_secs,
            trigger,
        };
        let outcome = session.record_result(result, now);
        match &outcome {
            SubmitOutcome::Completed { .. } => {
                let report = LessonReport::from_session(session, now, None);
                info!(
                    session = %session.id(),
                    correct = report.correct_count,
                    total = report.total_items,
                    xp = report.total_xp,
                    "lesson completed"
                );
            }
            SubmitOutcome::Advanced { next_index, .. } => {
                debug!(session = %session.id(), next_index, "advanced to next item");
            }
            SubmitOutcome::Ignored => {}
        }
        Ok(outcome)
    }

    /// Manual submission for whatever item is current.
    ///
    /// # Errors
    ///
    /// See [`LessonLoopService::submit`].
    pub async fn submit_current(
        &self,
        session: &mut LessonSession,
        response: ItemResponse,
    ) -> Result<SubmitOutcome, LessonError> {
        let target = session.current_target();
        self.submit(session, target, response, SubmitTrigger::Manual)
            .await
    }

    /// Advance the countdown; on expiry submit `pending` (or an empty response).
    ///
    /// Returns `None` when the tick did not expire the countdown.
    ///
    /// # Errors
    ///
    /// See [`LessonLoopService::submit`].
    pub async fn tick(
        &self,
        session: &mut LessonSession,
        session_id: LessonSessionId,
        elapsed_secs: u32,
        pending: Option<ItemResponse>,
    ) -> Result<Option<SubmitOutcome>, LessonError> {
        let Some(target) = session.tick(session_id, elapsed_secs) else {
            return Ok(None);
        };
        let Some(item) = session.current_item() else {
            return Ok(None);
        };
        let empty = ItemResponse::empty_for(item);
        let response = match pending {
            Some(pending) if std::mem::discriminant(&pending) == std::mem::discriminant(&empty) => {
                pending
            }
            _ => empty,
        };
        debug!(session = %session_id, index = target.index, "countdown expired");
        self.submit(session, target, response, SubmitTrigger::Timeout)
            .await
            .map(Some)
    }

    /// Completion report, including the learner's level when it can be read.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::NotCompleted` if the lesson is still in progress.
    pub async fn report(&self, session: &LessonSession) -> Result<LessonReport, LessonError> {
        if !session.is_complete() {
            return Err(LessonError::NotCompleted);
        }
        let level = match self.levels.level_info().await {
            Ok(level) => Some(level),
            Err(err) => {
                warn!(error = %err, "failed to read level info");
                None
            }
        };
        Ok(LessonReport::from_session(session, self.clock.now(), level))
    }

    /// # Errors
    ///
    /// Returns `LessonError::Storage` if the leveling collaborator fails.
    pub async fn level_info(&self) -> Result<LevelInfo, LessonError> {
        Ok(self.levels.level_info().await?)
    }

    /// # Errors
    ///
    /// Returns `LessonError::Storage` if the progress collaborator fails.
    pub async fn completed_counts(&self) -> Result<CompletedCounts, LessonError> {
        Ok(self.progress.completed_counts().await?)
    }

    async fn notify_best_effort(&self, track: LearningTrack, xp_earned: u32) {
        if let Err(err) = self.streaks.record_activity(xp_earned, 1, &[track]).await {
            warn!(%track, error = %err, "failed to record streak activity");
        }
        if let Err(err) = self
            .goals
            .record_progress(GoalMetric::QuestionsAnswered, 1)
            .await
        {
            warn!(metric = %GoalMetric::QuestionsAnswered, error = %err, "failed to record daily goal");
        }
        if let Err(err) = self
            .goals
            .record_progress(GoalMetric::XpEarned, xp_earned)
            .await
        {
            warn!(metric = %GoalMetric::XpEarned, error = %err, "failed to record daily goal");
        }
    }
}
