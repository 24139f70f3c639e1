use chrono::{DateTime, Utc};
use std::fmt;

use codequest_core::model::{DifficultyLevel, LearningTrack, LessonItem, LessonSettings};
use codequest_core::scoring::{self, ItemScore};
use codequest_core::time::elapsed_secs;

use super::plan::LessonPlan;
use super::progress::LessonProgress;
use super::response::{ItemResponse, ItemResult, LessonSessionId, SubmitOutcome, SubmitTarget};
use super::timer::ItemCountdown;
use crate::error::LessonError;

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Progression state of one lesson.
///
/// The item order is fixed at construction and never changes. The session owns
/// the per-item countdown; ticks and submissions name the session id and item
/// index they target so late arrivals are ignored.
pub struct LessonSession {
    id: LessonSessionId,
    track: LearningTrack,
    difficulty: DifficultyLevel,
    settings: LessonSettings,
    items: Vec<LessonItem>,
    current: usize,
    submitted: Vec<bool>,
    results: Vec<ItemResult>,
    countdown: ItemCountdown,
    started_at: DateTime<Utc>,
    item_started_at: DateTime<Utc>,
    completed_at: Option<DateTime<Utc>>,
}

impl LessonSession {
    /// Start a lesson at index 0 with a fresh id and countdown.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::Empty` if the plan has no items.
    pub fn new(
        track: LearningTrack,
        difficulty: DifficultyLevel,
        plan: LessonPlan,
        settings: LessonSettings,
        started_at: DateTime<Utc>,
    ) -> Result<Self, LessonError> {
        if plan.is_empty() {
            return Err(LessonError::Empty);
        }
        let items = plan.items;
        let countdown = ItemCountdown::new(settings.time_limit_for(&items[0]));
        Ok(Self {
            id: LessonSessionId::next(),
            track,
            difficulty,
            settings,
            submitted: vec![false; items.len()],
            items,
            current: 0,
            results: Vec::new(),
            countdown,
            started_at,
            item_started_at: started_at,
            completed_at: None,
        })
    }

    #[must_use]
    pub fn id(&self) -> LessonSessionId {
        self.id
    }

    #[must_use]
    pub fn track(&self) -> LearningTrack {
        self.track
    }

    #[must_use]
    pub fn difficulty(&self) -> DifficultyLevel {
        self.difficulty
    }

    #[must_use]
    pub fn settings(&self) -> LessonSettings {
        self.settings
    }

    #[must_use]
    pub fn items(&self) -> &[LessonItem] {
        &self.items
    }

    #[must_use]
    pub fn total_items(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&LessonItem> {
        if self.is_complete() {
            return None;
        }
        self.items.get(self.current)
    }

    /// Submission target for the current item.
    #[must_use]
    pub fn current_target(&self) -> SubmitTarget {
        SubmitTarget {
            session: self.id,
            index: self.current,
        }
    }

    #[must_use]
    pub fn results(&self) -> &[ItemResult] {
        &self.results
    }

    #[must_use]
    pub fn result_for(&self, index: usize) -> Option<&ItemResult> {
        self.results.iter().find(|r| r.index == index)
    }

    #[must_use]
    pub fn is_submitted(&self, index: usize) -> bool {
        self.submitted.get(index).copied().unwrap_or(false)
    }

    #[must_use]
    pub fn countdown(&self) -> &ItemCountdown {
        &self.countdown
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn item_started_at(&self) -> DateTime<Utc> {
        self.item_started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed_at.is_some()
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.items.len()
    }

    #[must_use]
    pub fn progress(&self) -> LessonProgress {
        LessonProgress::new(
            self.items.len(),
            self.current,
            self.results.len(),
            self.is_complete(),
        )
    }

    //
    // ─── NAVIGATION ────────────────────────────────────────────────────────────
    //

    /// Move to `index`, clamped to the item range. Restarts the countdown.
    ///
    /// Returns `false` when nothing changed (already there, or lesson complete).
    pub fn go_to(&mut self, index: usize, now: DateTime<Utc>) -> bool {
        if self.is_complete() {
            return false;
        }
        let target = index.min(self.items.len() - 1);
        if target == self.current {
            return false;
        }
        self.current = target;
        self.restart_item(now);
        true
    }

    pub fn next(&mut self, now: DateTime<Utc>) -> bool {
        self.go_to(self.current.saturating_add(1), now)
    }

    pub fn previous(&mut self, now: DateTime<Utc>) -> bool {
        self.go_to(self.current.saturating_sub(1), now)
    }

    /// Leave the current item unanswered and move on.
    pub fn skip(&mut self, now: DateTime<Utc>) -> bool {
        self.next(now)
    }

    //
    // ─── SUBMISSION ────────────────────────────────────────────────────────────
    //

    /// Whether a submission for `target` should be processed.
    #[must_use]
    pub fn accepts(&self, target: SubmitTarget) -> bool {
        target.session == self.id
            && !self.is_complete()
            && target.index == self.current
            && !self.is_submitted(target.index)
    }

    /// Score `response` against the current item without changing state.
    ///
    /// # Errors
    ///
    /// Returns `LessonError::Completed` when there is no current item and
    /// `LessonError::ResponseMismatch` when the response kind does not fit the item.
    pub fn score_current(&self, response: &ItemResponse) -> Result<ItemScore, LessonError> {
        let item = self.current_item().ok_or(LessonError::Completed)?;
        match (item, response) {
            (LessonItem::Question(question), ItemResponse::Choice(choice)) => {
                Ok(scoring::score_choice(question, choice.as_deref()))
            }
            (LessonItem::Exercise(exercise), ItemResponse::TestRun(report)) => {
                let passed = report.as_ref().map_or(0, |r| r.passed());
                Ok(scoring::score_exercise(
                    exercise,
                    passed,
                    exercise.test_cases().len(),
                ))
            }
            _ => Err(LessonError::ResponseMismatch),
        }
    }

    /// Seconds spent on the current item as of `now`.
    #[must_use]
    pub fn time_on_item(&self, now: DateTime<Utc>) -> u32 {
        elapsed_secs(self.item_started_at, now)
    }

    /// Hold the current item's submission slot while collaborators run.
    pub(crate) fn claim_current(&mut self) {
        if let Some(slot) = self.submitted.get_mut(self.current) {
            *slot = true;
        }
    }

    /// Give the slot back after a failed submission.
    pub(crate) fn release_current(&mut self) {
        if let Some(slot) = self.submitted.get_mut(self.current) {
            *slot = false;
        }
    }

    /// Store the result for the current item and advance or complete.
    pub(crate) fn record_result(&mut self, result: ItemResult, now: DateTime<Utc>) -> SubmitOutcome {
        self.claim_current();
        self.results.push(result.clone());

        if self.is_last() {
            self.countdown.cancel();
            self.completed_at = Some(now);
            return SubmitOutcome::Completed { result };
        }

        self.current += 1;
        self.restart_item(now);
        SubmitOutcome::Advanced {
            result,
            next_index: self.current,
        }
    }

    //
    // ─── TIMER ─────────────────────────────────────────────────────────────────
    //

    /// Advance the current countdown by `elapsed_secs`.
    ///
    /// Returns the target to auto-submit when this tick expired the countdown.
    /// Ticks for another session, or after completion, do nothing.
    pub fn tick(&mut self, session: LessonSessionId, elapsed_secs: u32) -> Option<SubmitTarget> {
        if session != self.id || self.is_complete() {
            return None;
        }
        if self.countdown.tick(elapsed_secs) && !self.is_submitted(self.current) {
            return Some(self.current_target());
        }
        None
    }

    fn restart_item(&mut self, now: DateTime<Utc>) {
        self.item_started_at = now;
        self.countdown = if self.is_submitted(self.current) {
            ItemCountdown::disabled()
        } else {
            ItemCountdown::new(self.settings.time_limit_for(&self.items[self.current]))
        };
    }
}

impl fmt::Debug for LessonSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LessonSession")
            .field("id", &self.id)
            .field("track", &self.track)
            .field("difficulty", &self.difficulty)
            .field("items_len", &self.items.len())
            .field("current", &self.current)
            .field("results_len", &self.results.len())
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
