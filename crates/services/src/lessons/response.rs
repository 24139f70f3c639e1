use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use codequest_core::model::{ItemId, LessonItem, TestRunReport};
use codequest_core::scoring::ItemScore;

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one lesson run. Every start or retry gets a fresh id.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LessonSessionId(u64);

impl LessonSessionId {
    pub(crate) fn next() -> Self {
        Self(NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed))
    }

    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for LessonSessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LessonSessionId({})", self.0)
    }
}

impl fmt::Display for LessonSessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The exact item a submission is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTarget {
    pub session: LessonSessionId,
    pub index: usize,
}

/// What the learner produced for the current item, possibly partial.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemResponse {
    /// Selected option, `None` when nothing was picked.
    Choice(Option<String>),
    /// Latest test run, `None` when tests were never run.
    TestRun(Option<TestRunReport>),
}

impl ItemResponse {
    /// The "nothing entered" response for `item`.
    #[must_use]
    pub fn empty_for(item: &LessonItem) -> Self {
        match item {
            LessonItem::Question(_) => Self::Choice(None),
            LessonItem::Exercise(_) => Self::TestRun(None),
        }
    }
}

/// Learner-driven move between items. Never scores anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Previous,
    Next,
    Skip,
    GoTo(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitTrigger {
    Manual,
    Timeout,
}

/// Recorded outcome for one item in a lesson.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemResult {
    pub item_id: ItemId,
    pub index: usize,
    pub score: ItemScore,
    pub time_taken_secs: u32,
    pub trigger: SubmitTrigger,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Advanced { result: ItemResult, next_index: usize },
    Completed { result: ItemResult },
    /// Stale session, non-current index or an item already submitted.
    Ignored,
}

impl SubmitOutcome {
    #[must_use]
    pub fn result(&self) -> Option<&ItemResult> {
        match self {
            Self::Advanced { result, .. } | Self::Completed { result } => Some(result),
            Self::Ignored => None,
        }
    }

    #[must_use]
    pub fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_ids_are_unique() {
        let a = LessonSessionId::next();
        let b = LessonSessionId::next();
        assert_ne!(a, b);
        assert!(b.value() > a.value());
    }
}
