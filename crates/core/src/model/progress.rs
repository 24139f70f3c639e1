use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::track::LearningTrack;

/// Correctly completed items per track. Drives track unlocking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompletedCounts {
    pub html: u32,
    pub css: u32,
    pub javascript: u32,
}

impl CompletedCounts {
    #[must_use]
    pub fn new(html: u32, css: u32, javascript: u32) -> Self {
        Self {
            html,
            css,
            javascript,
        }
    }

    #[must_use]
    pub fn get(&self, track: LearningTrack) -> u32 {
        match track {
            LearningTrack::Html => self.html,
            LearningTrack::Css => self.css,
            LearningTrack::Javascript => self.javascript,
        }
    }

    pub fn increment(&mut self, track: LearningTrack) {
        let slot = match track {
            LearningTrack::Html => &mut self.html,
            LearningTrack::Css => &mut self.css,
            LearningTrack::Javascript => &mut self.javascript,
        };
        *slot = slot.saturating_add(1);
    }
}

/// Daily-goal metric names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GoalMetric {
    QuestionsAnswered,
    XpEarned,
}

impl GoalMetric {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            GoalMetric::QuestionsAnswered => "questions_answered",
            GoalMetric::XpEarned => "xp_earned",
        }
    }
}

impl fmt::Display for GoalMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Consecutive-day activity streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StreakInfo {
    pub current_days: u32,
    pub longest_days: u32,
    pub last_active: Option<NaiveDate>,
}

impl StreakInfo {
    /// Register activity on `day`. Repeat activity on the same day is a no-op.
    pub fn record(&mut self, day: NaiveDate) {
        match self.last_active {
            Some(last) if last == day => return,
            Some(last) if last.succ_opt() == Some(day) => {
                self.current_days = self.current_days.saturating_add(1);
            }
            Some(last) if last > day => return,
            _ => self.current_days = 1,
        }
        self.longest_days = self.longest_days.max(self.current_days);
        self.last_active = Some(day);
    }
}
