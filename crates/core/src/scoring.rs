//! Correctness and XP for a single submitted item.

use crate::model::{CodeExercise, Question};

/// Outcome of scoring one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemScore {
    pub is_correct: bool,
    pub xp_earned: u32,
}

impl ItemScore {
    #[must_use]
    pub const fn zero() -> Self {
        Self {
            is_correct: false,
            xp_earned: 0,
        }
    }
}

/// Full points for the exact correct option, nothing otherwise.
///
/// `None` (no selection) scores like any wrong option.
#[must_use]
pub fn score_choice(question: &Question, choice: Option<&str>) -> ItemScore {
    match choice {
        Some(choice) if question.is_correct(choice) => ItemScore {
            is_correct: true,
            xp_earned: question.points(),
        },
        _ => ItemScore::zero(),
    }
}

/// Points scaled by the passed fraction, rounded half up. Correct only when every test passed.
#[must_use]
pub fn score_exercise(exercise: &CodeExercise, passed: usize, total: usize) -> ItemScore {
    if total == 0 {
        return ItemScore::zero();
    }
    let passed = passed.min(total);
    let points = u64::from(exercise.points());
    let (passed_u, total_u) = (passed as u64, total as u64);
    let xp = (2 * points * passed_u + total_u) / (2 * total_u);

    ItemScore {
        is_correct: passed == total,
        xp_earned: u32::try_from(xp).unwrap_or(u32::MAX),
    }
}
