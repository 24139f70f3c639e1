/// Aggregated view of lesson progress for the progress bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LessonProgress {
    pub total: usize,
    pub current_index: usize,
    pub answered: usize,
    pub is_complete: bool,
}

impl LessonProgress {
    #[must_use]
    pub fn new(total: usize, current_index: usize, answered: usize, is_complete: bool) -> Self {
        Self {
            total,
            current_index,
            answered,
            is_complete,
        }
    }

    /// One-based position of the current item, clamped to `total`.
    #[must_use]
    pub fn position(&self) -> usize {
        (self.current_index + 1).min(self.total)
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.answered)
    }

    /// Answered share, 0..=100. A completed lesson always reads 100.
    #[must_use]
    pub fn percent(&self) -> u8 {
        if self.is_complete {
            return 100;
        }
        if self.total == 0 {
            return 0;
        }
        let pct = (self.answered * 100 / self.total).min(100);
        u8::try_from(pct).unwrap_or(100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_and_position() {
        let progress = LessonProgress::new(4, 1, 1, false);
        assert_eq!(progress.position(), 2);
        assert_eq!(progress.percent(), 25);
        assert_eq!(progress.remaining(), 3);

        let done = LessonProgress::new(3, 2, 2, true);
        assert_eq!(done.percent(), 100);
    }
}
