/// Lifecycle of one item's countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    Running,
    Expired,
    Cancelled,
    Disabled,
}

/// Per-item countdown driven by external ticks.
///
/// Fires exactly once: the tick that reaches zero returns `true`, every later
/// tick is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemCountdown {
    limit_secs: u32,
    remaining_secs: u32,
    state: CountdownState,
}

impl ItemCountdown {
    /// `None` builds a disabled countdown that never expires.
    #[must_use]
    pub fn new(limit_secs: Option<u32>) -> Self {
        match limit_secs {
            Some(limit) => Self {
                limit_secs: limit,
                remaining_secs: limit,
                state: CountdownState::Running,
            },
            None => Self::disabled(),
        }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self {
            limit_secs: 0,
            remaining_secs: 0,
            state: CountdownState::Disabled,
        }
    }

    #[must_use]
    pub fn limit_secs(&self) -> u32 {
        self.limit_secs
    }

    #[must_use]
    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    #[must_use]
    pub fn state(&self) -> CountdownState {
        self.state
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == CountdownState::Running
    }

    /// Subtract `elapsed_secs`; returns `true` only on the tick that expires it.
    pub fn tick(&mut self, elapsed_secs: u32) -> bool {
        if self.state != CountdownState::Running {
            return false;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(elapsed_secs);
        if self.remaining_secs == 0 {
            self.state = CountdownState::Expired;
            return true;
        }
        false
    }

    pub fn cancel(&mut self) {
        if self.state == CountdownState::Running {
            self.state = CountdownState::Cancelled;
        }
    }

    /// Fraction of the limit still left, 0..=100. Disabled countdowns report 100.
    #[must_use]
    pub fn percent_remaining(&self) -> u8 {
        if self.limit_secs == 0 {
            return 100;
        }
        let pct = u64::from(self.remaining_secs) * 100 / u64::from(self.limit_secs);
        u8::try_from(pct).unwrap_or(100)
    }
}
