use serde::{Deserialize, Serialize};

/// XP needed to go from level `n` to `n + 1`.
pub const XP_PER_LEVEL_STEP: u64 = 100;

/// Snapshot of the learner's level as read from the leveling collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LevelInfo {
    pub current_level: u32,
    pub current_xp: u64,
    pub xp_into_level: u64,
    pub xp_for_next_level: u64,
}

/// Total XP at which `level` begins. Level 1 starts at 0, level 2 at 100, level 3 at 300.
#[must_use]
pub fn level_start_xp(level: u32) -> u64 {
    let n = u64::from(level.max(1));
    XP_PER_LEVEL_STEP * n * (n - 1) / 2
}

impl LevelInfo {
    #[must_use]
    pub fn from_xp(xp: u64) -> Self {
        let mut level = 1u32;
        while level < u32::MAX && level_start_xp(level + 1) <= xp {
            level += 1;
        }
        let start = level_start_xp(level);
        Self {
            current_level: level,
            current_xp: xp,
            xp_into_level: xp - start,
            xp_for_next_level: XP_PER_LEVEL_STEP * u64::from(level),
        }
    }

    /// Progress through the current level, 0..=100.
    #[must_use]
    pub fn percent_to_next(&self) -> u8 {
        if self.xp_for_next_level == 0 {
            return 0;
        }
        let pct = (self.xp_into_level * 100 / self.xp_for_next_level).min(100);
        u8::try_from(pct).unwrap_or(100)
    }
}
