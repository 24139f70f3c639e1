//! Progress, streak, daily-goal and level collaborators behind async traits.

#![forbid(unsafe_code)]

pub mod memory;
pub mod repository;

pub use memory::InMemoryRepository;
pub use repository::{
    DailyGoalRepository, LevelRepository, ProgressRepository, Storage, StorageError,
    StreakRepository,
};
