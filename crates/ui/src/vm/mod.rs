mod lesson_vm;
mod time_fmt;
mod track_vm;

pub use lesson_vm::{LessonIntent, LessonOutcome, LessonVm, start_lesson};
pub use time_fmt::{format_countdown, format_duration};
pub use track_vm::{DifficultyChoiceVm, TrackCardVm, map_track_cards};
