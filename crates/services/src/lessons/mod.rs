mod plan;
mod progress;
mod report;
mod response;
mod session;
mod timer;
mod workflow;

// Public API of the lesson subsystem.
pub use crate::error::LessonError;
pub use plan::{LessonBuilder, LessonPlan};
pub use progress::LessonProgress;
pub use report::LessonReport;
pub use response::{
    ItemResponse, ItemResult, LessonSessionId, Navigation, SubmitOutcome, SubmitTarget,
    SubmitTrigger,
};
pub use session::LessonSession;
pub use timer::{CountdownState, ItemCountdown};
pub use workflow::{LessonLoopService, LessonStart};
