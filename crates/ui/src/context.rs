use std::sync::Arc;

use codequest_core::model::{DifficultyLevel, LearningTrack};
use services::ai::AiStrategy;
use services::{LessonLoopService, TestRunner};

pub trait UiApp: Send + Sync {
    fn default_track(&self) -> LearningTrack;
    fn default_difficulty(&self) -> DifficultyLevel;

    fn lesson_loop(&self) -> Arc<LessonLoopService>;
    fn test_runner(&self) -> Arc<dyn TestRunner>;
    fn assistant(&self) -> Arc<dyn AiStrategy>;
}

#[derive(Clone)]
pub struct AppContext {
    default_track: LearningTrack,
    default_difficulty: DifficultyLevel,

    lesson_loop: Arc<LessonLoopService>,
    test_runner: Arc<dyn TestRunner>,
    assistant: Arc<dyn AiStrategy>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            default_track: app.default_track(),
            default_difficulty: app.default_difficulty(),
            lesson_loop: app.lesson_loop(),
            test_runner: app.test_runner(),
            assistant: app.assistant(),
        }
    }

    #[must_use]
    pub fn default_track(&self) -> LearningTrack {
        self.default_track
    }

    #[must_use]
    pub fn default_difficulty(&self) -> DifficultyLevel {
        self.default_difficulty
    }

    #[must_use]
    pub fn lesson_loop(&self) -> Arc<LessonLoopService> {
        Arc::clone(&self.lesson_loop)
    }

    #[must_use]
    pub fn test_runner(&self) -> Arc<dyn TestRunner> {
        Arc::clone(&self.test_runner)
    }

    #[must_use]
    pub fn assistant(&self) -> Arc<dyn AiStrategy> {
        Arc::clone(&self.assistant)
    }
}

// Provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
