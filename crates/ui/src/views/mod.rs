mod assistant;
mod home;
mod lesson;
mod state;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use assistant::AssistantView;
pub use home::HomeView;
pub use lesson::LessonView;
pub use state::{ViewError, ViewState, view_state_from_resource};
