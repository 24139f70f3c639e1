mod completion;
mod container;
mod countdown;
mod exercise_card;
mod navigation;
mod progress_bar;
mod question_card;

pub use container::LessonView;

#[cfg(test)]
pub(crate) use container::LessonTestHandles;
