use dioxus::prelude::*;

use codequest_core::model::LearningTrack;
use codequest_core::theme::track_colors;
use services::LessonProgress;

#[component]
pub fn ProgressBar(progress: LessonProgress, track: LearningTrack) -> Element {
    let color = track_colors(track).primary;
    let percent = progress.percent();

    rsx! {
        div { class: "lesson-progress",
            span { class: "lesson-progress__label",
                "Item {progress.position()} of {progress.total} · {progress.answered} answered"
            }
            div {
                class: "lesson-progress__track",
                role: "progressbar",
                aria_valuemin: "0",
                aria_valuemax: "100",
                aria_valuenow: "{percent}",
                div {
                    class: "lesson-progress__fill",
                    style: "width: {percent}%; background: {color};",
                }
            }
        }
    }
}
