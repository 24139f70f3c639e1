use dioxus::prelude::*;
use dioxus_router::Link;

use codequest_core::theme::track_icon;
use services::LessonReport;

use crate::routes::Route;
use crate::vm::format_duration;

#[component]
pub fn CompletionScreen(report: LessonReport, on_retry: EventHandler<()>) -> Element {
    let (minutes, secs) = report.duration_parts();
    let duration = format_duration(minutes, secs);
    let accuracy = report.accuracy_percent();
    let headline = match accuracy {
        90..=100 => "Outstanding!",
        70..=89 => "Great job!",
        50..=69 => "Nice effort!",
        _ => "Keep practicing!",
    };
    let track = report.track;

    rsx! {
        section { class: "lesson-complete",
            h3 { class: "lesson-complete__title", "{track_icon(track)} {headline}" }
            p { class: "lesson-complete__subtitle",
                "You finished {track.label()} · {report.difficulty.label()}"
            }
            dl { class: "lesson-complete__stats",
                dt { "Correct" }
                dd { "{report.correct_count} / {report.total_items}" }
                dt { "Accuracy" }
                dd { "{accuracy}%" }
                dt { "XP earned" }
                dd { "+{report.total_xp}" }
                dt { "Time" }
                dd { "{duration}" }
            }
            if let Some(level) = report.level {
                div { class: "lesson-complete__level",
                    p { "Level {level.current_level} · {level.current_xp} XP total" }
                    div { class: "level-bar",
                        div { class: "level-bar__fill", style: "width: {level.percent_to_next()}%;" }
                    }
                    p { class: "level-bar__label",
                        "{level.xp_into_level} / {level.xp_for_next_level} XP to level {level.current_level + 1}"
                    }
                }
            }
            div { class: "lesson-complete__actions",
                button {
                    class: "btn btn-primary",
                    id: "lesson-retry",
                    r#type: "button",
                    onclick: move |_| on_retry.call(()),
                    "Practice again"
                }
                Link { class: "btn btn-secondary", to: Route::Home {}, "Back to tracks" }
            }
        }
    }
}
