use dioxus::prelude::*;

use services::lessons::{CountdownState, ItemCountdown};

use crate::vm::format_countdown;

/// Seconds left at which the timer turns urgent.
const URGENT_SECS: u32 = 10;

#[component]
pub fn CountdownTimer(countdown: ItemCountdown) -> Element {
    let remaining = countdown.remaining_secs();
    let class = match countdown.state() {
        CountdownState::Expired => "countdown countdown--expired",
        CountdownState::Running if remaining <= URGENT_SECS => "countdown countdown--urgent",
        _ => "countdown",
    };

    rsx! {
        div { class: "{class}", id: "lesson-countdown",
            span { class: "countdown__icon", "⏱" }
            span { class: "countdown__label", "{format_countdown(remaining)}" }
            div { class: "countdown__bar",
                div {
                    class: "countdown__fill",
                    style: "width: {countdown.percent_remaining()}%;",
                }
            }
        }
    }
}
