use dioxus::prelude::*;

use services::Navigation;

fn dot_class(current: bool, done: bool) -> &'static str {
    match (current, done) {
        (true, _) => "lesson-dot lesson-dot--current",
        (false, true) => "lesson-dot lesson-dot--done",
        (false, false) => "lesson-dot",
    }
}

#[component]
pub fn LessonNavigation(
    can_go_back: bool,
    can_go_forward: bool,
    current: usize,
    submitted: Vec<bool>,
    on_navigate: EventHandler<Navigation>,
) -> Element {
    rsx! {
        div { class: "lesson-nav__dots",
            for (index, done) in submitted.into_iter().enumerate() {
                button {
                    key: "{index}",
                    class: dot_class(index == current, done),
                    r#type: "button",
                    aria_label: "Go to item {index + 1}",
                    onclick: move |_| on_navigate.call(Navigation::GoTo(index)),
                    "{index + 1}"
                }
            }
        }
        div { class: "lesson-nav",
            button {
                class: "btn btn-secondary",
                id: "lesson-previous",
                r#type: "button",
                disabled: !can_go_back,
                onclick: move |_| on_navigate.call(Navigation::Previous),
                "← Previous"
            }
            button {
                class: "btn btn-ghost",
                id: "lesson-skip",
                r#type: "button",
                disabled: !can_go_forward,
                onclick: move |_| on_navigate.call(Navigation::Skip),
                "Skip"
            }
            button {
                class: "btn btn-secondary",
                id: "lesson-next",
                r#type: "button",
                disabled: !can_go_forward,
                onclick: move |_| on_navigate.call(Navigation::Next),
                "Next →"
            }
        }
    }
}
