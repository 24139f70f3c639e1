use dioxus::prelude::*;

use codequest_core::model::Question;
use services::ItemResult;

fn option_class(
    option: &str,
    question: &Question,
    selected: Option<&str>,
    revealed: bool,
) -> &'static str {
    let is_selected = selected == Some(option);
    if revealed && question.is_correct(option) {
        "option option--correct"
    } else if revealed && is_selected {
        "option option--incorrect"
    } else if is_selected {
        "option option--selected"
    } else {
        "option"
    }
}

pub(super) fn verdict_class(correct: bool) -> &'static str {
    if correct {
        "verdict verdict--correct"
    } else {
        "verdict verdict--incorrect"
    }
}

#[component]
pub fn QuestionCard(
    question: Question,
    selected: Option<String>,
    result: Option<ItemResult>,
    locked: bool,
    on_select: EventHandler<String>,
    on_submit: EventHandler<()>,
) -> Element {
    let revealed = result.is_some();
    let feedback = selected
        .as_deref()
        .filter(|_| revealed)
        .and_then(|choice| question.feedback_for(choice))
        .map(str::to_string);
    let can_submit = !locked && selected.is_some();

    rsx! {
        article { class: "item-card question-card",
            header { class: "item-card__header",
                span { class: "item-card__kind", "Question" }
                span { class: "item-card__points", "{question.points()} XP" }
            }
            p { class: "item-card__prompt", "{question.prompt()}" }
            if let Some(sample) = question.code_sample() {
                pre { class: "item-card__code", code { "{sample}" } }
            }
            div { class: "options", role: "radiogroup",
                for option in question.options().iter().cloned() {
                    button {
                        key: "{option}",
                        class: option_class(&option, &question, selected.as_deref(), revealed),
                        r#type: "button",
                        role: "radio",
                        aria_checked: selected.as_deref() == Some(option.as_str()),
                        disabled: locked,
                        onclick: {
                            let option = option.clone();
                            move |_| on_select.call(option.clone())
                        },
                        "{option}"
                    }
                }
            }
            if let Some(result) = result {
                div { class: verdict_class(result.score.is_correct),
                    if result.score.is_correct {
                        "Correct! +{result.score.xp_earned} XP"
                    } else {
                        "Incorrect. The answer is \"{question.correct_answer()}\"."
                    }
                }
                if let Some(feedback) = feedback {
                    p { class: "item-card__feedback", "{feedback}" }
                }
                p { class: "item-card__explanation", "{question.explanation()}" }
            } else {
                button {
                    class: "btn btn-primary",
                    id: "lesson-submit",
                    r#type: "button",
                    disabled: !can_submit,
                    onclick: move |_| on_submit.call(()),
                    "Submit answer"
                }
            }
        }
    }
}
