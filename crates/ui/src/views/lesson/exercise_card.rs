use dioxus::prelude::*;

use codequest_core::model::{CodeExercise, TestRunReport};
use services::ItemResult;

use super::question_card::verdict_class;

#[component]
pub fn ExerciseCard(
    exercise: CodeExercise,
    report: Option<TestRunReport>,
    result: Option<ItemResult>,
    locked: bool,
    on_run: EventHandler<String>,
    on_submit: EventHandler<()>,
) -> Element {
    let starter = exercise.starter_code().to_string();
    let mut code = use_signal(move || starter);
    let mut hints_shown = use_signal(|| 0_usize);

    let hints = exercise.hints();
    let shown = hints_shown().min(hints.len());
    let more_hints = shown < hints.len();
    let total_cases = exercise.test_cases().len();

    rsx! {
        article { class: "item-card exercise-card",
            header { class: "item-card__header",
                span { class: "item-card__kind", "Code exercise" }
                span { class: "item-card__points", "{exercise.points()} XP" }
            }
            p { class: "item-card__prompt", "{exercise.prompt()}" }
            textarea {
                class: "code-editor",
                id: "exercise-code",
                spellcheck: "false",
                rows: "12",
                disabled: locked,
                value: "{code}",
                oninput: move |evt| code.set(evt.value()),
            }
            ul { class: "test-cases",
                for (index, case) in exercise.test_cases().iter().enumerate() {
                    li {
                        key: "{index}",
                        class: case_class(report.as_ref(), index),
                        code { "{case.input}" }
                        " → "
                        code { "{case.expected_output}" }
                    }
                }
            }
            if let Some(report) = report.as_ref() {
                p { class: "test-summary", "{report.passed()} / {report.total()} tests passing" }
            }
            if shown > 0 {
                ol { class: "hints",
                    for (index, hint) in hints[..shown].iter().enumerate() {
                        li { key: "{index}", "{hint}" }
                    }
                }
            }
            if let Some(result) = result {
                div { class: verdict_class(result.score.is_correct),
                    if result.score.is_correct {
                        "All tests passed! +{result.score.xp_earned} XP"
                    } else {
                        "Not all tests passed. +{result.score.xp_earned} XP of {exercise.points()}"
                    }
                }
                p { class: "item-card__explanation", "{exercise.explanation()}" }
            } else {
                div { class: "exercise-actions",
                    button {
                        class: "btn btn-secondary",
                        id: "exercise-run",
                        r#type: "button",
                        disabled: locked,
                        onclick: move |_| on_run.call(code()),
                        "Run tests ({total_cases})"
                    }
                    button {
                        class: "btn btn-ghost",
                        id: "exercise-hint",
                        r#type: "button",
                        disabled: !more_hints,
                        onclick: move |_| *hints_shown.write() += 1,
                        "Show hint"
                    }
                    button {
                        class: "btn btn-primary",
                        id: "lesson-submit",
                        r#type: "button",
                        disabled: locked,
                        onclick: move |_| on_submit.call(()),
                        "Submit solution"
                    }
                }
            }
        }
    }
}

fn case_class(report: Option<&TestRunReport>, index: usize) -> &'static str {
    let outcome = report.and_then(|r| r.outcomes().iter().find(|o| o.case_index == index));
    match outcome {
        Some(o) if o.passed => "test-case test-case--passed",
        Some(_) => "test-case test-case--failed",
        None => "test-case",
    }
}
