use dioxus::prelude::*;
use dioxus_router::Link;

use codequest_core::model::{DifficultyLevel, LearningTrack};
use codequest_core::theme::{track_gradient, track_icon};
use services::ai::{AiInput, AiOutput, CodeFeedback, GeneratedQuestion};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState};

#[component]
pub fn AssistantView(track: LearningTrack) -> Element {
    rsx! {
        div { class: "page assistant-page",
            header { class: "assistant-header", style: "background: {track_gradient(track)};",
                h2 { "{track_icon(track)} {track.label()} assistant" }
                nav { class: "assistant-tracks",
                    for other in LearningTrack::ALL {
                        Link { key: "{other}", to: Route::Assistant { track: other }, "{other.label()}" }
                    }
                }
            }
            p { class: "assistant-note",
                "Suggestions are generated locally from simple heuristics and templates."
            }
            div { class: "assistant-panels",
                CodeReviewPanel { key: "review-{track}", track }
                QuestionGeneratorPanel { key: "generate-{track}", track }
            }
        }
    }
}

#[component]
fn CodeReviewPanel(track: LearningTrack) -> Element {
    let ctx = use_context::<AppContext>();
    let assistant = ctx.assistant();
    let mut code = use_signal(String::new);
    let mut feedback = use_signal(|| ViewState::<CodeFeedback>::Idle);

    let review = move |_: MouseEvent| {
        let assistant = assistant.clone();
        let input = AiInput::ReviewCode { code: code() };
        spawn(async move {
            feedback.set(ViewState::Loading);
            let next = match assistant.analyze(&input, track).await {
                Ok(AiOutput::CodeFeedback(result)) => ViewState::Ready(result),
                Ok(_) => ViewState::Error(ViewError::Unknown),
                Err(err) => ViewState::Error(err.into()),
            };
            feedback.set(next);
        });
    };
    let busy = matches!(*feedback.read(), ViewState::Loading);

    rsx! {
        section { class: "assistant-panel",
            h3 { "Code review" }
            textarea {
                class: "code-editor",
                id: "assistant-code",
                rows: "10",
                spellcheck: "false",
                placeholder: "Paste your {track.label()} code here",
                value: "{code}",
                oninput: move |evt| code.set(evt.value()),
            }
            button {
                class: "btn btn-primary",
                id: "assistant-review",
                r#type: "button",
                disabled: busy,
                onclick: review,
                "Review my code"
            }
            match feedback() {
                ViewState::Idle => rsx! {},
                ViewState::Loading => rsx! {
                    p { class: "assistant-thinking", "Analyzing..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "assistant-error", "{err.message()}" }
                },
                ViewState::Ready(result) => rsx! {
                    div { class: "review",
                        p { class: "review__score", "Score: {result.score}/100" }
                        p { class: "review__summary", "{result.summary}" }
                        if !result.strengths.is_empty() {
                            h4 { "Strengths" }
                            ul { class: "review__strengths",
                                for (index, item) in result.strengths.iter().enumerate() {
                                    li { key: "{index}", "{item}" }
                                }
                            }
                        }
                        if !result.suggestions.is_empty() {
                            h4 { "Suggestions" }
                            ul { class: "review__suggestions",
                                for (index, item) in result.suggestions.iter().enumerate() {
                                    li { key: "{index}", "{item}" }
                                }
                            }
                        }
                    }
                },
            }
        }
    }
}

fn chip_class(active: bool) -> &'static str {
    if active { "chip chip--active" } else { "chip" }
}

#[component]
fn QuestionGeneratorPanel(track: LearningTrack) -> Element {
    let ctx = use_context::<AppContext>();
    let assistant = ctx.assistant();
    let mut topic = use_signal(String::new);
    let mut difficulty = use_signal(|| DifficultyLevel::Beginner);
    let mut generated = use_signal(|| ViewState::<GeneratedQuestion>::Idle);
    let mut picked = use_signal(|| None::<String>);

    let generate = move |_: MouseEvent| {
        let assistant = assistant.clone();
        let input = AiInput::GenerateQuestion {
            topic: topic(),
            difficulty: difficulty(),
        };
        spawn(async move {
            generated.set(ViewState::Loading);
            picked.set(None);
            let next = match assistant.analyze(&input, track).await {
                Ok(AiOutput::GeneratedQuestion(question)) => ViewState::Ready(question),
                Ok(_) => ViewState::Error(ViewError::Unknown),
                Err(err) => ViewState::Error(err.into()),
            };
            generated.set(next);
        });
    };
    let busy = matches!(*generated.read(), ViewState::Loading);

    rsx! {
        section { class: "assistant-panel",
            h3 { "Practice question" }
            input {
                class: "assistant-topic",
                id: "assistant-topic",
                r#type: "text",
                placeholder: "Topic, e.g. selectors or closures",
                value: "{topic}",
                oninput: move |evt| topic.set(evt.value()),
            }
            div { class: "assistant-difficulty",
                for level in DifficultyLevel::ALL {
                    button {
                        key: "{level}",
                        class: chip_class(difficulty() == level),
                        r#type: "button",
                        onclick: move |_| difficulty.set(level),
                        "{level.label()}"
                    }
                }
            }
            button {
                class: "btn btn-primary",
                id: "assistant-generate",
                r#type: "button",
                disabled: busy,
                onclick: generate,
                "Generate question"
            }
            match generated() {
                ViewState::Idle => rsx! {},
                ViewState::Loading => rsx! {
                    p { class: "assistant-thinking", "Writing a question..." }
                },
                ViewState::Error(err) => rsx! {
                    p { class: "assistant-error", "{err.message()}" }
                },
                ViewState::Ready(question) => rsx! {
                    GeneratedQuestionCard { question, picked: picked(), on_pick: move |option: String| picked.set(Some(option)) }
                },
            }
        }
    }
}

#[component]
fn GeneratedQuestionCard(
    question: GeneratedQuestion,
    picked: Option<String>,
    on_pick: EventHandler<String>,
) -> Element {
    let answered = picked.is_some();
    let correct = picked.as_deref() == Some(question.correct_answer.as_str());
    let verdict_class = if correct {
        "verdict verdict--correct"
    } else {
        "verdict verdict--incorrect"
    };

    rsx! {
        div { class: "generated",
            p { class: "item-card__prompt", "{question.prompt}" }
            div { class: "options",
                for option in question.options.iter().cloned() {
                    button {
                        key: "{option}",
                        class: "option",
                        r#type: "button",
                        disabled: answered,
                        onclick: {
                            let option = option.clone();
                            move |_| on_pick.call(option.clone())
                        },
                        "{option}"
                    }
                }
            }
            if answered {
                p { class: verdict_class,
                    if correct { "Correct!" } else { "Not quite. The answer is \"{question.correct_answer}\"." }
                }
                p { class: "item-card__explanation", "{question.explanation}" }
            }
        }
    }
}
