use dioxus::prelude::*;
use dioxus_router::Link;
use tracing::warn;

use codequest_core::model::LevelInfo;
use codequest_core::theme::difficulty_color;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{TrackCardVm, map_track_cards};

#[derive(Clone, Debug, PartialEq)]
struct HomeData {
    cards: Vec<TrackCardVm>,
    level: LevelInfo,
}

#[component]
pub fn HomeView() -> Element {
    let ctx = use_context::<AppContext>();
    let lesson_loop = ctx.lesson_loop();

    let resource = use_resource(move || {
        let lesson_loop = lesson_loop.clone();
        async move {
            let completed = lesson_loop.completed_counts().await.map_err(|err| {
                warn!(error = %err, "failed to load completed counts");
                ViewError::from(err)
            })?;
            let level = lesson_loop.level_info().await.map_err(|err| {
                warn!(error = %err, "failed to load level info");
                ViewError::from(err)
            })?;
            Ok::<_, ViewError>(HomeData {
                cards: map_track_cards(lesson_loop.bank(), &completed),
                level,
            })
        }
    });
    let state = view_state_from_resource(resource);

    rsx! {
        div { class: "page home",
            h2 { "Choose a track" }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    p { class: "home-level",
                        "Level {data.level.current_level} · {data.level.current_xp} XP · {data.level.percent_to_next()}% to next level"
                    }
                    div { class: "track-grid",
                        for card in data.cards {
                            TrackCard { key: "{card.track()}", card }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn TrackCard(card: TrackCardVm) -> Element {
    let track = card.track();
    let theme = card.theme;
    let class = if card.unlocked {
        "track-card"
    } else {
        "track-card track-card--locked"
    };

    rsx! {
        section { class: "{class}", style: "--track-primary: {theme.colors.primary}; --track-surface: {theme.colors.background};",
            header { class: "track-card__header", style: "background: {card.gradient};",
                span { class: "track-card__icon", "{theme.icon}" }
                h3 { "{theme.name}" }
            }
            p { class: "track-card__tagline", "{theme.tagline}" }
            p { class: "track-card__description", "{theme.description}" }
            p { class: "track-card__completed", "Completed: {card.completed}" }
            if let Some(note) = card.lock_note.as_deref() {
                p { class: "track-card__lock", "🔒 {note}" }
            } else {
                div { class: "track-card__levels",
                    for choice in card.difficulties {
                        span { key: "{choice.difficulty}", class: "track-card__level",
                            if choice.items > 0 {
                                Link {
                                    class: "difficulty-link",
                                    style: "border-color: {difficulty_color(choice.difficulty)};",
                                    to: Route::Lesson { track, difficulty: choice.difficulty },
                                    "{choice.difficulty.label()} ({choice.items})"
                                }
                            } else {
                                span { class: "difficulty-link difficulty-link--empty",
                                    "{choice.difficulty.label()} (coming soon)"
                                }
                            }
                        }
                    }
                }
                Link { class: "track-card__assistant", to: Route::Assistant { track }, "Ask the assistant" }
            }
        }
    }
}
