use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use codequest_core::model::{DifficultyLevel, LearningTrack};
use codequest_core::theme::track_icon;

use crate::context::AppContext;
use crate::views::{AssistantView, HomeView, LessonView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/lesson/:track/:difficulty", LessonView)]
        Lesson { track: LearningTrack, difficulty: DifficultyLevel },
        #[route("/assistant/:track", AssistantView)] Assistant { track: LearningTrack },
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    let ctx = use_context::<AppContext>();
    let track = ctx.default_track();
    let difficulty = ctx.default_difficulty();

    rsx! {
        nav { class: "sidebar",
            h1 { "CodeQuest" }
            ul {
                li { Link { to: Route::Home {}, "Tracks" } }
                li {
                    Link { to: Route::Lesson { track, difficulty },
                        "{track_icon(track)} Continue {track.label()}"
                    }
                }
                li { Link { to: Route::Assistant { track }, "AI Assistant" } }
            }
        }
    }
}
