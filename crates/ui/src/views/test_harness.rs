use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use codequest_core::QuestionBank;
use codequest_core::model::{DifficultyLevel, LearningTrack, LessonSettings};
use codequest_core::time::fixed_clock;
use services::ai::{AiStrategy, MockAssistant};
use services::{LessonLoopService, SimulatedTestRunner, TestRunner};
use storage::{InMemoryRepository, Storage};

use crate::context::{UiApp, build_app_context};
use crate::views::lesson::LessonTestHandles;
use crate::views::{AssistantView, HomeView, LessonView};

#[derive(Clone)]
struct TestApp {
    lesson_loop: Arc<LessonLoopService>,
    test_runner: Arc<dyn TestRunner>,
    assistant: Arc<dyn AiStrategy>,
}

impl UiApp for TestApp {
    fn default_track(&self) -> LearningTrack {
        LearningTrack::Html
    }

    fn default_difficulty(&self) -> DifficultyLevel {
        DifficultyLevel::Beginner
    }

    fn lesson_loop(&self) -> Arc<LessonLoopService> {
        Arc::clone(&self.lesson_loop)
    }

    fn test_runner(&self) -> Arc<dyn TestRunner> {
        Arc::clone(&self.test_runner)
    }

    fn assistant(&self) -> Arc<dyn AiStrategy> {
        Arc::clone(&self.assistant)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Lesson(LearningTrack, DifficultyLevel),
    Assistant(LearningTrack),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    lesson_handles: Option<LessonTestHandles>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    if let Some(handles) = props.lesson_handles.clone() {
        use_context_provider(|| handles);
    }
    rsx! {
        ErrorBoundary {
            handle_error: |_errors: ErrorContext| rsx! {
                div { class: "fatal", "Something went wrong" }
            },
            Router::<TestRoute> {}
        }
    }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Lesson(track, difficulty) => rsx! { LessonView { track, difficulty } },
        ViewKind::Assistant(track) => rsx! { AssistantView { track } },
    }
}

/// Collaborators and lesson knobs for a harness.
pub struct HarnessSetup {
    pub storage: Storage,
    pub bank: QuestionBank,
    pub settings: LessonSettings,
}

impl Default for HarnessSetup {
    fn default() -> Self {
        let repo = InMemoryRepository::new(fixed_clock());
        Self {
            storage: storage_from(&repo),
            bank: QuestionBank::builtin().expect("builtin bank"),
            settings: LessonSettings::default(),
        }
    }
}

pub fn storage_from(repo: &InMemoryRepository) -> Storage {
    Storage {
        progress: Arc::new(repo.clone()),
        streaks: Arc::new(repo.clone()),
        goals: Arc::new(repo.clone()),
        levels: Arc::new(repo.clone()),
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub lesson_handles: Option<LessonTestHandles>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    pub fn lesson(&self) -> &LessonTestHandles {
        self.lesson_handles.as_ref().expect("lesson view harness")
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    setup_view_harness_with(view, HarnessSetup::default())
}

pub fn setup_view_harness_with(view: ViewKind, setup: HarnessSetup) -> ViewHarness {
    let lesson_loop = LessonLoopService::new(fixed_clock(), setup.bank, &setup.storage)
        .with_settings(setup.settings)
        .with_shuffle_seed(Some(7));
    let app = Arc::new(TestApp {
        lesson_loop: Arc::new(lesson_loop),
        test_runner: Arc::new(SimulatedTestRunner::new(0, 1.0)),
        assistant: Arc::new(MockAssistant::new(Duration::ZERO, 0)),
    });
    let lesson_handles = match view {
        ViewKind::Lesson(..) => Some(LessonTestHandles::default()),
        _ => None,
    };

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            lesson_handles: lesson_handles.clone(),
        },
    );

    ViewHarness {
        dom,
        lesson_handles,
    }
}
