use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::Link;
use tracing::warn;

use codequest_core::model::{DifficultyLevel, LearningTrack, LessonItem};
use codequest_core::theme::{difficulty_color, track_gradient, track_icon};
use services::{ItemResult, SubmitTrigger};

use super::completion::CompletionScreen;
use super::countdown::CountdownTimer;
use super::exercise_card::ExerciseCard;
use super::navigation::LessonNavigation;
use super::progress_bar::ProgressBar;
use super::question_card::QuestionCard;
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{LessonIntent, LessonOutcome, LessonVm, start_lesson};

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

const TICK: Duration = Duration::from_secs(1);

#[component]
pub fn LessonView(track: LearningTrack, difficulty: DifficultyLevel) -> Element {
    // Keyed so a new track or difficulty mounts a fresh lesson.
    rsx! {
        LessonContainer { key: "{track}-{difficulty}", track, difficulty }
    }
}

#[component]
fn LessonContainer(track: LearningTrack, difficulty: DifficultyLevel) -> Element {
    let ctx = use_context::<AppContext>();
    let lesson_loop = ctx.lesson_loop();
    let test_runner = ctx.test_runner();

    let error = use_signal(|| None::<ViewError>);
    let fatal = use_signal(|| None::<ViewError>);
    let vm = use_signal(|| None::<LessonVm>);

    let lesson_loop_for_resource = lesson_loop.clone();
    let resource = use_resource(move || {
        let lesson_loop = lesson_loop_for_resource.clone();
        let mut vm = vm;
        let mut error = error;
        async move {
            let started = start_lesson(&lesson_loop, track, difficulty);
            let ready = started.is_some();
            vm.set(started);
            error.set(None);
            Ok::<_, ViewError>(ready)
        }
    });
    let state = view_state_from_resource(resource);

    let lesson_loop_for_timer = lesson_loop.clone();
    use_future(move || {
        let lesson_loop = lesson_loop_for_timer.clone();
        let mut vm = vm;
        let mut error = error;
        let mut fatal = fatal;
        async move {
            loop {
                tokio::time::sleep(TICK).await;
                let counting = vm.read().as_ref().is_some_and(LessonVm::shows_countdown);
                if !counting {
                    continue;
                }
                let taken = vm.write().take();
                let Some(mut vm_value) = taken else {
                    continue;
                };
                let result = vm_value.tick(&lesson_loop, 1).await;
                vm.set(Some(vm_value));
                if let Err(err) = result {
                    if err.is_fatal() {
                        fatal.set(Some(err));
                    } else {
                        error.set(Some(err));
                    }
                }
            }
        }
    });

    let dispatch_intent = {
        let lesson_loop = lesson_loop.clone();
        use_callback(move |intent: LessonIntent| {
            let mut vm = vm;
            let mut error = error;
            let mut fatal = fatal;
            match intent {
                LessonIntent::SelectOption(option) => {
                    if let Some(vm) = vm.write().as_mut() {
                        vm.select_option(option);
                    }
                }
                LessonIntent::RunTests(code) => {
                    if let Some(vm) = vm.write().as_mut() {
                        vm.run_tests(test_runner.as_ref(), &code);
                    }
                }
                LessonIntent::Navigate(navigation) => {
                    if let Some(vm) = vm.write().as_mut() {
                        vm.navigate(&lesson_loop, navigation);
                    }
                }
                LessonIntent::Retry => {
                    let next = vm.read().as_ref().map(|vm| vm.retry(&lesson_loop));
                    match next {
                        Some(Ok(next)) => {
                            vm.set(Some(next));
                            error.set(None);
                        }
                        Some(Err(err)) => error.set(Some(err)),
                        None => error.set(Some(ViewError::Unknown)),
                    }
                }
                LessonIntent::Submit(target) => {
                    let lesson_loop = lesson_loop.clone();
                    spawn(async move {
                        // Held by the countdown's own submission; that one wins.
                        let taken = vm.write().take();
                        let Some(mut vm_value) = taken else {
                            return;
                        };

                        let result = vm_value.submit(&lesson_loop, target).await;

                        // Put the lesson back even on failure so the item stays answerable.
                        vm.set(Some(vm_value));

                        match result {
                            Ok(LessonOutcome::Continue | LessonOutcome::Completed) => {
                                error.set(None);
                            }
                            Ok(LessonOutcome::Ignored) => {}
                            Err(err) if err.is_fatal() => {
                                warn!(error = %err, "lesson submission failed");
                                fatal.set(Some(err));
                            }
                            Err(err) => error.set(Some(err)),
                        }
                    });
                }
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<LessonTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    if let Some(err) = fatal.read().clone() {
        return Err(err.into());
    }

    let header_style = format!("background: {};", track_gradient(track));
    let difficulty_style = format!("background: {};", difficulty_color(difficulty));

    rsx! {
        div { class: "page lesson-page",
            header { class: "lesson-header", style: "{header_style}",
                h2 { class: "lesson-header__title", "{track_icon(track)} {track.label()}" }
                span { class: "lesson-header__difficulty", style: "{difficulty_style}", "{difficulty.label()}" }
                Link { class: "lesson-header__quit", to: Route::Home {}, "Quit" }
            }
            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading lesson..." }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
                ViewState::Ready(false) => rsx! {
                    div { class: "lesson-empty",
                        p { "No questions available for {track.label()} {difficulty.label()} yet." }
                        Link { to: Route::Home {}, "Pick another lesson" }
                    }
                },
                ViewState::Ready(true) => rsx! {
                    if let Some(err) = error.read().as_ref() {
                        p { class: "lesson-error", "{err.message()}" }
                    }
                    LessonBody { vm, on_intent: dispatch_intent }
                },
            }
        }
    }
}

#[component]
fn LessonBody(vm: Signal<Option<LessonVm>>, on_intent: EventHandler<LessonIntent>) -> Element {
    let guard = vm.read();
    let Some(lesson) = guard.as_ref() else {
        return rsx! {
            p { "Saving..." }
        };
    };

    if lesson.is_complete() {
        return rsx! {
            if let Some(report) = lesson.report().cloned() {
                CompletionScreen { report, on_retry: move |()| on_intent.call(LessonIntent::Retry) }
            } else {
                p { "Lesson complete." }
            }
        };
    }

    let progress = lesson.progress();
    let countdown = lesson.countdown();
    let shows_countdown = lesson.shows_countdown();
    let locked = lesson.is_locked();
    let result = lesson.current_result().cloned();
    let target = lesson.current_target();
    let item_key = format!("{}-{}", lesson.session_id(), lesson.current_index());
    let can_go_back = lesson.can_go_back();
    let can_go_forward = lesson.can_go_forward();
    let current = lesson.current_index();
    let submitted: Vec<bool> = (0..lesson.session().total_items())
        .map(|index| lesson.session().is_submitted(index))
        .collect();

    let last_answer = lesson.session().results().last().and_then(|result| {
        lesson
            .session()
            .items()
            .get(result.index)
            .map(|item| (result.clone(), item.explanation().to_string()))
    });

    rsx! {
        ProgressBar { progress, track: lesson.track() }
        if let Some((result, explanation)) = last_answer {
            LastAnswer { result, explanation }
        }
        if shows_countdown {
            CountdownTimer { countdown }
        }
        match lesson.current_item().cloned() {
            Some(LessonItem::Question(question)) => rsx! {
                QuestionCard {
                    key: "{item_key}",
                    question,
                    selected: lesson.selected_option().map(str::to_string),
                    result,
                    locked,
                    on_select: move |option: String| on_intent.call(LessonIntent::SelectOption(option)),
                    on_submit: move |()| on_intent.call(LessonIntent::Submit(target)),
                }
            },
            Some(LessonItem::Exercise(exercise)) => rsx! {
                ExerciseCard {
                    key: "{item_key}",
                    exercise,
                    report: lesson.last_test_run().cloned(),
                    result,
                    locked,
                    on_run: move |code: String| on_intent.call(LessonIntent::RunTests(code)),
                    on_submit: move |()| on_intent.call(LessonIntent::Submit(target)),
                }
            },
            None => rsx! {},
        }
        LessonNavigation {
            can_go_back,
            can_go_forward,
            current,
            submitted,
            on_navigate: move |navigation| on_intent.call(LessonIntent::Navigate(navigation)),
        }
    }
}

/// Feedback for the most recent submission, shown above the next item.
#[component]
fn LastAnswer(result: ItemResult, explanation: String) -> Element {
    let (class, verdict) = if result.score.is_correct {
        ("last-answer last-answer--correct", "Correct!")
    } else {
        ("last-answer last-answer--incorrect", "Not quite.")
    };
    let timed_out = result.trigger == SubmitTrigger::Timeout;

    rsx! {
        div { class: "{class}",
            strong { "{verdict}" }
            span { class: "last-answer__xp", " +{result.score.xp_earned} XP" }
            if timed_out {
                span { class: "last-answer__timeout", " (time ran out)" }
            }
            if !explanation.is_empty() {
                p { class: "last-answer__explanation", "{explanation}" }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct LessonTestHandles {
    dispatch: Rc<RefCell<Option<Callback<LessonIntent>>>>,
    vm: Rc<RefCell<Option<Signal<Option<LessonVm>>>>>,
}

#[cfg(test)]
impl LessonTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<LessonIntent>, vm: Signal<Option<LessonVm>>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<LessonIntent> {
        (*self.dispatch.borrow()).expect("lesson dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<Option<LessonVm>> {
        (*self.vm.borrow()).expect("lesson vm registered")
    }
}
