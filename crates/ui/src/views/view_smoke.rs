use std::sync::Arc;

use async_trait::async_trait;
use codequest_core::QuestionBank;
use codequest_core::model::{
    CompletedCounts, DifficultyLevel, ItemId, LearningTrack, LessonSettings, Question,
    QuestionDraft, QuestionId,
};
use codequest_core::time::fixed_clock;
use dioxus::prelude::ReadableExt;
use services::SubmitTarget;
use storage::{InMemoryRepository, ProgressRepository, Storage, StorageError};

use super::test_harness::{
    HarnessSetup, ViewHarness, ViewKind, setup_view_harness, setup_view_harness_with,
    storage_from,
};
use crate::vm::{LessonIntent, LessonVm};

fn paragraph_question(id: &str) -> Question {
    let mut draft = QuestionDraft::new(
        id,
        LearningTrack::Html,
        DifficultyLevel::Beginner,
        "Which tag defines a paragraph?",
        &["<p>", "<para>"],
        "<p>",
        10,
    );
    draft.explanation = "The p element wraps a paragraph.".into();
    draft.validate().unwrap()
}

fn single_question_bank() -> QuestionBank {
    QuestionBank::new(vec![paragraph_question("html-smoke-1")], Vec::new())
}

fn current_target(harness: &ViewHarness) -> SubmitTarget {
    let vm = harness.lesson().vm();
    harness
        .dom
        .in_runtime(|| vm.read().as_ref().map(LessonVm::current_target))
        .expect("lesson started")
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_locks_later_tracks() {
    let mut harness = setup_view_harness(ViewKind::Home);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("HTML"), "missing html card in {html}");
    assert!(html.contains("JavaScript"), "missing js card in {html}");
    assert!(
        html.contains("Complete 10 HTML items to unlock (0/10)"),
        "missing css lock note in {html}"
    );
    assert!(html.contains("Level 1"), "missing level in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_unlocks_css_after_ten_html_items() {
    let repo = InMemoryRepository::new(fixed_clock());
    for n in 0..10 {
        let id = ItemId::from(QuestionId::new(format!("html-{n}")));
        repo.record_answer(LearningTrack::Html, &id, true, 5)
            .await
            .expect("record answer");
    }
    let mut harness = setup_view_harness_with(
        ViewKind::Home,
        HarnessSetup {
            storage: storage_from(&repo),
            ..HarnessSetup::default()
        },
    );
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(!html.contains("HTML items to unlock"), "css still locked in {html}");
    assert!(
        html.contains("Complete 10 CSS items to unlock (0/10)"),
        "missing js lock note in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_renders_first_item() {
    let mut harness =
        setup_view_harness(ViewKind::Lesson(LearningTrack::Html, DifficultyLevel::Beginner));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Item 1 of 5"), "missing progress in {html}");
    assert!(html.contains("lesson-countdown"), "missing countdown in {html}");
    assert!(html.contains("Beginner"), "missing difficulty badge in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_shows_empty_state() {
    let mut harness = setup_view_harness_with(
        ViewKind::Lesson(LearningTrack::Css, DifficultyLevel::Advanced),
        HarnessSetup {
            bank: QuestionBank::default(),
            ..HarnessSetup::default()
        },
    );
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(
        html.contains("No questions available for CSS Advanced yet."),
        "missing empty state in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_completes_and_offers_retry() {
    let repo = InMemoryRepository::new(fixed_clock());
    let mut harness = setup_view_harness_with(
        ViewKind::Lesson(LearningTrack::Html, DifficultyLevel::Beginner),
        HarnessSetup {
            storage: storage_from(&repo),
            bank: single_question_bank(),
            settings: LessonSettings::new(false, 60, 300).unwrap(),
        },
    );
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Which tag defines a paragraph?"), "missing prompt in {html}");
    assert!(!html.contains("lesson-countdown"), "timer should be off in {html}");

    let dispatch = harness.lesson().dispatch();
    dispatch.call(LessonIntent::SelectOption("<p>".into()));
    harness.drive_async().await;
    dispatch.call(LessonIntent::Submit(current_target(&harness)));
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Practice again"), "missing retry in {html}");
    assert!(html.contains("1 / 1"), "missing score in {html}");
    assert!(html.contains("+10"), "missing xp in {html}");
    assert_eq!(repo.answers().unwrap().len(), 1);
    assert_eq!(repo.total_xp().unwrap(), 10);

    dispatch.call(LessonIntent::Retry);
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Item 1 of 1"), "retry did not restart in {html}");
    let vm = harness.lesson().vm();
    let complete = harness
        .dom
        .in_runtime(|| vm.read().as_ref().map(|lesson| lesson.is_complete()));
    assert_eq!(complete, Some(false));
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_ignores_a_repeated_submit_for_a_past_item() {
    let repo = InMemoryRepository::new(fixed_clock());
    let mut harness = setup_view_harness_with(
        ViewKind::Lesson(LearningTrack::Html, DifficultyLevel::Beginner),
        HarnessSetup {
            storage: storage_from(&repo),
            bank: QuestionBank::new(
                vec![paragraph_question("html-smoke-1"), paragraph_question("html-smoke-2")],
                Vec::new(),
            ),
            settings: LessonSettings::new(false, 60, 300).unwrap(),
        },
    );
    harness.rebuild();
    harness.drive_async().await;

    let dispatch = harness.lesson().dispatch();
    let first = current_target(&harness);
    dispatch.call(LessonIntent::SelectOption("<p>".into()));
    harness.drive_async().await;
    dispatch.call(LessonIntent::Submit(first));
    harness.drive_async().await;
    harness.drive_async().await;

    dispatch.call(LessonIntent::Submit(first));
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Item 2 of 2"), "second item should stay open in {html}");
    assert!(!html.contains("Practice again"), "lesson ended early in {html}");
    assert_eq!(repo.answers().unwrap().len(), 1);
    assert_eq!(current_target(&harness).index, 1);
}

struct OfflineProgress;

#[async_trait]
impl ProgressRepository for OfflineProgress {
    async fn record_answer(
        &self,
        _track: LearningTrack,
        _item_id: &ItemId,
        _is_correct: bool,
        _time_taken_secs: u32,
    ) -> Result<(), StorageError> {
        Err(StorageError::Unavailable("offline".into()))
    }

    async fn completed_counts(&self) -> Result<CompletedCounts, StorageError> {
        Ok(CompletedCounts::default())
    }
}

#[tokio::test(flavor = "current_thread")]
async fn lesson_view_smoke_surfaces_progress_failure() {
    let base = Storage::in_memory(fixed_clock());
    let mut harness = setup_view_harness_with(
        ViewKind::Lesson(LearningTrack::Html, DifficultyLevel::Beginner),
        HarnessSetup {
            storage: Storage {
                progress: Arc::new(OfflineProgress),
                ..base
            },
            bank: single_question_bank(),
            ..HarnessSetup::default()
        },
    );
    harness.rebuild();
    harness.drive_async().await;

    let dispatch = harness.lesson().dispatch();
    dispatch.call(LessonIntent::Submit(current_target(&harness)));
    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Something went wrong"), "missing boundary in {html}");
    let vm = harness.lesson().vm();
    let state = harness.dom.in_runtime(|| {
        vm.read()
            .as_ref()
            .map(|lesson| (lesson.current_index(), lesson.is_locked()))
    });
    assert_eq!(state, Some((0, false)));
}

struct UnreadableCounts;

#[async_trait]
impl ProgressRepository for UnreadableCounts {
    async fn record_answer(
        &self,
        _track: LearningTrack,
        _item_id: &ItemId,
        _is_correct: bool,
        _time_taken_secs: u32,
    ) -> Result<(), StorageError> {
        Ok(())
    }

    async fn completed_counts(&self) -> Result<CompletedCounts, StorageError> {
        Err(StorageError::Connection("counts unreadable".into()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_reports_unreadable_progress() {
    let base = Storage::in_memory(fixed_clock());
    let mut harness = setup_view_harness_with(
        ViewKind::Home,
        HarnessSetup {
            storage: Storage {
                progress: Arc::new(UnreadableCounts),
                ..base
            },
            ..HarnessSetup::default()
        },
    );
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();

    assert!(
        html.contains("Something went wrong. Please try again."),
        "missing error state in {html}"
    );
    assert!(!html.contains("track-grid"), "cards rendered despite error in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn assistant_view_smoke_renders_both_panels() {
    let mut harness = setup_view_harness(ViewKind::Assistant(LearningTrack::Css));
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("CSS assistant"), "missing title in {html}");
    assert!(html.contains("Review my code"), "missing review panel in {html}");
    assert!(html.contains("Generate question"), "missing generator in {html}");
}
