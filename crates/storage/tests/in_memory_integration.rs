use codequest_core::model::{ExerciseId, GoalMetric, ItemId, LearningTrack, QuestionId};
use codequest_core::theme::is_track_unlocked;
use codequest_core::time::fixed_clock;
use storage::Storage;

#[tokio::test]
async fn ten_correct_html_answers_unlock_css() {
    let storage = Storage::in_memory(fixed_clock());

    for n in 0..9 {
        let id = ItemId::from(QuestionId::new(format!("html-q-{n}")));
        storage
            .progress
            .record_answer(LearningTrack::Html, &id, true, 5)
            .await
            .unwrap();
    }
    let counts = storage.progress.completed_counts().await.unwrap();
    assert!(!is_track_unlocked(LearningTrack::Css, &counts));

    let id = ItemId::from(ExerciseId::new("html-ex-1"));
    storage
        .progress
        .record_answer(LearningTrack::Html, &id, true, 60)
        .await
        .unwrap();
    let counts = storage.progress.completed_counts().await.unwrap();
    assert!(is_track_unlocked(LearningTrack::Css, &counts));
    assert!(!is_track_unlocked(LearningTrack::Javascript, &counts));
}

#[tokio::test]
async fn trait_objects_see_the_same_goal_and_level_state() {
    let storage = Storage::in_memory(fixed_clock());
    let clone = storage.clone();

    storage
        .goals
        .record_progress(GoalMetric::XpEarned, 40)
        .await
        .unwrap();
    clone
        .streaks
        .record_activity(40, 1, &[LearningTrack::Css])
        .await
        .unwrap();

    assert_eq!(clone.goals.progress(GoalMetric::XpEarned).await.unwrap(), 40);
    let level = storage.levels.level_info().await.unwrap();
    assert_eq!(level.current_xp, 40);
    assert_eq!(storage.streaks.current_streak().await.unwrap().current_days, 1);
}
