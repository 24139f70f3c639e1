use std::collections::HashMap;

use codequest_core::model::{DifficultyLevel, LearningTrack, LessonItem, TestRunReport};
use services::lessons::{CountdownState, ItemCountdown};
use services::{
    ItemResponse, ItemResult, LessonLoopService, LessonProgress, LessonReport, LessonSession,
    LessonSessionId, LessonStart, Navigation, SubmitOutcome, SubmitTarget, SubmitTrigger,
    TestRunner,
};

use crate::views::ViewError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LessonIntent {
    SelectOption(String),
    RunTests(String),
    /// Submit the item that was on screen when the learner clicked.
    Submit(SubmitTarget),
    Navigate(Navigation),
    Retry,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LessonOutcome {
    Continue,
    Completed,
    Ignored,
}

/// One lesson plus the learner's in-progress input per item.
pub struct LessonVm {
    session: LessonSession,
    drafts: HashMap<usize, ItemResponse>,
    report: Option<LessonReport>,
}

impl LessonVm {
    #[must_use]
    pub fn new(session: LessonSession) -> Self {
        Self {
            session,
            drafts: HashMap::new(),
            report: None,
        }
    }

    #[must_use]
    pub fn session(&self) -> &LessonSession {
        &self.session
    }

    #[must_use]
    pub fn session_id(&self) -> LessonSessionId {
        self.session.id()
    }

    #[must_use]
    pub fn track(&self) -> LearningTrack {
        self.session.track()
    }

    #[must_use]
    pub fn difficulty(&self) -> DifficultyLevel {
        self.session.difficulty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.session.current_index()
    }

    #[must_use]
    pub fn current_target(&self) -> SubmitTarget {
        self.session.current_target()
    }

    #[must_use]
    pub fn current_item(&self) -> Option<&LessonItem> {
        self.session.current_item()
    }

    #[must_use]
    pub fn progress(&self) -> LessonProgress {
        self.session.progress()
    }

    #[must_use]
    pub fn countdown(&self) -> ItemCountdown {
        *self.session.countdown()
    }

    #[must_use]
    pub fn shows_countdown(&self) -> bool {
        !self.session.is_complete() && self.countdown().state() != CountdownState::Disabled
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    #[must_use]
    pub fn report(&self) -> Option<&LessonReport> {
        self.report.as_ref()
    }

    #[must_use]
    pub fn current_result(&self) -> Option<&ItemResult> {
        self.session.result_for(self.current_index())
    }

    /// Inputs are frozen once the current item has been submitted.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.session.is_complete() || self.session.is_submitted(self.current_index())
    }

    #[must_use]
    pub fn can_go_back(&self) -> bool {
        !self.is_complete() && self.current_index() > 0
    }

    #[must_use]
    pub fn can_go_forward(&self) -> bool {
        !self.is_complete() && !self.session.is_last()
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<&str> {
        match self.drafts.get(&self.current_index()) {
            Some(ItemResponse::Choice(choice)) => choice.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn last_test_run(&self) -> Option<&TestRunReport> {
        match self.drafts.get(&self.current_index()) {
            Some(ItemResponse::TestRun(report)) => report.as_ref(),
            _ => None,
        }
    }

    /// Whatever the learner has entered for the current item so far.
    #[must_use]
    pub fn pending_response(&self) -> Option<ItemResponse> {
        self.drafts.get(&self.current_index()).cloned()
    }

    /// Returns `false` if the current item is not an open question.
    pub fn select_option(&mut self, option: String) -> bool {
        if self.is_locked() || !matches!(self.current_item(), Some(LessonItem::Question(_))) {
            return false;
        }
        self.drafts
            .insert(self.current_index(), ItemResponse::Choice(Some(option)));
        true
    }

    /// Run the current exercise's tests against `code` and keep the report.
    pub fn run_tests(&mut self, runner: &dyn TestRunner, code: &str) -> Option<&TestRunReport> {
        if self.is_locked() {
            return None;
        }
        let Some(LessonItem::Exercise(exercise)) = self.current_item() else {
            return None;
        };
        let report = runner.run(exercise, code);
        let index = self.current_index();
        self.drafts
            .insert(index, ItemResponse::TestRun(Some(report)));
        self.last_test_run()
    }

    pub fn navigate(&mut self, service: &LessonLoopService, navigation: Navigation) -> bool {
        service.navigate(&mut self.session, navigation)
    }

    /// Manual submission for `target`, the item the learner was looking at.
    ///
    /// A target that is no longer current (the countdown already submitted it, or
    /// the lesson moved on) is ignored without recording anything.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::ProgressUnavailable` when the answer could not be recorded.
    /// Returns `ViewError::Unknown` for other failures.
    pub async fn submit(
        &mut self,
        service: &LessonLoopService,
        target: SubmitTarget,
    ) -> Result<LessonOutcome, ViewError> {
        let Some(item) = self.session.items().get(target.index) else {
            return Ok(LessonOutcome::Ignored);
        };
        let response = self
            .drafts
            .get(&target.index)
            .cloned()
            .unwrap_or_else(|| ItemResponse::empty_for(item));
        let outcome = service
            .submit(&mut self.session, target, response, SubmitTrigger::Manual)
            .await?;
        self.finish(service, outcome).await
    }

    /// # Errors
    ///
    /// Same as [`LessonVm::submit`].
    pub async fn submit_current(
        &mut self,
        service: &LessonLoopService,
    ) -> Result<LessonOutcome, ViewError> {
        let target = self.current_target();
        self.submit(service, target).await
    }

    /// Advance the countdown by `elapsed_secs`, submitting on expiry.
    ///
    /// # Errors
    ///
    /// Same as [`LessonVm::submit_current`].
    pub async fn tick(
        &mut self,
        service: &LessonLoopService,
        elapsed_secs: u32,
    ) -> Result<Option<LessonOutcome>, ViewError> {
        let pending = self.pending_response();
        let id = self.session_id();
        match service
            .tick(&mut self.session, id, elapsed_secs, pending)
            .await?
        {
            Some(outcome) => self.finish(service, outcome).await.map(Some),
            None => Ok(None),
        }
    }

    /// # Errors
    ///
    /// Returns `ViewError::Unknown` if the lesson is still running or the bank is empty.
    pub fn retry(&self, service: &LessonLoopService) -> Result<Self, ViewError> {
        Ok(Self::new(service.retry(&self.session)?))
    }

    async fn finish(
        &mut self,
        service: &LessonLoopService,
        outcome: SubmitOutcome,
    ) -> Result<LessonOutcome, ViewError> {
        match outcome {
            SubmitOutcome::Ignored => Ok(LessonOutcome::Ignored),
            SubmitOutcome::Advanced { .. } => Ok(LessonOutcome::Continue),
            SubmitOutcome::Completed { .. } => {
                self.report = Some(service.report(&self.session).await?);
                Ok(LessonOutcome::Completed)
            }
        }
    }
}

/// `None` when there is nothing to practice for this track and difficulty.
#[must_use]
pub fn start_lesson(
    service: &LessonLoopService,
    track: LearningTrack,
    difficulty: DifficultyLevel,
) -> Option<LessonVm> {
    match service.start_lesson(track, difficulty) {
        LessonStart::Ready(session) => Some(LessonVm::new(session)),
        LessonStart::Empty { .. } => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codequest_core::QuestionBank;
    use codequest_core::model::{LessonSettings, QuestionDraft};
    use codequest_core::time::fixed_clock;
    use services::SimulatedTestRunner;
    use storage::Storage;

    fn service_with(bank: QuestionBank) -> LessonLoopService {
        let storage = Storage::in_memory(fixed_clock());
        LessonLoopService::new(fixed_clock(), bank, &storage)
            .with_settings(LessonSettings::new(true, 5, 10).unwrap())
    }

    fn two_questions() -> QuestionBank {
        let question = |id: &str| {
            QuestionDraft::new(
                id,
                LearningTrack::Html,
                DifficultyLevel::Beginner,
                "Pick a",
                &["a", "b"],
                "a",
                10,
            )
            .validate()
            .unwrap()
        };
        QuestionBank::new(vec![question("q1"), question("q2")], Vec::new())
    }

    #[tokio::test]
    async fn selected_option_is_submitted_and_locks_the_item() {
        let service = service_with(two_questions());
        let mut vm = start_lesson(&service, LearningTrack::Html, DifficultyLevel::Beginner).unwrap();

        assert!(vm.select_option("a".into()));
        assert_eq!(vm.selected_option(), Some("a"));
        let outcome = vm.submit_current(&service).await.unwrap();
        assert_eq!(outcome, LessonOutcome::Continue);
        assert_eq!(vm.current_index(), 1);

        assert!(vm.navigate(&service, Navigation::Previous));
        assert!(vm.is_locked());
        assert!(vm.current_result().unwrap().score.is_correct);
        assert!(!vm.select_option("b".into()));
        assert!(!vm.shows_countdown());
    }

    #[tokio::test]
    async fn countdown_expiry_uses_the_pending_choice_and_builds_a_report() {
        let service = service_with(two_questions());
        let mut vm = start_lesson(&service, LearningTrack::Html, DifficultyLevel::Beginner).unwrap();

        vm.select_option("b".into());
        assert_eq!(vm.tick(&service, 4).await.unwrap(), None);
        assert_eq!(
            vm.tick(&service, 1).await.unwrap(),
            Some(LessonOutcome::Continue)
        );
        assert_eq!(vm.current_index(), 1);

        vm.select_option("a".into());
        assert_eq!(
            vm.submit_current(&service).await.unwrap(),
            LessonOutcome::Completed
        );
        let report = vm.report().unwrap();
        assert_eq!(report.correct_count, 1);
        assert_eq!(report.total_xp, 10);
        assert!(vm.retry(&service).is_ok());
    }

    #[tokio::test]
    async fn test_runs_only_apply_to_exercises() {
        let service = service_with(QuestionBank::builtin().unwrap());
        let runner = SimulatedTestRunner::new(0, 1.0);
        let mut vm =
            start_lesson(&service, LearningTrack::Javascript, DifficultyLevel::Beginner).unwrap();

        let exercise_index = vm
            .session()
            .items()
            .iter()
            .position(|item| matches!(item, LessonItem::Exercise(_)))
            .unwrap();
        if exercise_index > 0 {
            assert!(vm.run_tests(&runner, "let x = 1;").is_none());
        }
        vm.navigate(&service, Navigation::GoTo(exercise_index));

        let report = vm.run_tests(&runner, "const total = 1;").cloned().unwrap();
        assert!(report.all_passed());
        assert_eq!(
            vm.pending_response(),
            Some(ItemResponse::TestRun(Some(report)))
        );
        assert!(!vm.select_option("a".into()));
    }

    #[test]
    fn retry_before_completion_is_rejected() {
        let service = service_with(two_questions());
        let vm = start_lesson(&service, LearningTrack::Html, DifficultyLevel::Beginner).unwrap();
        assert_eq!(vm.retry(&service).err(), Some(ViewError::Unknown));
        assert!(start_lesson(&service, LearningTrack::Css, DifficultyLevel::Beginner).is_none());
    }

    #[tokio::test]
    async fn click_that_loses_to_the_countdown_is_ignored() {
        let service = service_with(two_questions());
        let mut vm = start_lesson(&service, LearningTrack::Html, DifficultyLevel::Beginner).unwrap();

        vm.select_option("a".into());
        let on_screen = vm.current_target();
        assert_eq!(
            vm.tick(&service, 5).await.unwrap(),
            Some(LessonOutcome::Continue)
        );
        assert_eq!(vm.current_index(), 1);

        let outcome = vm.submit(&service, on_screen).await.unwrap();
        assert_eq!(outcome, LessonOutcome::Ignored);
        assert_eq!(vm.current_index(), 1);
        assert!(!vm.session().is_submitted(1));
        assert!(!vm.is_complete());
        assert_eq!(vm.session().results().len(), 1);
        assert_eq!(vm.session().results()[0].trigger, SubmitTrigger::Timeout);
    }

    #[tokio::test]
    async fn countdown_expiry_without_input_scores_zero_once() {
        let service = service_with(two_questions());
        let mut vm = start_lesson(&service, LearningTrack::Html, DifficultyLevel::Beginner).unwrap();

        assert_eq!(
            vm.tick(&service, 5).await.unwrap(),
            Some(LessonOutcome::Continue)
        );
        let first = vm.session().result_for(0).cloned().unwrap();
        assert!(!first.score.is_correct);
        assert_eq!(first.score.xp_earned, 0);
        assert_eq!(first.trigger, SubmitTrigger::Timeout);
        assert_eq!(vm.session().results().len(), 1);
    }

    #[tokio::test]
    async fn countdown_is_hidden_when_disabled_or_complete() {
        let storage = Storage::in_memory(fixed_clock());
        let untimed = LessonLoopService::new(fixed_clock(), two_questions(), &storage)
            .with_settings(LessonSettings::new(false, 60, 300).unwrap());
        let vm = start_lesson(&untimed, LearningTrack::Html, DifficultyLevel::Beginner).unwrap();
        assert!(!vm.shows_countdown());

        let service = service_with(two_questions());
        let mut vm = start_lesson(&service, LearningTrack::Html, DifficultyLevel::Beginner).unwrap();
        assert!(vm.shows_countdown());
        vm.submit_current(&service).await.unwrap();
        vm.submit_current(&service).await.unwrap();
        assert!(vm.is_complete());
        assert!(!vm.shows_countdown());
    }
}
