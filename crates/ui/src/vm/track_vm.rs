use codequest_core::QuestionBank;
use codequest_core::model::{CompletedCounts, DifficultyLevel, LearningTrack};
use codequest_core::theme::{TrackTheme, is_track_unlocked, track_gradient, track_theme};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DifficultyChoiceVm {
    pub difficulty: DifficultyLevel,
    pub items: usize,
}

/// Home-screen card for one track.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TrackCardVm {
    pub theme: TrackTheme,
    pub gradient: String,
    pub completed: u32,
    pub unlocked: bool,
    pub lock_note: Option<String>,
    pub difficulties: Vec<DifficultyChoiceVm>,
}

impl TrackCardVm {
    #[must_use]
    pub fn track(&self) -> LearningTrack {
        self.theme.track
    }
}

#[must_use]
pub fn map_track_cards(bank: &QuestionBank, completed: &CompletedCounts) -> Vec<TrackCardVm> {
    LearningTrack::ALL
        .into_iter()
        .map(|track| {
            let theme = track_theme(track);
            let unlocked = is_track_unlocked(track, completed);
            let lock_note = match theme.unlock {
                Some(req) if !unlocked => Some(format!(
                    "Complete {} {} items to unlock ({}/{})",
                    req.threshold,
                    req.prerequisite.label(),
                    completed.get(req.prerequisite).min(req.threshold),
                    req.threshold
                )),
                _ => None,
            };
            let difficulties = DifficultyLevel::ALL
                .into_iter()
                .map(|difficulty| DifficultyChoiceVm {
                    difficulty,
                    items: bank.items_count(track, difficulty),
                })
                .collect();

            TrackCardVm {
                theme,
                gradient: track_gradient(track),
                completed: completed.get(track),
                unlocked,
                lock_note,
                difficulties,
            }
        })
        .collect()
}
