//! Track theme registry: fixed colors, icons and unlock rules per track.
//!
//! Every function here is total over `LearningTrack`.

use crate::model::{CompletedCounts, DifficultyLevel, LearningTrack};

/// Correct answers required in the prerequisite track before a track unlocks.
pub const UNLOCK_THRESHOLD: u32 = 10;

/// Display colors for one track, as CSS hex strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackColorScheme {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub gradient_from: &'static str,
    pub gradient_to: &'static str,
}

/// Which track must be completed, and how far, before another opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnlockRequirement {
    pub prerequisite: LearningTrack,
    pub threshold: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackTheme {
    pub track: LearningTrack,
    pub name: &'static str,
    pub icon: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub colors: TrackColorScheme,
    pub unlock: Option<UnlockRequirement>,
}

const HTML_COLORS: TrackColorScheme = TrackColorScheme {
    primary: "#e34c26",
    secondary: "#f06529",
    accent: "#ffb088",
    background: "#fff4ef",
    surface: "#ffffff",
    text: "#3b1307",
    gradient_from: "#e34c26",
    gradient_to: "#f06529",
};

const CSS_COLORS: TrackColorScheme = TrackColorScheme {
    primary: "#264de4",
    secondary: "#2965f1",
    accent: "#8fb0ff",
    background: "#eef3ff",
    surface: "#ffffff",
    text: "#0b1a4a",
    gradient_from: "#264de4",
    gradient_to: "#2965f1",
};

const JAVASCRIPT_COLORS: TrackColorScheme = TrackColorScheme {
    primary: "#f7df1e",
    secondary: "#323330",
    accent: "#fff27a",
    background: "#fffbe0",
    surface: "#ffffff",
    text: "#323330",
    gradient_from: "#f7df1e",
    gradient_to: "#f0c419",
};

#[must_use]
pub fn track_colors(track: LearningTrack) -> TrackColorScheme {
    match track {
        LearningTrack::Html => HTML_COLORS,
        LearningTrack::Css => CSS_COLORS,
        LearningTrack::Javascript => JAVASCRIPT_COLORS,
    }
}

#[must_use]
pub fn track_icon(track: LearningTrack) -> &'static str {
    match track {
        LearningTrack::Html => "🏗️",
        LearningTrack::Css => "🎨",
        LearningTrack::Javascript => "⚡",
    }
}

/// CSS `linear-gradient` for track headers and buttons.
#[must_use]
pub fn track_gradient(track: LearningTrack) -> String {
    let colors = track_colors(track);
    format!(
        "linear-gradient(135deg, {} 0%, {} 100%)",
        colors.gradient_from, colors.gradient_to
    )
}

#[must_use]
pub fn difficulty_color(difficulty: DifficultyLevel) -> &'static str {
    match difficulty {
        DifficultyLevel::Beginner => "#22c55e",
        DifficultyLevel::Intermediate => "#f59e0b",
        DifficultyLevel::Advanced => "#ef4444",
    }
}

#[must_use]
pub fn unlock_requirement(track: LearningTrack) -> Option<UnlockRequirement> {
    match track {
        LearningTrack::Html => None,
        LearningTrack::Css => Some(UnlockRequirement {
            prerequisite: LearningTrack::Html,
            threshold: UNLOCK_THRESHOLD,
        }),
        LearningTrack::Javascript => Some(UnlockRequirement {
            prerequisite: LearningTrack::Css,
            threshold: UNLOCK_THRESHOLD,
        }),
    }
}

#[must_use]
pub fn track_theme(track: LearningTrack) -> TrackTheme {
    let (tagline, description) = match track {
        LearningTrack::Html => (
            "Structure the web",
            "Elements, semantics, forms and accessible documents.",
        ),
        LearningTrack::Css => (
            "Style with intent",
            "Selectors, the box model, flexbox, grid and responsive design.",
        ),
        LearningTrack::Javascript => (
            "Bring pages to life",
            "Values, functions, the DOM, events and asynchronous code.",
        ),
    };

    TrackTheme {
        track,
        name: track.label(),
        icon: track_icon(track),
        tagline,
        description,
        colors: track_colors(track),
        unlock: unlock_requirement(track),
    }
}

/// True when the track's prerequisite chain is satisfied by `completed`.
#[must_use]
pub fn is_track_unlocked(track: LearningTrack, completed: &CompletedCounts) -> bool {
    match unlock_requirement(track) {
        None => true,
        Some(req) => completed.get(req.prerequisite) >= req.threshold,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_is_always_unlocked() {
        assert!(is_track_unlocked(
            LearningTrack::Html,
            &CompletedCounts::default()
        ));
    }

    #[test]
    fn css_unlocks_at_ten_html_completions() {
        assert!(!is_track_unlocked(
            LearningTrack::Css,
            &CompletedCounts::new(9, 0, 0)
        ));
        assert!(is_track_unlocked(
            LearningTrack::Css,
            &CompletedCounts::new(10, 0, 0)
        ));
    }

    #[test]
    fn javascript_requires_css_not_html() {
        assert!(!is_track_unlocked(
            LearningTrack::Javascript,
            &CompletedCounts::new(50, 9, 0)
        ));
        assert!(is_track_unlocked(
            LearningTrack::Javascript,
            &CompletedCounts::new(0, 10, 0)
        ));
    }

    #[test]
    fn every_track_has_a_theme() {
        for track in LearningTrack::ALL {
            let theme = track_theme(track);
            assert_eq!(theme.track, track);
            assert!(theme.colors.primary.starts_with('#'));
            assert!(track_gradient(track).starts_with("linear-gradient("));
        }
    }
}
