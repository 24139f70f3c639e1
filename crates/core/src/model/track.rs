use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {kind}: {raw}")]
pub struct ParseEnumError {
    kind: &'static str,
    raw: String,
}

impl ParseEnumError {
    fn new(kind: &'static str, raw: &str) -> Self {
        Self {
            kind,
            raw: raw.to_string(),
        }
    }
}

//
// ─── TRACK ─────────────────────────────────────────────────────────────────────
//

/// One of the three curricula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LearningTrack {
    Html,
    Css,
    Javascript,
}

impl LearningTrack {
    /// Every track, in curriculum order.
    pub const ALL: [LearningTrack; 3] = [
        LearningTrack::Html,
        LearningTrack::Css,
        LearningTrack::Javascript,
    ];

    /// Lowercase slug used in routes and configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            LearningTrack::Html => "html",
            LearningTrack::Css => "css",
            LearningTrack::Javascript => "javascript",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            LearningTrack::Html => "HTML",
            LearningTrack::Css => "CSS",
            LearningTrack::Javascript => "JavaScript",
        }
    }
}

impl fmt::Display for LearningTrack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LearningTrack {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(LearningTrack::Html),
            "css" => Ok(LearningTrack::Css),
            "javascript" | "js" => Ok(LearningTrack::Javascript),
            _ => Err(ParseEnumError::new("track", s)),
        }
    }
}

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

/// Tier that filters the question bank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyLevel {
    pub const ALL: [DifficultyLevel; 3] = [
        DifficultyLevel::Beginner,
        DifficultyLevel::Intermediate,
        DifficultyLevel::Advanced,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            DifficultyLevel::Beginner => "beginner",
            DifficultyLevel::Intermediate => "intermediate",
            DifficultyLevel::Advanced => "advanced",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            DifficultyLevel::Beginner => "Beginner",
            DifficultyLevel::Intermediate => "Intermediate",
            DifficultyLevel::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DifficultyLevel {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(DifficultyLevel::Beginner),
            "intermediate" => Ok(DifficultyLevel::Intermediate),
            "advanced" => Ok(DifficultyLevel::Advanced),
            _ => Err(ParseEnumError::new("difficulty", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracks_round_trip_through_their_slugs() {
        for track in LearningTrack::ALL {
            assert_eq!(track.as_str().parse::<LearningTrack>().unwrap(), track);
        }
        assert_eq!("JS".parse::<LearningTrack>().unwrap(), LearningTrack::Javascript);
    }

    #[test]
    fn unknown_difficulty_is_rejected() {
        let err = "expert".parse::<DifficultyLevel>().unwrap_err();
        assert_eq!(err.to_string(), "unknown difficulty: expert");
    }
}
