use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use codequest_core::model::{DifficultyLevel, LearningTrack, LessonSettings};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "CODEQUEST_";

/// Launch configuration for the desktop app.
///
/// Layered as file, then `CODEQUEST_*` environment, then command-line flags.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_track")]
    pub track: LearningTrack,
    #[serde(default = "default_difficulty")]
    pub difficulty: DifficultyLevel,
    #[serde(default = "default_timer_enabled")]
    pub timer_enabled: bool,
    #[serde(default = "default_question_secs")]
    pub question_secs: u32,
    #[serde(default = "default_exercise_secs")]
    pub exercise_secs: u32,
    #[serde(default = "default_ai_latency_ms")]
    pub ai_latency_ms: u64,
    #[serde(default = "default_ai_seed")]
    pub ai_seed: u64,
    #[serde(default = "default_pass_rate")]
    pub pass_rate: f64,
}

fn default_track() -> LearningTrack {
    LearningTrack::Html
}
fn default_difficulty() -> DifficultyLevel {
    DifficultyLevel::Beginner
}
fn default_timer_enabled() -> bool {
    true
}
fn default_question_secs() -> u32 {
    60
}
fn default_exercise_secs() -> u32 {
    300
}
fn default_ai_latency_ms() -> u64 {
    800
}
fn default_ai_seed() -> u64 {
    0
}
fn default_pass_rate() -> f64 {
    0.8
}

impl Default for Config {
    fn default() -> Self {
        Self {
            track: default_track(),
            difficulty: default_difficulty(),
            timer_enabled: default_timer_enabled(),
            question_secs: default_question_secs(),
            exercise_secs: default_exercise_secs(),
            ai_latency_ms: default_ai_latency_ms(),
            ai_seed: default_ai_seed(),
            pass_rate: default_pass_rate(),
        }
    }
}

impl Config {
    /// Reads `path`, or the default location when `None`.
    ///
    /// A missing file yields the defaults; an explicit path must exist.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let (path, explicit) = match path {
            Some(path) => (path.to_path_buf(), true),
            None => (Self::default_path(), false),
        };
        if !explicit && !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        Self::from_toml(&content).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("codequest")
            .join("config.toml")
    }

    /// Applies `CODEQUEST_<FIELD>` overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<()> {
        self.apply_env_from(|key| std::env::var(key).ok())
    }

    pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        let var = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));

        if let Some(raw) = var("TRACK") {
            self.track = raw.parse().context("CODEQUEST_TRACK")?;
        }
        if let Some(raw) = var("DIFFICULTY") {
            self.difficulty = raw.parse().context("CODEQUEST_DIFFICULTY")?;
        }
        if let Some(raw) = var("TIMER") {
            self.timer_enabled = parse_flag(&raw).context("CODEQUEST_TIMER")?;
        }
        if let Some(raw) = var("QUESTION_SECS") {
            self.question_secs = raw.trim().parse().context("CODEQUEST_QUESTION_SECS")?;
        }
        if let Some(raw) = var("EXERCISE_SECS") {
            self.exercise_secs = raw.trim().parse().context("CODEQUEST_EXERCISE_SECS")?;
        }
        if let Some(raw) = var("AI_LATENCY_MS") {
            self.ai_latency_ms = raw.trim().parse().context("CODEQUEST_AI_LATENCY_MS")?;
        }
        if let Some(raw) = var("AI_SEED") {
            self.ai_seed = raw.trim().parse().context("CODEQUEST_AI_SEED")?;
        }
        if let Some(raw) = var("PASS_RATE") {
            self.pass_rate = raw.trim().parse().context("CODEQUEST_PASS_RATE")?;
        }
        Ok(())
    }

    /// Validated countdown settings for the lesson loop.
    pub fn lesson_settings(&self) -> Result<LessonSettings> {
        LessonSettings::new(self.timer_enabled, self.question_secs, self.exercise_secs)
            .context("invalid lesson timer settings")
    }

    pub fn validate(&self) -> Result<()> {
        self.lesson_settings()?;
        if !(0.0..=1.0).contains(&self.pass_rate) {
            anyhow::bail!("pass rate must be between 0.0 and 1.0, got {}", self.pass_rate);
        }
        Ok(())
    }
}

fn parse_flag(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => anyhow::bail!("expected a boolean, got {other:?}"),
    }
}
