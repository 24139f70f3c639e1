mod config;

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use codequest_core::model::{DifficultyLevel, LearningTrack};
use codequest_core::{Clock, QuestionBank};
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::ai::{AiStrategy, MockAssistant};
use services::{LessonLoopService, SimulatedTestRunner, TestRunner};
use storage::Storage;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::{App, UiApp, build_app_context};

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "codequest")]
#[command(author, version, about = "Interactive HTML, CSS and JavaScript lessons", long_about = None)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Track linked from the sidebar (html, css, javascript)
    #[arg(long)]
    track: Option<LearningTrack>,

    /// Difficulty linked from the sidebar (beginner, intermediate, advanced)
    #[arg(long)]
    difficulty: Option<DifficultyLevel>,

    /// Disable the per-item countdown
    #[arg(long)]
    no_timer: bool,

    /// Default seconds per question
    #[arg(long)]
    question_secs: Option<u32>,

    /// Default seconds per coding exercise
    #[arg(long)]
    exercise_secs: Option<u32>,

    /// Simulated assistant latency in milliseconds
    #[arg(long)]
    ai_latency_ms: Option<u64>,

    /// Seed for the simulated assistant and test runner
    #[arg(long)]
    ai_seed: Option<u64>,

    /// Probability that a simulated test case passes
    #[arg(long)]
    pass_rate: Option<f64>,
}

impl Cli {
    fn apply(&self, config: &mut Config) {
        if let Some(track) = self.track {
            config.track = track;
        }
        if let Some(difficulty) = self.difficulty {
            config.difficulty = difficulty;
        }
        if self.no_timer {
            config.timer_enabled = false;
        }
        if let Some(secs) = self.question_secs {
            config.question_secs = secs;
        }
        if let Some(secs) = self.exercise_secs {
            config.exercise_secs = secs;
        }
        if let Some(ms) = self.ai_latency_ms {
            config.ai_latency_ms = ms;
        }
        if let Some(seed) = self.ai_seed {
            config.ai_seed = seed;
        }
        if let Some(rate) = self.pass_rate {
            config.pass_rate = rate;
        }
    }
}

struct DesktopApp {
    track: LearningTrack,
    difficulty: DifficultyLevel,
    lesson_loop: Arc<LessonLoopService>,
    test_runner: Arc<dyn TestRunner>,
    assistant: Arc<dyn AiStrategy>,
}

impl UiApp for DesktopApp {
    fn default_track(&self) -> LearningTrack {
        self.track
    }

    fn default_difficulty(&self) -> DifficultyLevel {
        self.difficulty
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

fn build_app(config: &Config) -> Result<DesktopApp> {
    let clock = Clock::default_clock();
    let storage = Storage::in_memory(clock);
    let bank = QuestionBank::builtin()?;
    let lesson_loop =
        LessonLoopService::new(clock, bank, &storage).with_settings(config.lesson_settings()?);

    Ok(DesktopApp {
        track: config.track,
        difficulty: config.difficulty,
        lesson_loop: Arc::new(lesson_loop),
        test_runner: Arc::new(SimulatedTestRunner::new(config.ai_seed, config.pass_rate)),
        assistant: Arc::new(MockAssistant::new(
            Duration::from_millis(config.ai_latency_ms),
            config.ai_seed,
        )),
    })
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "codequest=info,services=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();
    let mut config = Config::load(cli.config.as_deref())?;
    config.apply_env()?;
    cli.apply(&mut config);
    config.validate()?;

    info!(
        track = %config.track,
        difficulty = %config.difficulty,
        timer = config.timer_enabled,
        "starting codequest"
    );

    let app: Arc<dyn UiApp> = Arc::new(build_app(&config)?);
    let context = build_app_context(&app);

    // Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("CodeQuest")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}
