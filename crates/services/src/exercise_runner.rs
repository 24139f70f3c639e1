//! Test runners for code exercises.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use codequest_core::model::{CodeExercise, TestOutcome, TestRunReport};

use crate::seed::stable_seed;

/// Runs an exercise's test cases against learner code.
pub trait TestRunner: Send + Sync {
    fn run(&self, exercise: &CodeExercise, code: &str) -> TestRunReport;
}

/// Stand-in runner that does not execute anything.
///
/// Blank code or code identical to the starter fails every case. Otherwise each
/// case passes with probability `pass_rate`, drawn from an RNG seeded by the
/// runner seed and the code text, so the same code always gets the same report.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulatedTestRunner {
    seed: u64,
    pass_rate: f64,
}

impl Default for SimulatedTestRunner {
    fn default() -> Self {
        Self::new(0, 0.8)
    }
}

impl SimulatedTestRunner {
    /// `pass_rate` is clamped to `0.0..=1.0`; NaN counts as `0.0`.
    #[must_use]
    pub fn new(seed: u64, pass_rate: f64) -> Self {
        let pass_rate = if pass_rate.is_nan() {
            0.0
        } else {
            pass_rate.clamp(0.0, 1.0)
        };
        Self { seed, pass_rate }
    }

    #[must_use]
    pub fn pass_rate(&self) -> f64 {
        self.pass_rate
    }

    fn rng_for(&self, exercise: &CodeExercise, code: &str) -> StdRng {
        let id = exercise.id().to_string();
        StdRng::seed_from_u64(stable_seed(self.seed, &[&id, code]))
    }
}

impl TestRunner for SimulatedTestRunner {
    fn run(&self, exercise: &CodeExercise, code: &str) -> TestRunReport {
        let unchanged = code.trim().is_empty() || code.trim() == exercise.starter_code().trim();
        let mut rng = self.rng_for(exercise, code);

        let outcomes = exercise
            .test_cases()
            .iter()
            .enumerate()
            .map(|(case_index, case)| {
                let passed = !unchanged && rng.random_bool(self.pass_rate);
                let message = if unchanged {
                    "No changes from the starter code".to_string()
                } else if passed {
                    format!("{}: {}", case.input, case.expected_output)
                } else {
                    format!("{}: expected {}", case.input, case.expected_output)
                };
                TestOutcome {
                    case_index,
                    passed,
                    message,
                }
            })
            .collect();

        TestRunReport::new(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codequest_core::model::{
        CodeExerciseDraft, DifficultyLevel, ExerciseId, LearningTrack, TestCase,
    };

    fn exercise() -> CodeExercise {
        CodeExerciseDraft {
            id: ExerciseId::new("js-ex-1"),
            track: LearningTrack::Javascript,
            difficulty: DifficultyLevel::Beginner,
            prompt: "sum".into(),
            starter_code: "function sum(a, b) {\n}\n".into(),
            test_cases: vec![
                TestCase::new("sum(1, 2)", "3"),
                TestCase::new("sum(0, 0)", "0"),
                TestCase::new("sum(-1, 1)", "0"),
            ],
            explanation: String::new(),
            hints: Vec::new(),
            points: 30,
            time_limit_secs: None,
        }
        .validate()
        .unwrap()
    }

    const SOLVED: &str = "function sum(a, b) {\n  return a + b;\n}\n";

    #[test]
    fn unchanged_starter_code_passes_nothing() {
        let runner = SimulatedTestRunner::new(1, 1.0);
        let exercise = exercise();
        let report = runner.run(&exercise, "  function sum(a, b) {\n}\n  ");
        assert_eq!(report.total(), 3);
        assert_eq!(report.passed(), 0);
        assert_eq!(runner.run(&exercise, "   ").passed(), 0);
    }

    #[test]
    fn pass_rate_extremes_are_exact() {
        let exercise = exercise();
        assert!(SimulatedTestRunner::new(9, 1.0).run(&exercise, SOLVED).all_passed());
        assert_eq!(SimulatedTestRunner::new(9, 0.0).run(&exercise, SOLVED).passed(), 0);
        assert_eq!(SimulatedTestRunner::new(9, 7.5).pass_rate(), 1.0);
    }

    #[test]
    fn same_code_gives_same_report() {
        let runner = SimulatedTestRunner::new(5, 0.5);
        let exercise = exercise();
        assert_eq!(runner.run(&exercise, SOLVED), runner.run(&exercise, SOLVED));
    }

    #[test]
    fn reports_follow_the_stable_seed() {
        let runner = SimulatedTestRunner::new(5, 0.5);
        let exercise = exercise();
        let mut rng = StdRng::seed_from_u64(stable_seed(5, &["js-ex-1", SOLVED]));
        let expected: Vec<bool> = (0..3).map(|_| rng.random_bool(0.5)).collect();

        let report = runner.run(&exercise, SOLVED);
        let actual: Vec<bool> = report.outcomes().iter().map(|o| o.passed).collect();
        assert_eq!(actual, expected);
    }
}
