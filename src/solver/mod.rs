//! Solve orchestration: strategy choice, timing, result packaging.
//!
//! A solve call is a pure function of (instance, variant, configuration):
//! no state survives between calls, so independent solves can run on
//! independent workers. Small instances go to the exact MILP path; large
//! ones, and exact paths that come back infeasible or broken, go to the
//! greedy constructor. Every schedule passes through the validator before
//! it is returned; an infeasible one is flagged, never discarded.

use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

use crate::formulation::FormulationBuilder;
use crate::heuristic::GreedyScheduler;
use crate::milp::{self, MilpConfig, MilpOutcome};
use crate::models::{Instance, ModelBuildError, ObjectiveVariant, Schedule, Violation};
use crate::validation;

/// Tunables for a solve call.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Largest `aircraft × runways²` still sent to the exact path.
    pub exact_size_limit: usize,
    /// Wall-clock budget for the exact backend.
    pub time_limit: Duration,
    /// Acceptable relative optimality gap for the exact backend.
    pub relative_gap: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            exact_size_limit: 1000,
            time_limit: Duration::from_secs(60),
            relative_gap: 0.05,
        }
    }
}

impl SolverConfig {
    /// Sets the exact-path size gate.
    pub fn with_exact_size_limit(mut self, limit: usize) -> Self {
        self.exact_size_limit = limit;
        self
    }

    /// Sets the exact-backend time budget.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = limit;
        self
    }

    /// Sets the acceptable relative gap.
    pub fn with_relative_gap(mut self, gap: f64) -> Self {
        self.relative_gap = gap;
        self
    }
}

/// Which path produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveStrategy {
    /// The MILP backend.
    Exact,
    /// The greedy constructor.
    Heuristic,
}

/// A packaged solve answer.
#[derive(Debug, Clone)]
pub struct SolveResult {
    /// The produced schedule, feasible or not.
    pub schedule: Schedule,
    /// Objective value, equal to the validator's independent recomputation.
    pub objective: f64,
    /// Wall-clock time of the chosen strategy's execution only; model
    /// building and validation are excluded so exact and heuristic timings
    /// stay comparable.
    pub solve_duration: Duration,
    /// The objective that was optimized.
    pub variant: ObjectiveVariant,
    /// The path that produced the schedule.
    pub strategy: SolveStrategy,
    /// Whether the validator found no violations.
    pub feasible: bool,
    /// Everything the validator found wrong, with shortfalls.
    pub violations: Vec<Violation>,
}

/// Chooses and runs a solve strategy for one instance and variant.
///
/// # Example
///
/// ```
/// use alp_solve::models::{Aircraft, Instance, ObjectiveVariant, SeparationMatrix};
/// use alp_solve::solver::Solver;
///
/// let instance = Instance::new(
///     "demo",
///     vec![Aircraft::new(0, 5, 10, 20)],
///     SeparationMatrix::uniform(1, 0),
///     1,
/// );
/// let result = Solver::new()
///     .solve(&instance, ObjectiveVariant::WeightedEarlinessTardiness)
///     .unwrap();
/// assert!(result.feasible);
/// assert_eq!(result.schedule.landing_time(0), 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    /// A solver with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// A solver with explicit configuration.
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Solves `instance` under `variant`.
    ///
    /// Fails only on broken instance invariants; an over-constrained but
    /// well-formed instance yields a flagged-infeasible result instead.
    pub fn solve(
        &self,
        instance: &Instance,
        variant: ObjectiveVariant,
    ) -> Result<SolveResult, ModelBuildError> {
        instance.validate()?;

        let size = instance.exact_model_size();
        let (schedule, strategy, duration) = if size > self.config.exact_size_limit {
            tracing::debug!(
                "instance '{}' size {} above exact limit {}, using greedy construction",
                instance.name(),
                size,
                self.config.exact_size_limit
            );
            self.run_heuristic(instance, variant)
        } else {
            self.run_exact(instance, variant)?
        };

        let evaluation = validation::evaluate(instance, &schedule, variant);
        if !evaluation.feasible {
            tracing::debug!(
                "schedule for '{}' has {} violation(s)",
                instance.name(),
                evaluation.violations.len()
            );
        }

        Ok(SolveResult {
            schedule,
            objective: evaluation.objective,
            solve_duration: duration,
            variant,
            strategy,
            feasible: evaluation.feasible,
            violations: evaluation.violations,
        })
    }

    fn run_exact(
        &self,
        instance: &Instance,
        variant: ObjectiveVariant,
    ) -> Result<(Schedule, SolveStrategy, Duration), ModelBuildError> {
        let formulation = FormulationBuilder::new(instance).build(variant)?;
        let config = MilpConfig {
            time_limit: self.config.time_limit,
            relative_gap: self.config.relative_gap,
        };

        let started = Instant::now();
        let outcome = milp::solve_model(formulation.model(), &config);
        let elapsed = started.elapsed();

        match outcome {
            MilpOutcome::Solved { values, .. } | MilpOutcome::TimedOut { values, .. } => Ok((
                milp::extract_schedule(&formulation, &values),
                SolveStrategy::Exact,
                elapsed,
            )),
            MilpOutcome::Infeasible => {
                tracing::warn!(
                    "exact model for '{}' infeasible, falling back to greedy construction",
                    instance.name()
                );
                Ok(self.run_heuristic(instance, variant))
            }
            MilpOutcome::Error(message) => {
                tracing::warn!(
                    "exact backend failed for '{}' ({message}), falling back to greedy construction",
                    instance.name()
                );
                Ok(self.run_heuristic(instance, variant))
            }
        }
    }

    fn run_heuristic(
        &self,
        instance: &Instance,
        variant: ObjectiveVariant,
    ) -> (Schedule, SolveStrategy, Duration) {
        let started = Instant::now();
        let (schedule, _) = GreedyScheduler::new().schedule_with_objective(instance, variant);
        (schedule, SolveStrategy::Heuristic, started.elapsed())
    }
}
