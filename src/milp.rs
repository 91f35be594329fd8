//! Bridge from the neutral MILP model to a `good_lp` backend.
//!
//! Performs no search of its own: the model is translated variable by
//! variable and constraint by constraint, handed to the backend, and the
//! answer is classified and read back. Swapping the enabled `good_lp`
//! feature swaps the engine without touching the formulation.
//!
//! The default backend (`microlp`) is pure Rust and accepts no time-limit
//! or gap parameters; the configuration still carries them so that
//! parameter-capable backends honor the same contract.

use good_lp::{default_solver, variable, variables, Expression, ResolutionError, Solution,
    SolverModel, Variable};
use std::time::Duration;

use crate::formulation::{Comparison, Formulation, LinearExpr, MilpModel, ObjectiveSense, VarKind};
use crate::models::{LandingSlot, Schedule};

/// Budget handed to the backend.
#[derive(Debug, Clone)]
pub struct MilpConfig {
    /// Wall-clock limit for the backend search.
    pub time_limit: Duration,
    /// Acceptable relative gap between incumbent and bound.
    pub relative_gap: f64,
}

impl Default for MilpConfig {
    fn default() -> Self {
        Self {
            time_limit: Duration::from_secs(60),
            relative_gap: 0.05,
        }
    }
}

/// What the backend came back with.
#[derive(Debug, Clone)]
pub enum MilpOutcome {
    /// An optimal (or within-gap) assignment.
    Solved { values: Vec<f64>, objective: f64 },
    /// The budget ran out but an incumbent assignment exists.
    TimedOut { values: Vec<f64>, objective: f64 },
    /// No assignment satisfies the constraints.
    Infeasible,
    /// The backend failed outright.
    Error(String),
}

/// Solves `model` with the enabled `good_lp` backend.
pub fn solve_model(model: &MilpModel, config: &MilpConfig) -> MilpOutcome {
    let _ = config; // microlp exposes no tunables; see module docs.

    let mut vars = variables!();
    let handles: Vec<Variable> = model
        .variables()
        .iter()
        .map(|def| {
            let definition = match def.kind {
                VarKind::Binary => variable().binary(),
                VarKind::Integer => {
                    let definition = variable().integer().min(def.lower);
                    if def.upper.is_finite() {
                        definition.max(def.upper)
                    } else {
                        definition
                    }
                }
                VarKind::Continuous => {
                    let definition = variable().min(def.lower);
                    if def.upper.is_finite() {
                        definition.max(def.upper)
                    } else {
                        definition
                    }
                }
            };
            vars.add(definition.name(def.name.clone()))
        })
        .collect();

    let objective = to_expression(model.objective(), &handles);
    let unsolved = match model.sense() {
        ObjectiveSense::Minimize => vars.minimise(objective),
        ObjectiveSense::Maximize => vars.maximise(objective),
    };
    let mut problem = unsolved.using(default_solver);

    for constraint in model.constraints() {
        let expr = to_expression(&constraint.expr, &handles);
        let constraint = match constraint.comparison {
            Comparison::LessOrEqual => expr.leq(constraint.rhs),
            Comparison::GreaterOrEqual => expr.geq(constraint.rhs),
            Comparison::Equal => expr.eq(constraint.rhs),
        };
        problem.add_constraint(constraint);
    }

    match problem.solve() {
        Ok(solution) => {
            let values: Vec<f64> = handles.iter().map(|&v| solution.value(v)).collect();
            let objective = model.objective().value_in(&values);
            MilpOutcome::Solved { values, objective }
        }
        Err(ResolutionError::Infeasible) => MilpOutcome::Infeasible,
        Err(error) => MilpOutcome::Error(error.to_string()),
    }
}

/// Reads a schedule out of a solved assignment: landing times rounded to
/// integers, runway taken from the `z_ir ≥ 0.5` indicator.
pub fn extract_schedule(formulation: &Formulation, values: &[f64]) -> Schedule {
    let slots = formulation
        .landing_times()
        .iter()
        .zip(formulation.runway_flags())
        .map(|(&x, flags)| LandingSlot {
            time: values[x.0].round() as i64,
            runway: flags
                .iter()
                .position(|&z| values[z.0] >= 0.5)
                .unwrap_or(0),
        })
        .collect();
    Schedule::new(slots)
}

fn to_expression(expr: &LinearExpr, handles: &[Variable]) -> Expression {
    expr.terms
        .iter()
        .fold(Expression::from(expr.constant), |acc, &(var, coefficient)| {
            acc + coefficient * handles[var.0]
        })
}
