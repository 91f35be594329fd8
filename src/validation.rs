//! Schedule feasibility checking and objective scoring.
//!
//! Verifies any schedule against its instance, whatever produced it:
//! - every landing time inside its aircraft's `[earliest, latest]` window;
//! - every same-runway pair separated by at least the gap required by the
//!   **realized** landing order (not any order assumed during construction).
//!
//! Also recomputes the objective for a stated variant; this is the single
//! scoring implementation, shared with the greedy constructor, so a solve
//! result always matches an independent recomputation.
//!
//! Pure functions of (instance, schedule, variant); no side effects.

use crate::models::{Instance, ObjectiveVariant, Schedule, Violation};

/// Outcome of checking a schedule.
#[derive(Debug, Clone)]
pub struct ScheduleEvaluation {
    /// Whether no constraint is violated.
    pub feasible: bool,
    /// Everything the schedule breaks, with shortfalls.
    pub violations: Vec<Violation>,
    /// The recomputed objective under the stated variant.
    pub objective: f64,
}

/// Checks feasibility and recomputes the objective of `schedule`.
///
/// Pairs landing at the same instant on one runway are ordered by id for
/// the realized-order separation lookup.
pub fn evaluate(
    instance: &Instance,
    schedule: &Schedule,
    variant: ObjectiveVariant,
) -> ScheduleEvaluation {
    let mut violations = Vec::new();

    for (i, a) in instance.aircraft().iter().enumerate() {
        let time = schedule.landing_time(i);
        if !a.window_contains(time) {
            violations.push(Violation::TimeWindow {
                aircraft: i,
                time,
                earliest: a.earliest,
                latest: a.latest,
            });
        }
    }

    let n = instance.aircraft_count();
    for i in 0..n {
        for j in (i + 1)..n {
            if schedule.runway(i) != schedule.runway(j) {
                continue;
            }
            let (leader, follower) = realized_order(schedule, i, j);
            let required = instance.separation(leader, follower);
            let actual = schedule.landing_time(follower) - schedule.landing_time(leader);
            if actual < required {
                violations.push(Violation::Separation {
                    leader,
                    follower,
                    runway: schedule.runway(i),
                    required,
                    actual,
                });
            }
        }
    }

    ScheduleEvaluation {
        feasible: violations.is_empty(),
        violations,
        objective: objective_value(instance, schedule, variant),
    }
}

/// Recomputes the objective of `schedule` under `variant`.
pub fn objective_value(
    instance: &Instance,
    schedule: &Schedule,
    variant: ObjectiveVariant,
) -> f64 {
    match variant {
        ObjectiveVariant::WeightedEarlinessTardiness => instance
            .aircraft()
            .iter()
            .enumerate()
            .map(|(i, a)| a.deviation_cost(schedule.landing_time(i)))
            .sum(),
        ObjectiveVariant::Makespan => schedule.makespan() as f64,
        ObjectiveVariant::LatenessWithTransfer => instance
            .aircraft()
            .iter()
            .enumerate()
            .map(|(i, a)| {
                let arrival = schedule.landing_time(i) + a.transfer_time(schedule.runway(i));
                (arrival - a.target).max(0) as f64
            })
            .sum(),
    }
}

/// Realized landing order of a pair, ties broken by id.
fn realized_order(schedule: &Schedule, i: usize, j: usize) -> (usize, usize) {
    if (schedule.landing_time(i), i) <= (schedule.landing_time(j), j) {
        (i, j)
    } else {
        (j, i)
    }
}
