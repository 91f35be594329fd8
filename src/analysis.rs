//! Post-solve schedule metrics.
//!
//! Read-only summary of a schedule against its instance: runway load,
//! punctuality, and penalty totals. Reporting and visualization layers
//! consume this; nothing here mutates a schedule or touches I/O.

use serde::{Deserialize, Serialize};

use crate::models::{Instance, Schedule};

/// Aggregate metrics for one schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleReport {
    /// Landing time of the last aircraft.
    pub makespan: i64,
    /// Aircraft landed per runway, indexed by runway.
    pub runway_counts: Vec<usize>,
    /// Fraction of all aircraft per runway (0.0..1.0), indexed by runway.
    pub runway_shares: Vec<f64>,
    /// Aircraft landing before their target.
    pub early_count: usize,
    /// Aircraft landing exactly on target.
    pub on_time_count: usize,
    /// Aircraft landing after their target.
    pub late_count: usize,
    /// Σ early_penalty × earliness over early aircraft.
    pub total_early_penalty: f64,
    /// Σ late_penalty × tardiness over late aircraft.
    pub total_late_penalty: f64,
    /// Σ max(0, landing + transfer − target): parking lateness.
    pub total_parking_lateness: i64,
}

impl ScheduleReport {
    /// Computes the report for `schedule` against `instance`.
    pub fn calculate(instance: &Instance, schedule: &Schedule) -> Self {
        let n = instance.aircraft_count();
        let mut runway_counts = vec![0usize; instance.runways()];
        let mut early_count = 0;
        let mut on_time_count = 0;
        let mut late_count = 0;
        let mut total_early_penalty = 0.0;
        let mut total_late_penalty = 0.0;
        let mut total_parking_lateness = 0i64;

        for (i, a) in instance.aircraft().iter().enumerate() {
            let slot = schedule.slot(i);
            runway_counts[slot.runway] += 1;

            if slot.time < a.target {
                early_count += 1;
                total_early_penalty += a.early_penalty * (a.target - slot.time) as f64;
            } else if slot.time > a.target {
                late_count += 1;
                total_late_penalty += a.late_penalty * (slot.time - a.target) as f64;
            } else {
                on_time_count += 1;
            }

            let arrival = slot.time + a.transfer_time(slot.runway);
            total_parking_lateness += (arrival - a.target).max(0);
        }

        let runway_shares = runway_counts
            .iter()
            .map(|&count| {
                if n == 0 {
                    0.0
                } else {
                    count as f64 / n as f64
                }
            })
            .collect();

        Self {
            makespan: schedule.makespan(),
            runway_counts,
            runway_shares,
            early_count,
            on_time_count,
            late_count,
            total_early_penalty,
            total_late_penalty,
            total_parking_lateness,
        }
    }

    /// Combined earliness and tardiness penalty.
    pub fn total_penalty(&self) -> f64 {
        self.total_early_penalty + self.total_late_penalty
    }
}
