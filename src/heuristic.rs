//! Greedy separation-aware landing constructor.
//!
//! # Algorithm
//!
//! 1. Sort aircraft by target time ascending, ties by id.
//! 2. Keep a per-runway next-available time, initialized to 0.
//! 3. For each aircraft: pick the runway with the smallest next-available
//!    time (tie → lowest index); start the candidate at the target time
//!    raised to the runway's next-available time; raise it further against
//!    every aircraft already on that runway whose landing time does not
//!    exceed it, to at least their time plus the required separation; then
//!    clamp to the aircraft's latest time.
//! 4. Record the slot, update the runway, accumulate the objective with the
//!    same formulas the validator scores with.
//!
//! Clamping can leave a separation violation behind; the constructor never
//! fails, and the validator reports whatever the clamp broke.
//!
//! # Complexity
//! O(n²·m) for n aircraft and m runways; deterministic for identical input.
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 4: Priority Dispatching

use crate::models::{Instance, LandingSlot, ObjectiveVariant, Schedule};

/// Greedy target-order scheduler.
///
/// Builds a schedule in polynomial time with no external solver. Offers no
/// feasibility or optimality guarantee: an over-constrained instance yields
/// a schedule the validator flags instead of an error.
///
/// # Example
///
/// ```
/// use alp_solve::heuristic::GreedyScheduler;
/// use alp_solve::models::{Aircraft, Instance, SeparationMatrix};
///
/// let instance = Instance::new(
///     "demo",
///     vec![
///         Aircraft::new(0, 0, 10, 100),
///         Aircraft::new(1, 0, 12, 100),
///     ],
///     SeparationMatrix::uniform(2, 5),
///     1,
/// );
/// let schedule = GreedyScheduler::new().schedule(&instance);
/// assert_eq!(schedule.landing_time(0), 10);
/// assert_eq!(schedule.landing_time(1), 15);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyScheduler;

impl GreedyScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Builds a schedule for `instance`.
    pub fn schedule(&self, instance: &Instance) -> Schedule {
        self.schedule_with_objective(instance, ObjectiveVariant::WeightedEarlinessTardiness)
            .0
    }

    /// Builds a schedule and accumulates the objective for `variant` while
    /// constructing it.
    ///
    /// The slot assignment does not depend on the variant; only the
    /// accumulated value does.
    pub fn schedule_with_objective(
        &self,
        instance: &Instance,
        variant: ObjectiveVariant,
    ) -> (Schedule, f64) {
        let n = instance.aircraft_count();
        let m = instance.runways();

        let mut order: Vec<usize> = (0..n).collect();
        order.sort_by_key(|&i| (instance.aircraft()[i].target, i));

        let mut slots = vec![LandingSlot { time: 0, runway: 0 }; n];
        let mut available = vec![0i64; m];
        let mut scheduled: Vec<usize> = Vec::with_capacity(n);

        let mut penalty = 0.0;
        let mut last_landing = i64::MIN;

        for &i in &order {
            let aircraft = &instance.aircraft()[i];

            let mut runway = 0;
            for r in 1..m {
                if available[r] < available[runway] {
                    runway = r;
                }
            }

            let mut time = aircraft.target.max(available[runway]);
            for &j in &scheduled {
                if slots[j].runway == runway && slots[j].time <= time {
                    time = time.max(slots[j].time + instance.separation(j, i));
                }
            }
            time = time.min(aircraft.latest);

            slots[i] = LandingSlot { time, runway };
            available[runway] = time;
            scheduled.push(i);

            match variant {
                ObjectiveVariant::WeightedEarlinessTardiness => {
                    penalty += aircraft.deviation_cost(time);
                }
                ObjectiveVariant::Makespan => {
                    last_landing = last_landing.max(time);
                }
                ObjectiveVariant::LatenessWithTransfer => {
                    let arrival = time + aircraft.transfer_time(runway);
                    penalty += (arrival - aircraft.target).max(0) as f64;
                }
            }
        }

        let objective = match variant {
            ObjectiveVariant::Makespan => {
                if n == 0 {
                    0.0
                } else {
                    last_landing as f64
                }
            }
            _ => penalty,
        };

        (Schedule::new(slots), objective)
    }
}
