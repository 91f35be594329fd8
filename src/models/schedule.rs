//! Schedule (solution) model.
//!
//! A schedule assigns every aircraft one landing time and one runway. It
//! carries no feasibility judgement of its own; the validator recomputes
//! that independently and reports violations.

use serde::{Deserialize, Serialize};

/// Landing time and runway for one aircraft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandingSlot {
    /// Assigned landing time.
    pub time: i64,
    /// Assigned runway index.
    pub runway: usize,
}

/// A complete schedule: one slot per aircraft, indexed by aircraft id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    slots: Vec<LandingSlot>,
}

impl Schedule {
    /// Wraps per-aircraft slots; `slots[i]` belongs to aircraft `i`.
    pub fn new(slots: Vec<LandingSlot>) -> Self {
        Self { slots }
    }

    /// Slot for `aircraft`.
    #[inline]
    pub fn slot(&self, aircraft: usize) -> LandingSlot {
        self.slots[aircraft]
    }

    /// Landing time of `aircraft`.
    #[inline]
    pub fn landing_time(&self, aircraft: usize) -> i64 {
        self.slots[aircraft].time
    }

    /// Runway of `aircraft`.
    #[inline]
    pub fn runway(&self, aircraft: usize) -> usize {
        self.slots[aircraft].runway
    }

    /// All slots in aircraft-id order.
    pub fn slots(&self) -> &[LandingSlot] {
        &self.slots
    }

    /// Number of scheduled aircraft.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no aircraft is scheduled.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Landing time of the last aircraft, 0 for an empty schedule.
    pub fn makespan(&self) -> i64 {
        self.slots.iter().map(|s| s.time).max().unwrap_or(0)
    }

    /// Ids of the aircraft landing on `runway`, in id order.
    pub fn aircraft_on_runway(&self, runway: usize) -> Vec<usize> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.runway == runway)
            .map(|(i, _)| i)
            .collect()
    }
}

/// A constraint violated by a schedule.
///
/// Violations are descriptive, not fatal: an infeasible schedule is still
/// returned to the caller, flagged with the list of everything it breaks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Violation {
    /// A landing time falls outside its aircraft's window.
    TimeWindow {
        aircraft: usize,
        time: i64,
        earliest: i64,
        latest: i64,
    },
    /// Two aircraft on one runway land closer than the separation required
    /// by their realized order (`leader` lands first).
    Separation {
        leader: usize,
        follower: usize,
        runway: usize,
        required: i64,
        actual: i64,
    },
}

impl Violation {
    /// How far short of feasibility this violation falls, in time units.
    pub fn shortfall(&self) -> i64 {
        match *self {
            Self::TimeWindow {
                time,
                earliest,
                latest,
                ..
            } => {
                if time < earliest {
                    earliest - time
                } else {
                    time - latest
                }
            }
            Self::Separation {
                required, actual, ..
            } => required - actual,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schedule() -> Schedule {
        Schedule::new(vec![
            LandingSlot { time: 10, runway: 0 },
            LandingSlot { time: 25, runway: 1 },
            LandingSlot { time: 18, runway: 0 },
        ])
    }

    #[test]
    fn test_schedule_accessors() {
        let s = sample_schedule();
        assert_eq!(s.len(), 3);
        assert_eq!(s.landing_time(1), 25);
        assert_eq!(s.runway(2), 0);
        assert_eq!(s.slot(0), LandingSlot { time: 10, runway: 0 });
    }

    #[test]
    fn test_makespan() {
        assert_eq!(sample_schedule().makespan(), 25);
        assert_eq!(Schedule::default().makespan(), 0);
    }

    #[test]
    fn test_aircraft_on_runway() {
        let s = sample_schedule();
        assert_eq!(s.aircraft_on_runway(0), vec![0, 2]);
        assert_eq!(s.aircraft_on_runway(1), vec![1]);
        assert!(s.aircraft_on_runway(2).is_empty());
    }

    #[test]
    fn test_violation_shortfall() {
        let early = Violation::TimeWindow {
            aircraft: 0,
            time: 3,
            earliest: 5,
            latest: 20,
        };
        assert_eq!(early.shortfall(), 2);

        let late = Violation::TimeWindow {
            aircraft: 0,
            time: 26,
            earliest: 5,
            latest: 20,
        };
        assert_eq!(late.shortfall(), 6);

        let sep = Violation::Separation {
            leader: 0,
            follower: 1,
            runway: 0,
            required: 100,
            actual: 5,
        };
        assert_eq!(sep.shortfall(), 95);
    }

    #[test]
    fn test_serde_round_trip() {
        let s = sample_schedule();
        let json = serde_json::to_string(&s).unwrap();
        let back: Schedule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);
    }
}
