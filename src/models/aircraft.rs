//! Aircraft (flight) model.
//!
//! An aircraft carries its landing time window, preferred target time,
//! deviation penalties, and the per-runway taxi times to its parking
//! position.
//!
//! # Reference
//! Beasley et al. (2000), "Scheduling Aircraft Landings — The Static Case"

use serde::{Deserialize, Serialize};

/// A single aircraft to be scheduled.
///
/// All times are integers on the instance's own clock; the landing window
/// `[earliest, latest]` contains `target`. Penalties are cost per time unit
/// of deviation from `target`.
///
/// # Time Representation
/// The consumer defines what t=0 means (e.g., start of the planning horizon).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Aircraft {
    /// Index of this aircraft within its instance.
    pub id: usize,
    /// Earliest allowed landing time.
    pub earliest: i64,
    /// Preferred landing time.
    pub target: i64,
    /// Latest allowed landing time.
    pub latest: i64,
    /// Penalty per time unit of landing before `target`.
    pub early_penalty: f64,
    /// Penalty per time unit of landing after `target`.
    pub late_penalty: f64,
    /// Taxi time from each runway to parking, one entry per runway.
    /// Populated when the aircraft joins an instance; used only by the
    /// lateness-with-transfer objective.
    pub transfer_times: Vec<i64>,
}

impl Aircraft {
    /// Creates an aircraft with unit deviation penalties.
    pub fn new(id: usize, earliest: i64, target: i64, latest: i64) -> Self {
        Self {
            id,
            earliest,
            target,
            latest,
            early_penalty: 1.0,
            late_penalty: 1.0,
            transfer_times: Vec::new(),
        }
    }

    /// Sets the earliness and tardiness penalty rates.
    pub fn with_penalties(mut self, early: f64, late: f64) -> Self {
        self.early_penalty = early;
        self.late_penalty = late;
        self
    }

    /// Whether `time` lies inside the landing window.
    #[inline]
    pub fn window_contains(&self, time: i64) -> bool {
        self.earliest <= time && time <= self.latest
    }

    /// Whether the landing window contains no instant at all.
    #[inline]
    pub fn window_is_empty(&self) -> bool {
        self.latest < self.earliest
    }

    /// Taxi time from `runway` to parking.
    #[inline]
    pub fn transfer_time(&self, runway: usize) -> i64 {
        self.transfer_times[runway]
    }

    /// Deviation cost of landing at `time`.
    pub fn deviation_cost(&self, time: i64) -> f64 {
        if time < self.target {
            self.early_penalty * (self.target - time) as f64
        } else {
            self.late_penalty * (time - self.target) as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aircraft_builder() {
        let a = Aircraft::new(3, 5, 10, 20).with_penalties(2.0, 4.0);
        assert_eq!(a.id, 3);
        assert_eq!(a.earliest, 5);
        assert_eq!(a.target, 10);
        assert_eq!(a.latest, 20);
        assert_eq!(a.early_penalty, 2.0);
        assert_eq!(a.late_penalty, 4.0);
        assert!(a.transfer_times.is_empty());
    }

    #[test]
    fn test_window_contains() {
        let a = Aircraft::new(0, 5, 10, 20);
        assert!(a.window_contains(5));
        assert!(a.window_contains(20));
        assert!(!a.window_contains(4));
        assert!(!a.window_contains(21));
    }

    #[test]
    fn test_window_is_empty() {
        assert!(!Aircraft::new(0, 5, 5, 5).window_is_empty());
        let mut a = Aircraft::new(0, 5, 10, 20);
        a.latest = 4;
        assert!(a.window_is_empty());
    }

    #[test]
    fn test_deviation_cost() {
        let a = Aircraft::new(0, 0, 10, 100).with_penalties(2.0, 3.0);
        assert_eq!(a.deviation_cost(10), 0.0);
        assert_eq!(a.deviation_cost(7), 6.0); // 3 units early × 2.0
        assert_eq!(a.deviation_cost(14), 12.0); // 4 units late × 3.0
    }
}
