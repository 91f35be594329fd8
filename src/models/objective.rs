//! Objective variants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which objective a solve minimizes.
///
/// The variant selects the auxiliary terms of the exact formulation and the
/// scoring formula applied by the validator and the greedy constructor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectiveVariant {
    /// Σ earliness·early_penalty + tardiness·late_penalty against each
    /// aircraft's target time.
    WeightedEarlinessTardiness,
    /// Landing time of the last aircraft.
    Makespan,
    /// Σ max(0, landing + runway transfer − target): total lateness of
    /// parking arrival.
    LatenessWithTransfer,
}

impl ObjectiveVariant {
    /// All variants, in declaration order.
    pub const ALL: [Self; 3] = [
        Self::WeightedEarlinessTardiness,
        Self::Makespan,
        Self::LatenessWithTransfer,
    ];
}

impl fmt::Display for ObjectiveVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::WeightedEarlinessTardiness => "weighted earliness/tardiness",
            Self::Makespan => "makespan",
            Self::LatenessWithTransfer => "lateness with transfer",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ObjectiveVariant::Makespan.to_string(), "makespan");
    }

    #[test]
    fn test_all_distinct() {
        assert_eq!(ObjectiveVariant::ALL.len(), 3);
        assert_ne!(ObjectiveVariant::ALL[0], ObjectiveVariant::ALL[1]);
    }
}
