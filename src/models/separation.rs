//! Pairwise minimum-separation matrix.
//!
//! Entry `(i, j)` is the minimum gap required between aircraft `i` landing
//! and aircraft `j` landing when `i` precedes `j` on the same runway. The
//! matrix is generally asymmetric (wake turbulence depends on who leads)
//! with a zero diagonal.

use serde::{Deserialize, Serialize};

/// Square matrix of order-dependent minimum separation times.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeparationMatrix {
    entries: Vec<Vec<i64>>,
}

impl SeparationMatrix {
    /// Builds a matrix from explicit rows. Row `i`, column `j` is the gap
    /// required after `i` when `j` follows it on the same runway.
    pub fn from_rows(entries: Vec<Vec<i64>>) -> Self {
        Self { entries }
    }

    /// Builds an `n × n` matrix with the same `gap` between every distinct
    /// pair and a zero diagonal.
    pub fn uniform(n: usize, gap: i64) -> Self {
        let entries = (0..n)
            .map(|i| (0..n).map(|j| if i == j { 0 } else { gap }).collect())
            .collect();
        Self { entries }
    }

    /// Separation required between `i` landing and `j` landing, `i` first.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> i64 {
        self.entries[i][j]
    }

    /// Matrix dimension (number of aircraft covered).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the matrix covers no aircraft.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether every row has the same length as the number of rows.
    pub fn is_square(&self) -> bool {
        let n = self.entries.len();
        self.entries.iter().all(|row| row.len() == n)
    }

    /// Largest entry in the matrix, 0 when empty.
    pub fn max_entry(&self) -> i64 {
        self.entries
            .iter()
            .flat_map(|row| row.iter().copied())
            .max()
            .unwrap_or(0)
    }
}
