//! Collision accounting over derived seed sets.

use serde::Serialize;
use std::collections::HashMap;

/// Summary of how many inputs shared an output value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CollisionReport {
    /// Number of values inspected.
    pub total: usize,
    /// Number of distinct values.
    pub distinct: usize,
    /// Values that occurred more than once, with their counts (sorted by value).
    pub duplicates: Vec<(u32, usize)>,
}

impl CollisionReport {
    /// Tally `values`.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        let mut counts: HashMap<u32, usize> = HashMap::new();
        let mut total = 0;
        for value in values {
            *counts.entry(value).or_default() += 1;
            total += 1;
        }
        let mut duplicates: Vec<(u32, usize)> =
            counts.iter().filter(|&(_, &n)| n > 1).map(|(&v, &n)| (v, n)).collect();
        duplicates.sort_unstable();
        Self {
            total,
            distinct: counts.len(),
            duplicates,
        }
    }

    /// True when every value was unique.
    pub fn is_collision_free(&self) -> bool {
        self.duplicates.is_empty()
    }
}
