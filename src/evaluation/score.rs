//! Assignment score with lexicographic ordering.

use serde::{Deserialize, Serialize};

/// The score of a candidate assignment.
///
/// Comparison is lexicographic: fewer vehicles used wins, ties are broken
/// by lower total remaining capacity (tighter packing). The derived `Ord`
/// (field order) implements exactly this, and is the single ordering used
/// everywhere scores are compared — round-best evaluation and global-best
/// updates alike.
///
/// # Examples
///
/// ```
/// use u_loading::evaluation::Score;
///
/// let a = Score::new(1, 500);
/// let b = Score::new(2, 0);
/// let c = Score::new(2, 10);
/// assert!(a < b);       // fewer vehicles always wins
/// assert!(b < c);       // same vehicles: tighter packing wins
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Score {
    vehicles_used: usize,
    remaining_capacity: i64,
}

impl Score {
    /// Creates a score from a vehicle count and a leftover-capacity sum.
    pub fn new(vehicles_used: usize, remaining_capacity: i64) -> Self {
        Self {
            vehicles_used,
            remaining_capacity,
        }
    }

    /// Number of vehicles carrying at least one shipment.
    pub fn vehicles_used(&self) -> usize {
        self.vehicles_used
    }

    /// Summed leftover capacity of the used vehicles (wasted capacity).
    pub fn remaining_capacity(&self) -> i64 {
        self.remaining_capacity
    }
}
