//! Candidate assignment scoring.

use crate::models::{Assignment, Vehicle};

use super::Score;

/// Scores a candidate assignment.
///
/// Counts the vehicles carrying at least one shipment and sums their
/// leftover capacity; empty vehicles contribute to neither figure. See
/// [`Score`] for the comparison semantics.
///
/// # Examples
///
/// ```
/// use u_loading::models::{Assignment, Vehicle};
/// use u_loading::evaluation::{evaluate, Score};
///
/// let vehicles = vec![Vehicle::new(0, 100), Vehicle::new(1, 100)];
/// let mut a = Assignment::new(2);
/// a.loads_mut()[0].try_push(0, 70, 100);
///
/// // One vehicle used, 30 capacity wasted; the empty vehicle is ignored.
/// assert_eq!(evaluate(&a, &vehicles), Score::new(1, 30));
/// ```
pub fn evaluate(assignment: &Assignment, vehicles: &[Vehicle]) -> Score {
    let mut vehicles_used = 0;
    let mut remaining: i64 = 0;

    for (load, vehicle) in assignment.loads().iter().zip(vehicles) {
        if load.is_empty() {
            continue;
        }
        vehicles_used += 1;
        remaining += i64::from(load.remaining_capacity(vehicle.capacity()));
    }

    Score::new(vehicles_used, remaining)
}
