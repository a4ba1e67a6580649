//! Vehicle type.

use serde::{Deserialize, Serialize};

/// A capacity-bounded vehicle that shipments are packed into.
///
/// Vehicles are immutable once loaded into a [`LoadingProblem`]; the
/// capacity must be positive (validated at problem construction).
///
/// [`LoadingProblem`]: super::LoadingProblem
///
/// # Examples
///
/// ```
/// use u_loading::models::Vehicle;
///
/// let v = Vehicle::new(0, 500);
/// assert_eq!(v.id(), 0);
/// assert_eq!(v.capacity(), 500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    id: usize,
    capacity: i32,
}

impl Vehicle {
    /// Creates a vehicle with the given ID and total capacity.
    pub fn new(id: usize, capacity: i32) -> Self {
        Self { id, capacity }
    }

    /// Vehicle ID (unique within a problem).
    pub fn id(&self) -> usize {
        self.id
    }

    /// Total load capacity.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vehicle_new() {
        let v = Vehicle::new(2, 1000);
        assert_eq!(v.id(), 2);
        assert_eq!(v.capacity(), 1000);
    }
}
