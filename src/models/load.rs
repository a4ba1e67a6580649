//! Load: the shipments assigned to one vehicle.

use serde::{Deserialize, Serialize};

/// The ordered sequence of shipments assigned to one vehicle in a
/// candidate assignment, with a cached used-capacity total.
///
/// A load is mutated only while a single candidate is being constructed;
/// [`try_push`](Load::try_push) refuses any push that would exceed the
/// vehicle's capacity, so `used_capacity <= capacity` holds at all times.
///
/// # Examples
///
/// ```
/// use u_loading::models::Load;
///
/// let mut load = Load::new(0);
/// assert!(load.try_push(3, 80, 100));
/// assert!(!load.try_push(4, 30, 100)); // would exceed capacity
/// assert_eq!(load.used_capacity(), 80);
/// assert_eq!(load.shipments(), &[3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Load {
    vehicle: usize,
    shipments: Vec<usize>,
    used_capacity: i32,
}

impl Load {
    /// Creates an empty load for the vehicle at the given fleet index.
    pub fn new(vehicle: usize) -> Self {
        Self {
            vehicle,
            shipments: Vec::new(),
            used_capacity: 0,
        }
    }

    /// Fleet index of the vehicle this load belongs to.
    pub fn vehicle(&self) -> usize {
        self.vehicle
    }

    /// Indices of the assigned shipments, in assignment order.
    pub fn shipments(&self) -> &[usize] {
        &self.shipments
    }

    /// Total demand of the assigned shipments.
    pub fn used_capacity(&self) -> i32 {
        self.used_capacity
    }

    /// Number of assigned shipments.
    pub fn len(&self) -> usize {
        self.shipments.len()
    }

    /// Returns `true` if no shipment is assigned.
    pub fn is_empty(&self) -> bool {
        self.shipments.is_empty()
    }

    /// Capacity left over given the vehicle's total capacity.
    pub fn remaining_capacity(&self, capacity: i32) -> i32 {
        capacity - self.used_capacity
    }

    /// Returns `true` if a shipment with the given demand still fits.
    pub fn fits(&self, demand: i32, capacity: i32) -> bool {
        self.used_capacity + demand <= capacity
    }

    /// Appends a shipment if it fits within the vehicle's capacity.
    ///
    /// Returns `false` (and leaves the load unchanged) if the push would
    /// exceed `capacity`.
    pub fn try_push(&mut self, shipment: usize, demand: i32, capacity: i32) -> bool {
        if !self.fits(demand, capacity) {
            return false;
        }
        self.shipments.push(shipment);
        self.used_capacity += demand;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_empty() {
        let load = Load::new(1);
        assert_eq!(load.vehicle(), 1);
        assert!(load.is_empty());
        assert_eq!(load.len(), 0);
        assert_eq!(load.used_capacity(), 0);
        assert_eq!(load.remaining_capacity(100), 100);
    }

    #[test]
    fn test_try_push_accumulates() {
        let mut load = Load::new(0);
        assert!(load.try_push(0, 40, 100));
        assert!(load.try_push(1, 60, 100));
        assert_eq!(load.shipments(), &[0, 1]);
        assert_eq!(load.used_capacity(), 100);
        assert_eq!(load.remaining_capacity(100), 0);
    }

    #[test]
    fn test_try_push_rejects_overflow() {
        let mut load = Load::new(0);
        assert!(load.try_push(0, 70, 100));
        assert!(!load.try_push(1, 31, 100));
        // Rejected push leaves the load unchanged
        assert_eq!(load.shipments(), &[0]);
        assert_eq!(load.used_capacity(), 70);
    }

    #[test]
    fn test_fits_boundary() {
        let mut load = Load::new(0);
        load.try_push(0, 50, 100);
        assert!(load.fits(50, 100));
        assert!(!load.fits(51, 100));
    }
}
