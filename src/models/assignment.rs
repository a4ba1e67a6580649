//! Candidate assignment: loads for every vehicle plus unplaced shipments.

use serde::{Deserialize, Serialize};

use super::Load;

/// A complete candidate assignment of shipments to a fleet.
///
/// Holds one [`Load`] per vehicle (possibly empty) plus the shipments that
/// could not be placed. Every input shipment appears in exactly one of
/// {some load, the unplaced list} — never both, never neither.
///
/// # Examples
///
/// ```
/// use u_loading::models::Assignment;
///
/// let mut a = Assignment::new(2);
/// assert_eq!(a.loads().len(), 2);
/// assert_eq!(a.vehicles_used(), 0);
///
/// a.loads_mut()[0].try_push(0, 30, 100);
/// a.add_unplaced(1);
/// assert_eq!(a.vehicles_used(), 1);
/// assert_eq!(a.unplaced(), &[1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    loads: Vec<Load>,
    unplaced: Vec<usize>,
}

impl Assignment {
    /// Creates an assignment with one empty load per vehicle.
    pub fn new(num_vehicles: usize) -> Self {
        Self {
            loads: (0..num_vehicles).map(Load::new).collect(),
            unplaced: Vec::new(),
        }
    }

    /// The loads, one per vehicle in fleet order.
    pub fn loads(&self) -> &[Load] {
        &self.loads
    }

    /// Mutable access to the loads (used during construction).
    pub fn loads_mut(&mut self) -> &mut [Load] {
        &mut self.loads
    }

    /// Marks a shipment as unplaced in this candidate.
    pub fn add_unplaced(&mut self, shipment: usize) {
        self.unplaced.push(shipment);
    }

    /// Indices of the shipments that could not be placed, in input order.
    pub fn unplaced(&self) -> &[usize] {
        &self.unplaced
    }

    /// Number of unplaced shipments.
    pub fn num_unplaced(&self) -> usize {
        self.unplaced.len()
    }

    /// Number of vehicles carrying at least one shipment.
    pub fn vehicles_used(&self) -> usize {
        self.loads.iter().filter(|l| !l.is_empty()).count()
    }

    /// Total number of shipments placed across all loads.
    pub fn num_placed(&self) -> usize {
        self.loads.iter().map(|l| l.len()).sum()
    }
}
