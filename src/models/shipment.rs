//! Shipment type.

use serde::{Deserialize, Serialize};

/// An indivisible shipment with a fixed capacity demand.
///
/// Shipments are immutable once loaded into a [`LoadingProblem`]; the
/// demand must be positive (validated at problem construction).
///
/// [`LoadingProblem`]: super::LoadingProblem
///
/// # Examples
///
/// ```
/// use u_loading::models::Shipment;
///
/// let s = Shipment::new(7, 250);
/// assert_eq!(s.id(), 7);
/// assert_eq!(s.demand(), 250);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shipment {
    id: usize,
    demand: i32,
}

impl Shipment {
    /// Creates a shipment with the given ID and capacity demand.
    pub fn new(id: usize, demand: i32) -> Self {
        Self { id, demand }
    }

    /// Shipment ID (unique within a problem, stable across a run).
    pub fn id(&self) -> usize {
        self.id
    }

    /// Capacity demand.
    pub fn demand(&self) -> i32 {
        self.demand
    }
}
