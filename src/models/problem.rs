//! Loading problem instance with one-time input validation.

use serde::{Deserialize, Serialize};

use super::{LoadingError, Shipment, Vehicle};

/// A fleet loading problem instance.
///
/// Owns the ordered shipment and vehicle sequences. Input validation
/// happens exactly once, here: non-positive demands or capacities, an
/// empty fleet facing a non-empty shipment set, and shipments that no
/// vehicle could hold even in isolation are all rejected up front. A
/// problem that constructs successfully always yields *some* search
/// result (possibly with unplaced shipments).
///
/// Shipment order is significant: candidates are constructed by placing
/// shipments in exactly this order.
///
/// # Examples
///
/// ```
/// use u_loading::models::{LoadingProblem, LoadingError, Shipment, Vehicle};
///
/// let problem = LoadingProblem::new(
///     vec![Shipment::new(1, 50)],
///     vec![Vehicle::new(1, 100)],
/// ).unwrap();
/// assert_eq!(problem.num_shipments(), 1);
///
/// // A shipment larger than every vehicle is permanently unplaceable.
/// let err = LoadingProblem::new(
///     vec![Shipment::new(1, 500)],
///     vec![Vehicle::new(1, 100)],
/// ).unwrap_err();
/// assert!(matches!(err, LoadingError::OversizedShipment { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadingProblem {
    shipments: Vec<Shipment>,
    vehicles: Vec<Vehicle>,
}

impl LoadingProblem {
    /// Creates a validated problem instance.
    ///
    /// # Errors
    ///
    /// - [`LoadingError::NonPositiveDemand`] / [`LoadingError::NonPositiveCapacity`]
    ///   if any shipment or vehicle declares a non-positive size.
    /// - [`LoadingError::EmptyFleet`] if there are shipments but no vehicles.
    /// - [`LoadingError::OversizedShipment`] if some shipment's demand
    ///   exceeds every vehicle's capacity (reported once, for the first
    ///   such shipment, rather than rediscovered every round).
    pub fn new(shipments: Vec<Shipment>, vehicles: Vec<Vehicle>) -> Result<Self, LoadingError> {
        for s in &shipments {
            if s.demand() <= 0 {
                return Err(LoadingError::NonPositiveDemand {
                    shipment_id: s.id(),
                    demand: s.demand(),
                });
            }
        }
        for v in &vehicles {
            if v.capacity() <= 0 {
                return Err(LoadingError::NonPositiveCapacity {
                    vehicle_id: v.id(),
                    capacity: v.capacity(),
                });
            }
        }
        if vehicles.is_empty() && !shipments.is_empty() {
            return Err(LoadingError::EmptyFleet);
        }

        let max_capacity = vehicles.iter().map(Vehicle::capacity).max().unwrap_or(0);
        if let Some(s) = shipments.iter().find(|s| s.demand() > max_capacity) {
            return Err(LoadingError::OversizedShipment {
                shipment_id: s.id(),
                demand: s.demand(),
                max_capacity,
            });
        }

        Ok(Self {
            shipments,
            vehicles,
        })
    }

    /// The shipments, in construction order.
    pub fn shipments(&self) -> &[Shipment] {
        &self.shipments
    }

    /// The fleet, in fleet order.
    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    /// Number of shipments.
    pub fn num_shipments(&self) -> usize {
        self.shipments.len()
    }

    /// Number of vehicles.
    pub fn num_vehicles(&self) -> usize {
        self.vehicles.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_valid() {
        let p = LoadingProblem::new(
            vec![Shipment::new(1, 500), Shipment::new(2, 300)],
            vec![Vehicle::new(1, 1000)],
        )
        .expect("valid problem");
        assert_eq!(p.num_shipments(), 2);
        assert_eq!(p.num_vehicles(), 1);
    }

    #[test]
    fn test_problem_empty_fleet() {
        let err = LoadingProblem::new(vec![Shipment::new(1, 10)], vec![]).unwrap_err();
        assert_eq!(err, LoadingError::EmptyFleet);
    }

    #[test]
    fn test_problem_empty_everything_is_valid() {
        // No shipments to place: an empty fleet is fine.
        let p = LoadingProblem::new(vec![], vec![]).expect("trivially valid");
        assert_eq!(p.num_shipments(), 0);
        assert_eq!(p.num_vehicles(), 0);
    }

    #[test]
    fn test_problem_oversized_shipment() {
        let err = LoadingProblem::new(
            vec![Shipment::new(1, 50), Shipment::new(2, 500)],
            vec![Vehicle::new(1, 100), Vehicle::new(2, 80)],
        )
        .unwrap_err();
        assert_eq!(
            err,
            LoadingError::OversizedShipment {
                shipment_id: 2,
                demand: 500,
                max_capacity: 100,
            }
        );
    }

    #[test]
    fn test_problem_boundary_fit_is_valid() {
        // Demand exactly equal to the largest capacity fits.
        let p = LoadingProblem::new(
            vec![Shipment::new(1, 100)],
            vec![Vehicle::new(1, 100)],
        );
        assert!(p.is_ok());
    }

    #[test]
    fn test_problem_non_positive_sizes() {
        let err = LoadingProblem::new(vec![Shipment::new(1, 0)], vec![Vehicle::new(1, 10)])
            .unwrap_err();
        assert!(matches!(err, LoadingError::NonPositiveDemand { .. }));

        let err = LoadingProblem::new(vec![Shipment::new(1, 5)], vec![Vehicle::new(1, -1)])
            .unwrap_err();
        assert!(matches!(err, LoadingError::NonPositiveCapacity { .. }));
    }
}
