//! Error types for problem and configuration validation.

use std::fmt;

/// Error while setting up a loading problem or search.
///
/// All variants are detected once at setup and surfaced to the caller
/// immediately; there are no recoverable failure modes inside a search
/// round (a shipment that cannot be placed in a given candidate is
/// recorded as unplaced, not treated as an error).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadingError {
    /// The vehicle set is empty while the shipment set is not.
    EmptyFleet,

    /// A shipment's demand is not positive.
    NonPositiveDemand {
        /// Offending shipment ID.
        shipment_id: usize,
        /// The declared demand.
        demand: i32,
    },

    /// A vehicle's capacity is not positive.
    NonPositiveCapacity {
        /// Offending vehicle ID.
        vehicle_id: usize,
        /// The declared capacity.
        capacity: i32,
    },

    /// No vehicle can hold this shipment even in isolation, so it is
    /// permanently unplaceable.
    OversizedShipment {
        /// Offending shipment ID.
        shipment_id: usize,
        /// The shipment's demand.
        demand: i32,
        /// The largest vehicle capacity in the fleet.
        max_capacity: i32,
    },

    /// The search configuration failed validation.
    InvalidConfiguration(String),
}

impl fmt::Display for LoadingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadingError::EmptyFleet => {
                write!(f, "no vehicles available for a non-empty shipment set")
            }
            LoadingError::NonPositiveDemand { shipment_id, demand } => {
                write!(f, "shipment {shipment_id} has non-positive demand {demand}")
            }
            LoadingError::NonPositiveCapacity {
                vehicle_id,
                capacity,
            } => {
                write!(f, "vehicle {vehicle_id} has non-positive capacity {capacity}")
            }
            LoadingError::OversizedShipment {
                shipment_id,
                demand,
                max_capacity,
            } => {
                write!(
                    f,
                    "shipment {shipment_id} (demand {demand}) exceeds every vehicle's capacity (max {max_capacity})"
                )
            }
            LoadingError::InvalidConfiguration(reason) => {
                write!(f, "invalid configuration: {reason}")
            }
        }
    }
}

impl std::error::Error for LoadingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_oversized() {
        let err = LoadingError::OversizedShipment {
            shipment_id: 4,
            demand: 500,
            max_capacity: 100,
        };
        let msg = err.to_string();
        assert!(msg.contains("shipment 4"));
        assert!(msg.contains("500"));
        assert!(msg.contains("100"));
    }

    #[test]
    fn test_display_empty_fleet() {
        assert!(LoadingError::EmptyFleet.to_string().contains("no vehicles"));
    }
}
