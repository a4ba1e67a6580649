//! Domain model types for fleet loading problems.
//!
//! Provides the core abstractions: shipments with capacity demands,
//! vehicles with capacity bounds, loads as ordered per-vehicle shipment
//! sequences, candidate assignments, and a validated problem instance
//! that ties everything together.

mod assignment;
mod error;
mod load;
mod problem;
mod shipment;
mod vehicle;

pub use assignment::Assignment;
pub use error::LoadingError;
pub use load::Load;
pub use problem::LoadingProblem;
pub use shipment::Shipment;
pub use vehicle::Vehicle;
