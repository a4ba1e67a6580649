//! # u-loading
//!
//! Fleet loading optimization library: assigns discrete shipments to
//! capacity-constrained vehicles, minimizing the number of vehicles used
//! and the total wasted capacity (a bin-packing variant).
//!
//! The search is an ant-colony construction heuristic: each round builds
//! several candidate assignments guided by a learned preference matrix and
//! a tight-packing fill heuristic, then reinforces the matrix toward the
//! round's best assignment.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Shipment, Vehicle, Load, Assignment, LoadingProblem)
//! - [`evaluation`] — Assignment scoring (vehicles used, remaining capacity)
//! - [`aco`] — Ant-colony search (pheromone matrix, construction, runner)
//!
//! ## Example
//!
//! ```
//! use u_loading::models::{LoadingProblem, Shipment, Vehicle};
//! use u_loading::aco::{AcoConfig, AcoRunner};
//!
//! let shipments = vec![
//!     Shipment::new(1, 500),
//!     Shipment::new(2, 300),
//!     Shipment::new(3, 200),
//! ];
//! let vehicles = vec![Vehicle::new(1, 1000), Vehicle::new(2, 1001)];
//! let problem = LoadingProblem::new(shipments, vehicles).unwrap();
//!
//! let config = AcoConfig::default().with_seed(42);
//! let result = AcoRunner::run(&problem, &config).unwrap();
//! assert!(result.best_score.vehicles_used() <= 2);
//! ```

pub mod aco;
pub mod evaluation;
pub mod models;
