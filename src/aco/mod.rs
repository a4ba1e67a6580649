//! Ant-colony loading search.
//!
//! A population-based construction metaheuristic: each round, several
//! independent "ants" build complete candidate assignments guided by a
//! shared preference (pheromone) matrix and a tight-packing fill
//! heuristic. The matrix then evaporates and is reinforced toward the
//! round's best candidate, with a larger reward for candidates using
//! fewer vehicles.
//!
//! # References
//!
//! - Dorigo & Stützle (2004), "Ant Colony Optimization"
//! - Levine & Ducatelle (2004), "Ant Colony Optimization and Local Search
//!   for Bin Packing and Cutting Stock Problems"

mod config;
mod construct;
mod pheromone;
mod runner;

pub use config::AcoConfig;
pub use construct::construct;
pub use pheromone::PheromoneMatrix;
pub use runner::{AcoResult, AcoRunner};
