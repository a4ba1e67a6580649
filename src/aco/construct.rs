//! Single-ant candidate construction.
//!
//! One construction is a greedy-probabilistic pass over the shipments in
//! input order: each shipment is offered to every vehicle it still fits
//! in, desirability is scored as `pheromone^alpha * fill_ratio^beta`, and
//! a vehicle is drawn from the normalized desirabilities. A shipment with
//! no feasible vehicle goes to the unplaced list and is not retried in
//! this candidate.

use rand::Rng;

use crate::models::{Assignment, LoadingProblem};

use super::PheromoneMatrix;

/// Builds one complete candidate assignment.
///
/// Shipments are processed in problem order; given the same problem,
/// matrix contents, and a seeded RNG the output is reproducible. The
/// fill-ratio term `(used + demand) / capacity` favors vehicles that
/// would become *more* full after accepting the shipment, so the draw is
/// biased toward tight packing.
///
/// # Examples
///
/// ```
/// use rand::SeedableRng;
/// use u_loading::models::{LoadingProblem, Shipment, Vehicle};
/// use u_loading::aco::{construct, PheromoneMatrix};
///
/// let problem = LoadingProblem::new(
///     vec![Shipment::new(1, 60), Shipment::new(2, 60)],
///     vec![Vehicle::new(1, 100)],
/// ).unwrap();
/// let pheromones = PheromoneMatrix::new(1);
/// let mut rng = rand::rngs::StdRng::seed_from_u64(42);
///
/// let candidate = construct(&problem, &pheromones, 1.0, 1.0, &mut rng);
/// // Only one of the two shipments fits the single vehicle.
/// assert_eq!(candidate.num_placed(), 1);
/// assert_eq!(candidate.num_unplaced(), 1);
/// ```
pub fn construct<R: Rng>(
    problem: &LoadingProblem,
    pheromones: &PheromoneMatrix,
    alpha: f64,
    beta: f64,
    rng: &mut R,
) -> Assignment {
    let vehicles = problem.vehicles();
    let mut assignment = Assignment::new(vehicles.len());
    let mut desirability = vec![0.0; vehicles.len()];

    for (index, shipment) in problem.shipments().iter().enumerate() {
        let demand = shipment.demand();
        let mut total = 0.0;

        for (v, vehicle) in vehicles.iter().enumerate() {
            let load = &assignment.loads()[v];
            if !load.fits(demand, vehicle.capacity()) {
                desirability[v] = 0.0;
                continue;
            }
            let fill_ratio =
                f64::from(load.used_capacity() + demand) / f64::from(vehicle.capacity());
            let score = pheromones.self_preference(v).powf(alpha) * fill_ratio.powf(beta);
            desirability[v] = score;
            total += score;
        }

        if total <= 0.0 {
            // No feasible vehicle for this candidate; not retried.
            assignment.add_unplaced(index);
            continue;
        }

        let chosen = roulette(&desirability, total, rng);
        let capacity = vehicles[chosen].capacity();
        let placed = assignment.loads_mut()[chosen].try_push(index, demand, capacity);
        debug_assert!(placed, "roulette picked an infeasible vehicle");
    }

    assignment
}

/// Draws an index proportionally to the given non-negative weights.
///
/// `total` must be the (positive) sum of `weights`. Falls back to the
/// last positive weight if floating-point rounding leaves the threshold
/// above the accumulated sum.
fn roulette<R: Rng>(weights: &[f64], total: f64, rng: &mut R) -> usize {
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    let mut last_positive = 0;

    for (i, &w) in weights.iter().enumerate() {
        if w <= 0.0 {
            continue;
        }
        cumulative += w;
        last_positive = i;
        if threshold < cumulative {
            return i;
        }
    }
    last_positive
}
