//! ACO execution loop.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::evaluation::{evaluate, Score};
use crate::models::{Assignment, LoadingError, LoadingProblem};

use super::config::AcoConfig;
use super::construct::construct;
use super::pheromone::PheromoneMatrix;

/// Result of an ant-colony loading search.
#[derive(Debug, Clone)]
pub struct AcoResult {
    /// The best assignment found across all rounds.
    pub best: Assignment,

    /// Score of the best assignment.
    pub best_score: Score,

    /// Number of rounds executed.
    pub rounds: usize,

    /// Best-so-far score after each round. Non-worsening under the
    /// lexicographic [`Score`] order.
    pub score_history: Vec<Score>,
}

/// Executes the ant-colony loading search.
///
/// A search runs exactly once per call: the preference matrix and the
/// best-so-far record live inside the call and the returned [`AcoResult`]
/// is the finished state, so a half-run search is never observable.
///
/// # Examples
///
/// ```
/// use u_loading::models::{LoadingProblem, Shipment, Vehicle};
/// use u_loading::aco::{AcoConfig, AcoRunner};
///
/// let problem = LoadingProblem::new(
///     vec![Shipment::new(1, 40), Shipment::new(2, 55)],
///     vec![Vehicle::new(1, 100)],
/// ).unwrap();
///
/// let result = AcoRunner::run(&problem, &AcoConfig::default().with_seed(1)).unwrap();
/// assert_eq!(result.best_score.vehicles_used(), 1);
/// assert!(result.best.unplaced().is_empty());
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs the search for the configured number of rounds.
    ///
    /// Each round builds `num_ants` candidates against the current
    /// (frozen) matrix, picks the round best by lowest vehicles-used
    /// (first-found tie-break, by ant order), evaluates it, updates the
    /// best-so-far record on strict improvement, and then evaporates and
    /// reinforces the matrix. Evaporation applies every round; the
    /// deposit of `1 / vehicles_used` goes to the rows of the vehicles
    /// that carried shipments in the round best.
    ///
    /// # Errors
    ///
    /// [`LoadingError::InvalidConfiguration`] if the configuration fails
    /// [`AcoConfig::validate`]. Input errors are caught earlier, at
    /// [`LoadingProblem::new`].
    pub fn run(problem: &LoadingProblem, config: &AcoConfig) -> Result<AcoResult, LoadingError> {
        config
            .validate()
            .map_err(LoadingError::InvalidConfiguration)?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let vehicles = problem.vehicles();
        let mut pheromones = PheromoneMatrix::new(vehicles.len());
        let mut best: Option<(Assignment, Score)> = None;
        let mut score_history = Vec::with_capacity(config.num_rounds);

        for _ in 0..config.num_rounds {
            // Every ant in the round reads the same frozen matrix; the
            // update below happens only after all constructions finish.
            let mut round_best: Option<Assignment> = None;
            for _ in 0..config.num_ants {
                let candidate =
                    construct(problem, &pheromones, config.alpha, config.beta, &mut rng);
                let improves = match &round_best {
                    Some(current) => candidate.vehicles_used() < current.vehicles_used(),
                    None => true,
                };
                if improves {
                    round_best = Some(candidate);
                }
            }
            let round_best = round_best.expect("num_ants validated positive");

            let round_score = evaluate(&round_best, vehicles);
            let improves = match &best {
                Some((_, best_score)) => round_score < *best_score,
                None => true,
            };
            if improves {
                best = Some((round_best.clone(), round_score));
            }

            let reinforced: Vec<usize> = round_best
                .loads()
                .iter()
                .enumerate()
                .filter(|(_, load)| !load.is_empty())
                .map(|(v, _)| v)
                .collect();
            let amount = if reinforced.is_empty() {
                0.0
            } else {
                1.0 / reinforced.len() as f64
            };
            pheromones.evaporate_and_deposit(config.decay, &reinforced, amount);

            let (_, best_score) = best.as_ref().expect("set on first round");
            score_history.push(*best_score);
        }

        let (best, best_score) = best.expect("num_rounds validated positive");
        Ok(AcoResult {
            best,
            best_score,
            rounds: config.num_rounds,
            score_history,
        })
    }
}
