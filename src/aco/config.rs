//! ACO search configuration.

/// Configuration for the ant-colony loading search.
///
/// Defaults match the reference tuning: 10 ants per round, 100 rounds,
/// decay 0.1, alpha = beta = 1.
///
/// # Examples
///
/// ```
/// use u_loading::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_num_ants(20)
///     .with_num_rounds(50)
///     .with_decay(0.05)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct AcoConfig {
    /// Number of independent constructions (ants) per round.
    pub num_ants: usize,

    /// Number of rounds. The search is a bounded batch computation:
    /// exactly this many rounds run, with no convergence loop.
    pub num_rounds: usize,

    /// Pheromone evaporation rate per round, in [0, 1).
    pub decay: f64,

    /// Exponent on the pheromone term. Higher values make the learned
    /// preferences dominate.
    pub alpha: f64,

    /// Exponent on the fill-ratio heuristic term. Higher values favor
    /// vehicles that would become fuller after accepting a shipment.
    pub beta: f64,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            num_ants: 10,
            num_rounds: 100,
            decay: 0.1,
            alpha: 1.0,
            beta: 1.0,
            seed: None,
        }
    }
}

impl AcoConfig {
    pub fn with_num_ants(mut self, n: usize) -> Self {
        self.num_ants = n;
        self
    }

    pub fn with_num_rounds(mut self, n: usize) -> Self {
        self.num_rounds = n;
        self
    }

    pub fn with_decay(mut self, decay: f64) -> Self {
        self.decay = decay;
        self
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_ants == 0 {
            return Err("num_ants must be positive".into());
        }
        if self.num_rounds == 0 {
            return Err("num_rounds must be positive".into());
        }
        if !self.decay.is_finite() || !(0.0..1.0).contains(&self.decay) {
            return Err(format!("decay must be in [0, 1), got {}", self.decay));
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(format!("alpha must be non-negative, got {}", self.alpha));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(format!("beta must be non-negative, got {}", self.beta));
        }
        Ok(())
    }
}
