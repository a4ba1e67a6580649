//! Dense pheromone (preference) matrix.

/// A dense V×V preference matrix stored in row-major order, one
/// row/column per vehicle, every cell initialized to 1.0.
///
/// Construction reads only the diagonal (how attractive vehicle *v* is,
/// via [`self_preference`](PheromoneMatrix::self_preference)); the
/// reinforcement step writes whole rows. The asymmetry between the read
/// and write access patterns is intentional and defines the search
/// dynamics; off-diagonal cells exist structurally but are never
/// consulted during construction.
///
/// # Examples
///
/// ```
/// use u_loading::aco::PheromoneMatrix;
///
/// let mut m = PheromoneMatrix::new(2);
/// assert_eq!(m.self_preference(0), 1.0);
///
/// m.evaporate_and_deposit(0.1, &[1], 0.5);
/// assert!((m.self_preference(0) - 0.9).abs() < 1e-12);
/// assert!((m.self_preference(1) - 1.4).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct PheromoneMatrix {
    data: Vec<f64>,
    size: usize,
}

impl PheromoneMatrix {
    /// Creates a matrix for the given fleet size with every cell = 1.0.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![1.0; size * size],
            size,
        }
    }

    /// Returns the weight in row `i`, column `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.data[i * self.size + j]
    }

    /// Sets the weight in row `i`, column `j`.
    pub fn set(&mut self, i: usize, j: usize, weight: f64) {
        self.data[i * self.size + j] = weight;
    }

    /// Number of vehicles (rows) in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// The diagonal weight for vehicle `v` — the only cell the solution
    /// constructor reads.
    pub fn self_preference(&self, v: usize) -> f64 {
        self.get(v, v)
    }

    /// Applies one round's pheromone update in place.
    ///
    /// Every cell is multiplied by `1 - decay`; then `amount` is added to
    /// every cell (all columns) of each row listed in `reinforced` — the
    /// vehicles that carried at least one shipment in the round's best
    /// candidate. Evaporation applies unconditionally, even when
    /// `reinforced` is empty.
    pub fn evaporate_and_deposit(&mut self, decay: f64, reinforced: &[usize], amount: f64) {
        for cell in &mut self.data {
            *cell *= 1.0 - decay;
        }
        for &row in reinforced {
            let start = row * self.size;
            for cell in &mut self.data[start..start + self.size] {
                *cell += amount;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initialized_uniform() {
        let m = PheromoneMatrix::new(3);
        assert_eq!(m.size(), 3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(m.get(i, j), 1.0);
            }
        }
    }

    #[test]
    fn test_evaporation_only() {
        let mut m = PheromoneMatrix::new(2);
        m.evaporate_and_deposit(0.25, &[], 1.0);
        for i in 0..2 {
            for j in 0..2 {
                assert!((m.get(i, j) - 0.75).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_deposit_writes_whole_row() {
        let mut m = PheromoneMatrix::new(3);
        m.evaporate_and_deposit(0.0, &[1], 0.5);
        // Row 1 gets the deposit in every column, other rows are untouched.
        for j in 0..3 {
            assert!((m.get(1, j) - 1.5).abs() < 1e-12);
            assert!((m.get(0, j) - 1.0).abs() < 1e-12);
            assert!((m.get(2, j) - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_evaporate_then_deposit_order() {
        let mut m = PheromoneMatrix::new(1);
        m.set(0, 0, 2.0);
        // 2.0 * (1 - 0.5) + 1.0 = 2.0, not (2.0 + 1.0) * 0.5
        m.evaporate_and_deposit(0.5, &[0], 1.0);
        assert!((m.get(0, 0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_weights_stay_non_negative() {
        let mut m = PheromoneMatrix::new(2);
        for _ in 0..1000 {
            m.evaporate_and_deposit(0.9, &[0], 0.25);
        }
        for i in 0..2 {
            for j in 0..2 {
                assert!(m.get(i, j) >= 0.0);
            }
        }
    }

    #[test]
    fn test_empty_matrix() {
        let mut m = PheromoneMatrix::new(0);
        assert_eq!(m.size(), 0);
        m.evaporate_and_deposit(0.1, &[], 1.0);
    }
}
