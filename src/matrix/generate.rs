//! Random instance generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::cost::{Cost, CostMatrix};
use crate::error::{BnbError, Result};

/// Builder for random asymmetric cost matrices.
///
/// Every off-diagonal edge is independently dropped with probability
/// `unreachable_probability`; the remaining edges get a uniform cost in
/// `min_cost..=max_cost`.
///
/// # Examples
///
/// ```
/// use u_bnb::matrix::MatrixGenerator;
///
/// let matrix = MatrixGenerator::new(6)
///     .with_cost_range(1, 100)
///     .with_unreachable_probability(0.1)
///     .with_seed(7)
///     .generate()
///     .unwrap();
/// assert_eq!(matrix.size(), 6);
/// ```
#[derive(Debug, Clone)]
pub struct MatrixGenerator {
    /// Number of locations.
    pub size: usize,
    /// Smallest edge cost (inclusive).
    pub min_cost: Cost,
    /// Largest edge cost (inclusive).
    pub max_cost: Cost,
    /// Probability in `[0, 1]` that an edge is missing.
    pub unreachable_probability: f64,
    /// Random seed (None for OS entropy).
    pub seed: Option<u64>,
}

impl MatrixGenerator {
    /// Creates a generator for `size` locations with costs in `1..=100`.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            min_cost: 1,
            max_cost: 100,
            unreachable_probability: 0.0,
            seed: None,
        }
    }

    /// Sets the inclusive cost range.
    pub fn with_cost_range(mut self, min_cost: Cost, max_cost: Cost) -> Self {
        self.min_cost = min_cost;
        self.max_cost = max_cost;
        self
    }

    /// Sets the probability that an edge is missing.
    pub fn with_unreachable_probability(mut self, p: f64) -> Self {
        self.unreachable_probability = p;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Checks the parameters without generating anything.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(BnbError::invalid_dimension("matrix has 0 locations"));
        }
        if self.min_cost > self.max_cost {
            return Err(BnbError::invalid_config(format!(
                "min_cost {} exceeds max_cost {}",
                self.min_cost, self.max_cost
            )));
        }
        let limit = CostMatrix::max_edge_cost_for(self.size);
        if self.max_cost > limit {
            return Err(BnbError::invalid_config(format!(
                "max_cost {} exceeds the edge cost limit {limit} for {} locations",
                self.max_cost, self.size
            )));
        }
        if !(0.0..=1.0).contains(&self.unreachable_probability) {
            return Err(BnbError::invalid_config(format!(
                "unreachable_probability {} is outside [0, 1]",
                self.unreachable_probability
            )));
        }
        Ok(())
    }

    /// Generates a matrix with a fresh RNG built from `seed`.
    pub fn generate(&self) -> Result<CostMatrix> {
        let mut rng = match self.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_os_rng(),
        };
        self.generate_with(&mut rng)
    }

    /// Generates a matrix drawing from the caller's RNG.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Result<CostMatrix> {
        self.validate()?;
        let mut matrix = CostMatrix::unreachable(self.size)?;
        for from in 0..self.size {
            for to in 0..self.size {
                if from == to || rng.random_bool(self.unreachable_probability) {
                    continue;
                }
                let cost = rng.random_range(self.min_cost..=self.max_cost);
                matrix.set(from, to, Some(cost))?;
            }
        }
        Ok(matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::UNREACHABLE;

    #[test]
    fn test_same_seed_same_matrix() {
        let g = MatrixGenerator::new(7).with_unreachable_probability(0.3).with_seed(42);
        assert_eq!(g.generate().unwrap(), g.generate().unwrap());
    }

    #[test]
    fn test_costs_within_range_and_complete() {
        let m = MatrixGenerator::new(8)
            .with_cost_range(5, 9)
            .with_seed(1)
            .generate()
            .unwrap();
        for from in 0..8 {
            for to in 0..8 {
                match m.get(from, to) {
                    None => assert_eq!(from, to),
                    Some(c) => assert!((5..=9).contains(&c)),
                }
            }
        }
    }

    #[test]
    fn test_all_edges_dropped() {
        let m = MatrixGenerator::new(5)
            .with_unreachable_probability(1.0)
            .with_seed(3)
            .generate()
            .unwrap();
        assert_eq!(m, CostMatrix::unreachable(5).unwrap());
    }

    #[test]
    fn test_invalid_parameters() {
        assert!(matches!(
            MatrixGenerator::new(0).generate(),
            Err(BnbError::InvalidDimension(_))
        ));
        assert!(matches!(
            MatrixGenerator::new(3).with_cost_range(10, 2).generate(),
            Err(BnbError::InvalidConfig(_))
        ));
        assert!(matches!(
            MatrixGenerator::new(3).with_unreachable_probability(1.5).generate(),
            Err(BnbError::InvalidConfig(_))
        ));
        assert!(matches!(
            MatrixGenerator::new(3).with_cost_range(0, UNREACHABLE).generate(),
            Err(BnbError::InvalidConfig(_))
        ));
        let limit = CostMatrix::max_edge_cost_for(3);
        assert!(matches!(
            MatrixGenerator::new(3).with_cost_range(0, limit + 1).generate(),
            Err(BnbError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_cost_range_up_to_limit() {
        let limit = CostMatrix::max_edge_cost_for(4);
        let m = MatrixGenerator::new(4)
            .with_cost_range(limit - 10, limit)
            .with_seed(3)
            .generate()
            .unwrap();
        for from in 0..4 {
            for to in (0..4).filter(|&to| to != from) {
                assert!(m.get(from, to).is_some_and(|c| c >= limit - 10 && c <= limit));
            }
        }
    }
}
