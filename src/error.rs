//! Error types.
//!
//! Errors only arise at the boundary, while building a [`CostMatrix`] or
//! validating a run configuration. An instance without any tour is not an
//! error: it is reported as [`SolveResult::Infeasible`].
//!
//! [`CostMatrix`]: crate::matrix::CostMatrix
//! [`SolveResult::Infeasible`]: crate::bnb::SolveResult::Infeasible

use thiserror::Error as ThisError;

/// Errors raised when an instance or configuration is malformed.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum BnbError {
    /// The cost table is empty, ragged, or not square.
    #[error("invalid dimension: {0}")]
    InvalidDimension(String),

    /// The tour origin does not name a location of the matrix.
    #[error("origin {origin} is out of range for {size} locations")]
    InvalidOrigin {
        /// Requested origin.
        origin: usize,
        /// Number of locations in the matrix.
        size: usize,
    },

    /// A finite edge cost is too large for a full tour to be summed
    /// without reaching the unreachable sentinel.
    #[error("edge ({from}, {to}) costs {cost}, above the limit {max} for this matrix size")]
    InvalidCost {
        /// Source location of the edge.
        from: usize,
        /// Target location of the edge.
        to: usize,
        /// Rejected cost.
        cost: u64,
        /// Largest accepted edge cost.
        max: u64,
    },

    /// A configuration parameter is out of its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BnbError>;

impl BnbError {
    /// Builds a [`BnbError::InvalidDimension`] from a message.
    pub fn invalid_dimension(message: impl Into<String>) -> Self {
        Self::InvalidDimension(message.into())
    }

    /// Builds a [`BnbError::InvalidConfig`] from a message.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = BnbError::invalid_dimension("matrix has 0 locations");
        assert_eq!(err.to_string(), "invalid dimension: matrix has 0 locations");

        let err = BnbError::InvalidOrigin { origin: 5, size: 3 };
        assert_eq!(err.to_string(), "origin 5 is out of range for 3 locations");

        let err = BnbError::InvalidCost {
            from: 1,
            to: 2,
            cost: 90,
            max: 50,
        };
        assert_eq!(
            err.to_string(),
            "edge (1, 2) costs 90, above the limit 50 for this matrix size"
        );
    }
}
