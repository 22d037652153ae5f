//! Solver outcomes.

use super::stats::BnbStatistics;
use crate::matrix::Cost;

/// A closed tour: starts and ends at the origin and visits every other
/// location exactly once in between.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    /// Total original cost of the tour.
    pub cost: Cost,
    /// Locations in visiting order, `size + 1` entries.
    pub locations: Vec<usize>,
}

impl Tour {
    /// The location the tour starts and ends at, or `None` for a tour
    /// built by hand without locations.
    pub fn origin(&self) -> Option<usize> {
        self.locations.first().copied()
    }
}

impl std::fmt::Display for Tour {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, location) in self.locations.iter().enumerate() {
            if i > 0 {
                write!(f, " -> ")?;
            }
            write!(f, "{location}")?;
        }
        write!(f, " (cost {})", self.cost)
    }
}

/// Whether a tour exists, and if so the cheapest one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SolveResult {
    /// Search exhausted; the tour is a global minimum.
    Optimal(Tour),
    /// No Hamiltonian cycle through the origin exists.
    Infeasible,
}

/// Result of a branch-and-bound run with its statistics.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BnbOutcome {
    /// The solve result.
    pub result: SolveResult,
    /// Counters collected during the run.
    pub statistics: BnbStatistics,
}

impl BnbOutcome {
    #[inline]
    pub fn optimal(tour: Tour, statistics: BnbStatistics) -> Self {
        Self {
            result: SolveResult::Optimal(tour),
            statistics,
        }
    }

    #[inline]
    pub fn infeasible(statistics: BnbStatistics) -> Self {
        Self {
            result: SolveResult::Infeasible,
            statistics,
        }
    }

    /// Whether a tour was found.
    pub fn is_feasible(&self) -> bool {
        matches!(self.result, SolveResult::Optimal(_))
    }

    /// The optimal tour, if any.
    pub fn tour(&self) -> Option<&Tour> {
        match &self.result {
            SolveResult::Optimal(tour) => Some(tour),
            SolveResult::Infeasible => None,
        }
    }

    /// Cost of the optimal tour, if any.
    pub fn cost(&self) -> Option<Cost> {
        self.tour().map(|t| t.cost)
    }
}
