//! Exact branch-and-bound solver for asymmetric tour problems.
//!
//! Given a directed cost matrix over `n` locations, finds a minimum-cost
//! cycle that starts at a fixed origin, visits every other location exactly
//! once, and returns to the origin. Missing edges are allowed; when no such
//! cycle exists the instance is reported as infeasible.
//!
//! - **Matrix**: validated cost tables, row/column reduction (the lower
//!   bound), and a seeded random instance generator.
//! - **Branch and Bound**: best-first search over partial tours with
//!   admission and frontier pruning, search monitors, and statistics.
//!
//! # Example
//!
//! ```
//! use u_bnb::bnb::{BnbConfig, BnbRunner, SolveResult};
//! use u_bnb::matrix::CostMatrix;
//!
//! let matrix = CostMatrix::from_rows(vec![
//!     vec![None, Some(2), Some(9)],
//!     vec![Some(1), None, Some(6)],
//!     vec![Some(7), Some(3), None],
//! ])
//! .unwrap();
//!
//! let outcome = BnbRunner::run(&matrix, &BnbConfig::default()).unwrap();
//! match outcome.result {
//!     SolveResult::Optimal(tour) => assert_eq!(tour.cost, 13),
//!     SolveResult::Infeasible => unreachable!(),
//! }
//! ```
//!
//! # Features
//!
//! - `parallel`: build the children of each expanded node with rayon.
//! - `serde`: `Serialize`/`Deserialize` for matrices, tours and outcomes.

pub mod bnb;
pub mod error;
pub mod matrix;

pub use error::{BnbError, Result};
