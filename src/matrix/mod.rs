//! Directed cost matrices and row/column reduction.
//!
//! A [`CostMatrix`] stores the travel cost between every ordered pair of
//! locations. Missing edges hold the [`UNREACHABLE`] sentinel, which is never
//! used for minimum finding and never reduced.
//!
//! # Key Components
//!
//! - [`CostMatrix`]: validated square cost table
//! - [`reduce`] / [`reduced`]: row-then-column normalization yielding an
//!   admissible lower-bound contribution
//! - [`MatrixGenerator`]: seeded random instances for tests and benchmarks
//!
//! # References
//!
//! Little, Murty, Sweeney & Karel (1963), "An Algorithm for the Traveling
//! Salesman Problem", *Operations Research* 11(6), 972-989.

mod cost;
mod generate;
mod reduce;

pub use cost::{Cost, CostMatrix, UNREACHABLE};
pub use generate::MatrixGenerator;
pub use reduce::{reduce, reduced};
