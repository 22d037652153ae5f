//! Best-first branch and bound for minimum-cost tours.
//!
//! Each search node is a partial tour anchored at the origin. Its lower bound
//! is the true cost of the path so far plus the reduction total of its own
//! working matrix. Nodes are expanded in ascending bound order, children
//! whose bound cannot beat the best complete tour are never queued, and the
//! search stops when the frontier is empty, at which point the best tour is
//! optimal.
//!
//! # Key Components
//!
//! - [`BnbRunner`]: the search engine
//! - [`BnbConfig`]: origin and parallelism settings
//! - [`SearchNode`] / [`Frontier`]: partial tours and their priority queue
//! - [`SearchMonitor`]: observer hooks ([`NoOpMonitor`], [`LogMonitor`])
//! - [`BnbOutcome`]: result plus [`BnbStatistics`]
//! - [`exhaustive_search`]: brute-force reference for small instances
//!
//! # References
//!
//! - Little, Murty, Sweeney & Karel (1963), "An Algorithm for the Traveling
//!   Salesman Problem", *Operations Research* 11(6), 972-989.
//! - Lawler & Wood (1966), "Branch-and-Bound Methods: A Survey",
//!   *Operations Research* 14(4), 699-719.

mod config;
mod exhaustive;
mod monitor;
mod result;
mod runner;
mod stats;
mod types;

pub use config::BnbConfig;
pub use exhaustive::exhaustive_search;
pub use monitor::{LogMonitor, NoOpMonitor, SearchMonitor};
pub use result::{BnbOutcome, SolveResult, Tour};
pub use runner::BnbRunner;
pub use stats::BnbStatistics;
pub use types::{Frontier, SearchNode};
