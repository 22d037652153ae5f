//! Branch-and-bound execution engine.
//!
//! # Algorithm
//!
//! 1. Reduce a copy of the original matrix to obtain the root bound
//! 2. Repeatedly take the node with the smallest lower bound:
//!    a. Discard it if its bound cannot beat the incumbent
//!    b. At full depth, close the tour through the original matrix and
//!       install it if strictly cheaper
//!    c. Otherwise branch on every reachable unvisited location and admit
//!       the children whose bound beats the incumbent
//! 3. Stop when the frontier is empty; the incumbent is then optimal
//!
//! Lower bounds are admissible, and a node is only discarded when its bound
//! reaches the incumbent cost, so no cheaper tour is ever cut off.
//!
//! # Reference
//!
//! Little, Murty, Sweeney & Karel (1963), "An Algorithm for the Traveling
//! Salesman Problem", *Operations Research* 11(6), 972-989.

use std::time::Instant;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::config::BnbConfig;
use super::monitor::{NoOpMonitor, SearchMonitor};
use super::result::{BnbOutcome, Tour};
use super::stats::BnbStatistics;
use super::types::{Frontier, SearchNode};
use crate::error::{BnbError, Result};
use crate::matrix::{Cost, CostMatrix};

/// Branch-and-bound runner.
pub struct BnbRunner;

impl BnbRunner {
    /// Finds a minimum-cost tour over all locations of `matrix`.
    ///
    /// # Errors
    ///
    /// Returns [`BnbError::InvalidOrigin`] if `config.origin` is not a
    /// location of the matrix. An instance without any tour is not an error:
    /// it yields [`SolveResult::Infeasible`](super::SolveResult::Infeasible).
    ///
    /// # Examples
    ///
    /// ```
    /// use u_bnb::bnb::{BnbConfig, BnbRunner};
    /// use u_bnb::matrix::CostMatrix;
    ///
    /// let matrix = CostMatrix::from_rows(vec![
    ///     vec![None, Some(10), Some(15), Some(20)],
    ///     vec![Some(10), None, Some(35), Some(25)],
    ///     vec![Some(15), Some(35), None, Some(30)],
    ///     vec![Some(20), Some(25), Some(30), None],
    /// ])
    /// .unwrap();
    ///
    /// let outcome = BnbRunner::run(&matrix, &BnbConfig::default()).unwrap();
    /// assert_eq!(outcome.cost(), Some(80));
    /// ```
    pub fn run(matrix: &CostMatrix, config: &BnbConfig) -> Result<BnbOutcome> {
        Self::run_with_monitor(matrix, config, &mut NoOpMonitor)
    }

    /// Like [`run`](Self::run), reporting every search event to `monitor`.
    pub fn run_with_monitor<M>(
        matrix: &CostMatrix,
        config: &BnbConfig,
        monitor: &mut M,
    ) -> Result<BnbOutcome>
    where
        M: SearchMonitor + ?Sized,
    {
        let size = matrix.size();
        let origin = config.origin;
        if origin >= size {
            return Err(BnbError::InvalidOrigin { origin, size });
        }

        let start = Instant::now();

        if size == 1 {
            let mut statistics = BnbStatistics::default();
            statistics.set_total_time(start.elapsed());
            log::debug!("bnb.run: single location, trivial tour");
            return Ok(BnbOutcome::optimal(
                Tour {
                    cost: 0,
                    locations: vec![origin, origin],
                },
                statistics,
            ));
        }

        let mut search = Search::new(matrix, config, &mut *monitor);
        search.run();
        let (incumbent, mut statistics) = search.finish();
        statistics.set_total_time(start.elapsed());
        monitor.on_exit_search(&statistics);

        log::debug!(
            "bnb.run: done n={size} popped={} expanded={} pruned={} best={:?}",
            statistics.nodes_popped,
            statistics.nodes_expanded,
            statistics.nodes_pruned,
            incumbent.as_ref().map(|t| t.cost)
        );

        Ok(match incumbent {
            Some(tour) => BnbOutcome::optimal(tour, statistics),
            None => BnbOutcome::infeasible(statistics),
        })
    }
}

/// State of one run. Built fresh per call, so runs never share anything.
struct Search<'a, M: ?Sized> {
    original: &'a CostMatrix,
    origin: usize,
    #[cfg(feature = "parallel")]
    parallel: bool,
    frontier: Frontier,
    incumbent: Option<Tour>,
    stats: BnbStatistics,
    monitor: &'a mut M,
}

impl<'a, M> Search<'a, M>
where
    M: SearchMonitor + ?Sized,
{
    fn new(original: &'a CostMatrix, config: &BnbConfig, monitor: &'a mut M) -> Self {
        Self {
            original,
            origin: config.origin,
            #[cfg(feature = "parallel")]
            parallel: config.parallel,
            frontier: Frontier::new(),
            incumbent: None,
            stats: BnbStatistics::default(),
            monitor,
        }
    }

    fn run(&mut self) {
        let root = SearchNode::root(self.original, self.origin);
        self.stats.set_root_lower_bound(root.lower_bound());
        log::debug!(
            "bnb.run: start n={} origin={} root_lb={}",
            self.original.size(),
            self.origin,
            root.lower_bound()
        );
        self.monitor.on_enter_search(self.original, &root);
        self.frontier.push(root);

        let last_level = self.original.size() - 1;
        while let Some(node) = self.frontier.pop() {
            self.stats.on_node_popped(node.level());

            if let Some(best) = self.incumbent_cost() {
                if node.lower_bound() >= best {
                    self.stats.on_node_pruned();
                    log::trace!(
                        "bnb.run: prune path={:?} lb={} best={best}",
                        node.path(),
                        node.lower_bound()
                    );
                    self.monitor.on_prune(&node, best);
                    continue;
                }
            }

            if node.level() == last_level {
                self.close(&node);
            } else {
                self.expand(&node);
            }
        }

        self.stats.set_peak_frontier(self.frontier.peak_len());
    }

    fn finish(self) -> (Option<Tour>, BnbStatistics) {
        (self.incumbent, self.stats)
    }

    fn incumbent_cost(&self) -> Option<Cost> {
        self.incumbent.as_ref().map(|t| t.cost)
    }

    /// Completes a full-depth node with the edge back to the origin.
    fn close(&mut self, node: &SearchNode) {
        self.stats.on_terminal();
        self.monitor.on_terminal(node);

        let Some(back) = self.original.get(node.location(), self.origin) else {
            return;
        };
        let cost = node.accumulated_cost() + back;
        if self.incumbent_cost().is_some_and(|best| cost >= best) {
            return;
        }

        let mut locations = Vec::with_capacity(node.path().len() + 1);
        locations.extend_from_slice(node.path());
        locations.push(self.origin);
        let tour = Tour { cost, locations };

        self.stats.on_solution_found();
        log::debug!("bnb.run: incumbent {tour}");
        self.monitor.on_solution(&tour, &self.stats);
        self.incumbent = Some(tour);
    }

    fn expand(&mut self, node: &SearchNode) {
        self.stats.on_node_expanded();
        self.monitor.on_expand(node, &self.stats);

        let candidates = node.candidates(self.original);
        for child in self.build_children(node, &candidates) {
            self.stats.on_child_generated();
            match self.incumbent_cost() {
                Some(best) if child.lower_bound() >= best => {
                    self.stats.on_child_rejected();
                    self.monitor.on_child_rejected(&child, best);
                }
                _ => {
                    self.stats.on_child_admitted();
                    self.frontier.push(child);
                }
            }
        }
    }

    /// Builds the children in candidate order.
    fn build_children(&self, node: &SearchNode, candidates: &[(usize, Cost)]) -> Vec<SearchNode> {
        let origin = self.origin;

        #[cfg(feature = "parallel")]
        {
            if self.parallel {
                return candidates
                    .par_iter()
                    .map(|&(to, cost)| node.branch(to, cost, origin))
                    .collect();
            }
        }

        candidates
            .iter()
            .map(|&(to, cost)| node.branch(to, cost, origin))
            .collect()
    }
}
