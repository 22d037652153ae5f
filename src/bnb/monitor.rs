//! Search monitors.
//!
//! A [`SearchMonitor`] observes a run without influencing it. All hooks
//! default to no-ops, so an implementation only overrides what it needs.

use super::result::Tour;
use super::stats::BnbStatistics;
use super::types::SearchNode;
use crate::matrix::{Cost, CostMatrix};

/// Observer of branch-and-bound events.
pub trait SearchMonitor {
    /// Called once before the root node is inserted.
    fn on_enter_search(&mut self, _matrix: &CostMatrix, _root: &SearchNode) {}

    /// Called when a popped node is about to be branched on.
    fn on_expand(&mut self, _node: &SearchNode, _stats: &BnbStatistics) {}

    /// Called when a popped node is discarded against the incumbent.
    fn on_prune(&mut self, _node: &SearchNode, _incumbent: Cost) {}

    /// Called when a freshly built child is not admitted to the frontier.
    fn on_child_rejected(&mut self, _child: &SearchNode, _incumbent: Cost) {}

    /// Called when a popped node has visited every location.
    fn on_terminal(&mut self, _node: &SearchNode) {}

    /// Called when the incumbent improves.
    fn on_solution(&mut self, _tour: &Tour, _stats: &BnbStatistics) {}

    /// Called once after the frontier is exhausted.
    fn on_exit_search(&mut self, _stats: &BnbStatistics) {}

    /// Returns the name of the monitor.
    fn name(&self) -> &str;
}

impl std::fmt::Debug for dyn SearchMonitor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}

/// Monitor that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMonitor;

impl SearchMonitor for NoOpMonitor {
    fn name(&self) -> &str {
        "NoOpMonitor"
    }
}

/// Monitor reporting progress through the `log` facade.
///
/// Emits one `info` line every `interval` expansions and on each new
/// incumbent.
#[derive(Debug, Clone)]
pub struct LogMonitor {
    interval: u64,
    best: Option<Cost>,
}

impl LogMonitor {
    /// Creates a monitor logging every `interval` expansions (at least 1).
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            best: None,
        }
    }

    /// Best cost reported so far.
    pub fn best(&self) -> Option<Cost> {
        self.best
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new(10_000)
    }
}

impl SearchMonitor for LogMonitor {
    fn on_enter_search(&mut self, matrix: &CostMatrix, root: &SearchNode) {
        self.best = None;
        log::info!(
            "bnb.search: start n={} origin={} root_lb={}",
            matrix.size(),
            root.location(),
            root.lower_bound()
        );
    }

    fn on_expand(&mut self, node: &SearchNode, stats: &BnbStatistics) {
        if stats.nodes_expanded % self.interval == 0 {
            let best = self
                .best
                .map_or_else(|| "inf".to_string(), |c| c.to_string());
            log::info!(
                "bnb.search: expanded={} pruned={} depth={} lb={} best={}",
                stats.nodes_expanded,
                stats.nodes_pruned,
                node.level(),
                node.lower_bound(),
                best
            );
        }
    }

    fn on_solution(&mut self, tour: &Tour, stats: &BnbStatistics) {
        self.best = Some(tour.cost);
        log::info!(
            "bnb.search: incumbent cost={} after {} expansions",
            tour.cost,
            stats.nodes_expanded
        );
    }

    fn on_exit_search(&mut self, stats: &BnbStatistics) {
        log::info!(
            "bnb.search: done popped={} expanded={} pruned={} time={:.2?}",
            stats.nodes_popped,
            stats.nodes_expanded,
            stats.nodes_pruned,
            stats.time_total
        );
    }

    fn name(&self) -> &str {
        "LogMonitor"
    }
}
