//! Search statistics.

use std::time::Duration;

use crate::matrix::Cost;

/// Counters collected during one branch-and-bound run.
///
/// Every node taken from the frontier ends up in exactly one of
/// `nodes_pruned`, `terminal_nodes` or `nodes_expanded`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BnbStatistics {
    /// Nodes removed from the frontier.
    pub nodes_popped: u64,
    /// Popped nodes discarded because their bound could not beat the incumbent.
    pub nodes_pruned: u64,
    /// Popped nodes that were branched on.
    pub nodes_expanded: u64,
    /// Popped nodes with every location visited.
    pub terminal_nodes: u64,
    /// Children built during expansion.
    pub children_generated: u64,
    /// Children inserted into the frontier.
    pub children_admitted: u64,
    /// Children dropped at creation because their bound could not beat the incumbent.
    pub children_rejected: u64,
    /// Number of times the incumbent improved.
    pub solutions_found: u64,
    /// Deepest level popped from the frontier.
    pub max_depth: u64,
    /// Largest frontier size observed.
    pub peak_frontier: u64,
    /// Lower bound of the root node.
    pub root_lower_bound: Cost,
    /// Total time spent in the solver.
    pub time_total: Duration,
}

impl BnbStatistics {
    #[inline]
    pub fn on_node_popped(&mut self, level: usize) {
        self.nodes_popped = self.nodes_popped.saturating_add(1);
        self.max_depth = self.max_depth.max(level as u64);
    }

    #[inline]
    pub fn on_node_pruned(&mut self) {
        self.nodes_pruned = self.nodes_pruned.saturating_add(1);
    }

    #[inline]
    pub fn on_node_expanded(&mut self) {
        self.nodes_expanded = self.nodes_expanded.saturating_add(1);
    }

    #[inline]
    pub fn on_terminal(&mut self) {
        self.terminal_nodes = self.terminal_nodes.saturating_add(1);
    }

    #[inline]
    pub fn on_child_generated(&mut self) {
        self.children_generated = self.children_generated.saturating_add(1);
    }

    #[inline]
    pub fn on_child_admitted(&mut self) {
        self.children_admitted = self.children_admitted.saturating_add(1);
    }

    #[inline]
    pub fn on_child_rejected(&mut self) {
        self.children_rejected = self.children_rejected.saturating_add(1);
    }

    #[inline]
    pub fn on_solution_found(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }

    #[inline]
    pub fn set_peak_frontier(&mut self, peak: usize) {
        self.peak_frontier = peak as u64;
    }

    #[inline]
    pub fn set_root_lower_bound(&mut self, bound: Cost) {
        self.root_lower_bound = bound;
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for BnbStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Branch-and-Bound Statistics:")?;
        writeln!(f, "  Nodes popped:         {}", self.nodes_popped)?;
        writeln!(f, "  Nodes expanded:       {}", self.nodes_expanded)?;
        writeln!(f, "  Nodes pruned:         {}", self.nodes_pruned)?;
        writeln!(f, "  Terminal nodes:       {}", self.terminal_nodes)?;
        writeln!(f, "  Children generated:   {}", self.children_generated)?;
        writeln!(f, "  Children admitted:    {}", self.children_admitted)?;
        writeln!(f, "  Children rejected:    {}", self.children_rejected)?;
        writeln!(f, "  Solutions found:      {}", self.solutions_found)?;
        writeln!(f, "  Max depth reached:    {}", self.max_depth)?;
        writeln!(f, "  Peak frontier:        {}", self.peak_frontier)?;
        writeln!(f, "  Root lower bound:     {}", self.root_lower_bound)?;
        writeln!(f, "  Total time:           {:.2?}", self.time_total)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters() {
        let mut stats = BnbStatistics::default();
        stats.on_node_popped(2);
        stats.on_node_popped(1);
        stats.on_node_expanded();
        stats.on_node_pruned();
        stats.on_child_generated();
        stats.on_child_generated();
        stats.on_child_admitted();
        stats.on_child_rejected();
        stats.on_solution_found();
        stats.set_peak_frontier(4);

        assert_eq!(stats.nodes_popped, 2);
        assert_eq!(stats.max_depth, 2);
        assert_eq!(stats.nodes_expanded, 1);
        assert_eq!(stats.nodes_pruned, 1);
        assert_eq!(stats.children_generated, 2);
        assert_eq!(stats.children_admitted, 1);
        assert_eq!(stats.children_rejected, 1);
        assert_eq!(stats.solutions_found, 1);
        assert_eq!(stats.peak_frontier, 4);
    }

    #[test]
    fn test_display_lists_counters() {
        let stats = BnbStatistics {
            nodes_popped: 14,
            root_lower_bound: 70,
            ..BnbStatistics::default()
        };
        let text = stats.to_string();
        assert!(text.contains("Nodes popped:         14"));
        assert!(text.contains("Root lower bound:     70"));
    }
}
