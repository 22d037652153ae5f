//! Search nodes and the best-first frontier.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::matrix::{reduce, Cost, CostMatrix};

/// One partial tour in the state-space tree.
///
/// Each node owns its working matrix. Children clone it on branching, so no
/// two nodes ever share mutable matrix state.
#[derive(Debug, Clone)]
pub struct SearchNode {
    matrix: CostMatrix,
    path: Vec<usize>,
    visited: Vec<bool>,
    accumulated_cost: Cost,
    lower_bound: Cost,
}

impl SearchNode {
    /// Builds the root node: the tour so far is just `origin`.
    pub(crate) fn root(original: &CostMatrix, origin: usize) -> Self {
        let mut matrix = original.clone();
        let lower_bound = reduce(&mut matrix);
        let mut visited = vec![false; original.size()];
        visited[origin] = true;
        Self {
            matrix,
            path: vec![origin],
            visited,
            accumulated_cost: 0,
            lower_bound,
        }
    }

    /// Builds the child reached by travelling from this node's location to
    /// `to` at the original cost `edge_cost`.
    ///
    /// The child's matrix forbids leaving the current location again,
    /// entering `to` again, and returning from `to` straight to `origin`.
    pub(crate) fn branch(&self, to: usize, edge_cost: Cost, origin: usize) -> Self {
        let from = self.location();
        let mut matrix = self.matrix.clone();
        matrix.block_row(from);
        matrix.block_column(to);
        matrix.block(to, origin);

        // Edge costs are capped at `max_edge_cost`, so a path never overflows.
        let accumulated_cost = self.accumulated_cost + edge_cost;
        let reduction = reduce(&mut matrix);

        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(to);
        let mut visited = self.visited.clone();
        visited[to] = true;

        Self {
            matrix,
            path,
            visited,
            accumulated_cost,
            // Saturates only when no completion exists.
            lower_bound: accumulated_cost.saturating_add(reduction),
        }
    }

    /// Unvisited locations reachable from the current location in the
    /// working matrix, paired with their original edge cost.
    pub(crate) fn candidates(&self, original: &CostMatrix) -> Vec<(usize, Cost)> {
        let from = self.location();
        (0..self.matrix.size())
            .filter(|&to| !self.visited[to] && self.matrix.is_reachable(from, to))
            .filter_map(|to| original.get(from, to).map(|cost| (to, cost)))
            .collect()
    }

    /// The node's reduced working matrix.
    pub fn matrix(&self) -> &CostMatrix {
        &self.matrix
    }

    /// Visited locations in order, starting at the origin.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Sum of original edge costs along the path.
    pub fn accumulated_cost(&self) -> Cost {
        self.accumulated_cost
    }

    /// Admissible estimate of the cheapest tour extending this node.
    pub fn lower_bound(&self) -> Cost {
        self.lower_bound
    }

    /// Number of edges taken so far.
    pub fn level(&self) -> usize {
        self.path.len() - 1
    }

    /// Last location of the path.
    pub fn location(&self) -> usize {
        self.path[self.path.len() - 1]
    }

    /// Whether `location` already appears in the path.
    pub fn has_visited(&self, location: usize) -> bool {
        self.visited[location]
    }
}

/// Heap entry wrapping a node with its insertion sequence number.
#[derive(Debug)]
struct FrontierEntry {
    node: SearchNode,
    seq: u64,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    // `BinaryHeap` is a max-heap: the "greatest" entry is popped first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .node
            .lower_bound
            .cmp(&self.node.lower_bound)
            .then_with(|| self.node.path.len().cmp(&other.node.path.len()))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Live nodes ordered for best-first retrieval.
///
/// Nodes come out by ascending lower bound. Ties go to the deeper node, then
/// to the node inserted first, so a run is fully reproducible.
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_seq: u64,
    peak_len: usize,
}

impl Frontier {
    /// Creates an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node.
    pub fn push(&mut self, node: SearchNode) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(FrontierEntry { node, seq });
        self.peak_len = self.peak_len.max(self.heap.len());
    }

    /// Removes the most promising node.
    pub fn pop(&mut self) -> Option<SearchNode> {
        self.heap.pop().map(|entry| entry.node)
    }

    /// Lower bound of the node [`pop`](Self::pop) would return.
    pub fn peek_bound(&self) -> Option<Cost> {
        self.heap.peek().map(|entry| entry.node.lower_bound)
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether no live node is left.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest number of nodes held at once.
    pub fn peak_len(&self) -> usize {
        self.peak_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classic() -> CostMatrix {
        CostMatrix::from_rows(vec![
            vec![None, Some(10), Some(15), Some(20)],
            vec![Some(10), None, Some(35), Some(25)],
            vec![Some(15), Some(35), None, Some(30)],
            vec![Some(20), Some(25), Some(30), None],
        ])
        .unwrap()
    }

    fn node(lower_bound: Cost, path: Vec<usize>) -> SearchNode {
        let size = 4;
        let mut visited = vec![false; size];
        for &p in &path {
            visited[p] = true;
        }
        SearchNode {
            matrix: CostMatrix::unreachable(size).unwrap(),
            path,
            visited,
            accumulated_cost: 0,
            lower_bound,
        }
    }

    #[test]
    fn test_root_node() {
        let root = SearchNode::root(&classic(), 0);
        assert_eq!(root.path(), &[0]);
        assert_eq!(root.level(), 0);
        assert_eq!(root.location(), 0);
        assert_eq!(root.accumulated_cost(), 0);
        assert_eq!(root.lower_bound(), 70);
        assert!(root.has_visited(0));
        assert!(!root.has_visited(1));
    }

    #[test]
    fn test_branch_blocks_and_bounds() {
        let original = classic();
        let root = SearchNode::root(&original, 0);
        let child = root.branch(1, 10, 0);

        assert_eq!(child.path(), &[0, 1]);
        assert_eq!(child.level(), 1);
        assert_eq!(child.location(), 1);
        assert_eq!(child.accumulated_cost(), 10);
        assert_eq!(child.lower_bound(), 20);

        let m = child.matrix();
        assert!((0..4).all(|to| !m.is_reachable(0, to)));
        assert!((0..4).all(|from| !m.is_reachable(from, 1)));
        assert!(!m.is_reachable(1, 0));

        // the parent is untouched
        assert_eq!(root.path(), &[0]);
        assert!(root.matrix().is_reachable(0, 1));
    }

    #[test]
    fn test_candidates_skip_visited_and_blocked() {
        let original = classic();
        let root = SearchNode::root(&original, 0);
        assert_eq!(root.candidates(&original), vec![(1, 10), (2, 15), (3, 20)]);

        let child = root.branch(2, 15, 0);
        assert_eq!(child.candidates(&original), vec![(1, 35), (3, 30)]);
    }

    #[test]
    fn test_frontier_pops_lowest_bound() {
        let mut frontier = Frontier::new();
        frontier.push(node(30, vec![0, 1]));
        frontier.push(node(10, vec![0, 2]));
        frontier.push(node(20, vec![0, 3]));

        assert_eq!(frontier.len(), 3);
        assert_eq!(frontier.peek_bound(), Some(10));
        let order: Vec<Cost> = std::iter::from_fn(|| frontier.pop())
            .map(|n| n.lower_bound())
            .collect();
        assert_eq!(order, vec![10, 20, 30]);
        assert!(frontier.is_empty());
        assert_eq!(frontier.peak_len(), 3);
    }

    #[test]
    fn test_frontier_tie_break_deeper_then_fifo() {
        let mut frontier = Frontier::new();
        frontier.push(node(5, vec![0, 1]));
        frontier.push(node(5, vec![0, 2]));
        frontier.push(node(5, vec![0, 2, 3]));

        assert_eq!(frontier.pop().unwrap().path(), &[0, 2, 3]);
        assert_eq!(frontier.pop().unwrap().path(), &[0, 1]);
        assert_eq!(frontier.pop().unwrap().path(), &[0, 2]);
        assert!(frontier.pop().is_none());
    }
}
