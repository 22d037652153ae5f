//! Exhaustive reference search.
//!
//! Enumerates every Hamiltonian cycle through the origin by depth-first
//! search. Runtime is `O((n - 1)!)`, so this is only meant for small
//! instances, typically to cross-check [`BnbRunner`](super::BnbRunner).

use super::result::Tour;
use crate::error::{BnbError, Result};
use crate::matrix::{Cost, CostMatrix};

/// Returns the cheapest tour through `origin`, or `None` if no tour exists.
///
/// Among tours of equal cost, the lexicographically smallest visiting order
/// is returned.
pub fn exhaustive_search(matrix: &CostMatrix, origin: usize) -> Result<Option<Tour>> {
    let size = matrix.size();
    if origin >= size {
        return Err(BnbError::InvalidOrigin { origin, size });
    }
    if size == 1 {
        return Ok(Some(Tour {
            cost: 0,
            locations: vec![origin, origin],
        }));
    }

    let mut walk = Walk {
        matrix,
        origin,
        path: vec![origin],
        visited: vec![false; size],
        best: None,
    };
    walk.visited[origin] = true;
    walk.descend(0);
    Ok(walk.best)
}

struct Walk<'a> {
    matrix: &'a CostMatrix,
    origin: usize,
    path: Vec<usize>,
    visited: Vec<bool>,
    best: Option<Tour>,
}

impl Walk<'_> {
    fn descend(&mut self, cost: Cost) {
        let size = self.matrix.size();
        let from = self.path[self.path.len() - 1];

        if self.path.len() == size {
            if let Some(back) = self.matrix.get(from, self.origin) {
                let total = cost + back;
                if self.best.as_ref().map_or(true, |b| total < b.cost) {
                    let mut locations = self.path.clone();
                    locations.push(self.origin);
                    self.best = Some(Tour {
                        cost: total,
                        locations,
                    });
                }
            }
            return;
        }

        for to in 0..size {
            if self.visited[to] {
                continue;
            }
            let Some(edge) = self.matrix.get(from, to) else {
                continue;
            };
            self.visited[to] = true;
            self.path.push(to);
            self.descend(cost + edge);
            self.path.pop();
            self.visited[to] = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_instance() {
        let m = CostMatrix::from_rows(vec![
            vec![None, Some(10), Some(15), Some(20)],
            vec![Some(10), None, Some(35), Some(25)],
            vec![Some(15), Some(35), None, Some(30)],
            vec![Some(20), Some(25), Some(30), None],
        ])
        .unwrap();
        let tour = exhaustive_search(&m, 0).unwrap().unwrap();
        assert_eq!(tour.cost, 80);
        assert_eq!(tour.locations, vec![0, 1, 3, 2, 0]);
    }

    #[test]
    fn test_no_tour() {
        let m = CostMatrix::from_rows(vec![
            vec![None, Some(1), Some(1)],
            vec![Some(1), None, None],
            vec![Some(1), None, None],
        ])
        .unwrap();
        assert_eq!(exhaustive_search(&m, 0).unwrap(), None);
    }

    #[test]
    fn test_single_location() {
        let m = CostMatrix::unreachable(1).unwrap();
        let tour = exhaustive_search(&m, 0).unwrap().unwrap();
        assert_eq!(tour.locations, vec![0, 0]);
        assert_eq!(tour.cost, 0);
    }

    #[test]
    fn test_invalid_origin() {
        let m = CostMatrix::unreachable(2).unwrap();
        assert_eq!(
            exhaustive_search(&m, 2),
            Err(BnbError::InvalidOrigin { origin: 2, size: 2 })
        );
    }
}
