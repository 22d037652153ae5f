//! Row and column reduction.
//!
//! # Algorithm
//!
//! 1. For every row, subtract its minimum finite entry from each finite entry
//! 2. For every column of the row-reduced matrix, do the same
//! 3. Return the sum of all subtracted minima
//!
//! Every completion of a tour uses exactly one edge per remaining row and
//! column, so the returned total never exceeds the cheapest completion.
//! Rows or columns without a finite entry are left untouched and add nothing.

use super::cost::{Cost, CostMatrix, UNREACHABLE};

/// Reduces `matrix` in place and returns the total amount subtracted.
///
/// # Examples
///
/// ```
/// use u_bnb::matrix::{reduce, CostMatrix};
///
/// let mut matrix = CostMatrix::from_rows(vec![
///     vec![None, Some(4), Some(6)],
///     vec![Some(3), None, Some(5)],
///     vec![Some(7), Some(2), None],
/// ])
/// .unwrap();
/// // Row minima 4 + 3 + 2, then column 2 still needs 2.
/// assert_eq!(reduce(&mut matrix), 11);
/// assert_eq!(matrix.get(0, 1), Some(0));
/// ```
pub fn reduce(matrix: &mut CostMatrix) -> Cost {
    let n = matrix.size();
    let mut total: Cost = 0;

    for row in 0..n {
        let min = (0..n).map(|col| matrix.raw(row, col)).min().unwrap_or(UNREACHABLE);
        if min != 0 && min != UNREACHABLE {
            for col in 0..n {
                let cell = matrix.raw_mut(row, col);
                if *cell != UNREACHABLE {
                    *cell -= min;
                }
            }
            total = total.saturating_add(min);
        }
    }

    for col in 0..n {
        let min = (0..n).map(|row| matrix.raw(row, col)).min().unwrap_or(UNREACHABLE);
        if min != 0 && min != UNREACHABLE {
            for row in 0..n {
                let cell = matrix.raw_mut(row, col);
                if *cell != UNREACHABLE {
                    *cell -= min;
                }
            }
            total = total.saturating_add(min);
        }
    }

    total
}

/// Returns a reduced copy of `matrix` together with the reduction total.
///
/// The input is left unchanged.
pub fn reduced(matrix: &CostMatrix) -> (CostMatrix, Cost) {
    let mut copy = matrix.clone();
    let total = reduce(&mut copy);
    (copy, total)
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

    #[test]
    fn test_reduce_classic_matrix() {
        let mut m = classic();
        // rows: 10 + 10 + 15 + 20 = 55, columns: 0 + 0 + 5 + 10 = 15
        assert_eq!(reduce(&mut m), 70);
        assert_eq!(
            m.to_rows(),
            vec![
                vec![None, Some(0), Some(0), Some(0)],
                vec![Some(0), None, Some(20), Some(5)],
                vec![Some(0), Some(20), None, Some(5)],
                vec![Some(0), Some(5), Some(5), None],
            ]
        );
    }

    #[test]
    fn test_reduce_is_idempotent() {
        let mut m = classic();
        reduce(&mut m);
        let snapshot = m.clone();
        assert_eq!(reduce(&mut m), 0);
        assert_eq!(m, snapshot);
    }

    #[test]
    fn test_unreachable_cells_preserved() {
        let mut m = CostMatrix::from_rows(vec![
            vec![None, Some(8), None],
            vec![None, None, Some(3)],
            vec![Some(4), None, None],
        ])
        .unwrap();
        assert_eq!(reduce(&mut m), 15);
        assert_eq!(m.get(0, 2), None);
        assert_eq!(m.get(1, 0), None);
        assert_eq!(m.get(0, 1), Some(0));
    }

    #[test]
    fn test_empty_row_contributes_nothing() {
        let mut m = CostMatrix::from_rows(vec![
            vec![None, None, None],
            vec![Some(6), None, Some(2)],
            vec![Some(5), Some(9), None],
        ])
        .unwrap();
        // rows: 0 + 2 + 5; columns: 0 + 4 + 0
        assert_eq!(reduce(&mut m), 11);
        assert_eq!(m.row(0), &[UNREACHABLE; 3]);
    }

    #[test]
    fn test_fully_unreachable_matrix() {
        let mut m = CostMatrix::unreachable(4).unwrap();
        assert_eq!(reduce(&mut m), 0);
        assert_eq!(m, CostMatrix::unreachable(4).unwrap());
    }

    #[test]
    fn test_single_location() {
        let mut m = CostMatrix::unreachable(1).unwrap();
        assert_eq!(reduce(&mut m), 0);
    }

    #[test]
    fn test_reduced_leaves_input_untouched() {
        let m = classic();
        let (r, total) = reduced(&m);
        assert_eq!(total, 70);
        assert_eq!(m, classic());
        assert_ne!(r, m);
    }

    #[test]
    fn test_reduction_bounds_every_tour() {
        let m = classic();
        let (_, total) = reduced(&m);
        for tour in [[0, 1, 2, 3, 0], [0, 1, 3, 2, 0], [0, 2, 1, 3, 0]] {
            let cost = m.tour_cost(&tour).unwrap();
            assert!(total <= cost, "bound {total} exceeds tour cost {cost}");
        }
    }
}
