//! Cost matrix representation.

use crate::error::{BnbError, Result};

/// Edge cost. Lower is better.
pub type Cost = u64;

/// Sentinel stored in cells without a direct edge.
pub const UNREACHABLE: Cost = Cost::MAX;

/// A square, directed cost table over `size` locations.
///
/// Cells are stored row-major in a single buffer. The diagonal is always
/// [`UNREACHABLE`]: a location never travels to itself.
///
/// # Examples
///
/// ```
/// use u_bnb::matrix::CostMatrix;
///
/// let matrix = CostMatrix::from_rows(vec![
///     vec![None, Some(3), Some(4)],
///     vec![Some(2), None, None],
///     vec![Some(5), Some(1), None],
/// ])
/// .unwrap();
/// assert_eq!(matrix.size(), 3);
/// assert_eq!(matrix.get(0, 2), Some(4));
/// assert_eq!(matrix.get(1, 2), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<Option<Cost>>>", into = "Vec<Vec<Option<Cost>>>")
)]
pub struct CostMatrix {
    size: usize,
    cells: Vec<Cost>,
}

impl CostMatrix {
    /// Creates a matrix of `size` locations without any edge.
    pub fn unreachable(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(BnbError::invalid_dimension("matrix has 0 locations"));
        }
        Ok(Self {
            size,
            cells: vec![UNREACHABLE; size * size],
        })
    }

    /// Builds a matrix from rows where `None` marks a missing edge.
    ///
    /// Diagonal entries are ignored and stored as unreachable.
    pub fn from_rows(rows: Vec<Vec<Option<Cost>>>) -> Result<Self> {
        let size = rows.len();
        let mut matrix = Self::unreachable(size)?;
        for (from, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(BnbError::invalid_dimension(format!(
                    "row {from} has {} entries, expected {size}",
                    row.len()
                )));
            }
            for (to, cost) in row.into_iter().enumerate() {
                matrix.set(from, to, cost)?;
            }
        }
        Ok(matrix)
    }

    /// Builds a matrix from rows where [`UNREACHABLE`] marks a missing edge.
    ///
    /// Any other value above [`max_edge_cost_for`](Self::max_edge_cost_for)
    /// is rejected.
    pub fn from_sentinel_rows(rows: &[Vec<Cost>]) -> Result<Self> {
        let size = rows.len();
        let mut matrix = Self::unreachable(size)?;
        for (from, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(BnbError::invalid_dimension(format!(
                    "row {from} has {} entries, expected {size}",
                    row.len()
                )));
            }
            for (to, &cost) in row.iter().enumerate() {
                let cost = (cost != UNREACHABLE).then_some(cost);
                matrix.set(from, to, cost)?;
            }
        }
        Ok(matrix)
    }

    /// Largest finite edge cost accepted in a matrix of `size` locations.
    ///
    /// A tour has `size` edges, so with every edge at or below this limit
    /// any path or tour sum stays strictly below [`UNREACHABLE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use u_bnb::matrix::{CostMatrix, UNREACHABLE};
    ///
    /// let max = CostMatrix::max_edge_cost_for(4);
    /// assert!(max.checked_mul(4).is_some_and(|total| total < UNREACHABLE));
    /// ```
    #[inline]
    pub fn max_edge_cost_for(size: usize) -> Cost {
        (UNREACHABLE - 1) / size.max(1) as Cost
    }

    /// Largest finite edge cost accepted in this matrix.
    #[inline]
    pub fn max_edge_cost(&self) -> Cost {
        Self::max_edge_cost_for(self.size)
    }

    /// Number of locations.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cost of the edge `from -> to`, or `None` if there is no edge.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> Option<Cost> {
        let cost = self.raw(from, to);
        (cost != UNREACHABLE).then_some(cost)
    }

    /// Whether a direct edge `from -> to` exists.
    #[inline]
    pub fn is_reachable(&self, from: usize, to: usize) -> bool {
        self.raw(from, to) != UNREACHABLE
    }

    /// Sets the edge `from -> to`. `None` removes the edge.
    ///
    /// Writes to the diagonal are ignored. A cost above
    /// [`max_edge_cost`](Self::max_edge_cost) is rejected with
    /// [`BnbError::InvalidCost`].
    pub fn set(&mut self, from: usize, to: usize, cost: Option<Cost>) -> Result<()> {
        let max = self.max_edge_cost();
        let value = match cost {
            Some(c) if c > max && from != to => {
                return Err(BnbError::InvalidCost { from, to, cost: c, max })
            }
            Some(c) => c,
            None => UNREACHABLE,
        };
        if from != to {
            let idx = self.index(from, to);
            self.cells[idx] = value;
        }
        Ok(())
    }

    /// Raw cells of one row, sentinel included.
    #[inline]
    pub fn row(&self, from: usize) -> &[Cost] {
        let start = from * self.size;
        &self.cells[start..start + self.size]
    }

    /// Returns the rows with `None` for missing edges.
    pub fn to_rows(&self) -> Vec<Vec<Option<Cost>>> {
        (0..self.size)
            .map(|from| (0..self.size).map(|to| self.get(from, to)).collect())
            .collect()
    }

    /// Sums the edge costs along a sequence of locations.
    ///
    /// Returns `None` if any consecutive pair has no edge, or if the sum
    /// overflows (only possible for sequences longer than a tour). Only the
    /// edges are checked: whether the sequence visits every location once is
    /// up to the caller.
    pub fn tour_cost(&self, locations: &[usize]) -> Option<Cost> {
        locations
            .windows(2)
            .try_fold(0 as Cost, |acc, w| acc.checked_add(self.get(w[0], w[1])?))
    }

    #[inline]
    pub(crate) fn raw(&self, from: usize, to: usize) -> Cost {
        self.cells[self.index(from, to)]
    }

    #[inline]
    pub(crate) fn raw_mut(&mut self, from: usize, to: usize) -> &mut Cost {
        let idx = self.index(from, to);
        &mut self.cells[idx]
    }

    /// Removes every outgoing edge of `from`.
    pub(crate) fn block_row(&mut self, from: usize) {
        let start = from * self.size;
        self.cells[start..start + self.size].fill(UNREACHABLE);
    }

    /// Removes every incoming edge of `to`.
    pub(crate) fn block_column(&mut self, to: usize) {
        for from in 0..self.size {
            *self.raw_mut(from, to) = UNREACHABLE;
        }
    }

    /// Removes the single edge `from -> to`.
    pub(crate) fn block(&mut self, from: usize, to: usize) {
        *self.raw_mut(from, to) = UNREACHABLE;
    }

    #[inline]
    fn index(&self, from: usize, to: usize) -> usize {
        assert!(
            from < self.size && to < self.size,
            "cell ({from}, {to}) out of range for {} locations",
            self.size
        );
        from * self.size + to
    }
}

impl TryFrom<Vec<Vec<Option<Cost>>>> for CostMatrix {
    type Error = BnbError;

    fn try_from(rows: Vec<Vec<Option<Cost>>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}

impl From<CostMatrix> for Vec<Vec<Option<Cost>>> {
    fn from(matrix: CostMatrix) -> Self {
        matrix.to_rows()
    }
}
