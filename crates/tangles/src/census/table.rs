//! Tangle lists indexed by `(size, class)`.

use crate::classify::Tangle;

/// Rows `size ∈ [0, max_size]`, columns `class ∈ [1, max_size + 1]`.
///
/// `max_size + 1` is the class of a tree with `max_size` edges, the largest
/// class any cell can hold.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TangleTable {
    max_size: usize,
    cells: Vec<Vec<Vec<Tangle>>>,
}

impl TangleTable {
    /// Allocates all `(max_size + 1)²` cells up front. Enumeration is
    /// exponential in `max_size`, so sizes beyond a few dozen edges are out
    /// of reach long before this allocation matters.
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size,
            cells: vec![vec![Vec::new(); max_size + 1]; max_size + 1],
        }
    }

    #[inline]
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    #[inline]
    pub fn max_class(&self) -> usize {
        self.max_size + 1
    }

    /// Tangles in one cell; empty outside the table.
    pub fn get(&self, size: usize, class: usize) -> &[Tangle] {
        class
            .checked_sub(1)
            .and_then(|c| self.cells.get(size)?.get(c))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    #[inline]
    pub fn count(&self, size: usize, class: usize) -> usize {
        self.get(size, class).len()
    }

    /// Files `tangle` under its own size and class.
    pub(crate) fn push(&mut self, tangle: Tangle) {
        let (size, class) = (tangle.size(), tangle.class());
        self.cells[size][class - 1].push(tangle);
    }

    pub(crate) fn set(&mut self, size: usize, class: usize, tangles: Vec<Tangle>) {
        self.cells[size][class - 1] = tangles;
    }

    /// Cardinalities, `counts()[size][class - 1]`.
    pub fn counts(&self) -> Vec<Vec<usize>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(Vec::len).collect())
            .collect()
    }

    /// Number of tangles per size, summed over classes.
    pub fn size_totals(&self) -> Vec<usize> {
        self.cells
            .iter()
            .map(|row| row.iter().map(Vec::len).sum())
            .collect()
    }

    pub fn total(&self) -> usize {
        self.size_totals().iter().sum()
    }

    /// Every cell as `(size, class, tangles)`, empty ones included.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &[Tangle])> + '_ {
        self.cells.iter().enumerate().flat_map(|(size, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, cell)| (size, c + 1, cell.as_slice()))
        })
    }

    /// Non-empty cells only.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize, &[Tangle])> + '_ {
        self.cells().filter(|(_, _, cell)| !cell.is_empty())
    }
}
