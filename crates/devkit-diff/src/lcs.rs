//! Longest-common-subsequence table and edit-script backtracking.
//!
//! The full `(m + 1) × (n + 1)` table is kept in memory so the backtrack can
//! recover the actual operations, which makes this O(m·n) in both time and
//! space. Inputs are expected to be short, human-edited texts. Callers facing
//! untrusted input use the `_within` variants, which refuse tables above a
//! cell limit instead of attempting the allocation.

use serde::{Deserialize, Serialize};

use crate::error::{DiffError, DiffResult};

/// Kind of a single edit operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    /// Token present in both sequences at this alignment point.
    Equal,
    /// Token present only in the new sequence.
    Insert,
    /// Token present only in the old sequence.
    Delete,
}

/// One step of an edit script, referring back into the input slices.
///
/// `index` points into the old sequence for [`ChangeKind::Equal`] and
/// [`ChangeKind::Delete`], and into the new sequence for [`ChangeKind::Insert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiffOp {
    pub kind: ChangeKind,
    pub index: usize,
}

/// Prefix LCS lengths for two sequences, stored row-major in one allocation.
#[derive(Clone, Debug)]
pub struct LcsTable {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl LcsTable {
    /// Fill the table for `old` against `new`.
    ///
    /// Cell `(i, j)` holds the LCS length of `old[..i]` and `new[..j]`.
    pub fn build<T: PartialEq>(old: &[T], new: &[T]) -> Self {
        let rows = old.len() + 1;
        let cols = new.len() + 1;
        Self::fill(old, new, vec![0usize; rows * cols])
    }

    /// Like [`LcsTable::build`], but fails with [`DiffError::TableTooLarge`]
    /// when the table would hold more than `max_cells` cells or the
    /// allocation cannot be satisfied.
    pub fn build_within<T: PartialEq>(old: &[T], new: &[T], max_cells: usize) -> DiffResult<Self> {
        let rows = old.len() + 1;
        let cols = new.len() + 1;
        let too_large = || DiffError::TableTooLarge { rows, cols, limit: max_cells };

        let len = rows
            .checked_mul(cols)
            .filter(|&len| len <= max_cells)
            .ok_or_else(too_large)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_large())?;
        cells.resize(len, 0usize);

        Ok(Self::fill(old, new, cells))
    }

    fn fill<T: PartialEq>(old: &[T], new: &[T], mut cells: Vec<usize>) -> Self {
        let rows = old.len() + 1;
        let cols = new.len() + 1;
        debug_assert_eq!(cells.len(), rows * cols);

        for i in 1..rows {
            for j in 1..cols {
                cells[i * cols + j] = if old[i - 1] == new[j - 1] {
                    cells[(i - 1) * cols + (j - 1)] + 1
                } else {
                    cells[(i - 1) * cols + j].max(cells[i * cols + (j - 1)])
                };
            }
        }

        Self { rows, cols, cells }
    }

    /// LCS length of `old[..i]` and `new[..j]`.
    pub fn get(&self, i: usize, j: usize) -> usize {
        debug_assert!(i < self.rows && j < self.cols);
        self.cells[i * self.cols + j]
    }

    /// LCS length of the full sequences.
    pub fn lcs_len(&self) -> usize {
        self.get(self.rows - 1, self.cols - 1)
    }
}

/// Compute a minimal edit script turning `old` into `new`.
///
/// When an insert and a delete would be equally good, the insert is taken
/// first while walking backwards, so in the final script deletions come
/// before insertions within a replaced region. Existing outputs depend on
/// this ordering.
pub fn diff_slices<T: PartialEq>(old: &[T], new: &[T]) -> Vec<DiffOp> {
    backtrack(old, new, &LcsTable::build(old, new))
}

/// [`diff_slices`] with the table bounded by `max_cells`.
pub fn diff_slices_within<T: PartialEq>(
    old: &[T],
    new: &[T],
    max_cells: usize,
) -> DiffResult<Vec<DiffOp>> {
    let table = LcsTable::build_within(old, new, max_cells)?;
    Ok(backtrack(old, new, &table))
}

fn backtrack<T: PartialEq>(old: &[T], new: &[T], table: &LcsTable) -> Vec<DiffOp> {
    let mut ops = Vec::with_capacity(old.len().max(new.len()));
    let (mut i, mut j) = (old.len(), new.len());

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && old[i - 1] == new[j - 1] {
            ops.push(DiffOp { kind: ChangeKind::Equal, index: i - 1 });
            i -= 1;
            j -= 1;
        } else if j > 0 && (i == 0 || table.get(i, j - 1) >= table.get(i - 1, j)) {
            ops.push(DiffOp { kind: ChangeKind::Insert, index: j - 1 });
            j -= 1;
        } else {
            ops.push(DiffOp { kind: ChangeKind::Delete, index: i - 1 });
            i -= 1;
        }
    }

    ops.reverse();
    ops
}
