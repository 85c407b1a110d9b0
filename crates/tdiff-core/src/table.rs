//! Alignment table: LCS lengths for every prefix pair of the two inputs.
//!
//! Cell `(i, j)` holds the LCS length of the first `i` lines of A and the
//! first `j` lines of B. Row 0 and column 0 are zero. The full table is kept
//! because the backtracker needs random access to it; [`lcs_len`] is the
//! rolling-row variant for callers that only need the length.

use std::fmt;

use crate::cancel::CancelFlag;
use crate::error::{DiffError, DiffResult};

/// Dense `(n+1) x (m+1)` LCS length table, stored row-major.
#[derive(Clone, PartialEq, Eq)]
pub struct AlignmentTable {
    rows: usize,
    cols: usize,
    cells: Vec<usize>,
}

impl AlignmentTable {
    /// Build the full table for `a` (rows) against `b` (columns).
    pub fn build<S, T>(a: &[S], b: &[T]) -> Self
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let mut table = Self::zeroed(a.len(), b.len());
        for i in 1..table.rows {
            table.fill_row(i, a[i - 1].as_ref(), b);
        }
        table
    }

    /// Build the table, polling `cancel` before each row.
    ///
    /// Returns [`DiffError::Cancelled`] as soon as the flag is observed; no
    /// partially filled table is ever handed out.
    pub fn build_cancellable<S, T>(a: &[S], b: &[T], cancel: &CancelFlag) -> DiffResult<Self>
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let mut table = Self::zeroed(a.len(), b.len());
        for i in 1..table.rows {
            if cancel.is_cancelled() {
                return Err(DiffError::Cancelled);
            }
            table.fill_row(i, a[i - 1].as_ref(), b);
        }
        Ok(table)
    }

    fn zeroed(n: usize, m: usize) -> Self {
        let rows = n + 1;
        let cols = m + 1;
        // An overflowing size fails allocation the same way a huge one does.
        let len = rows.checked_mul(cols).unwrap_or(usize::MAX);
        Self {
            rows,
            cols,
            cells: vec![0; len],
        }
    }

    fn fill_row<T: AsRef<str>>(&mut self, i: usize, line: &str, b: &[T]) {
        let cols = self.cols;
        let (above, current) = self.cells.split_at_mut(i * cols);
        let above = &above[(i - 1) * cols..];
        let current = &mut current[..cols];
        for j in 1..cols {
            current[j] = if line == b[j - 1].as_ref() {
                above[j - 1] + 1
            } else {
                above[j].max(current[j - 1])
            };
        }
    }

    /// The LCS length of the first `i` lines of A and first `j` lines of B.
    ///
    /// # Panics
    ///
    /// Panics if `i > n` or `j > m`.
    pub fn get(&self, i: usize, j: usize) -> usize {
        assert!(i < self.rows && j < self.cols, "cell ({i}, {j}) out of bounds");
        self.cells[i * self.cols + j]
    }

    /// Number of rows, `n + 1`.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `m + 1`.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// LCS length of the full inputs, `table[n][m]`.
    pub fn lcs_len(&self) -> usize {
        self.cells[self.cells.len() - 1]
    }
}

impl fmt::Debug for AlignmentTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for row in self.cells.chunks(self.cols) {
            list.entry(&row);
        }
        list.finish()
    }
}

/// Size of the table for `n` x `m` lines, or `None` if it overflows `u64`.
pub fn cell_count(n: usize, m: usize) -> Option<u64> {
    let rows = (n as u64).checked_add(1)?;
    let cols = (m as u64).checked_add(1)?;
    rows.checked_mul(cols)
}

/// LCS length of `a` and `b` in `O(min(n, m))` space.
///
/// Keeps only two rows, so it cannot be backtracked. Always equals
/// `AlignmentTable::build(a, b).lcs_len()`.
pub fn lcs_len<S, T>(a: &[S], b: &[T]) -> usize
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    if a.len() < b.len() {
        rolling_lcs_len(b, a)
    } else {
        rolling_lcs_len(a, b)
    }
}

fn rolling_lcs_len<S, T>(outer: &[S], inner: &[T]) -> usize
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let mut prev = vec![0usize; inner.len() + 1];
    let mut cur = vec![0usize; inner.len() + 1];
    for x in outer {
        let x = x.as_ref();
        for (j, y) in inner.iter().enumerate() {
            cur[j + 1] = if x == y.as_ref() {
                prev[j] + 1
            } else {
                prev[j + 1].max(cur[j])
            };
        }
        std::mem::swap(&mut prev, &mut cur);
    }
    prev[inner.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY: [&str; 0] = [];

    #[test]
    fn empty_inputs_yield_single_zero_cell() {
        let table = AlignmentTable::build(&EMPTY, &EMPTY);
        assert_eq!(table.rows(), 1);
        assert_eq!(table.cols(), 1);
        assert_eq!(table.lcs_len(), 0);
    }

    #[test]
    fn one_empty_side_is_all_zero() {
        let table = AlignmentTable::build(&["a", "b", "c"], &EMPTY);
        assert_eq!(table.rows(), 4);
        assert_eq!(table.cols(), 1);
        for i in 0..4 {
            assert_eq!(table.get(i, 0), 0);
        }
    }

    #[test]
    fn base_row_and_column_are_zero() {
        let a = ["x", "y", "z"];
        let b = ["x", "z"];
        let table = AlignmentTable::build(&a, &b);
        for j in 0..table.cols() {
            assert_eq!(table.get(0, j), 0);
        }
        for i in 0..table.rows() {
            assert_eq!(table.get(i, 0), 0);
        }
    }

    #[test]
    fn recurrence_holds_for_every_cell() {
        let a = ["a", "b", "c", "b", "d", "a", "b"];
        let b = ["b", "d", "c", "a", "b", "a"];
        let table = AlignmentTable::build(&a, &b);
        for i in 1..table.rows() {
            for j in 1..table.cols() {
                let expected = if a[i - 1] == b[j - 1] {
                    table.get(i - 1, j - 1) + 1
                } else {
                    table.get(i - 1, j).max(table.get(i, j - 1))
                };
                assert_eq!(table.get(i, j), expected, "cell ({i}, {j})");
            }
        }
        // Classic textbook pair: LCS is "bcba".
        assert_eq!(table.lcs_len(), 4);
    }

    #[test]
    fn disjoint_inputs_have_zero_lcs() {
        let table = AlignmentTable::build(&["AAA", "BBB", "CCC"], &["XXX", "YYY", "ZZZ"]);
        assert_eq!(table.lcs_len(), 0);
    }

    #[test]
    fn identical_inputs_fill_diagonal() {
        let a = ["1", "2", "3"];
        let table = AlignmentTable::build(&a, &a);
        for k in 0..=3 {
            assert_eq!(table.get(k, k), k);
        }
    }

    #[test]
    fn mixed_string_types() {
        let a = vec!["Line 1".to_string(), "Line 2".to_string()];
        let b = ["Line 1", "Line 2", "Line 3"];
        assert_eq!(AlignmentTable::build(&a, &b).lcs_len(), 2);
    }

    #[test]
    fn debug_prints_rows() {
        let table = AlignmentTable::build(&["a"], &["a"]);
        assert_eq!(format!("{table:?}"), "[[0, 0], [0, 1]]");
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn get_out_of_bounds_panics() {
        AlignmentTable::build(&["a"], &["a"]).get(2, 0);
    }

    #[test]
    fn cancellable_build_matches_plain_build() {
        let a = ["a", "b", "c"];
        let b = ["b", "c", "d"];
        let flag = CancelFlag::new();
        let table = AlignmentTable::build_cancellable(&a, &b, &flag).unwrap();
        assert_eq!(table, AlignmentTable::build(&a, &b));
    }

    #[test]
    fn cancelled_build_returns_error() {
        let flag = CancelFlag::new();
        flag.cancel();
        let result = AlignmentTable::build_cancellable(&["a"], &["a"], &flag);
        assert_eq!(result, Err(DiffError::Cancelled));
    }

    #[test]
    fn cancelled_flag_ignored_when_no_rows() {
        let flag = CancelFlag::new();
        flag.cancel();
        assert!(AlignmentTable::build_cancellable(&EMPTY, &["a"], &flag).is_ok());
    }

    #[test]
    fn cell_count_includes_base_row_and_column() {
        assert_eq!(cell_count(0, 0), Some(1));
        assert_eq!(cell_count(2, 3), Some(12));
        assert_eq!(cell_count(usize::MAX, usize::MAX), None);
    }

    #[test]
    fn rolling_length_matches_table() {
        let a = ["a", "b", "c", "b", "d", "a", "b"];
        let b = ["b", "d", "c", "a", "b", "a"];
        assert_eq!(lcs_len(&a, &b), AlignmentTable::build(&a, &b).lcs_len());
        assert_eq!(lcs_len(&b, &a), 4);
        assert_eq!(lcs_len(&a, &EMPTY), 0);
        assert_eq!(lcs_len(&EMPTY, &EMPTY), 0);
    }
}
