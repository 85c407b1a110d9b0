//! Public entry points.
//!
//! [`compute_diff`] is the total, unguarded operation. [`DiffEngine`] is the
//! caller-side wrapper that classifies oversized inputs as capacity errors
//! before any table is allocated and supports cooperative cancellation.

use tracing::{debug, warn};

use crate::backtrack::{backtrack, TieBreak};
use crate::cancel::CancelFlag;
use crate::config::DiffConfig;
use crate::error::{DiffError, DiffResult, Side};
use crate::lines::split_lines;
use crate::script::EditScript;
use crate::table::{cell_count, AlignmentTable};

/// Compute the edit script turning `old` into `new`.
///
/// Has no error path: the only way it can fail is running out of memory
/// for the `(n+1) * (m+1)` alignment table, which [`DiffEngine`] guards
/// against. The number of `same` operations equals the LCS length, and ties
/// are broken with [`TieBreak::PreferAdd`].
pub fn compute_diff<S, T>(old: &[S], new: &[T]) -> EditScript
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    let table = AlignmentTable::build(old, new);
    backtrack(&table, old, new, TieBreak::PreferAdd)
}

/// Capacity-guarded diff engine.
#[derive(Clone, Debug, Default)]
pub struct DiffEngine {
    config: DiffConfig,
}

impl DiffEngine {
    pub fn new(config: DiffConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// Diff two line sequences, rejecting inputs over the configured limits.
    pub fn diff<S, T>(&self, old: &[S], new: &[T]) -> DiffResult<EditScript>
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        self.check_capacity(old.len(), new.len())?;
        let table = AlignmentTable::build(old, new);
        Ok(self.finish(&table, old, new))
    }

    /// Like [`diff`](Self::diff), but stops with [`DiffError::Cancelled`]
    /// once `cancel` is set.
    pub fn diff_cancellable<S, T>(
        &self,
        old: &[S],
        new: &[T],
        cancel: &CancelFlag,
    ) -> DiffResult<EditScript>
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        self.check_capacity(old.len(), new.len())?;
        let table = AlignmentTable::build_cancellable(old, new, cancel).inspect_err(|_| {
            debug!(old = old.len(), new = new.len(), "diff cancelled");
        })?;
        Ok(self.finish(&table, old, new))
    }

    /// Split both texts into lines and diff them.
    pub fn diff_text(&self, old: &str, new: &str) -> DiffResult<EditScript> {
        self.diff(&split_lines(old), &split_lines(new))
    }

    /// Reject inputs whose table would exceed the configured limits.
    pub fn check_capacity(&self, old_lines: usize, new_lines: usize) -> DiffResult<()> {
        self.check_line_limits(old_lines, new_lines)?;

        let cells = cell_count(old_lines, new_lines).unwrap_or(u64::MAX);
        if cells > self.config.max_cells {
            warn!(
                old_lines,
                new_lines,
                cells,
                limit = self.config.max_cells,
                "alignment table over capacity"
            );
            return Err(DiffError::Capacity {
                old_lines,
                new_lines,
                cells,
                limit: self.config.max_cells,
            });
        }
        Ok(())
    }

    /// Reject inputs with more lines on either side than `max_lines`.
    ///
    /// This is the whole check for length-only work such as
    /// [`lcs_len`](crate::lcs_len), which never allocates the full table.
    pub fn check_line_limits(&self, old_lines: usize, new_lines: usize) -> DiffResult<()> {
        for (side, lines) in [(Side::Old, old_lines), (Side::New, new_lines)] {
            if lines > self.config.max_lines {
                warn!(%side, lines, limit = self.config.max_lines, "diff input too long");
                return Err(DiffError::TooManyLines {
                    side,
                    lines,
                    limit: self.config.max_lines,
                });
            }
        }
        Ok(())
    }

    fn finish<S, T>(&self, table: &AlignmentTable, old: &[S], new: &[T]) -> EditScript
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        let script = backtrack(table, old, new, self.config.tie_break);
        debug!(
            old = old.len(),
            new = new.len(),
            lcs = table.lcs_len(),
            ops = script.len(),
            "diff computed"
        );
        script
    }
}
