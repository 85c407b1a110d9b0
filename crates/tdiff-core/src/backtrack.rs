//! Script reconstruction: walk the alignment table from `(n, m)` to `(0, 0)`.
//!
//! A diagonal step is taken whenever the two current lines match. Otherwise
//! the walk consumes a line from B (an addition) or from A (a deletion),
//! following whichever neighbour cell keeps the LCS length. When both
//! neighbours are equal the [`TieBreak`] policy decides, so the choice among
//! several equally minimal scripts is a named rule rather than an accident
//! of comparison order.

use serde::{Deserialize, Serialize};

use crate::script::{DiffOp, EditScript};
use crate::table::AlignmentTable;

/// Which move the backward walk takes when an addition and a deletion are
/// equally good, i.e. `table[i][j-1] == table[i-1][j]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TieBreak {
    /// Consume from B first. This is the presentation policy of
    /// [`compute_diff`](crate::compute_diff).
    ///
    /// Because the walk runs backwards, a block of replaced lines comes out
    /// in forward order as all of its deletions followed by all of its
    /// additions.
    #[default]
    PreferAdd,
    /// Consume from A first. A replaced block comes out as additions
    /// followed by deletions.
    PreferDelete,
}

impl TieBreak {
    /// Whether the walk at cursor `(i, j)` emits an addition, given that the
    /// current lines do not match.
    fn takes_add(self, table: &AlignmentTable, i: usize, j: usize) -> bool {
        if j == 0 {
            return false;
        }
        if i == 0 {
            return true;
        }
        let left = table.get(i, j - 1);
        let up = table.get(i - 1, j);
        match self {
            TieBreak::PreferAdd => left >= up,
            TieBreak::PreferDelete => left > up,
        }
    }
}

/// Recover the forward edit script for `a` -> `b` from their table.
///
/// # Panics
///
/// Panics if `table` was not built from inputs of these lengths.
pub fn backtrack<S, T>(table: &AlignmentTable, a: &[S], b: &[T], tie_break: TieBreak) -> EditScript
where
    S: AsRef<str>,
    T: AsRef<str>,
{
    assert!(
        table.rows() == a.len() + 1 && table.cols() == b.len() + 1,
        "alignment table is {}x{}, inputs need {}x{}",
        table.rows(),
        table.cols(),
        a.len() + 1,
        b.len() + 1,
    );

    let (mut i, mut j) = (a.len(), b.len());
    let mut ops = Vec::with_capacity(i + j - table.lcs_len());

    while i > 0 || j > 0 {
        if i > 0 && j > 0 && a[i - 1].as_ref() == b[j - 1].as_ref() {
            ops.push(DiffOp::same(a[i - 1].as_ref()));
            i -= 1;
            j -= 1;
        } else if tie_break.takes_add(table, i, j) {
            ops.push(DiffOp::add(b[j - 1].as_ref()));
            j -= 1;
        } else {
            ops.push(DiffOp::delete(a[i - 1].as_ref()));
            i -= 1;
        }
    }

    ops.reverse();
    EditScript::new(ops)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(a: &[&str], b: &[&str], tie_break: TieBreak) -> Vec<DiffOp> {
        let table = AlignmentTable::build(a, b);
        backtrack(&table, a, b, tie_break).into_ops()
    }

    #[test]
    fn default_policy_prefers_add() {
        assert_eq!(TieBreak::default(), TieBreak::PreferAdd);
    }

    #[test]
    fn replaced_block_lists_deletions_then_additions() {
        let ops = run(
            &["AAA", "BBB", "CCC"],
            &["XXX", "YYY", "ZZZ"],
            TieBreak::PreferAdd,
        );
        assert_eq!(
            ops,
            vec![
                DiffOp::delete("AAA"),
                DiffOp::delete("BBB"),
                DiffOp::delete("CCC"),
                DiffOp::add("XXX"),
                DiffOp::add("YYY"),
                DiffOp::add("ZZZ"),
            ]
        );
    }

    #[test]
    fn prefer_delete_mirrors_replaced_block() {
        let ops = run(
            &["AAA", "BBB", "CCC"],
            &["XXX", "YYY", "ZZZ"],
            TieBreak::PreferDelete,
        );
        assert_eq!(
            ops,
            vec![
                DiffOp::add("XXX"),
                DiffOp::add("YYY"),
                DiffOp::add("ZZZ"),
                DiffOp::delete("AAA"),
                DiffOp::delete("BBB"),
                DiffOp::delete("CCC"),
            ]
        );
    }

    #[test]
    fn tie_break_picks_which_line_is_kept() {
        // Either "a" or "b" can be the common line; the policy decides.
        assert_eq!(
            run(&["a", "b"], &["b", "a"], TieBreak::PreferAdd),
            vec![DiffOp::delete("a"), DiffOp::same("b"), DiffOp::add("a")]
        );
        assert_eq!(
            run(&["a", "b"], &["b", "a"], TieBreak::PreferDelete),
            vec![DiffOp::add("b"), DiffOp::same("a"), DiffOp::delete("b")]
        );
    }

    #[test]
    fn policies_agree_without_ties() {
        let a = ["Line 1", "Line 2", "Line 3"];
        let b = ["Line 1", "Line 3"];
        assert_eq!(
            run(&a, &b, TieBreak::PreferAdd),
            run(&a, &b, TieBreak::PreferDelete)
        );
    }

    #[test]
    fn empty_inputs_give_empty_script() {
        assert!(run(&[], &[], TieBreak::PreferAdd).is_empty());
    }

    #[test]
    #[should_panic(expected = "alignment table")]
    fn mismatched_table_panics() {
        let table = AlignmentTable::build(&["a"], &["b"]);
        backtrack(&table, &["a", "b"], &["b"], TieBreak::PreferAdd);
    }

    #[test]
    fn serde_names_are_kebab_case() {
        assert_eq!(
            serde_json::to_string(&TieBreak::PreferAdd).unwrap(),
            "\"prefer-add\""
        );
        let parsed: TieBreak = serde_json::from_str("\"prefer-delete\"").unwrap();
        assert_eq!(parsed, TieBreak::PreferDelete);
    }
}
