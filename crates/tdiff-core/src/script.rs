//! Diff operations and the edit script they form.
//!
//! Replaying the `same` and `delete` operations of a script in order gives
//! back the old lines; replaying `same` and `add` gives back the new lines.

use serde::{Deserialize, Serialize};

/// The kind of a single diff operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpKind {
    /// Line present in both inputs; consumes one line from each.
    Same,
    /// Line present only in the new input.
    Add,
    /// Line present only in the old input.
    Delete,
}

impl OpKind {
    /// The gutter marker used when rendering: blank, `+` or `-`.
    pub fn marker(self) -> char {
        match self {
            OpKind::Same => ' ',
            OpKind::Add => '+',
            OpKind::Delete => '-',
        }
    }

    /// Whether this kind consumes a line from the old input.
    pub fn in_old(self) -> bool {
        matches!(self, OpKind::Same | OpKind::Delete)
    }

    /// Whether this kind consumes a line from the new input.
    pub fn in_new(self) -> bool {
        matches!(self, OpKind::Same | OpKind::Add)
    }
}

/// One tagged line of an edit script.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiffOp {
    pub kind: OpKind,
    pub line: String,
}

impl DiffOp {
    pub fn new(kind: OpKind, line: impl Into<String>) -> Self {
        Self {
            kind,
            line: line.into(),
        }
    }

    pub fn same(line: impl Into<String>) -> Self {
        Self::new(OpKind::Same, line)
    }

    pub fn add(line: impl Into<String>) -> Self {
        Self::new(OpKind::Add, line)
    }

    pub fn delete(line: impl Into<String>) -> Self {
        Self::new(OpKind::Delete, line)
    }
}

/// A forward-order edit script transforming the old lines into the new ones.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditScript {
    ops: Vec<DiffOp>,
}

impl EditScript {
    pub fn new(ops: Vec<DiffOp>) -> Self {
        Self { ops }
    }

    pub fn ops(&self) -> &[DiffOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DiffOp> {
        self.ops
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiffOp> {
        self.ops.iter()
    }

    /// Replay `same` and `delete` operations: the old input, in order.
    pub fn old_lines(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter(|op| op.kind.in_old())
            .map(|op| op.line.as_str())
            .collect()
    }

    /// Replay `same` and `add` operations: the new input, in order.
    pub fn new_lines(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter(|op| op.kind.in_new())
            .map(|op| op.line.as_str())
            .collect()
    }

    /// Returns `true` if the script holds no additions or deletions.
    pub fn is_identical(&self) -> bool {
        self.ops.iter().all(|op| op.kind == OpKind::Same)
    }

    /// Count operations by kind.
    pub fn stats(&self) -> DiffStats {
        let mut stats = DiffStats::default();
        for op in &self.ops {
            match op.kind {
                OpKind::Same => stats.same += 1,
                OpKind::Add => stats.added += 1,
                OpKind::Delete => stats.deleted += 1,
            }
        }
        stats
    }

    /// Iterate operations alongside their 1-based old/new line numbers.
    pub fn numbered(&self) -> Numbered<'_> {
        Numbered {
            ops: self.ops.iter(),
            old_no: 0,
            new_no: 0,
        }
    }
}

impl IntoIterator for EditScript {
    type Item = DiffOp;
    type IntoIter = std::vec::IntoIter<DiffOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.into_iter()
    }
}

impl<'a> IntoIterator for &'a EditScript {
    type Item = &'a DiffOp;
    type IntoIter = std::slice::Iter<'a, DiffOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

impl From<Vec<DiffOp>> for EditScript {
    fn from(ops: Vec<DiffOp>) -> Self {
        Self { ops }
    }
}

/// An operation with the line numbers it occupies on each side.
///
/// `old_no` is `None` for additions, `new_no` is `None` for deletions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberedOp<'a> {
    pub old_no: Option<usize>,
    pub new_no: Option<usize>,
    pub op: &'a DiffOp,
}

/// Iterator returned by [`EditScript::numbered`].
#[derive(Clone, Debug)]
pub struct Numbered<'a> {
    ops: std::slice::Iter<'a, DiffOp>,
    old_no: usize,
    new_no: usize,
}

impl<'a> Iterator for Numbered<'a> {
    type Item = NumberedOp<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let op = self.ops.next()?;
        let old_no = op.kind.in_old().then(|| {
            self.old_no += 1;
            self.old_no
        });
        let new_no = op.kind.in_new().then(|| {
            self.new_no += 1;
            self.new_no
        });
        Some(NumberedOp { old_no, new_no, op })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ops.size_hint()
    }
}

/// Operation counts for an edit script.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub same: usize,
    pub added: usize,
    pub deleted: usize,
}

impl DiffStats {
    /// Number of added plus deleted lines.
    pub fn changes(&self) -> usize {
        self.added + self.deleted
    }

    /// Lines in the old input.
    pub fn old_len(&self) -> usize {
        self.same + self.deleted
    }

    /// Lines in the new input.
    pub fn new_len(&self) -> usize {
        self.same + self.added
    }

    /// `2 * same / (old + new)`, or `1.0` when both inputs are empty.
    pub fn similarity(&self) -> f64 {
        let total = self.old_len() + self.new_len();
        if total == 0 {
            1.0
        } else {
            (2 * self.same) as f64 / total as f64
        }
    }
}
