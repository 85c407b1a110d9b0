use serde::{Deserialize, Serialize};

use crate::backtrack::TieBreak;
use crate::error::{DiffError, DiffResult};

/// Configuration for a [`DiffEngine`](crate::DiffEngine).
///
/// The limits are the capacity guard: the alignment table takes
/// `(n+1) * (m+1)` cells, so inputs past these bounds are rejected up front
/// instead of exhausting memory mid-computation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Maximum number of lines accepted on either side.
    pub max_lines: usize,
    /// Maximum number of alignment table cells.
    pub max_cells: u64,
    /// Move preferred by the backtracker on a tie.
    pub tie_break: TieBreak,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            max_lines: 100_000,
            max_cells: 200_000_000,
            tie_break: TieBreak::PreferAdd,
        }
    }
}

impl DiffConfig {
    /// A configuration with both limits disabled.
    pub fn unlimited() -> Self {
        Self {
            max_lines: usize::MAX,
            max_cells: u64::MAX,
            ..Default::default()
        }
    }

    /// Parse a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(s: &str) -> DiffResult<Self> {
        toml::from_str(s).map_err(|e| DiffError::Config(e.to_string()))
    }
}
