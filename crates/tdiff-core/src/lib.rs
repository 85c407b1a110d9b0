//! Line-level text diff engine.
//!
//! Given two ordered sequences of lines, computes a minimal edit script of
//! retained, inserted and deleted lines. The engine runs in two stages: an
//! LCS alignment table is built bottom-up, then walked backwards from the
//! bottom-right corner to recover one concrete script.
//!
//! # Key Types
//!
//! - [`AlignmentTable`] -- Dense LCS length table over all prefix pairs
//! - [`EditScript`] / [`DiffOp`] / [`OpKind`] -- The forward-order edit script
//! - [`TieBreak`] -- Which move wins when both are equally good
//! - [`DiffEngine`] / [`DiffConfig`] -- Capacity-guarded, cancellable entry point
//!
//! The plain entry point is [`compute_diff`], which never fails:
//!
//! ```
//! use tdiff_core::{compute_diff, DiffOp};
//!
//! let script = compute_diff(&["Line 1", "Line 2"], &["Line 1", "Line 2", "Line 3"]);
//! assert_eq!(
//!     script.ops(),
//!     &[DiffOp::same("Line 1"), DiffOp::same("Line 2"), DiffOp::add("Line 3")]
//! );
//! ```

pub mod backtrack;
pub mod cancel;
pub mod config;
pub mod engine;
pub mod error;
pub mod lines;
pub mod render;
pub mod script;
pub mod table;

pub use backtrack::{backtrack, TieBreak};
pub use cancel::CancelFlag;
pub use config::DiffConfig;
pub use engine::{compute_diff, DiffEngine};
pub use error::{DiffError, DiffResult, Side};
pub use lines::{split_lines, LineSequence};
pub use render::{render_numbered, render_plain, render_rows, RenderedRow};
pub use script::{DiffOp, DiffStats, EditScript, NumberedOp, OpKind};
pub use table::{cell_count, lcs_len, AlignmentTable};
