//! Sequence diff engine for the devkit diff checker.
//!
//! Splits two texts into characters, words, or lines and computes a minimal
//! edit script with a longest-common-subsequence table, then reports how many
//! tokens were added, deleted, and kept.
//!
//! # Key Types
//!
//! - [`DiffMode`] -- Tokenization granularity (`chars`, `words`, `lines`)
//! - [`TextDiff`] / [`Change`] / [`DiffStats`] -- Edit script and its counts
//! - [`LcsTable`] / [`DiffOp`] -- Generic LCS core over any comparable tokens
//!
//! # Example
//!
//! ```rust
//! use devkit_diff::{compute_diff, Change, DiffMode};
//!
//! let result = compute_diff("ab", "aXb", DiffMode::Chars);
//! assert_eq!(
//!     result.diff,
//!     vec![Change::equal("a"), Change::insert("X"), Change::equal("b")]
//! );
//! assert_eq!(result.stats.additions, 1);
//! ```
//!
//! # Limits
//!
//! The LCS table is `(m + 1) × (n + 1)` cells, so time and memory grow with the
//! product of the two token counts.

pub mod error;
pub mod lcs;
pub mod mode;
pub mod text_diff;
pub mod tokenize;

pub use error::{DiffError, DiffResult};
pub use lcs::{diff_slices, diff_slices_within, ChangeKind, DiffOp, LcsTable};
pub use mode::DiffMode;
pub use text_diff::{
    compute_diff, compute_diff_within, diff_texts, diff_tokens, resolve_mode, Change, DiffStats,
    TextDiff,
};
pub use tokenize::tokenize;
