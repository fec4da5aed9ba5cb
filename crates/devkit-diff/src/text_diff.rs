//! Text-level diff: tokenize, run the LCS diff, and summarize.

use serde::{Deserialize, Serialize};

use crate::error::{DiffError, DiffResult};
use crate::lcs::{diff_slices, diff_slices_within, ChangeKind, DiffOp};
use crate::mode::DiffMode;
use crate::tokenize::tokenize;

/// A single token in the edit script.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    #[serde(rename = "type")]
    pub kind: ChangeKind,
    pub value: String,
}

impl Change {
    pub fn new(kind: ChangeKind, value: impl Into<String>) -> Self {
        Self { kind, value: value.into() }
    }

    pub fn equal(value: impl Into<String>) -> Self {
        Self::new(ChangeKind::Equal, value)
    }

    pub fn insert(value: impl Into<String>) -> Self {
        Self::new(ChangeKind::Insert, value)
    }

    pub fn delete(value: impl Into<String>) -> Self {
        Self::new(ChangeKind::Delete, value)
    }
}

/// Operation counts for an edit script.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    /// Number of insert operations.
    pub additions: usize,
    /// Number of delete operations.
    pub deletions: usize,
    /// Number of equal operations (the LCS length).
    pub unchanged: usize,
}

impl DiffStats {
    /// Count operation kinds in `changes`.
    pub fn from_changes(changes: &[Change]) -> Self {
        changes.iter().fold(Self::default(), |mut stats, change| {
            match change.kind {
                ChangeKind::Insert => stats.additions += 1,
                ChangeKind::Delete => stats.deletions += 1,
                ChangeKind::Equal => stats.unchanged += 1,
            }
            stats
        })
    }
}

/// The result of diffing two texts: the ordered edit script and its counts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDiff {
    pub diff: Vec<Change>,
    pub stats: DiffStats,
}

impl TextDiff {
    /// Build a diff result from an edit script, computing its stats.
    pub fn from_changes(diff: Vec<Change>) -> Self {
        let stats = DiffStats::from_changes(&diff);
        Self { diff, stats }
    }

    /// Returns `true` if the script contains no insertions or deletions.
    pub fn is_identical(&self) -> bool {
        self.stats.additions == 0 && self.stats.deletions == 0
    }

    /// Rebuild the old text from its equal and delete tokens.
    pub fn old_text(&self, mode: DiffMode) -> String {
        self.rebuild(mode, ChangeKind::Delete)
    }

    /// Rebuild the new text from its equal and insert tokens.
    pub fn new_text(&self, mode: DiffMode) -> String {
        self.rebuild(mode, ChangeKind::Insert)
    }

    fn rebuild(&self, mode: DiffMode, side: ChangeKind) -> String {
        self.diff
            .iter()
            .filter(|c| c.kind == ChangeKind::Equal || c.kind == side)
            .map(|c| c.value.as_str())
            .collect::<Vec<_>>()
            .join(mode.separator())
    }
}

/// Diff two token sequences, producing owned changes.
pub fn diff_tokens(old: &[&str], new: &[&str]) -> Vec<Change> {
    to_changes(old, new, diff_slices(old, new))
}

fn to_changes(old: &[&str], new: &[&str], ops: Vec<DiffOp>) -> Vec<Change> {
    ops.into_iter()
        .map(|op| {
            let token = match op.kind {
                ChangeKind::Insert => new[op.index],
                ChangeKind::Equal | ChangeKind::Delete => old[op.index],
            };
            Change::new(op.kind, token)
        })
        .collect()
}

/// Tokenize both texts with `mode` and diff them.
pub fn compute_diff(text1: &str, text2: &str, mode: DiffMode) -> TextDiff {
    let old = tokenize(text1, mode);
    let new = tokenize(text2, mode);
    tracing::debug!(
        %mode,
        old_tokens = old.len(),
        new_tokens = new.len(),
        "computing diff"
    );
    TextDiff::from_changes(diff_tokens(&old, &new))
}

/// [`compute_diff`] that refuses inputs whose LCS table would exceed
/// `max_cells` cells, returning [`DiffError::TableTooLarge`] instead.
pub fn compute_diff_within(
    text1: &str,
    text2: &str,
    mode: DiffMode,
    max_cells: usize,
) -> DiffResult<TextDiff> {
    let old = tokenize(text1, mode);
    let new = tokenize(text2, mode);
    tracing::debug!(
        %mode,
        old_tokens = old.len(),
        new_tokens = new.len(),
        max_cells,
        "computing bounded diff"
    );
    let ops = diff_slices_within(&old, &new, max_cells)?;
    Ok(TextDiff::from_changes(to_changes(&old, &new, ops)))
}

/// Resolve a requested mode, where `None` means [`DiffMode::Lines`].
pub fn resolve_mode(mode: Option<&str>) -> DiffResult<DiffMode> {
    mode.map_or(Ok(DiffMode::default()), |raw| raw.parse())
}

/// Validate raw request inputs and diff them.
///
/// Missing texts are reported before an invalid mode. An absent mode means
/// [`DiffMode::Lines`].
pub fn diff_texts(
    text1: Option<&str>,
    text2: Option<&str>,
    mode: Option<&str>,
) -> DiffResult<TextDiff> {
    let (Some(text1), Some(text2)) = (text1, text2) else {
        return Err(DiffError::MissingInput);
    };
    let mode = resolve_mode(mode)?;
    Ok(compute_diff(text1, text2, mode))
}
