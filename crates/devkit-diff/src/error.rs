//! Error types for the diff crate.

/// Errors raised while validating a diff request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiffError {
    /// One or both input texts were not supplied.
    #[error("Both text1 and text2 are required")]
    MissingInput,

    /// The tokenization mode is not one of `chars`, `words`, or `lines`.
    #[error("Invalid mode. Use \"chars\", \"words\", or \"lines\"")]
    InvalidMode(String),

    /// The LCS table for the inputs would exceed the configured cell limit.
    #[error("diff table of {rows}x{cols} cells exceeds the limit of {limit}")]
    TableTooLarge { rows: usize, cols: usize, limit: usize },
}

impl DiffError {
    /// Returns `true` if the error was caused by malformed caller input.
    ///
    /// An oversized table is not a validation failure: the request was well
    /// formed but could not be computed.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingInput | Self::InvalidMode(_))
    }
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
