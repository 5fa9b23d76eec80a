//! Error types for page operations.

use thiserror::Error;

use crate::element::ElementType;

/// Result type for page operations.
pub type PageResult<T> = Result<T, PageError>;

/// Errors that can occur in page operations.
#[derive(Debug, Error)]
pub enum PageError {
    /// Section not found in the page.
    #[error("Section not found: {0}")]
    SectionNotFound(String),

    /// A reorder index does not address an existing position.
    #[error("Index {index} out of range for sequence of length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the sequence at the time of the call.
        len: usize,
    },

    /// A patch of one element kind was applied to an element of another kind.
    #[error("Cannot apply {found} patch to {expected} element")]
    KindMismatch {
        /// Kind of the stored element.
        expected: ElementType,
        /// Kind of the patch.
        found: ElementType,
    },

    /// A CSS length string could not be parsed.
    #[error("Invalid length: {0:?}")]
    InvalidLength(String),

    /// A color string could not be parsed.
    #[error("Invalid color: {0:?}")]
    InvalidColor(String),

    /// Page serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
