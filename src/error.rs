//! Error types for alignment construction.

use thiserror::Error;

use crate::sequence::SequenceKind;

/// Result alias for fallible alignment operations.
pub type Result<T> = std::result::Result<T, AlignError>;

/// Errors raised while setting up a comparison.
///
/// All alignment queries are total once an engine exists; the only failure
/// is refusing to build one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignError {
    /// The two input sequences hold different element types.
    #[error("cannot align sequences of different element types: {left} vs {right}")]
    TypeMismatch {
        /// Element kind of the first (predicted) sequence.
        left: SequenceKind,
        /// Element kind of the second (reference) sequence.
        right: SequenceKind,
    },
}
