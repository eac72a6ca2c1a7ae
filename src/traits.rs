//! Core trait definitions for alignable symbols.
//!
//! Everything in this crate is generic over the element type of the two
//! sequences being compared. The only requirements are the ones the
//! algorithms actually use:
//! - equality, to detect match points and contiguous runs,
//! - hashing, to deduplicate realized subsequences by value,
//! - cloning, to materialize subsequences out of the borrowed inputs.
//!
//! Because both inputs share the same type parameter, comparing sequences
//! of different element types is rejected by the compiler. The dynamically
//! typed boundary in [`crate::sequence`] reports the same condition at
//! runtime as [`AlignError::TypeMismatch`](crate::error::AlignError).

use std::hash::Hash;

/// A single element of an alignable sequence.
///
/// Blanket-implemented for every `Clone + Eq + Hash` type, so `u8`, `char`,
/// token ids and interned strings all work out of the box.
pub trait Symbol: Clone + Eq + Hash {}

impl<T: Clone + Eq + Hash> Symbol for T {}

/// How the enumerator treats alignments that realize the same values.
///
/// Two different coordinate paths through the match graph can spell the
/// same subsequence. `ByValue` reports each distinct subsequence once;
/// `ByPath` reports one item per coordinate path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DedupPolicy {
    /// Emit each distinct value sequence once (first path wins).
    #[default]
    ByValue,
    /// Emit every distinct coordinate path, even if values repeat.
    ByPath,
}
