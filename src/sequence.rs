//! Dynamically typed sequences at the scoring boundary.
//!
//! Recognizer output arrives either as text or as token ids. [`Sequence`]
//! carries one of the two, and [`Scorer`] refuses to compare sequences of
//! different kinds with [`AlignError::TypeMismatch`] before any table is
//! built. Results come back as [`Sequence`] values of the same kind.

use std::fmt;

use crate::chain::ChainMatcher;
use crate::error::{AlignError, Result};
use crate::score::ChainScore;
use crate::traits::DedupPolicy;

/// Element type of a [`Sequence`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SequenceKind {
    Text,
    Tokens,
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceKind::Text => f.write_str("text"),
            SequenceKind::Tokens => f.write_str("tokens"),
        }
    }
}

/// An owned input sequence of either characters or token ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sequence {
    Text(Vec<char>),
    Tokens(Vec<u32>),
}

impl Sequence {
    pub fn text(s: &str) -> Self {
        Sequence::Text(s.chars().collect())
    }

    pub fn tokens(ids: Vec<u32>) -> Self {
        Sequence::Tokens(ids)
    }

    pub fn kind(&self) -> SequenceKind {
        match self {
            Sequence::Text(_) => SequenceKind::Text,
            Sequence::Tokens(_) => SequenceKind::Tokens,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Sequence::Text(v) => v.len(),
            Sequence::Tokens(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every element listed in `ignore`.
    ///
    /// Tokens are compared by id; for text, ids are read as Unicode scalar
    /// values.
    pub fn without(&self, ignore: &[u32]) -> Sequence {
        match self {
            Sequence::Text(v) => Sequence::Text(
                v.iter()
                    .copied()
                    .filter(|c| !ignore.contains(&u32::from(*c)))
                    .collect(),
            ),
            Sequence::Tokens(v) => {
                Sequence::Tokens(v.iter().copied().filter(|t| !ignore.contains(t)).collect())
            }
        }
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sequence::Text(v) => v.iter().try_for_each(|c| write!(f, "{c}")),
            Sequence::Tokens(v) => {
                f.write_str("[")?;
                for (k, t) in v.iter().enumerate() {
                    if k > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{t}")?;
                }
                f.write_str("]")
            }
        }
    }
}

impl From<&str> for Sequence {
    fn from(s: &str) -> Self {
        Sequence::text(s)
    }
}

impl From<Vec<u32>> for Sequence {
    fn from(ids: Vec<u32>) -> Self {
        Sequence::Tokens(ids)
    }
}

/// Collapse raw per-frame recognizer output: merge runs of the same id,
/// then drop `blank`.
///
/// ```
/// use lcs_align::sequence::ctc_collapse;
///
/// assert_eq!(ctc_collapse(&[1, 1, 0, 2, 2, 0, 2], 0), vec![1, 2, 2]);
/// ```
pub fn ctc_collapse(frames: &[u32], blank: u32) -> Vec<u32> {
    let mut out = Vec::with_capacity(frames.len());
    let mut prev = None;
    for &id in frames {
        if prev != Some(id) && id != blank {
            out.push(id);
        }
        prev = Some(id);
    }
    out
}

/// A chain matcher over two sequences of the same, runtime-checked kind.
pub enum Scorer<'a> {
    Text(ChainMatcher<'a, char>),
    Tokens(ChainMatcher<'a, u32>),
}

impl<'a> Scorer<'a> {
    /// Pair a prediction with its reference.
    ///
    /// Fails with [`AlignError::TypeMismatch`] if the kinds differ.
    pub fn new(pred: &'a Sequence, truth: &'a Sequence) -> Result<Self> {
        Self::with_policy(pred, truth, DedupPolicy::default())
    }

    pub fn with_policy(
        pred: &'a Sequence,
        truth: &'a Sequence,
        policy: DedupPolicy,
    ) -> Result<Self> {
        match (pred, truth) {
            (Sequence::Text(p), Sequence::Text(t)) => {
                Ok(Scorer::Text(ChainMatcher::with_policy(p, t, policy)))
            }
            (Sequence::Tokens(p), Sequence::Tokens(t)) => {
                Ok(Scorer::Tokens(ChainMatcher::with_policy(p, t, policy)))
            }
            _ => Err(AlignError::TypeMismatch {
                left: pred.kind(),
                right: truth.kind(),
            }),
        }
    }

    pub fn kind(&self) -> SequenceKind {
        match self {
            Scorer::Text(_) => SequenceKind::Text,
            Scorer::Tokens(_) => SequenceKind::Tokens,
        }
    }

    pub fn lcs_len(&self) -> u32 {
        match self {
            Scorer::Text(m) => m.lcs_len(),
            Scorer::Tokens(m) => m.lcs_len(),
        }
    }

    /// Every distinct maximal common subsequence, materialized.
    pub fn subsequences(&self) -> Vec<Sequence> {
        match self {
            Scorer::Text(m) => m.engine().subsequences().map(Sequence::Text).collect(),
            Scorer::Tokens(m) => m.engine().subsequences().map(Sequence::Tokens).collect(),
        }
    }

    pub fn forward_chain(&self) -> Sequence {
        match self {
            Scorer::Text(m) => Sequence::Text(m.forward_chain()),
            Scorer::Tokens(m) => Sequence::Tokens(m.forward_chain()),
        }
    }

    pub fn backward_chain(&self) -> Sequence {
        match self {
            Scorer::Text(m) => Sequence::Text(m.backward_chain()),
            Scorer::Tokens(m) => Sequence::Tokens(m.backward_chain()),
        }
    }

    pub fn max_contiguous_chain(&self) -> Sequence {
        match self {
            Scorer::Text(m) => Sequence::Text(m.max_contiguous_chain().to_vec()),
            Scorer::Tokens(m) => Sequence::Tokens(m.max_contiguous_chain().to_vec()),
        }
    }

    pub fn score(&self) -> ChainScore {
        match self {
            Scorer::Text(m) => m.score(),
            Scorer::Tokens(m) => m.score(),
        }
    }
}
