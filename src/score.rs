//! Per-pair chain scores and batch scoring.
//!
//! An evaluation loop scores many independent prediction/reference pairs.
//! Every pair gets its own engine, so with the `parallel` feature pairs are
//! fanned out over rayon's thread pool; results always keep input order.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::chain::ChainMatcher;
use crate::error::Result;
use crate::sequence::{Scorer, Sequence};
use crate::traits::Symbol;

/// Lengths reported by the chain queries for one pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChainScore {
    pub pred_len: usize,
    pub truth_len: usize,
    pub lcs_len: usize,
    pub forward_len: usize,
    pub backward_len: usize,
    pub max_run_len: usize,
}

impl ChainScore {
    /// Prediction reproduces the reference exactly.
    pub fn is_perfect(&self) -> bool {
        self.lcs_len == self.pred_len && self.lcs_len == self.truth_len
    }

    /// Nothing in common even though at least one side is non-empty.
    pub fn is_never(&self) -> bool {
        self.lcs_len == 0 && self.pred_len.max(self.truth_len) > 0
    }

    /// LCS length over the longer input; 1.0 for two empty inputs.
    pub fn lcs_ratio(&self) -> f64 {
        ratio(self.lcs_len, self.pred_len.max(self.truth_len))
    }

    /// Longest contiguous run over the reference length.
    pub fn run_ratio(&self) -> f64 {
        ratio(self.max_run_len, self.truth_len)
    }
}

fn ratio(num: usize, den: usize) -> f64 {
    if den == 0 {
        1.0
    } else {
        num as f64 / den as f64
    }
}

/// Aggregate over a batch of [`ChainScore`]s.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreSummary {
    pub total: usize,
    pub perfect: usize,
    pub never: usize,
    lcs_ratio_sum: f64,
    run_ratio_sum: f64,
}

impl ScoreSummary {
    pub fn push(&mut self, score: &ChainScore) {
        self.total += 1;
        self.perfect += usize::from(score.is_perfect());
        self.never += usize::from(score.is_never());
        self.lcs_ratio_sum += score.lcs_ratio();
        self.run_ratio_sum += score.run_ratio();
    }

    pub fn perfect_rate(&self) -> f64 {
        self.mean(self.perfect as f64)
    }

    pub fn never_rate(&self) -> f64 {
        self.mean(self.never as f64)
    }

    pub fn mean_lcs_ratio(&self) -> f64 {
        self.mean(self.lcs_ratio_sum)
    }

    pub fn mean_run_ratio(&self) -> f64 {
        self.mean(self.run_ratio_sum)
    }

    fn mean(&self, sum: f64) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            sum / self.total as f64
        }
    }
}

impl<'s> FromIterator<&'s ChainScore> for ScoreSummary {
    fn from_iter<I: IntoIterator<Item = &'s ChainScore>>(iter: I) -> Self {
        let mut summary = ScoreSummary::default();
        for score in iter {
            summary.push(score);
        }
        summary
    }
}

/// Score `(pred, truth)` pairs of one element type.
#[cfg(feature = "parallel")]
pub fn score_pairs<T: Symbol + Sync>(pairs: &[(Vec<T>, Vec<T>)]) -> Vec<ChainScore> {
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("score_pairs", pairs = pairs.len(), parallel = true);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    pairs
        .par_iter()
        .map(|(pred, truth)| ChainMatcher::new(pred, truth).score())
        .collect()
}

/// Score `(pred, truth)` pairs of one element type.
#[cfg(not(feature = "parallel"))]
pub fn score_pairs<T: Symbol>(pairs: &[(Vec<T>, Vec<T>)]) -> Vec<ChainScore> {
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("score_pairs", pairs = pairs.len(), parallel = false);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    pairs
        .iter()
        .map(|(pred, truth)| ChainMatcher::new(pred, truth).score())
        .collect()
}

/// Score dynamically typed pairs.
///
/// Fails with the first [`TypeMismatch`](crate::error::AlignError::TypeMismatch)
/// encountered; no scores are returned in that case.
pub fn score_sequences(pairs: &[(Sequence, Sequence)]) -> Result<Vec<ChainScore>> {
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("score_sequences", pairs = pairs.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    #[cfg(feature = "parallel")]
    let iter = pairs.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = pairs.iter();

    iter.map(|(pred, truth)| Scorer::new(pred, truth).map(|s| s.score()))
        .collect()
}
