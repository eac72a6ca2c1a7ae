//! Chain queries for scoring a prediction against a reference.
//!
//! A *chain* is a contiguous run of agreeing elements. The prefix and
//! suffix queries report their run as a slice of one realized LCS (the
//! first one the enumerator produces); the contiguous-run query is a
//! separate longest-common-substring DP that shares nothing with the LCS
//! table.

use crate::engine::LcsEngine;
use crate::score::ChainScore;
use crate::traits::{DedupPolicy, Symbol};

/// Prefix, suffix and longest-run queries over a prediction/reference pair.
pub struct ChainMatcher<'a, T> {
    pred: &'a [T],
    truth: &'a [T],
    engine: LcsEngine<'a, T>,
}

impl<'a, T: Symbol> ChainMatcher<'a, T> {
    pub fn new(pred: &'a [T], truth: &'a [T]) -> Self {
        Self::with_policy(pred, truth, DedupPolicy::default())
    }

    pub fn with_policy(pred: &'a [T], truth: &'a [T], policy: DedupPolicy) -> Self {
        Self {
            pred,
            truth,
            engine: LcsEngine::with_policy(pred, truth, policy),
        }
    }

    pub fn pred(&self) -> &'a [T] {
        self.pred
    }

    pub fn truth(&self) -> &'a [T] {
        self.truth
    }

    /// The LCS engine over `(pred, truth)`.
    pub fn engine(&self) -> &LcsEngine<'a, T> {
        &self.engine
    }

    pub fn lcs_len(&self) -> u32 {
        self.engine.lcs_len()
    }

    /// Length of the common prefix, scanned at most to the shorter input.
    pub fn forward_len(&self) -> usize {
        self.pred
            .iter()
            .zip(self.truth)
            .take_while(|(p, t)| p == t)
            .count()
    }

    /// Length of the common suffix, scanned at most to the shorter input.
    pub fn backward_len(&self) -> usize {
        self.pred
            .iter()
            .rev()
            .zip(self.truth.iter().rev())
            .take_while(|(p, t)| p == t)
            .count()
    }

    /// Common prefix, taken from the first LCS candidate.
    ///
    /// Empty when the inputs share no element.
    pub fn forward_chain(&self) -> Vec<T> {
        let k = self.forward_len();
        if k == 0 {
            return Vec::new();
        }
        let mut lcs = self.engine.first().unwrap_or_default();
        debug_assert!(lcs.len() >= k);
        lcs.truncate(k);
        lcs
    }

    /// Common suffix, taken from the first LCS candidate.
    ///
    /// Empty when the inputs share no element.
    pub fn backward_chain(&self) -> Vec<T> {
        let k = self.backward_len();
        if k == 0 {
            return Vec::new();
        }
        let mut lcs = self.engine.first().unwrap_or_default();
        debug_assert!(lcs.len() >= k);
        let start = lcs.len().saturating_sub(k);
        lcs.split_off(start)
    }

    /// Longest contiguous run shared by both inputs, as a slice of `truth`.
    ///
    /// Ties keep the first run found scanning `pred` rows, then `truth`
    /// columns.
    pub fn max_contiguous_chain(&self) -> &'a [T] {
        let (len, end) = longest_common_run(self.pred, self.truth);
        &self.truth[end - len..end]
    }

    /// Lengths of every chain query plus the LCS length.
    pub fn score(&self) -> ChainScore {
        ChainScore {
            pred_len: self.pred.len(),
            truth_len: self.truth.len(),
            lcs_len: self.lcs_len() as usize,
            forward_len: self.forward_len(),
            backward_len: self.backward_len(),
            max_run_len: self.max_contiguous_chain().len(),
        }
    }
}

/// Longest common substring of `x` and `y`.
///
/// Returns `(len, end)` such that `y[end - len..end]` is the run. Keeps two
/// rolling rows of run lengths ending at each cell.
pub fn longest_common_run<T: PartialEq>(x: &[T], y: &[T]) -> (usize, usize) {
    let m = y.len();
    let mut prev = vec![0usize; m + 1];
    let mut curr = vec![0usize; m + 1];
    let mut best = (0, 0);

    for cx in x {
        for j in 1..=m {
            curr[j] = if *cx == y[j - 1] { prev[j - 1] + 1 } else { 0 };
            if curr[j] > best.0 {
                best = (curr[j], j);
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}
