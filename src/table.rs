//! Full LCS length table.
//!
//! Cell `(i, j)` holds LCS(a[0..i], b[0..j]). Row 0 and column 0 are zero.
//! The table is filled eagerly at construction (O(|a|·|b|) time and memory)
//! and never mutated afterwards. Inputs are expected to be short symbol
//! sequences; callers with very long inputs should chunk them first.

use crate::traits::Symbol;

/// A DP cell coordinate `(row, col)`, i.e. `(i, j)`.
pub type Cell = (usize, usize);

/// Immutable LCS length table for a pair of sequences.
#[derive(Clone, Debug)]
pub struct AlignmentTable<'a, T> {
    a: &'a [T],
    b: &'a [T],
    /// Row-major scores, `(a.len() + 1) * (b.len() + 1)` entries.
    scores: Vec<u32>,
    width: usize,
    lcs_len: u32,
}

impl<'a, T: Symbol> AlignmentTable<'a, T> {
    /// Build the table for `a` (rows) against `b` (columns).
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        let n = a.len();
        let m = b.len();
        let width = m + 1;
        let mut scores = vec![0u32; (n + 1) * width];

        for i in 1..=n {
            let ch = &a[i - 1];
            let (prev, curr) = scores.split_at_mut(i * width);
            let prev = &prev[(i - 1) * width..];
            let curr = &mut curr[..width];
            for j in 1..=m {
                curr[j] = if *ch == b[j - 1] {
                    prev[j - 1] + 1
                } else {
                    prev[j].max(curr[j - 1])
                };
            }
        }

        let lcs_len = scores[n * width + m];
        Self {
            a,
            b,
            scores,
            width,
            lcs_len,
        }
    }

    /// True if `(i, j)` is a match point: both inputs agree there, so the
    /// diagonal step into the cell raises the score by one.
    ///
    /// Every maximal subsequence of `a[..i]`, `b[..j]` then ends with this
    /// match, so a backward walk only needs to follow the diagonal here.
    pub fn is_match_point(&self, (i, j): Cell) -> bool {
        if i == 0 || j == 0 || self.a[i - 1] != self.b[j - 1] {
            return false;
        }
        debug_assert_eq!(self.get(i - 1, j - 1) + 1, self.get(i, j));
        true
    }
}

impl<'a, T> AlignmentTable<'a, T> {
    /// First input (rows).
    pub fn a(&self) -> &'a [T] {
        self.a
    }

    /// Second input (columns).
    pub fn b(&self) -> &'a [T] {
        self.b
    }

    /// Table dimensions `(|a| + 1, |b| + 1)`.
    pub fn dims(&self) -> (usize, usize) {
        (self.a.len() + 1, self.width)
    }

    /// Input lengths `(|a|, |b|)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.a.len(), self.b.len())
    }

    /// Score at cell `(i, j)`.
    ///
    /// # Panics
    /// Panics if the cell lies outside [`dims`](Self::dims).
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u32 {
        assert!(j < self.width, "column {j} out of range");
        self.scores[i * self.width + j]
    }

    /// Borrow row `i` of the table.
    pub fn row(&self, i: usize) -> &[u32] {
        &self.scores[i * self.width..(i + 1) * self.width]
    }

    /// Iterate over all rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u32]> + '_ {
        self.scores.chunks(self.width)
    }

    /// LCS length of the full inputs, `table[|a|][|b|]`.
    #[inline]
    pub fn lcs_len(&self) -> u32 {
        self.lcs_len
    }

    /// Level of a cell, i.e. its score.
    #[inline]
    pub fn level(&self, (i, j): Cell) -> u32 {
        self.get(i, j)
    }
}
