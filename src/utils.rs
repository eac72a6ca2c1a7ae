//! Assorted utilities and helpers.
//!
//! These work directly on slices and never build the full table, so they
//! are cheap enough for validation and for callers that only need a length.

/// Compute the last DP row of LCS(x, y).
///
/// Returns a vector `row` of length |y|+1, where `row[j] = LCS(x, y[0..j])`.
/// Uses two rolling rows, O(|y|) memory.
pub fn lcs_last_row<T: PartialEq>(x: &[T], y: &[T]) -> Vec<u32> {
    let m = y.len();
    let mut prev = vec![0u32; m + 1];
    let mut curr = vec![0u32; m + 1];

    for cx in x {
        for j in 1..=m {
            curr[j] = if *cx == y[j - 1] {
                prev[j - 1] + 1
            } else {
                prev[j].max(curr[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev
}

/// LCS length in linear space, without building an [`AlignmentTable`](crate::table::AlignmentTable).
#[inline]
pub fn lcs_length<T: PartialEq>(a: &[T], b: &[T]) -> u32 {
    // Roll over the shorter side.
    let row = if a.len() >= b.len() {
        lcs_last_row(a, b)
    } else {
        lcs_last_row(b, a)
    };
    row.last().copied().unwrap_or(0)
}

/// Returns true if `needle` occurs in `haystack` in order, gaps allowed.
pub fn is_subsequence<T: PartialEq>(needle: &[T], haystack: &[T]) -> bool {
    let mut rest = haystack.iter();
    needle.iter().all(|x| rest.any(|y| y == x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_row_basic_cases() {
        assert_eq!(lcs_last_row(b"", b""), vec![0]);
        assert_eq!(lcs_last_row(b"A", b""), vec![0]);
        assert_eq!(lcs_last_row(b"", b"A"), vec![0, 0]);
        assert_eq!(lcs_last_row(b"A", b"A"), vec![0, 1]);
        assert_eq!(lcs_last_row(b"A", b"B"), vec![0, 0]);
        assert_eq!(lcs_last_row(b"ABCBDAB", b"BDCABA"), vec![0, 1, 2, 2, 3, 4, 4]);
    }

    #[test]
    fn length_is_symmetric() {
        assert_eq!(lcs_length(b"ABCBDAB", b"BDCABA"), 4);
        assert_eq!(lcs_length(b"BDCABA", b"ABCBDAB"), 4);
        assert_eq!(lcs_length(b"ABC", b"DEF"), 0);
        assert_eq!(lcs_length::<u8>(&[], &[]), 0);
    }

    #[test]
    fn subsequence_checks() {
        assert!(is_subsequence(b"", b""));
        assert!(is_subsequence(b"", b"XYZ"));
        assert!(is_subsequence(b"BCBA", b"ABCBDAB"));
        assert!(is_subsequence(b"BCBA", b"BDCABA"));
        assert!(!is_subsequence(b"BCBA", b"ABC"));
        assert!(!is_subsequence(b"BA", b"AB"));
    }
}
