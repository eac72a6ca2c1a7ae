#![cfg(feature = "parallel")]

use lcs_align::{score_pairs, score_sequences, ChainMatcher, Scorer, ScoreSummary, Sequence};
use proptest::prelude::*;

fn full_lcs(s: &[u8], t: &[u8]) -> usize {
    let n = s.len();
    let m = t.len();
    let mut dp = vec![vec![0usize; m + 1]; n + 1];
    for i in 1..=n {
        for j in 1..=m {
            let up = dp[i - 1][j];
            let left = dp[i][j - 1];
            let diag = dp[i - 1][j - 1] + if s[i - 1] == t[j - 1] { 1 } else { 0 };
            dp[i][j] = up.max(left).max(diag);
        }
    }
    dp[n][m]
}

proptest! {
    #[test]
    fn batch_scores_match_serial(
        pairs in prop::collection::vec(("[ACGT]{0,10}", "[ACGT]{0,10}"), 0..24)
    ) {
        let pairs: Vec<(Vec<u8>, Vec<u8>)> = pairs
            .into_iter()
            .map(|(a, b)| (a.into_bytes(), b.into_bytes()))
            .collect();
        let parallel = score_pairs(&pairs);
        prop_assert_eq!(parallel.len(), pairs.len());
        for ((pred, truth), score) in pairs.iter().zip(&parallel) {
            let serial = ChainMatcher::new(pred, truth).score();
            prop_assert_eq!(*score, serial);
            prop_assert_eq!(score.lcs_len, full_lcs(pred, truth));
        }
    }

    #[test]
    fn sequence_batch_matches_scorer(
        pairs in prop::collection::vec(("[a-d]{0,8}", "[a-d]{0,8}"), 1..16)
    ) {
        let seqs: Vec<(Sequence, Sequence)> = pairs
            .iter()
            .map(|(a, b)| (Sequence::text(a), Sequence::text(b)))
            .collect();
        let batch = score_sequences(&seqs).expect("text pairs share a type");
        for ((pred, truth), score) in seqs.iter().zip(&batch) {
            let serial = Scorer::new(pred, truth).expect("same kind").score();
            prop_assert_eq!(*score, serial);
        }
    }
}

#[test]
fn summary_is_order_independent() {
    let pairs: Vec<(Vec<u8>, Vec<u8>)> = vec![
        (b"HELLO".to_vec(), b"HELLO".to_vec()),
        (b"ABC".to_vec(), b"XYZ".to_vec()),
        (b"HELLO".to_vec(), b"HELXX".to_vec()),
        (Vec::new(), Vec::new()),
    ];
    let forward: ScoreSummary = score_pairs(&pairs).iter().collect();
    let mut reversed = pairs.clone();
    reversed.reverse();
    let backward: ScoreSummary = score_pairs(&reversed).iter().collect();
    assert_eq!(forward.total, 4);
    assert_eq!(forward.perfect, backward.perfect);
    assert_eq!(forward.never, backward.never);
    assert!((forward.mean_lcs_ratio() - backward.mean_lcs_ratio()).abs() < 1e-12);
}

#[test]
fn mixed_batch_fails_as_a_whole() {
    let seqs = vec![
        (Sequence::text("AB"), Sequence::text("AB")),
        (Sequence::text("AB"), Sequence::tokens(vec![1, 2])),
    ];
    assert!(score_sequences(&seqs).is_err());
}
