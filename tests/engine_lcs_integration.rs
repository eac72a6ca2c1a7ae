use lcs_align::utils::is_subsequence;
use lcs_align::{DedupPolicy, LcsEngine, LcsEngineBuilder};

fn valid_candidate(lcs: &[u8], a: &[u8], b: &[u8], len: u32) -> bool {
    lcs.len() == len as usize && is_subsequence(lcs, a) && is_subsequence(lcs, b)
}

#[test]
fn lcs_example_integration() {
    let s = b"ABCBDAB";
    let t = b"BDCABA";
    let engine = LcsEngine::new(s, t);
    assert_eq!(engine.lcs_len(), 4);
    let all: Vec<Vec<u8>> = engine.subsequences().collect();
    assert!(all.contains(&b"BCBA".to_vec()));
    assert!(all.contains(&b"BDAB".to_vec()));
    assert!(all.contains(&b"BCAB".to_vec()));
    assert_eq!(all.len(), 3);
    for lcs in &all {
        assert!(valid_candidate(lcs, s, t, 4));
    }
}

#[test]
fn repeated_symbol_pair() {
    let engine = LcsEngine::new(b"AAA", b"AA");
    assert_eq!(engine.lcs_len(), 2);
    assert_eq!(engine.subsequences().collect::<Vec<_>>(), vec![b"AA".to_vec()]);

    let by_path = LcsEngineBuilder::new(b"AAA", b"AA")
        .with_policy(DedupPolicy::ByPath)
        .build();
    assert_eq!(by_path.subsequences().collect::<Vec<_>>(), vec![b"AA".to_vec()]);
}

#[test]
fn disjoint_alphabets_yield_no_candidates() {
    let engine = LcsEngine::new(b"ABC", b"DEF");
    assert_eq!(engine.lcs_len(), 0);
    assert_eq!(engine.subsequences().count(), 0);
    assert_eq!(engine.paths().count(), 0);
    assert_eq!(engine.graph().path_count(), 0);
}

#[test]
fn dna_example_candidates_are_valid() {
    let s = b"ACCGGTCGAGTGCGCGGAAGCCGGCCGAA";
    let t = b"GTCGTTCGGAATGCCGTTGCTCTGTAAA";
    let engine = LcsEngine::new(s, t);
    assert_eq!(engine.lcs_len(), 20);
    let first = engine.first().expect("non-empty LCS");
    assert!(valid_candidate(&first, s, t, 20));
    for lcs in engine.subsequences().take(50) {
        assert!(valid_candidate(&lcs, s, t, 20));
    }
}

#[test]
fn works_for_word_tokens() {
    let pred = ["the", "cat", "sat", "on", "the", "mat"];
    let truth = ["a", "cat", "sat", "on", "a", "mat"];
    let engine = LcsEngine::new(&pred, &truth);
    assert_eq!(engine.lcs_len(), 4);
    assert_eq!(engine.first(), Some(vec!["cat", "sat", "on", "mat"]));
}
