//! Example: enumerate every longest common subsequence.
//!
//! Run with:
//! `cargo run --example lcs`

use lcs_align::LcsEngine;

fn main() {
    let s = b"ACCGGTCGAGTGCGCGGAAGCCGGCCGAA";
    let t = b"GTCGTTCGGAATGCCGTTGCTCTGTAAA";

    let engine = LcsEngine::new(s, t);
    let graph = engine.graph();

    println!("LCS length: {}", engine.lcs_len());
    println!(
        "Match graph: {} nodes, {} edges, {} alignments",
        graph.node_count(),
        graph.edge_count(),
        graph.path_count()
    );

    // The set can be large; show the first few.
    for (k, lcs) in engine.subsequences().take(5).enumerate() {
        println!("LCS #{k}: {}", String::from_utf8_lossy(&lcs));
    }
}
