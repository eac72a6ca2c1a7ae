//! Example: score recognizer output against references.
//!
//! Run with:
//! `cargo run --example score`

use lcs_align::sequence::ctc_collapse;
use lcs_align::{score_sequences, ScoreSummary, Scorer, Sequence};

fn main() {
    let pred = Sequence::text("HELLO WORLD");
    let truth = Sequence::text("HELP WORLDS");
    match Scorer::new(&pred, &truth) {
        Ok(scorer) => {
            println!("forward chain:  {}", scorer.forward_chain());
            println!("backward chain: {}", scorer.backward_chain());
            println!("longest run:    {}", scorer.max_contiguous_chain());
        }
        Err(err) => eprintln!("{err}"),
    }

    // Frame-level output with blank = 0, collapsed before scoring.
    let frames = [0, 4, 4, 0, 7, 7, 7, 0, 0, 7, 2, 2];
    let batch = vec![
        (
            Sequence::tokens(ctc_collapse(&frames, 0)),
            Sequence::tokens(vec![4, 7, 7, 2]),
        ),
        (Sequence::text("CAT"), Sequence::text("CART")),
        (Sequence::text("DOG"), Sequence::text("FISH")),
    ];

    match score_sequences(&batch) {
        Ok(scores) => {
            for (k, s) in scores.iter().enumerate() {
                println!("pair {k}: {s:?}");
            }
            let summary: ScoreSummary = scores.iter().collect();
            println!(
                "total {}  perfect {:.2}  never {:.2}  mean lcs ratio {:.3}",
                summary.total,
                summary.perfect_rate(),
                summary.never_rate(),
                summary.mean_lcs_ratio()
            );
        }
        Err(err) => eprintln!("{err}"),
    }
}
