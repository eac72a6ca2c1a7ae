//! All-LCS alignment and chain matching
//!
//! This crate compares two ordered sequences of equatable symbols and
//! answers the questions an evaluation loop asks when scoring recognizer
//! output against ground truth.
//!
//! ## Core idea
//! 1. Fill the classic LCS length table ([`AlignmentTable`]).
//! 2. Sweep it backwards once to build a layered [`MatchGraph`] holding
//!    every maximal common subsequence, with shared suffixes stored once.
//! 3. Walk the graph forwards to enumerate subsequences lazily
//!    ([`LcsEngine::subsequences`]).
//! 4. Answer prefix, suffix and longest-run queries on top
//!    ([`ChainMatcher`]).
//!
//! Building the graph is linear in the number of match points, even when
//! the number of distinct subsequences is exponential; callers that need a
//! bound should take only the first few candidates.
//!
//! ## Quick start
//! ```
//! use lcs_align::{ChainMatcher, LcsEngine};
//!
//! let engine = LcsEngine::new(b"ABCBDAB", b"BDCABA");
//! assert_eq!(engine.lcs_len(), 4);
//! let all: Vec<Vec<u8>> = engine.subsequences().collect();
//! assert!(all.contains(&b"BCBA".to_vec()));
//! assert!(all.contains(&b"BDAB".to_vec()));
//!
//! let pred: Vec<char> = "HELLO".chars().collect();
//! let truth: Vec<char> = "HELXX".chars().collect();
//! let matcher = ChainMatcher::new(&pred, &truth);
//! assert_eq!(matcher.forward_chain(), vec!['H', 'E', 'L']);
//! ```
//!
//! ## Runtime-typed inputs
//! [`Sequence`] and [`Scorer`] accept text or token ids chosen at runtime and
//! reject mixed pairs with [`AlignError::TypeMismatch`].

pub mod builder;
pub mod chain;
pub mod engine;
pub mod enumerate;
pub mod error;
pub mod graph;
pub mod score;
pub mod sequence;
pub mod table;
pub mod traits;
pub mod utils;

pub use crate::builder::LcsEngineBuilder;
pub use crate::chain::ChainMatcher;
pub use crate::engine::LcsEngine;
pub use crate::error::{AlignError, Result};
pub use crate::graph::MatchGraph;
pub use crate::score::{score_pairs, score_sequences, ChainScore, ScoreSummary};
pub use crate::sequence::{Scorer, Sequence, SequenceKind};
pub use crate::table::{AlignmentTable, Cell};
pub use crate::traits::{DedupPolicy, Symbol};
