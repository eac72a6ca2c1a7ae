//! The comparison object.
//!
//! An [`LcsEngine`] owns everything derived from one pair of sequences:
//! 1. the [`AlignmentTable`], filled eagerly at construction,
//! 2. the [`MatchGraph`], built on first use and cached,
//! 3. the dedup policy handed to every enumeration.
//!
//! The cache is per engine, never process-wide. It is only replaced by an
//! explicit [`LcsEngine::trace`] request; ordinary queries never rebuild.
//! Each pair of sequences needs its own engine; enumerations only borrow
//! the graph, so several may run over one engine at the same time.

use std::cell::OnceCell;

use crate::enumerate::{Paths, Subsequences};
use crate::graph::{MatchGraph, TraceStep};
use crate::table::AlignmentTable;
use crate::traits::{DedupPolicy, Symbol};

/// All-LCS engine for a given pair of sequences.
///
/// Typical usage:
/// ```
/// use lcs_align::LcsEngine;
///
/// let engine = LcsEngine::new(b"ABCBDAB", b"BDCABA");
/// assert_eq!(engine.lcs_len(), 4);
/// for lcs in engine.subsequences() {
///     println!("{}", String::from_utf8_lossy(&lcs));
/// }
/// ```
#[derive(Debug)]
pub struct LcsEngine<'a, T> {
    table: AlignmentTable<'a, T>,
    graph: OnceCell<MatchGraph>,
    policy: DedupPolicy,
}

impl<'a, T: Symbol> LcsEngine<'a, T> {
    /// Create an engine with the default [`DedupPolicy`].
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        Self::with_policy(a, b, DedupPolicy::default())
    }

    /// Create an engine with an explicit dedup policy.
    pub fn with_policy(a: &'a [T], b: &'a [T], policy: DedupPolicy) -> Self {
        #[cfg(feature = "tracing")]
        let span = tracing::trace_span!("alignment_table", rows = a.len(), cols = b.len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        Self {
            table: AlignmentTable::new(a, b),
            graph: OnceCell::new(),
            policy,
        }
    }

    /// The match graph, built on first call.
    pub fn graph(&self) -> &MatchGraph {
        self.graph.get_or_init(|| {
            #[cfg(feature = "tracing")]
            let span = tracing::info_span!("build_match_graph", lcs_len = self.table.lcs_len());
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            MatchGraph::build(&self.table)
        })
    }

    /// Force a rebuild of the match graph, recording every visited cell.
    ///
    /// The rebuilt graph replaces the cached one. With the `tracing`
    /// feature each step is also emitted as a `TRACE` event.
    pub fn trace(&mut self) -> Vec<TraceStep> {
        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("trace_match_graph", lcs_len = self.table.lcs_len());
        #[cfg(feature = "tracing")]
        let _enter = span.enter();

        let (graph, steps) = MatchGraph::build_traced(&self.table);
        self.graph = OnceCell::from(graph);
        steps
    }

    /// Lazily enumerate every maximal common subsequence.
    ///
    /// Each call starts a fresh walk. Yields nothing when the inputs share
    /// no element.
    pub fn subsequences(&self) -> Subsequences<'_, 'a, T> {
        Subsequences::new(self.graph(), self.table.a(), self.policy)
    }

    /// Lazily enumerate coordinate paths, one per alignment.
    pub fn paths(&self) -> Paths<'_> {
        Paths::new(self.graph())
    }

    /// The first maximal common subsequence, if any.
    pub fn first(&self) -> Option<Vec<T>> {
        self.subsequences().next()
    }
}

impl<'a, T> LcsEngine<'a, T> {
    /// Expose the underlying table.
    pub fn table(&self) -> &AlignmentTable<'a, T> {
        &self.table
    }

    /// LCS length.
    pub fn lcs_len(&self) -> u32 {
        self.table.lcs_len()
    }

    /// Input lengths `(|a|, |b|)`.
    pub fn shape(&self) -> (usize, usize) {
        self.table.shape()
    }

    /// Return the configured dedup policy.
    pub fn policy(&self) -> DedupPolicy {
        self.policy
    }

    /// True once the graph has been built.
    pub fn is_graph_built(&self) -> bool {
        self.graph.get().is_some()
    }
}
