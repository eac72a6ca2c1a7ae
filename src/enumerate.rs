//! Lazy enumeration of maximal common subsequences.
//!
//! Both iterators walk the [`MatchGraph`] depth-first from the origin with an
//! explicit stack, visiting successors in the order the graph stores them.
//! They only borrow the graph, so any number of walks can run over the same
//! graph at once. When the LCS length is zero they yield nothing at all,
//! not a single empty subsequence.

use rustc_hash::FxHashSet;

use crate::graph::{MatchGraph, ORIGIN};
use crate::table::Cell;
use crate::traits::{DedupPolicy, Symbol};

/// Iterator over origin-to-leaf coordinate paths.
///
/// Each item holds one match point per level `1..=L`, first to last.
pub struct Paths<'g> {
    graph: &'g MatchGraph,
    stack: Vec<(usize, Cell)>,
    path: Vec<Cell>,
}

impl<'g> Paths<'g> {
    pub fn new(graph: &'g MatchGraph) -> Self {
        let top = graph.lcs_len();
        let stack = if top == 0 {
            Vec::new()
        } else {
            vec![(0, ORIGIN)]
        };
        Self {
            graph,
            stack,
            path: Vec::with_capacity(top + 1),
        }
    }
}

impl Iterator for Paths<'_> {
    type Item = Vec<Cell>;

    fn next(&mut self) -> Option<Self::Item> {
        let top = self.graph.lcs_len();
        while let Some((depth, node)) = self.stack.pop() {
            self.path.truncate(depth);
            self.path.push(node);
            if depth == top {
                return Some(self.path[1..].to_vec());
            }
            // Reverse so the first stored successor is explored first.
            for &next in self.graph.successors(depth, node).iter().rev() {
                self.stack.push((depth + 1, next));
            }
        }
        None
    }
}

/// Iterator over realized subsequences (values read from the first input).
pub struct Subsequences<'g, 'a, T> {
    paths: Paths<'g>,
    a: &'a [T],
    policy: DedupPolicy,
    seen: FxHashSet<Vec<T>>,
}

impl<'g, 'a, T: Symbol> Subsequences<'g, 'a, T> {
    /// Enumerate over `graph`, reading values from `a`, the row input the
    /// graph was built from.
    pub fn new(graph: &'g MatchGraph, a: &'a [T], policy: DedupPolicy) -> Self {
        Self {
            paths: Paths::new(graph),
            a,
            policy,
            seen: FxHashSet::default(),
        }
    }

    /// The dedup policy in effect.
    pub fn policy(&self) -> DedupPolicy {
        self.policy
    }
}

impl<T: Symbol> Iterator for Subsequences<'_, '_, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        for path in self.paths.by_ref() {
            let values: Vec<T> = path.iter().map(|&(i, _)| self.a[i - 1].clone()).collect();
            match self.policy {
                DedupPolicy::ByPath => return Some(values),
                DedupPolicy::ByValue => {
                    if self.seen.insert(values.clone()) {
                        return Some(values);
                    }
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::AlignmentTable;

    fn collect(a: &[u8], b: &[u8], policy: DedupPolicy) -> Vec<Vec<u8>> {
        let table = AlignmentTable::new(a, b);
        let graph = MatchGraph::build(&table);
        Subsequences::new(&graph, a, policy).collect()
    }

    #[test]
    fn zero_length_yields_nothing() {
        assert!(collect(b"ABC", b"DEF", DedupPolicy::ByValue).is_empty());
        assert!(collect(b"", b"", DedupPolicy::ByPath).is_empty());
        let table = AlignmentTable::new(b"ABC", b"XYZ");
        let graph = MatchGraph::build(&table);
        assert_eq!(Paths::new(&graph).count(), 0);
    }

    #[test]
    fn paths_are_increasing_match_points() {
        let table = AlignmentTable::new(b"ABCBDAB", b"BDCABA");
        let graph = MatchGraph::build(&table);
        let paths: Vec<_> = Paths::new(&graph).collect();
        assert_eq!(paths.len() as u64, graph.path_count());
        for path in &paths {
            assert_eq!(path.len(), 4);
            for (level, &cell) in path.iter().enumerate() {
                assert!(table.is_match_point(cell));
                assert_eq!(table.level(cell) as usize, level + 1);
            }
            for w in path.windows(2) {
                assert!(w[0].0 < w[1].0 && w[0].1 < w[1].1);
            }
        }
    }

    #[test]
    fn classic_example_candidates() {
        let got = collect(b"ABCBDAB", b"BDCABA", DedupPolicy::ByValue);
        let want: Vec<Vec<u8>> = vec![b"BCBA".to_vec(), b"BCAB".to_vec(), b"BDAB".to_vec()];
        assert_eq!(got, want);
    }

    #[test]
    fn repeated_symbol_has_single_candidate() {
        assert_eq!(collect(b"AAA", b"AA", DedupPolicy::ByValue), vec![b"AA".to_vec()]);
        assert_eq!(collect(b"AAA", b"AA", DedupPolicy::ByPath), vec![b"AA".to_vec()]);
    }

    #[test]
    fn match_shadowed_by_longer_prefix_is_kept() {
        // The second 'B' of "BB" sits where "AB" already reaches level 2.
        let mut got = collect(b"BAAAB", b"ACBCCBBC", DedupPolicy::ByValue);
        got.sort();
        assert_eq!(got, vec![b"AB".to_vec(), b"BB".to_vec()]);
    }

    #[test]
    fn value_dedup_collapses_equal_paths() {
        assert_eq!(collect(b"CC", b"CA", DedupPolicy::ByPath), vec![b"C".to_vec(), b"C".to_vec()]);
        assert_eq!(collect(b"CC", b"CA", DedupPolicy::ByValue), vec![b"C".to_vec()]);
    }

    #[test]
    fn restart_gives_same_order() {
        let table = AlignmentTable::new(b"XMJYAUZ", b"MZJAWXU");
        let graph = MatchGraph::build(&table);
        let first: Vec<_> = Subsequences::new(&graph, table.a(), DedupPolicy::ByValue).collect();
        let second: Vec<_> = Subsequences::new(&graph, table.a(), DedupPolicy::ByValue).collect();
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }
}
