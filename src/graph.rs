//! Layered match graph over an [`AlignmentTable`].
//!
//! Layer `ℓ` maps each node at level `ℓ` to the level-`ℓ+1` match points
//! that can directly follow it in some maximal common subsequence. Layer 0
//! holds only the virtual origin `(0, 0)`; nodes in layer `L` (the LCS
//! length) are leaves with empty successor lists.
//!
//! The graph is discovered by a single reverse sweep from `(|a|, |b|)`
//! using an explicit worklist. Every entry on the worklist carries the
//! *caller*: the nearest match point above it on the path being walked
//! back, or `None` before any match was seen.
//! Match points are expanded once per level no matter how many callers
//! reach them, which keeps the sweep proportional to the graph size rather
//! than to the number of distinct subsequences.

use rustc_hash::{FxHashMap, FxHashSet};

use crate::table::{AlignmentTable, Cell};
use crate::traits::Symbol;

/// The virtual start node.
pub const ORIGIN: Cell = (0, 0);

/// Successor lists for one level, keyed by node.
pub type Layer = FxHashMap<Cell, Vec<Cell>>;

/// What the sweep did at a visited cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceAction {
    /// Reached the origin and linked the caller under layer 0.
    Origin,
    /// First visit to a match point; its diagonal predecessor was queued.
    Discover { level: u32 },
    /// Match point already known; only a new caller was linked.
    Link { level: u32 },
    /// Plain cell; walked left and/or up along equal scores.
    Walk { left: bool, up: bool },
}

/// One visited cell during a traced build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceStep {
    pub cell: Cell,
    /// `None` until the first match point on the walk.
    pub caller: Option<Cell>,
    pub action: TraceAction,
}

/// Deduplicated forward-continuation graph of all maximal common subsequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchGraph {
    layers: Vec<Layer>,
}

impl MatchGraph {
    /// Build the graph for `table`.
    pub fn build<T: Symbol>(table: &AlignmentTable<'_, T>) -> Self {
        Self::sweep(table, None)
    }

    /// Build the graph and record every visited cell in sweep order.
    pub fn build_traced<T: Symbol>(table: &AlignmentTable<'_, T>) -> (Self, Vec<TraceStep>) {
        let mut steps = Vec::new();
        let graph = Self::sweep(table, Some(&mut steps));
        (graph, steps)
    }

    fn sweep<T: Symbol>(
        table: &AlignmentTable<'_, T>,
        mut steps: Option<&mut Vec<TraceStep>>,
    ) -> Self {
        let (n, m) = table.shape();
        let lcs_len = table.lcs_len() as usize;
        let mut layers: Vec<Layer> = vec![Layer::default(); lcs_len + 1];

        // Plain cells can be reached many times through different lattice
        // paths; expanding a (cell, caller) pair twice adds nothing.
        let mut expanded: FxHashSet<(Cell, Option<Cell>)> = FxHashSet::default();
        let mut stack: Vec<(Cell, Option<Cell>)> = vec![((n, m), None)];

        while let Some((cell, caller)) = stack.pop() {
            if !expanded.insert((cell, caller)) {
                continue;
            }
            let (i, j) = cell;

            let action = if cell == ORIGIN {
                link(&mut layers[0], ORIGIN, caller);
                TraceAction::Origin
            } else if table.is_match_point(cell) {
                let level = table.level(cell);
                let layer = &mut layers[level as usize];
                let fresh = !layer.contains_key(&cell);
                link(layer, cell, caller);
                if fresh {
                    stack.push(((i - 1, j - 1), Some(cell)));
                    TraceAction::Discover { level }
                } else {
                    TraceAction::Link { level }
                }
            } else {
                let here = table.get(i, j);
                let left = j > 0 && table.get(i, j - 1) == here;
                let up = i > 0 && table.get(i - 1, j) == here;
                if left {
                    stack.push(((i, j - 1), caller));
                }
                if up {
                    stack.push(((i - 1, j), caller));
                }
                debug_assert!(left || up, "dead end at {cell:?}");
                TraceAction::Walk { left, up }
            };

            #[cfg(feature = "tracing")]
            tracing::trace!(?cell, ?caller, ?action, "match graph sweep");

            if let Some(steps) = steps.as_deref_mut() {
                steps.push(TraceStep {
                    cell,
                    caller,
                    action,
                });
            }
        }

        let graph = Self { layers };
        #[cfg(feature = "tracing")]
        tracing::debug!(
            lcs_len,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "match graph built"
        );
        graph
    }

    /// LCS length `L`; the graph has `L + 1` layers.
    pub fn lcs_len(&self) -> usize {
        self.layers.len() - 1
    }

    /// All layers, index = level.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Layer at `level`, if it exists.
    pub fn layer(&self, level: usize) -> Option<&Layer> {
        self.layers.get(level)
    }

    /// Ordered successors of `node` at `level`. Empty for leaves and
    /// unknown nodes.
    pub fn successors(&self, level: usize, node: Cell) -> &[Cell] {
        self.layers
            .get(level)
            .and_then(|layer| layer.get(&node))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Number of match points (the origin is not counted).
    pub fn node_count(&self) -> usize {
        self.layers.iter().skip(1).map(|layer| layer.len()).sum()
    }

    /// Number of edges, including origin edges.
    pub fn edge_count(&self) -> usize {
        self.layers
            .iter()
            .flat_map(|layer| layer.values())
            .map(Vec::len)
            .sum()
    }

    /// Number of origin-to-leaf paths, saturating at `u64::MAX`.
    ///
    /// Counts by dynamic programming over the layers, so it stays cheap
    /// even when enumerating every path would not. Zero when `L == 0`.
    pub fn path_count(&self) -> u64 {
        let top = self.lcs_len();
        if top == 0 {
            return 0;
        }
        let mut below: FxHashMap<Cell, u64> =
            self.layers[top].keys().map(|&c| (c, 1)).collect();
        for level in (0..top).rev() {
            below = self.layers[level]
                .iter()
                .map(|(&node, succ)| {
                    let count = succ
                        .iter()
                        .map(|s| below.get(s).copied().unwrap_or(0))
                        .fold(0u64, u64::saturating_add);
                    (node, count)
                })
                .collect();
        }
        below.get(&ORIGIN).copied().unwrap_or(0)
    }
}

/// Register `node` in `layer` and append `caller` to its successors if new.
/// A missing caller only registers the node.
fn link(layer: &mut Layer, node: Cell, caller: Option<Cell>) {
    let succ = layer.entry(node).or_default();
    if let Some(c) = caller {
        if !succ.contains(&c) {
            succ.push(c);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_inputs_form_a_chain() {
        let table = AlignmentTable::new(b"ABC", b"ABC");
        let graph = MatchGraph::build(&table);
        assert_eq!(graph.lcs_len(), 3);
        assert_eq!(graph.successors(0, ORIGIN), &[(1, 1)]);
        assert_eq!(graph.successors(1, (1, 1)), &[(2, 2)]);
        assert_eq!(graph.successors(2, (2, 2)), &[(3, 3)]);
        assert!(graph.successors(3, (3, 3)).is_empty());
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.path_count(), 1);
    }

    #[test]
    fn no_common_elements_leaves_bare_origin() {
        let table = AlignmentTable::new(b"ABC", b"DEF");
        let graph = MatchGraph::build(&table);
        assert_eq!(graph.lcs_len(), 0);
        assert_eq!(graph.layers().len(), 1);
        assert!(graph.layer(0).is_some_and(|l| l.contains_key(&ORIGIN)));
        assert!(graph.successors(0, ORIGIN).is_empty());
        assert_eq!(graph.path_count(), 0);
    }

    #[test]
    fn crossing_matches_fork_at_origin() {
        // "AB" vs "BA": two single-symbol LCS, "A" and "B".
        let table = AlignmentTable::new(b"AB", b"BA");
        let graph = MatchGraph::build(&table);
        assert_eq!(graph.lcs_len(), 1);
        let mut firsts = graph.successors(0, ORIGIN).to_vec();
        firsts.sort_unstable();
        assert_eq!(firsts, vec![(1, 2), (2, 1)]);
        assert_eq!(graph.path_count(), 2);
    }

    #[test]
    fn successor_lists_have_no_duplicates() {
        let table = AlignmentTable::new(b"ABCBDAB", b"BDCABA");
        let graph = MatchGraph::build(&table);
        for (level, layer) in graph.layers().iter().enumerate() {
            for (node, succ) in layer {
                let unique: FxHashSet<_> = succ.iter().collect();
                assert_eq!(unique.len(), succ.len(), "dup under {node:?} at {level}");
                for s in succ {
                    assert_eq!(table.level(*s) as usize, level + 1);
                }
            }
        }
    }

    #[test]
    fn traced_build_matches_plain_build() {
        let table = AlignmentTable::new(b"ABCBDAB", b"BDCABA");
        let plain = MatchGraph::build(&table);
        let (traced, steps) = MatchGraph::build_traced(&table);
        assert_eq!(plain, traced);
        assert_eq!(steps.first().map(|s| s.cell), Some((7, 6)));
        assert!(steps.iter().any(|s| s.action == TraceAction::Origin));
        let discovered = steps
            .iter()
            .filter(|s| matches!(s.action, TraceAction::Discover { .. }))
            .count();
        assert_eq!(discovered, plain.node_count());
    }
}
