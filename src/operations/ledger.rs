use std::collections::HashMap;

use tracing::trace;

use crate::graph::{resolve_endpoints, EdgeKey};
use crate::math::distance_2d::point_to_segment_dist;
use crate::math::Point2;

use super::classify::Augmentation;

/// The live edge set, iterated in insertion order.
///
/// Removing an edge leaves a tombstone so the remaining edges keep their
/// relative order; re-inserting a live edge is a no-op.
#[derive(Debug, Clone, Default)]
pub struct EdgeSet {
    slots: Vec<Option<EdgeKey>>,
    index: HashMap<EdgeKey, usize>,
}

impl EdgeSet {
    /// Creates an empty edge set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `edge` is live.
    #[must_use]
    pub fn contains(&self, edge: EdgeKey) -> bool {
        self.index.contains_key(&edge)
    }

    /// Appends `edge`. Returns `false` if it was already live.
    pub fn insert(&mut self, edge: EdgeKey) -> bool {
        if self.index.contains_key(&edge) {
            return false;
        }
        self.index.insert(edge, self.slots.len());
        self.slots.push(Some(edge));
        true
    }

    /// Removes `edge`. Returns `false` if it was not live.
    pub fn remove(&mut self, edge: EdgeKey) -> bool {
        match self.index.remove(&edge) {
            Some(slot) => {
                self.slots[slot] = None;
                true
            }
            None => false,
        }
    }

    /// Number of live edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if no edge is live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Iterates live edges in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = EdgeKey> + '_ {
        self.slots.iter().filter_map(|slot| *slot)
    }
}

impl FromIterator<EdgeKey> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = EdgeKey>>(iter: I) -> Self {
        let mut set = Self::new();
        for edge in iter {
            set.insert(edge);
        }
        set
    }
}

/// Maps each original edge that has been split to the ordered chain of
/// fragments it currently exists as.
///
/// An edge without an entry has never been split.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SplitLedger {
    fragments: HashMap<EdgeKey, Vec<EdgeKey>>,
}

impl SplitLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the fragments of `original` from its start to its end, or
    /// `None` if it was never split.
    #[must_use]
    pub fn fragments(&self, original: EdgeKey) -> Option<&[EdgeKey]> {
        self.fragments.get(&original).map(Vec::as_slice)
    }

    /// Iterates every split original edge with its fragments, in no
    /// particular order.
    pub fn iter(&self) -> impl Iterator<Item = (EdgeKey, &[EdgeKey])> + '_ {
        self.fragments.iter().map(|(k, v)| (*k, v.as_slice()))
    }

    /// Number of original edges that have been split.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    /// Returns `true` if nothing has been split.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Records that `replaced` (a fragment of `original`, or `original`
    /// itself) became `halves`.
    fn record_split(&mut self, original: EdgeKey, replaced: EdgeKey, halves: [EdgeKey; 2]) {
        let chain = self.fragments.entry(original).or_default();
        match chain.iter().position(|&f| f == replaced) {
            Some(at) => {
                chain.splice(at..=at, halves);
            }
            None => chain.extend(halves),
        }
    }
}

/// Picks the live edge that currently represents `original` near `position`.
///
/// Unsplit originals resolve to themselves. Split originals resolve to the
/// live fragment with the smallest point-to-segment distance to `position`;
/// ties go to the earlier fragment.
fn resolve_current(
    edges: &EdgeSet,
    ledger: &SplitLedger,
    nodes: &[Point2],
    original: EdgeKey,
    position: &Point2,
) -> Option<EdgeKey> {
    let Some(chain) = ledger.fragments(original) else {
        return edges.contains(original).then_some(original);
    };

    let mut best: Option<(EdgeKey, f64)> = None;
    for &fragment in chain.iter().filter(|&&f| edges.contains(f)) {
        let Some((a, b)) = resolve_endpoints(nodes, fragment) else {
            continue;
        };
        let dist = point_to_segment_dist(position, &a, &b);
        match best {
            Some((_, d)) if d <= dist => {}
            _ => best = Some((fragment, dist)),
        }
    }
    best.map(|(fragment, _)| fragment)
}

/// Splits each candidate original edge at `vertex`.
///
/// For every candidate, the current fragment nearest `position` is replaced
/// by `(from, vertex)` and `(vertex, to)` and the ledger is updated.
/// Candidates with no live fragment, or whose fragment already ends at
/// `vertex`, are skipped. Returns the number of splits performed.
pub fn route_edges_through_vertex(
    edges: &mut EdgeSet,
    ledger: &mut SplitLedger,
    nodes: &[Point2],
    vertex: usize,
    position: &Point2,
    candidates: &[EdgeKey],
) -> usize {
    let mut splits = 0;

    for &original in candidates {
        let Some(current) = resolve_current(edges, ledger, nodes, original, position) else {
            trace!(?original, vertex, "no live fragment, skipping");
            continue;
        };
        if current.is_incident_to(vertex) {
            trace!(?original, ?current, vertex, "fragment already ends at vertex");
            continue;
        }

        let halves = [
            EdgeKey::new(current.from, vertex),
            EdgeKey::new(vertex, current.to),
        ];
        edges.remove(current);
        for half in halves {
            edges.insert(half);
        }
        ledger.record_split(original, current, halves);
        splits += 1;

        trace!(?original, ?current, vertex, "split edge");
    }

    splits
}

/// Owns the evolving node list, edge set and ledger for one planarization
/// pass and applies augmentation instructions to them in order.
#[derive(Debug, Clone)]
pub struct Augmenter {
    nodes: Vec<Point2>,
    edges: EdgeSet,
    ledger: SplitLedger,
    vertices_added: usize,
}

impl Augmenter {
    /// Starts a pass over `nodes` and `edges`.
    #[must_use]
    pub fn new(nodes: Vec<Point2>, edges: impl IntoIterator<Item = EdgeKey>) -> Self {
        Self {
            nodes,
            edges: edges.into_iter().collect(),
            ledger: SplitLedger::new(),
            vertices_added: 0,
        }
    }

    /// Applies one instruction and returns the number of splits performed.
    ///
    /// `NewVertex` appends its node first, so it receives the next free index.
    pub fn apply(&mut self, augmentation: &Augmentation) -> usize {
        match augmentation {
            Augmentation::NewVertex { position, edges } => {
                self.nodes.push(*position);
                self.vertices_added += 1;
                let vertex = self.nodes.len() - 1;
                route_edges_through_vertex(
                    &mut self.edges,
                    &mut self.ledger,
                    &self.nodes,
                    vertex,
                    position,
                    edges,
                )
            }
            Augmentation::ExistingVertex { vertex, edges } => {
                let Some(&position) = self.nodes.get(*vertex) else {
                    trace!(vertex, "existing vertex out of range, skipping");
                    return 0;
                };
                route_edges_through_vertex(
                    &mut self.edges,
                    &mut self.ledger,
                    &self.nodes,
                    *vertex,
                    &position,
                    edges,
                )
            }
        }
    }

    /// Applies every instruction in order and returns the total split count.
    pub fn apply_all(&mut self, augmentations: &[Augmentation]) -> usize {
        augmentations.iter().map(|a| self.apply(a)).sum()
    }

    /// Current node list.
    #[must_use]
    pub fn nodes(&self) -> &[Point2] {
        &self.nodes
    }

    /// Current live edge set.
    #[must_use]
    pub fn edges(&self) -> &EdgeSet {
        &self.edges
    }

    /// Current split ledger.
    #[must_use]
    pub fn ledger(&self) -> &SplitLedger {
        &self.ledger
    }

    /// Number of vertices appended so far.
    #[must_use]
    pub fn vertices_added(&self) -> usize {
        self.vertices_added
    }

    /// Consumes the pass, returning the nodes, live edges in order and ledger.
    #[must_use]
    pub fn finish(self) -> (Vec<Point2>, Vec<EdgeKey>, SplitLedger) {
        let edges = self.edges.iter().collect();
        (self.nodes, edges, self.ledger)
    }
}
