/// Ordered-pair identity of a directed edge: `(from, to)` node indices.
///
/// Two keys with swapped endpoints are distinct identities; see
/// [`dedup_edges`](super::dedup_edges) for collapsing them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey {
    /// Source node index.
    pub from: usize,
    /// Destination node index.
    pub to: usize,
}

impl EdgeKey {
    /// Creates a new edge key.
    #[must_use]
    pub const fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Returns the key with its endpoints swapped.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }

    /// Returns `true` if `vertex` is one of this edge's endpoints.
    #[must_use]
    pub const fn is_incident_to(self, vertex: usize) -> bool {
        self.from == vertex || self.to == vertex
    }
}

impl From<[usize; 2]> for EdgeKey {
    fn from([from, to]: [usize; 2]) -> Self {
        Self { from, to }
    }
}

impl From<(usize, usize)> for EdgeKey {
    fn from((from, to): (usize, usize)) -> Self {
        Self { from, to }
    }
}

impl From<EdgeKey> for [usize; 2] {
    fn from(key: EdgeKey) -> Self {
        [key.from, key.to]
    }
}
