mod dedup;
mod edge;

pub use dedup::dedup_edges;
pub use edge::EdgeKey;

use crate::math::Point2;

/// A plane graph: node coordinates plus directed edges between node indices.
///
/// A node's identity is its index in `nodes`. Edges may reference indices
/// outside `nodes`; such edges are carried through planarization untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaneGraph {
    /// Node coordinates, indexed by node id.
    pub nodes: Vec<Point2>,
    /// Directed edges as `(from, to)` node indices.
    pub edges: Vec<EdgeKey>,
}

impl PlaneGraph {
    /// Creates a graph from node points and edges.
    #[must_use]
    pub fn new(nodes: Vec<Point2>, edges: Vec<EdgeKey>) -> Self {
        Self { nodes, edges }
    }

    /// Builds a graph from `[x, y]` node pairs and `[from, to]` edge pairs.
    #[must_use]
    pub fn from_coords(nodes: &[[f64; 2]], edges: &[[usize; 2]]) -> Self {
        Self {
            nodes: nodes.iter().map(|&[x, y]| Point2::new(x, y)).collect(),
            edges: edges.iter().map(|&pair| EdgeKey::from(pair)).collect(),
        }
    }

    /// Returns the graph as `[x, y]` node pairs and `[from, to]` edge pairs.
    #[must_use]
    pub fn to_coords(&self) -> (Vec<[f64; 2]>, Vec<[usize; 2]>) {
        (
            self.nodes.iter().map(|p| [p.x, p.y]).collect(),
            self.edges.iter().map(|&e| e.into()).collect(),
        )
    }

    /// Returns the endpoint coordinates of `edge`, or `None` if either
    /// endpoint is out of range.
    #[must_use]
    pub fn endpoints(&self, edge: EdgeKey) -> Option<(Point2, Point2)> {
        resolve_endpoints(&self.nodes, edge)
    }
}

/// Resolves both endpoint coordinates of `edge` against `nodes`.
pub(crate) fn resolve_endpoints(nodes: &[Point2], edge: EdgeKey) -> Option<(Point2, Point2)> {
    Some((*nodes.get(edge.from)?, *nodes.get(edge.to)?))
}
