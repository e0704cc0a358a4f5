use crate::graph::{resolve_endpoints, EdgeKey};
use crate::intersection::Segment;
use crate::math::Point2;

/// Projects edges onto geometric segments tagged with their [`EdgeKey`].
///
/// Edges with an out-of-range endpoint are skipped: they cannot be placed
/// geometrically, so intersection detection never sees them.
#[must_use]
pub fn project_segments(nodes: &[Point2], edges: &[EdgeKey]) -> Vec<Segment<EdgeKey>> {
    edges
        .iter()
        .filter_map(|&edge| {
            let (from, to) = resolve_endpoints(nodes, edge)?;
            Some(Segment::new(from, to, edge))
        })
        .collect()
}
