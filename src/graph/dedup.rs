use std::collections::HashSet;

use super::EdgeKey;

/// Collapses duplicate and anti-parallel duplicate edges.
///
/// Keeps the first-seen occurrence of each undirected pair in its original
/// direction; any later `(a, b)` or `(b, a)` is dropped. Order of the kept
/// edges is preserved.
#[must_use]
pub fn dedup_edges(edges: &[EdgeKey]) -> Vec<EdgeKey> {
    let mut seen: HashSet<EdgeKey> = HashSet::with_capacity(edges.len());
    let mut kept = Vec::with_capacity(edges.len());

    for &edge in edges {
        if seen.contains(&edge) || seen.contains(&edge.reversed()) {
            continue;
        }
        seen.insert(edge);
        kept.push(edge);
    }

    kept
}
