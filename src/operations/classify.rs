use std::collections::HashSet;

use crate::graph::EdgeKey;
use crate::intersection::Intersection;
use crate::math::distance_2d::within_axis_threshold;
use crate::math::Point2;

/// An instruction to route the edges of one intersection through a vertex.
#[derive(Debug, Clone, PartialEq)]
pub enum Augmentation {
    /// Append a vertex at `position` and route `edges` through it.
    NewVertex {
        /// Where the new vertex goes.
        position: Point2,
        /// Original edges crossing at `position`.
        edges: Vec<EdgeKey>,
    },
    /// Route `edges` through the existing node `vertex`.
    ExistingVertex {
        /// Index of the matched node.
        vertex: usize,
        /// Original edges passing the node, minus those already incident to it.
        edges: Vec<EdgeKey>,
    },
}

impl Augmentation {
    /// Returns the edges this instruction routes.
    #[must_use]
    pub fn edges(&self) -> &[EdgeKey] {
        match self {
            Self::NewVertex { edges, .. } | Self::ExistingVertex { edges, .. } => edges,
        }
    }

    fn dedup_key(&self) -> AugmentationKey {
        let mut edges = self.edges().to_vec();
        edges.sort_unstable();
        match self {
            // Adding 0.0 folds -0.0 into 0.0 before taking the bit pattern.
            Self::NewVertex { position, .. } => AugmentationKey::New {
                x: (position.x + 0.0).to_bits(),
                y: (position.y + 0.0).to_bits(),
                edges,
            },
            Self::ExistingVertex { vertex, .. } => AugmentationKey::Existing {
                vertex: *vertex,
                edges,
            },
        }
    }
}

/// Structural identity of an [`Augmentation`]: variant, target and sorted edges.
#[derive(Debug, PartialEq, Eq, Hash)]
enum AugmentationKey {
    New { x: u64, y: u64, edges: Vec<EdgeKey> },
    Existing { vertex: usize, edges: Vec<EdgeKey> },
}

/// Returns the index of the first node within `threshold` of `point` on
/// both axes.
///
/// The lowest index wins even when a later node is closer.
#[must_use]
pub fn find_matching_vertex(nodes: &[Point2], point: &Point2, threshold: f64) -> Option<usize> {
    nodes
        .iter()
        .position(|node| within_axis_threshold(node, point, threshold))
}

/// Turns one intersection into an augmentation instruction.
///
/// Returns `None` when no edge is left to route, e.g. every edge meeting at
/// an existing vertex already ends there.
#[must_use]
pub fn classify_intersection(
    nodes: &[Point2],
    intersection: &Intersection<EdgeKey>,
    threshold: f64,
) -> Option<Augmentation> {
    let mut seen = HashSet::new();
    let edges = intersection
        .segments
        .iter()
        .map(|s| s.meta)
        .filter(|e| seen.insert(*e));

    let augmentation = match find_matching_vertex(nodes, &intersection.point, threshold) {
        Some(vertex) => Augmentation::ExistingVertex {
            vertex,
            edges: edges.filter(|e| !e.is_incident_to(vertex)).collect(),
        },
        None => Augmentation::NewVertex {
            position: intersection.point,
            edges: edges.collect(),
        },
    };

    (!augmentation.edges().is_empty()).then_some(augmentation)
}

/// Removes structurally equal instructions, keeping the first occurrence.
#[must_use]
pub fn dedup_augmentations(augmentations: Vec<Augmentation>) -> Vec<Augmentation> {
    let mut seen = HashSet::with_capacity(augmentations.len());
    augmentations
        .into_iter()
        .filter(|a| seen.insert(a.dedup_key()))
        .collect()
}

/// Classifies every intersection and returns the deduplicated instructions
/// in intersection order.
#[must_use]
pub fn classify_intersections(
    nodes: &[Point2],
    intersections: &[Intersection<EdgeKey>],
    threshold: f64,
) -> Vec<Augmentation> {
    let classified = intersections
        .iter()
        .filter_map(|x| classify_intersection(nodes, x, threshold))
        .collect();
    dedup_augmentations(classified)
}
