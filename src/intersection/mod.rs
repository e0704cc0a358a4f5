mod brute;
mod grid;

pub use brute::BruteForce;
pub use grid::UniformGrid;

use std::collections::BTreeSet;

use crate::error::IntersectionError;
use crate::math::distance_2d::within_axis_threshold;
use crate::math::Point2;

/// Hits closer than this on both axes are reported as one intersection.
pub const POINT_MERGE_TOLERANCE: f64 = 1e-9;

/// A line segment carrying caller metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment<M> {
    /// Start point.
    pub from: Point2,
    /// End point.
    pub to: Point2,
    /// Caller metadata, returned untouched with each intersection.
    pub meta: M,
}

impl<M> Segment<M> {
    /// Creates a new segment.
    #[must_use]
    pub fn new(from: Point2, to: Point2, meta: M) -> Self {
        Self { from, to, meta }
    }
}

/// A point where two or more segments meet.
#[derive(Debug, Clone, PartialEq)]
pub struct Intersection<M> {
    /// The intersection point.
    pub point: Point2,
    /// Contributing segments, in input order.
    pub segments: Vec<Segment<M>>,
}

/// Finds the points where a set of segments meet.
///
/// Implementations report proper crossings as well as endpoint touches
/// (shared endpoints, an endpoint lying on another segment). Parallel and
/// collinear pairs are not reported.
pub trait IntersectionEngine {
    /// Returns every intersection among `segments`.
    ///
    /// # Errors
    ///
    /// Returns an error if the segments cannot be processed, e.g. a
    /// coordinate is not finite.
    fn find_intersections<M: Clone>(
        &self,
        segments: &[Segment<M>],
    ) -> Result<Vec<Intersection<M>>, IntersectionError>;
}

/// Selects one of the bundled intersection engines.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EngineStrategy {
    /// Exhaustive pairwise comparison.
    #[default]
    BruteForce,
    /// Uniform-grid spatial index with the given cell size.
    UniformGrid {
        /// Side length of a grid cell.
        cell_size: f64,
    },
}

impl IntersectionEngine for EngineStrategy {
    fn find_intersections<M: Clone>(
        &self,
        segments: &[Segment<M>],
    ) -> Result<Vec<Intersection<M>>, IntersectionError> {
        match *self {
            Self::BruteForce => BruteForce.find_intersections(segments),
            Self::UniformGrid { cell_size } => {
                UniformGrid::new(cell_size).find_intersections(segments)
            }
        }
    }
}

/// Fails with [`IntersectionError::NonFiniteCoordinate`] on the first
/// segment with a NaN or infinite endpoint.
fn check_finite<M>(segments: &[Segment<M>]) -> Result<(), IntersectionError> {
    for (segment, s) in segments.iter().enumerate() {
        let finite = [s.from.x, s.from.y, s.to.x, s.to.y]
            .iter()
            .all(|c| c.is_finite());
        if !finite {
            return Err(IntersectionError::NonFiniteCoordinate { segment });
        }
    }
    Ok(())
}

/// Merges pairwise hits into intersection records.
///
/// `hits` must be ordered by `(i, j)`; records come out in order of their
/// first hit, each listing its segments by ascending index.
fn merge_hits<M: Clone>(
    segments: &[Segment<M>],
    hits: impl IntoIterator<Item = (usize, usize, Point2)>,
) -> Vec<Intersection<M>> {
    let mut groups: Vec<(Point2, BTreeSet<usize>)> = Vec::new();

    for (i, j, point) in hits {
        let existing = groups
            .iter_mut()
            .find(|(p, _)| within_axis_threshold(p, &point, POINT_MERGE_TOLERANCE));
        match existing {
            Some((_, members)) => {
                members.insert(i);
                members.insert(j);
            }
            None => groups.push((point, BTreeSet::from([i, j]))),
        }
    }

    groups
        .into_iter()
        .map(|(point, members)| Intersection {
            point,
            segments: members.into_iter().map(|k| segments[k].clone()).collect(),
        })
        .collect()
}
