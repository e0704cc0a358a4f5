use std::collections::{BTreeSet, HashMap};

use crate::error::IntersectionError;
use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::TOLERANCE;

use super::{check_finite, merge_hits, Intersection, IntersectionEngine, Segment};

/// Segments covering more cells than this skip bucketing and are tested
/// against every other segment.
const MAX_CELLS_PER_SEGMENT: i64 = 4096;

/// Intersection search accelerated by a uniform grid.
///
/// Each segment is bucketed into every cell its bounding box overlaps, and
/// only pairs sharing a cell are tested. Output is identical to
/// [`BruteForce`](super::BruteForce).
#[derive(Debug, Clone, Copy)]
pub struct UniformGrid {
    cell_size: f64,
}

impl UniformGrid {
    /// Creates a grid engine with the given cell side length.
    #[must_use]
    pub fn new(cell_size: f64) -> Self {
        Self { cell_size }
    }

    #[allow(clippy::cast_possible_truncation)]
    fn cell_ix(self, v: f64) -> i64 {
        (v / self.cell_size).floor() as i64
    }

    /// Collects every candidate pair `(i, j)` with `i < j`, ordered.
    fn candidate_pairs<M>(self, segments: &[Segment<M>]) -> BTreeSet<(usize, usize)> {
        let mut buckets: HashMap<(i64, i64), Vec<usize>> = HashMap::new();
        let mut oversized = Vec::new();

        for (i, s) in segments.iter().enumerate() {
            let ix0 = self.cell_ix(s.from.x.min(s.to.x) - TOLERANCE);
            let ix1 = self.cell_ix(s.from.x.max(s.to.x) + TOLERANCE);
            let iy0 = self.cell_ix(s.from.y.min(s.to.y) - TOLERANCE);
            let iy1 = self.cell_ix(s.from.y.max(s.to.y) + TOLERANCE);

            let cells = ix1
                .saturating_sub(ix0)
                .saturating_add(1)
                .saturating_mul(iy1.saturating_sub(iy0).saturating_add(1));
            if cells > MAX_CELLS_PER_SEGMENT {
                oversized.push(i);
                continue;
            }
            for ix in ix0..=ix1 {
                for iy in iy0..=iy1 {
                    buckets.entry((ix, iy)).or_default().push(i);
                }
            }
        }

        let mut pairs = BTreeSet::new();
        for list in buckets.values() {
            for (a, &i) in list.iter().enumerate() {
                for &j in &list[a + 1..] {
                    pairs.insert((i.min(j), i.max(j)));
                }
            }
        }
        for &i in &oversized {
            for j in (0..segments.len()).filter(|&j| j != i) {
                pairs.insert((i.min(j), i.max(j)));
            }
        }
        pairs
    }
}

impl IntersectionEngine for UniformGrid {
    fn find_intersections<M: Clone>(
        &self,
        segments: &[Segment<M>],
    ) -> Result<Vec<Intersection<M>>, IntersectionError> {
        if !(self.cell_size.is_finite() && self.cell_size > 0.0) {
            return Err(IntersectionError::InvalidCellSize(self.cell_size));
        }
        check_finite(segments)?;

        let hits = self
            .candidate_pairs(segments)
            .into_iter()
            .filter_map(|(i, j)| {
                let (a, b) = (&segments[i], &segments[j]);
                segment_segment_intersect_2d(&a.from, &a.to, &b.from, &b.to)
                    .map(|(pt, _, _)| (i, j, pt))
            });

        Ok(merge_hits(segments, hits))
    }
}
