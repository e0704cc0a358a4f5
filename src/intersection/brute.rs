use crate::error::IntersectionError;
use crate::math::intersect_2d::segment_segment_intersect_2d;

use super::{check_finite, merge_hits, Intersection, IntersectionEngine, Segment};

/// Exhaustive pairwise intersection search, `O(n²)` in the segment count.
#[derive(Debug, Clone, Copy, Default)]
pub struct BruteForce;

impl IntersectionEngine for BruteForce {
    fn find_intersections<M: Clone>(
        &self,
        segments: &[Segment<M>],
    ) -> Result<Vec<Intersection<M>>, IntersectionError> {
        check_finite(segments)?;

        let mut hits = Vec::new();
        for (i, a) in segments.iter().enumerate() {
            for (j, b) in segments.iter().enumerate().skip(i + 1) {
                if let Some((pt, _, _)) =
                    segment_segment_intersect_2d(&a.from, &a.to, &b.from, &b.to)
                {
                    hits.push((i, j, pt));
                }
            }
        }

        Ok(merge_hits(segments, hits))
    }
}
