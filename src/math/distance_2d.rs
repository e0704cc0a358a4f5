use super::Point2;

/// Returns the minimum distance from `point` to the line segment `start`→`end`.
///
/// The projection parameter of `point` onto the segment is clamped to `[0, 1]`
/// before measuring, so points beyond either end are measured to that end.
#[must_use]
pub fn point_to_segment_dist(point: &Point2, start: &Point2, end: &Point2) -> f64 {
    let dir = end - start;
    let len_sq = dir.norm_squared();

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        return (point - start).norm();
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let param = ((point - start).dot(&dir) / len_sq).clamp(0.0, 1.0);
    let closest = start + dir * param;

    (point - closest).norm()
}

/// Returns `true` if `p` and `q` differ by at most `threshold` on each axis.
///
/// This is a Chebyshev (box) bound, not a Euclidean one.
#[must_use]
pub fn within_axis_threshold(p: &Point2, q: &Point2, threshold: f64) -> bool {
    (p.x - q.x).abs() <= threshold && (p.y - q.y).abs() <= threshold
}
