use super::{Point2, TOLERANCE};

/// Bounded segment-segment intersection in 2D.
///
/// Returns `(intersection_point, t, u)` where `t` and `u` are in `[0, 1]`.
/// Endpoint touches are included and reported at the endpoint's exact
/// coordinate. Parallel and collinear segments return `None`.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<(Point2, f64, f64)> {
    let da = a1 - a0;
    let db = b1 - b0;

    let cross = da.x * db.y - da.y * db.x;
    if cross.abs() < TOLERANCE {
        return None;
    }

    let d = b0 - a0;
    let t = (d.x * db.y - d.y * db.x) / cross;
    let u = (d.x * da.y - d.y * da.x) / cross;

    // Use a small epsilon to include endpoints.
    let eps = TOLERANCE;
    if t < -eps || t > 1.0 + eps || u < -eps || u > 1.0 + eps {
        return None;
    }

    // Snap endpoint touches to the endpoint itself: shared endpoints first,
    // then parameters within `eps` of either end.
    let (t, u) = (t.clamp(0.0, 1.0), u.clamp(0.0, 1.0));
    let pt = if a0 == b0 || a0 == b1 || t <= eps {
        *a0
    } else if a1 == b0 || a1 == b1 || t >= 1.0 - eps {
        *a1
    } else if u <= eps {
        *b0
    } else if u >= 1.0 - eps {
        *b1
    } else {
        a0 + da * t
    };
    Some((pt, t, u))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    #[test]
    fn segment_segment_crossing() {
        let (pt, t, u) = segment_segment_intersect_2d(
            &p(0.0, 0.0),
            &p(2.0, 2.0),
            &p(0.0, 2.0),
            &p(2.0, 0.0),
        )
        .unwrap();
        assert_abs_diff_eq!(pt.x, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pt.y, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(t, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(u, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn segment_segment_no_crossing() {
        let r =
            segment_segment_intersect_2d(&p(0.0, 0.0), &p(1.0, 0.0), &p(2.0, -1.0), &p(2.0, 1.0));
        assert!(r.is_none());
    }

    #[test]
    fn segment_segment_parallel_returns_none() {
        let r =
            segment_segment_intersect_2d(&p(0.0, 0.0), &p(2.0, 0.0), &p(0.0, 1.0), &p(2.0, 1.0));
        assert!(r.is_none());
    }

    #[test]
    fn segment_segment_collinear_returns_none() {
        let r =
            segment_segment_intersect_2d(&p(0.0, 0.0), &p(3.0, 0.0), &p(1.0, 0.0), &p(2.0, 0.0));
        assert!(r.is_none());
    }

    #[test]
    fn shared_endpoint_is_reported_exactly() {
        let (pt, t, u) = segment_segment_intersect_2d(
            &p(0.0, 0.0),
            &p(1.0, 0.3),
            &p(1.0, 0.3),
            &p(1.7, 2.9),
        )
        .unwrap();
        assert_eq!(pt, p(1.0, 0.3));
        assert_abs_diff_eq!(t, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(u, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn shared_end_nodes_snap_to_the_node() {
        // Both segments end at the same point; parameters land a few ulps
        // off 1.0 for some of these coordinates.
        for k in 0..200 {
            let k = f64::from(k);
            let a0 = p(0.1 * k + 0.3, 1.7 - 0.37 * k);
            let end = p(7.3 + 0.01 * k, 5.21 + 0.013 * k);
            let b0 = p(13.9 - 0.07 * k, 0.45 * k - 3.1);
            if let Some((pt, _, _)) = segment_segment_intersect_2d(&a0, &end, &b0, &end) {
                assert_eq!(pt, end, "k={k}");
            }
        }
    }

    #[test]
    fn t_junction_is_reported() {
        // b0 lies on the interior of segment a.
        let (pt, t, u) = segment_segment_intersect_2d(
            &p(0.0, 0.0),
            &p(4.0, 0.0),
            &p(1.0, 0.0),
            &p(1.0, 3.0),
        )
        .unwrap();
        assert_eq!(pt, p(1.0, 0.0));
        assert_abs_diff_eq!(t, 0.25, epsilon = 1e-12);
        assert_abs_diff_eq!(u, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn inexact_t_junction_snaps_to_touching_node() {
        // 1.1 is not exactly a third of 3.3 in binary, so u is a few ulps off 0.
        let node = p(1.0, 1.1);
        let (pt, _, _) =
            segment_segment_intersect_2d(&p(0.0, 0.0), &p(3.0, 3.3), &node, &p(2.0, 0.0))
                .unwrap();
        assert_eq!(pt, node);
    }
}
