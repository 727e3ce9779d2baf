//! Planar measures on points and quadrilaterals.

use crate::geometry::Point2;

/// Relative tolerance used when comparing derived coordinates.
pub(crate) const REL_TOL: f64 = 1e-9;

/// Equality within `REL_TOL`, scaled by the magnitude of the operands.
#[inline]
pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= REL_TOL * a.abs().max(b.abs()).max(1.0)
}

/// Euclidean distance between two points.
#[inline]
pub fn distance(a: Point2, b: Point2) -> f64 {
    (b[0] - a[0]).hypot(b[1] - a[1])
}

/// Mean of two values, finite for any finite inputs.
#[inline]
pub(crate) fn mean2(a: f64, b: f64) -> f64 {
    0.5 * a + 0.5 * b
}

/// Midpoint of a segment.
#[inline]
pub fn midpoint(a: Point2, b: Point2) -> Point2 {
    [mean2(a[0], b[0]), mean2(a[1], b[1])]
}

/// Arithmetic mean of four points.
#[inline]
pub fn centroid4(q: [Point2; 4]) -> Point2 {
    [
        0.25 * (q[0][0] + q[1][0] + q[2][0] + q[3][0]),
        0.25 * (q[0][1] + q[1][1] + q[2][1] + q[3][1]),
    ]
}

/// Signed area of the polygon `q[0] -> q[1] -> q[2] -> q[3]` (shoelace).
///
/// Positive for counter-clockwise traversal, negative for clockwise.
pub fn signed_quad_area(q: [Point2; 4]) -> f64 {
    let mut twice = 0.0;
    for k in 0..4 {
        let a = q[k];
        let b = q[(k + 1) % 4];
        twice += a[0] * b[1] - b[0] * a[1];
    }
    0.5 * twice
}

/// Squared diagonal of the axis-aligned bounding box of `q`.
pub(crate) fn bbox_diag_sq(q: [Point2; 4]) -> f64 {
    let (mut lo, mut hi) = ([f64::INFINITY; 2], [f64::NEG_INFINITY; 2]);
    for p in q {
        for d in 0..2 {
            lo[d] = lo[d].min(p[d]);
            hi[d] = hi[d].max(p[d]);
        }
    }
    (hi[0] - lo[0]).powi(2) + (hi[1] - lo[1]).powi(2)
}

/// `q` translated to `q[0]` and divided by its largest bounding-box extent,
/// so every coordinate lies in `[-1, 1]`.
///
/// `None` when all four points coincide.
pub(crate) fn normalize_quad(q: [Point2; 4]) -> Option<[Point2; 4]> {
    let half_extent = (0..2)
        .map(|d| {
            let (lo, hi) = q.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p[d]), hi.max(p[d]))
            });
            0.5 * hi - 0.5 * lo
        })
        .fold(0.0, f64::max);
    if !(half_extent > 0.0) {
        return None;
    }
    let o = q[0];
    Some(q.map(|p| {
        [
            (0.5 * p[0] - 0.5 * o[0]) / half_extent,
            (0.5 * p[1] - 0.5 * o[1]) / half_extent,
        ]
    }))
}

/// Whether the quadrilateral `q` (either orientation) is strictly convex.
pub fn is_convex(q: [Point2; 4]) -> bool {
    let mut sign = 0.0f64;
    for k in 0..4 {
        let a = q[k];
        let b = q[(k + 1) % 4];
        let c = q[(k + 2) % 4];
        let cross = (b[0] - a[0]) * (c[1] - b[1]) - (b[1] - a[1]) * (c[0] - b[0]);
        if cross == 0.0 {
            return false;
        }
        if sign == 0.0 {
            sign = cross.signum();
        } else if cross.signum() != sign {
            return false;
        }
    }
    true
}
