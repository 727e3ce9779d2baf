//! Linear and transfinite interpolation used to lay out structured grids.
//!
//! # Examples
//! ```rust
//! use fv_mesh::geometry::interpolate::{linspace, linspace_points};
//!
//! assert_eq!(linspace(0.0, 1.0, 5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
//! let edge = linspace_points([0.0, 0.0], [2.0, 4.0], 3);
//! assert_eq!(edge, vec![[0.0, 0.0], [1.0, 2.0], [2.0, 4.0]]);
//! ```

use crate::data::mesh_structure::Axis;
use crate::geometry::Point2;
use crate::mesh_error::{MeshError, invalid_argument};

/// `n` evenly spaced values from `start` to `end` inclusive.
///
/// The first and last entries are exactly `start` and `end`. `n == 1` yields
/// `[start]`; `n == 0` yields an empty vector.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let last = (n - 1) as f64;
            (0..n)
                .map(|k| {
                    let t = k as f64 / last;
                    start * (1.0 - t) + end * t
                })
                .collect()
        }
    }
}

/// `n` evenly spaced points on the segment `start -> end` inclusive.
pub fn linspace_points(start: Point2, end: Point2, n: usize) -> Vec<Point2> {
    let xs = linspace(start[0], end[0], n);
    let ys = linspace(start[1], end[1], n);
    xs.into_iter().zip(ys).map(|(x, y)| [x, y]).collect()
}

/// Boundary curves of a structured quadrilateral patch, each sampled at the
/// grid vertices.
///
/// `left`/`right` run bottom to top (`ny + 1` vertices); `bottom`/`top` run
/// left to right (`nx + 1` vertices).
#[derive(Clone, Debug)]
pub struct BoundaryCurves {
    left: Vec<Point2>,
    right: Vec<Point2>,
    bottom: Vec<Point2>,
    top: Vec<Point2>,
}

impl BoundaryCurves {
    /// Bundle four sampled curves, checking that opposite curves have the same
    /// number of vertices (at least two) and that shared corners coincide.
    pub fn try_new(
        left: Vec<Point2>,
        right: Vec<Point2>,
        bottom: Vec<Point2>,
        top: Vec<Point2>,
    ) -> Result<Self, MeshError> {
        for (axis, a, b) in [(Axis::Y, &left, &right), (Axis::X, &bottom, &top)] {
            if a.len() < 2 {
                return Err(invalid_argument(format!(
                    "boundary curves along {axis} need at least 2 vertices, got {}",
                    a.len()
                )));
            }
            if a.len() != b.len() {
                return Err(MeshError::ShapeMismatch {
                    axis,
                    expected: a.len(),
                    found: b.len(),
                });
            }
        }
        let corners = [
            (left.first(), bottom.first()),
            (left.last(), top.first()),
            (right.last(), top.last()),
            (right.first(), bottom.last()),
        ];
        if corners.iter().any(|(a, b)| a != b) {
            return Err(invalid_argument("boundary curves must meet at shared corners"));
        }
        Ok(Self {
            left,
            right,
            bottom,
            top,
        })
    }

    /// Cells along x.
    #[inline]
    pub fn nx(&self) -> usize {
        self.bottom.len() - 1
    }

    /// Cells along y.
    #[inline]
    pub fn ny(&self) -> usize {
        self.left.len() - 1
    }

    /// Vertex `(i, j)` of the transfinite (Coons) blend of the four curves,
    /// or `None` outside `0..=nx x 0..=ny`.
    ///
    /// Boundary vertices are returned as sampled; interior vertices are
    /// `(1-s) L(t) + s R(t) + (1-t) B(s) + t T(s)` minus the bilinear corner
    /// term, with `s = i / nx` and `t = j / ny`.
    pub fn vertex(&self, i: usize, j: usize) -> Option<Point2> {
        (i <= self.nx() && j <= self.ny()).then(|| self.blend(i, j))
    }

    /// All vertices, indexed `[i][j]`.
    pub fn vertices(&self) -> Vec<Vec<Point2>> {
        (0..=self.nx())
            .map(|i| (0..=self.ny()).map(|j| self.blend(i, j)).collect())
            .collect()
    }

    fn blend(&self, i: usize, j: usize) -> Point2 {
        let (nx, ny) = (self.nx(), self.ny());
        if i == 0 {
            return self.left[j];
        }
        if i == nx {
            return self.right[j];
        }
        if j == 0 {
            return self.bottom[i];
        }
        if j == ny {
            return self.top[i];
        }

        let s = i as f64 / nx as f64;
        let t = j as f64 / ny as f64;
        let p1 = self.left[0];
        let p2 = self.left[ny];
        let p3 = self.right[ny];
        let p4 = self.right[0];

        let mut out = [0.0; 2];
        for (d, v) in out.iter_mut().enumerate() {
            let ruled = (1.0 - s) * self.left[j][d]
                + s * self.right[j][d]
                + (1.0 - t) * self.bottom[i][d]
                + t * self.top[i][d];
            let corners = (1.0 - s) * (1.0 - t) * p1[d]
                + (1.0 - s) * t * p2[d]
                + s * t * p3[d]
                + s * (1.0 - t) * p4[d];
            *v = ruled - corners;
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Point2, b: Point2) -> bool {
        (a[0] - b[0]).abs() < 1e-12 && (a[1] - b[1]).abs() < 1e-12
    }

    #[test]
    fn linspace_hits_endpoints_exactly() {
        let v = linspace(0.1, 0.7, 7);
        assert_eq!(v.len(), 7);
        assert_eq!(v[0], 0.1);
        assert_eq!(v[6], 0.7);
    }

    #[test]
    fn linspace_small_counts() {
        assert!(linspace(1.0, 2.0, 0).is_empty());
        assert_eq!(linspace(1.0, 2.0, 1), vec![1.0]);
        assert_eq!(linspace(1.0, 2.0, 2), vec![1.0, 2.0]);
    }

    #[test]
    fn coons_blend_of_parallelogram_is_affine() {
        // p1=(0,0) p2=(1,2) p3=(4,2) p4=(3,0)
        let (nx, ny) = (3, 2);
        let curves = BoundaryCurves::try_new(
            linspace_points([0.0, 0.0], [1.0, 2.0], ny + 1),
            linspace_points([3.0, 0.0], [4.0, 2.0], ny + 1),
            linspace_points([0.0, 0.0], [3.0, 0.0], nx + 1),
            linspace_points([1.0, 2.0], [4.0, 2.0], nx + 1),
        )
        .unwrap();
        assert_eq!(curves.nx(), 3);
        assert_eq!(curves.ny(), 2);
        for i in 0..=nx {
            for j in 0..=ny {
                let expected = [i as f64 + 0.5 * j as f64, j as f64];
                assert!(
                    close(curves.vertex(i, j).unwrap(), expected),
                    "vertex ({i},{j}) = {:?}, expected {:?}",
                    curves.vertex(i, j),
                    expected
                );
            }
        }
        assert_eq!(curves.vertices().len(), nx + 1);
        assert_eq!(curves.vertex(nx + 1, 1), None);
        assert_eq!(curves.vertex(1, ny + 1), None);
    }

    #[test]
    fn boundary_curves_reject_inconsistent_samples() {
        let left = linspace_points([0.0, 0.0], [0.0, 1.0], 3);
        let right = linspace_points([1.0, 0.0], [1.0, 1.0], 3);
        let bottom = linspace_points([0.0, 0.0], [1.0, 0.0], 3);
        let top = linspace_points([0.0, 1.0], [1.0, 1.0], 3);

        let short_top = linspace_points([0.0, 1.0], [1.0, 1.0], 4);
        assert_eq!(
            BoundaryCurves::try_new(left.clone(), right.clone(), bottom.clone(), short_top)
                .unwrap_err(),
            MeshError::ShapeMismatch {
                axis: Axis::X,
                expected: 3,
                found: 4
            }
        );
        assert!(matches!(
            BoundaryCurves::try_new(vec![[0.0, 0.0]], right.clone(), bottom.clone(), top.clone()),
            Err(MeshError::InvalidArgument(_))
        ));
        let shifted = linspace_points([0.0, 1.5], [1.0, 1.5], 3);
        assert!(matches!(
            BoundaryCurves::try_new(left.clone(), right.clone(), bottom.clone(), shifted),
            Err(MeshError::InvalidArgument(_))
        ));

        let curves = BoundaryCurves::try_new(left, right, bottom, top).unwrap();
        assert_eq!(curves.vertex(3, 1), None);
        assert_eq!(curves.vertex(1, 1), Some([0.5, 0.5]));
    }
}
