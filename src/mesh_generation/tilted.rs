//! Structured meshes on a tilted quadrilateral.
//!
//! Boundary vertices are spaced evenly along the four edges and the interior
//! is filled by transfinite interpolation, so straight-edged quadrilaterals
//! give a bilinear grid.

use crate::data::field::Field2D;
use crate::data::mesh_structure::{AxisPair, MeshStructure};
use crate::geometry::Point2;
use crate::geometry::interpolate::{BoundaryCurves, linspace_points};
use crate::geometry::metrics::{
    bbox_diag_sq, centroid4, distance, is_convex, midpoint, normalize_quad, signed_quad_area,
};
use crate::mesh_error::{MeshError, invalid_argument};
use crate::mesh_generation::QuadCorners;
use crate::topology::ghost::{is_ghost, padded_shape};

fn check_corners(corners: &QuadCorners, area_tolerance: f64) -> Result<(), MeshError> {
    let quad = corners.as_array();
    if let Some(p) = quad.iter().find(|p| !(p[0].is_finite() && p[1].is_finite())) {
        return Err(invalid_argument(format!(
            "corner points must be finite, got {p:?}"
        )));
    }

    // compare in unit-extent coordinates so tiny and huge domains behave alike
    let Some(unit) = normalize_quad(quad) else {
        return Err(invalid_argument("corner points are coincident"));
    };
    let area = signed_quad_area(unit);
    if area.abs() <= area_tolerance * bbox_diag_sq(unit) {
        return Err(invalid_argument(format!(
            "corner points are collinear or coincident (relative area {area})"
        )));
    }
    // bottom-left, top-left, top-right, bottom-right is a clockwise walk
    if area > 0.0 {
        log::warn!(
            "tilted mesh corners are ordered counter-clockwise; the grid will be mirrored"
        );
    }
    if !is_convex(unit) {
        log::warn!("tilted mesh domain is not convex; interior cells may fold");
    }
    Ok(())
}

fn boundary_curves(nx: usize, ny: usize, c: &QuadCorners) -> Result<BoundaryCurves, MeshError> {
    BoundaryCurves::try_new(
        linspace_points(c.bottom_left, c.top_left, ny + 1),
        linspace_points(c.bottom_right, c.top_right, ny + 1),
        linspace_points(c.bottom_left, c.bottom_right, nx + 1),
        linspace_points(c.top_left, c.top_right, nx + 1),
    )
}

/// Cell `(i, j)` vertices in counter-clockwise index order.
fn cell_quad(nodes: &[Vec<Point2>], i: usize, j: usize) -> [Point2; 4] {
    [
        nodes[i][j],
        nodes[i + 1][j],
        nodes[i + 1][j + 1],
        nodes[i][j + 1],
    ]
}

pub(crate) fn tilted(
    nx: usize,
    ny: usize,
    corners: &QuadCorners,
    area_tolerance: f64,
) -> Result<MeshStructure, MeshError> {
    if nx == 0 || ny == 0 {
        return Err(invalid_argument("nx and ny must be positive"));
    }
    check_corners(corners, area_tolerance)?;

    let nodes = boundary_curves(nx, ny, corners)?.vertices();

    let face_centers = AxisPair {
        x: Field2D::from_fn(nx + 1, ny + 1, |i, j| nodes[i][j][0]),
        y: Field2D::from_fn(nx + 1, ny + 1, |i, j| nodes[i][j][1]),
    };

    let centers: Vec<Vec<Point2>> = (0..nx)
        .map(|i| (0..ny).map(|j| centroid4(cell_quad(&nodes, i, j))).collect())
        .collect();
    let cell_centers = AxisPair {
        x: Field2D::from_fn(nx, ny, |i, j| centers[i][j][0]),
        y: Field2D::from_fn(nx, ny, |i, j| centers[i][j][1]),
    };

    // Mid-line lengths: x joins the left and right edge midpoints, y the bottom and top.
    let widths: Vec<Vec<[f64; 2]>> = (0..nx)
        .map(|i| {
            (0..ny)
                .map(|j| {
                    let [a, b, c, d] = cell_quad(&nodes, i, j);
                    [
                        distance(midpoint(a, d), midpoint(b, c)),
                        distance(midpoint(a, b), midpoint(d, c)),
                    ]
                })
                .collect()
        })
        .collect();
    let (rows, cols) = padded_shape(nx, ny);
    let padded = |axis: usize| {
        Field2D::from_fn(rows, cols, |pi, pj| {
            // ghost cells take the size of the nearest interior cell
            let (i, j) = if is_ghost(pi, pj, nx, ny) {
                (pi.clamp(1, nx) - 1, pj.clamp(1, ny) - 1)
            } else {
                (pi - 1, pj - 1)
            };
            widths[i][j][axis]
        })
    };
    let cell_size = AxisPair {
        x: padded(0),
        y: padded(1),
    };

    Ok(MeshStructure::curvilinear(
        [nx, ny],
        cell_size,
        cell_centers,
        face_centers,
    ))
}
