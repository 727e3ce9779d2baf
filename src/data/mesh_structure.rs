//! `MeshStructure`: the immutable geometric record of a structured 2D mesh.
//!
//! A mesh has `nx x ny` interior cells padded by one ghost layer. For
//! rectangular meshes every per-axis quantity is a 1D sequence:
//!
//! | field          | x length | y length |
//! |----------------|----------|----------|
//! | `cell_size`    | `nx + 2` | `ny + 2` |
//! | `cell_centers` | `nx`     | `ny`     |
//! | `face_centers` | `nx + 1` | `ny + 1` |
//!
//! Tilted meshes replace each sequence by a [`Field2D`] whose rows follow the
//! x index and columns the y index: `face_centers` holds the `(nx+1) x (ny+1)`
//! vertex coordinates, `cell_centers` the `nx x ny` cell centroids and
//! `cell_size` the `(nx+2) x (ny+2)` padded mid-line lengths.
//!
//! Fields are private; consumers read them through accessors and cannot
//! mutate a built mesh.

use crate::data::field::Field2D;
use crate::debug_invariants::DebugInvariants;
use crate::geometry::Point2;
use crate::geometry::metrics::{approx_eq, mean2, signed_quad_area};
use crate::mesh_error::{MeshError, invalid_argument};
use crate::topology::ghost::{ghost_corner_indices, padded_shape};
use itertools::Itertools;
use std::fmt;

/// Coordinate direction of a structured mesh.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
        }
    }
}

/// One quantity along one axis: a 1D sequence for rectangular meshes or a
/// 2D field for tilted meshes.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisValues {
    Line(Vec<f64>),
    Field(Field2D),
}

impl AxisValues {
    /// The 1D sequence, if this is a rectangular-mesh quantity.
    pub fn as_line(&self) -> Option<&[f64]> {
        match self {
            AxisValues::Line(v) => Some(v),
            AxisValues::Field(_) => None,
        }
    }

    /// The 2D field, if this is a tilted-mesh quantity.
    pub fn as_field(&self) -> Option<&Field2D> {
        match self {
            AxisValues::Line(_) => None,
            AxisValues::Field(f) => Some(f),
        }
    }

    /// Total number of stored values.
    pub fn len(&self) -> usize {
        match self {
            AxisValues::Line(v) => v.len(),
            AxisValues::Field(f) => f.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn values(&self) -> &[f64] {
        match self {
            AxisValues::Line(v) => v,
            AxisValues::Field(f) => f.as_slice(),
        }
    }
}

/// A pair of per-axis values.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct AxisPair<T> {
    pub x: T,
    pub y: T,
}

impl<T> AxisPair<T> {
    /// Value for `axis`.
    #[inline]
    pub fn get(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }
}

/// Sizes, centers and faces of one rectangular axis.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct AxisLayout {
    pub sizes: Vec<f64>,
    pub centers: Vec<f64>,
    pub faces: Vec<f64>,
}

impl AxisLayout {
    #[inline]
    fn cells(&self) -> usize {
        self.centers.len()
    }
}

/// Geometric description of a structured 2D finite-volume mesh.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct MeshStructure {
    dimensions: usize,
    number_of_cells: [usize; 2],
    cell_size: AxisPair<AxisValues>,
    cell_centers: AxisPair<AxisValues>,
    face_centers: AxisPair<AxisValues>,
    ghost_cell_indices: [usize; 4],
}

static_assertions::assert_impl_all!(MeshStructure: Send, Sync);

impl MeshStructure {
    pub(crate) fn rectilinear(x: AxisLayout, y: AxisLayout) -> Self {
        let (nx, ny) = (x.cells(), y.cells());
        Self {
            dimensions: 2,
            number_of_cells: [nx, ny],
            cell_size: AxisPair {
                x: AxisValues::Line(x.sizes),
                y: AxisValues::Line(y.sizes),
            },
            cell_centers: AxisPair {
                x: AxisValues::Line(x.centers),
                y: AxisValues::Line(y.centers),
            },
            face_centers: AxisPair {
                x: AxisValues::Line(x.faces),
                y: AxisValues::Line(y.faces),
            },
            ghost_cell_indices: ghost_corner_indices(nx, ny),
        }
    }

    pub(crate) fn curvilinear(
        number_of_cells: [usize; 2],
        cell_size: AxisPair<Field2D>,
        cell_centers: AxisPair<Field2D>,
        face_centers: AxisPair<Field2D>,
    ) -> Self {
        let [nx, ny] = number_of_cells;
        let wrap = |p: AxisPair<Field2D>| AxisPair {
            x: AxisValues::Field(p.x),
            y: AxisValues::Field(p.y),
        };
        Self {
            dimensions: 2,
            number_of_cells,
            cell_size: wrap(cell_size),
            cell_centers: wrap(cell_centers),
            face_centers: wrap(face_centers),
            ghost_cell_indices: ghost_corner_indices(nx, ny),
        }
    }

    /// Spatial dimension, always 2.
    #[inline]
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    /// Interior cell counts `[nx, ny]`.
    #[inline]
    pub fn number_of_cells(&self) -> [usize; 2] {
        self.number_of_cells
    }

    /// `nx * ny`.
    #[inline]
    pub fn total_cells(&self) -> usize {
        self.number_of_cells[0] * self.number_of_cells[1]
    }

    /// Shape of the ghost-padded index grid, `(nx + 2, ny + 2)`.
    #[inline]
    pub fn padded_shape(&self) -> (usize, usize) {
        padded_shape(self.number_of_cells[0], self.number_of_cells[1])
    }

    /// Cell widths including one ghost cell per side.
    #[inline]
    pub fn cell_size(&self) -> &AxisPair<AxisValues> {
        &self.cell_size
    }

    /// Interior cell-center coordinates.
    #[inline]
    pub fn cell_centers(&self) -> &AxisPair<AxisValues> {
        &self.cell_centers
    }

    /// Face (interface) coordinates; vertex coordinates for tilted meshes.
    #[inline]
    pub fn face_centers(&self) -> &AxisPair<AxisValues> {
        &self.face_centers
    }

    /// Flat row-major indices of the four corner ghost cells.
    #[inline]
    pub fn ghost_cell_indices(&self) -> [usize; 4] {
        self.ghost_cell_indices
    }

    /// Whether the mesh was built on a tilted quadrilateral.
    #[inline]
    pub fn is_tilted(&self) -> bool {
        matches!(self.face_centers.x, AxisValues::Field(_))
    }

    /// Grid vertex `(i, j)`, `i <= nx`, `j <= ny`.
    pub fn vertex(&self, i: usize, j: usize) -> Option<Point2> {
        pick(&self.face_centers, i, j)
    }

    /// Center of interior cell `(i, j)`, `i < nx`, `j < ny`.
    pub fn cell_center(&self, i: usize, j: usize) -> Option<Point2> {
        pick(&self.cell_centers, i, j)
    }

    /// Area of every interior cell as an `nx x ny` field.
    pub fn cell_volumes(&self) -> Field2D {
        let [nx, ny] = self.number_of_cells;
        let vertices = (
            self.face_centers.x.as_field(),
            self.face_centers.y.as_field(),
        );
        if let (Some(fx), Some(fy)) = vertices {
            let at = |i: usize, j: usize| [fx[(i, j)], fy[(i, j)]];
            return Field2D::from_fn(nx, ny, |i, j| {
                let quad = [at(i, j), at(i + 1, j), at(i + 1, j + 1), at(i, j + 1)];
                signed_quad_area(quad).abs()
            });
        }
        // padded sizes: interior cell i sits at i + 1
        let (sx, sy) = (self.cell_size.x.values(), self.cell_size.y.values());
        Field2D::from_fn(nx, ny, |i, j| sx[i + 1] * sy[j + 1])
    }

    /// Total area of the interior cells.
    pub fn domain_area(&self) -> f64 {
        self.cell_volumes().sum()
    }
}

fn pick(values: &AxisPair<AxisValues>, i: usize, j: usize) -> Option<Point2> {
    match (&values.x, &values.y) {
        (AxisValues::Line(x), AxisValues::Line(y)) => Some([*x.get(i)?, *y.get(j)?]),
        (AxisValues::Field(x), AxisValues::Field(y)) => Some([x.get(i, j)?, y.get(i, j)?]),
        _ => None,
    }
}

fn expect_len(axis: Axis, expected: usize, found: usize) -> Result<(), MeshError> {
    if expected == found {
        Ok(())
    } else {
        Err(MeshError::ShapeMismatch {
            axis,
            expected,
            found,
        })
    }
}

fn expect_shape(field: &Field2D, rows: usize, cols: usize) -> Result<(), MeshError> {
    let (r, c) = field.shape();
    expect_len(Axis::X, rows, r)?;
    expect_len(Axis::Y, cols, c)
}

fn expect_positive(axis: Axis, what: &str, values: &[f64]) -> Result<(), MeshError> {
    match values.iter().position(|v| !(v.is_finite() && *v > 0.0)) {
        Some(k) => Err(invalid_argument(format!(
            "{what} along {axis} must be positive and finite, entry {k} is {}",
            values[k]
        ))),
        None => Ok(()),
    }
}

fn check_line_axis(
    axis: Axis,
    n: usize,
    sizes: &[f64],
    centers: &[f64],
    faces: &[f64],
) -> Result<(), MeshError> {
    expect_len(axis, n + 2, sizes.len())?;
    expect_len(axis, n, centers.len())?;
    expect_len(axis, n + 1, faces.len())?;
    expect_positive(axis, "cell sizes", sizes)?;

    for (k, (a, b)) in faces.iter().tuple_windows().enumerate() {
        if !(b > a) {
            return Err(invalid_argument(format!(
                "face centers along {axis} must increase, faces {k} and {} are {a} and {b}",
                k + 1
            )));
        }
        let mid = mean2(*a, *b);
        if !approx_eq(centers[k], mid) {
            return Err(invalid_argument(format!(
                "cell center {k} along {axis} is {}, expected midpoint {mid}",
                centers[k]
            )));
        }
        if !approx_eq(sizes[k + 1], b - a) {
            return Err(invalid_argument(format!(
                "cell size {} along {axis} is {}, expected face spacing {}",
                k + 1,
                sizes[k + 1],
                b - a
            )));
        }
    }
    if sizes[0] != sizes[1] || sizes[n + 1] != sizes[n] {
        return Err(invalid_argument(format!(
            "ghost cell sizes along {axis} must mirror the boundary cells"
        )));
    }
    Ok(())
}

fn check_field_layout(
    [nx, ny]: [usize; 2],
    sizes: &AxisPair<&Field2D>,
    centers: &AxisPair<&Field2D>,
    faces: &AxisPair<&Field2D>,
) -> Result<(), MeshError> {
    for axis in [Axis::X, Axis::Y] {
        expect_shape(sizes.get(axis), nx + 2, ny + 2)?;
        expect_shape(centers.get(axis), nx, ny)?;
        expect_shape(faces.get(axis), nx + 1, ny + 1)?;
        expect_positive(axis, "cell sizes", sizes.get(axis).as_slice())?;
    }
    for i in 0..nx {
        for j in 0..ny {
            for axis in [Axis::X, Axis::Y] {
                let f = faces.get(axis);
                let expected = 0.25
                    * [(i, j), (i + 1, j), (i + 1, j + 1), (i, j + 1)]
                        .iter()
                        .map(|&(a, b)| f.get(a, b).unwrap_or(f64::NAN))
                        .sum::<f64>();
                let found = centers.get(axis).get(i, j).unwrap_or(f64::NAN);
                if !approx_eq(found, expected) {
                    return Err(invalid_argument(format!(
                        "cell center ({i}, {j}) along {axis} is {found}, expected centroid {expected}"
                    )));
                }
            }
        }
    }
    Ok(())
}

impl DebugInvariants for MeshStructure {
    fn debug_assert_invariants(&self) {
        crate::debug_invariants!(self.validate_invariants(), "MeshStructure");
    }

    fn validate_invariants(&self) -> Result<(), MeshError> {
        if self.dimensions != 2 {
            return Err(invalid_argument(format!(
                "structured meshes are 2D, found dimension {}",
                self.dimensions
            )));
        }
        let [nx, ny] = self.number_of_cells;
        if nx == 0 || ny == 0 {
            return Err(invalid_argument("nx and ny must be positive"));
        }
        if self.ghost_cell_indices != ghost_corner_indices(nx, ny) {
            return Err(invalid_argument(format!(
                "ghost corner indices {:?} do not match a {}x{} padded grid",
                self.ghost_cell_indices,
                nx + 2,
                ny + 2
            )));
        }

        let all = [
            &self.cell_size.x,
            &self.cell_size.y,
            &self.cell_centers.x,
            &self.cell_centers.y,
            &self.face_centers.x,
            &self.face_centers.y,
        ];
        if let Some(bad) = all.iter().flat_map(|v| v.values()).find(|v| !v.is_finite()) {
            return Err(invalid_argument(format!(
                "mesh coordinates must be finite, found {bad}"
            )));
        }

        match all.map(|v| v.as_line()) {
            [Some(sx), Some(sy), Some(cx), Some(cy), Some(fx), Some(fy)] => {
                check_line_axis(Axis::X, nx, sx, cx, fx)?;
                check_line_axis(Axis::Y, ny, sy, cy, fy)
            }
            _ => match all.map(|v| v.as_field()) {
                [Some(sx), Some(sy), Some(cx), Some(cy), Some(fx), Some(fy)] => check_field_layout(
                    self.number_of_cells,
                    &AxisPair { x: sx, y: sy },
                    &AxisPair { x: cx, y: cy },
                    &AxisPair { x: fx, y: fy },
                ),
                _ => Err(invalid_argument(
                    "mesh mixes 1D axis sequences with 2D coordinate fields",
                )),
            },
        }
    }
}
