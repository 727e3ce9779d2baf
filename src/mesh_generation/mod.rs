//! Structured 2D mesh generators.
//!
//! Three explicit construction modes are available, either through the free
//! functions or through [`MeshBuilder2D::build`] with a [`MeshSpec2D`]:
//!
//! - **uniform**: `nx x ny` cells of equal size over `[0, width] x [0, height]`;
//! - **non-uniform**: cells bounded by explicit, strictly increasing face locations;
//! - **tilted**: `nx x ny` cells filling a quadrilateral given by its four corners.
//!
//! # Examples
//! ```rust
//! use fv_mesh::mesh_generation::{MeshBuilder2D, MeshSpec2D, uniform_mesh_2d};
//!
//! let mesh = uniform_mesh_2d(5, 7, 10.0, 20.0)?;
//! assert_eq!(mesh.number_of_cells(), [5, 7]);
//! assert_eq!(
//!     mesh.face_centers().x.as_line().unwrap(),
//!     &[0.0, 2.0, 4.0, 6.0, 8.0, 10.0]
//! );
//!
//! let spec: MeshSpec2D = MeshSpec2D::NonUniform {
//!     face_locations_x: vec![0.0, 1.0, 3.0, 6.0],
//!     face_locations_y: vec![0.0, 1.0],
//!     cells: None,
//! };
//! let mesh = MeshBuilder2D::new().build(&spec)?;
//! assert_eq!(mesh.cell_centers().x.as_line().unwrap(), &[0.5, 2.0, 4.5]);
//! # Ok::<(), fv_mesh::mesh_error::MeshError>(())
//! ```

mod rectilinear;
mod tilted;

use crate::data::mesh_structure::MeshStructure;
use crate::debug_invariants::DebugInvariants;
use crate::geometry::Point2;
use crate::mesh_error::MeshError;

/// Corners of a tilted quadrilateral domain.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct QuadCorners {
    pub bottom_left: Point2,
    pub top_left: Point2,
    pub top_right: Point2,
    pub bottom_right: Point2,
}

impl QuadCorners {
    /// Corners from points ordered bottom-left, top-left, top-right, bottom-right.
    pub fn new(p1: Point2, p2: Point2, p3: Point2, p4: Point2) -> Self {
        Self {
            bottom_left: p1,
            top_left: p2,
            top_right: p3,
            bottom_right: p4,
        }
    }

    /// `[bottom_left, top_left, top_right, bottom_right]`.
    pub fn as_array(&self) -> [Point2; 4] {
        [
            self.bottom_left,
            self.top_left,
            self.top_right,
            self.bottom_right,
        ]
    }
}

/// Description of a mesh to build, tagged by construction mode.
///
/// In configuration files the mode is the `mode` key:
///
/// ```json
/// { "mode": "uniform", "nx": 5, "ny": 7, "width": 10.0, "height": 20.0 }
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum MeshSpec2D {
    Uniform {
        nx: usize,
        ny: usize,
        width: f64,
        height: f64,
    },
    NonUniform {
        face_locations_x: Vec<f64>,
        face_locations_y: Vec<f64>,
        /// Declared `[nx, ny]`; must agree with the face counts when given.
        #[serde(default)]
        cells: Option<[usize; 2]>,
    },
    Tilted {
        nx: usize,
        ny: usize,
        corners: QuadCorners,
    },
}

impl MeshSpec2D {
    fn mode(&self) -> &'static str {
        match self {
            MeshSpec2D::Uniform { .. } => "uniform",
            MeshSpec2D::NonUniform { .. } => "non_uniform",
            MeshSpec2D::Tilted { .. } => "tilted",
        }
    }
}

/// Tuning knobs for mesh construction.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MeshGen2DOptions {
    /// Tilted domains whose area is at most `area_tolerance` times the squared
    /// bounding-box diagonal are rejected as degenerate.
    pub area_tolerance: f64,
    /// Re-validate every built mesh before returning it.
    pub check_invariants: bool,
}

impl Default for MeshGen2DOptions {
    fn default() -> Self {
        Self {
            area_tolerance: 1e-12,
            check_invariants: true,
        }
    }
}

/// Builds [`MeshStructure`]s from any of the three construction modes.
#[derive(Clone, Copy, Debug, Default)]
pub struct MeshBuilder2D {
    options: MeshGen2DOptions,
}

impl MeshBuilder2D {
    /// Builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: MeshGen2DOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &MeshGen2DOptions {
        &self.options
    }

    /// Build the mesh described by `spec`.
    pub fn build(&self, spec: &MeshSpec2D) -> Result<MeshStructure, MeshError> {
        let mesh = match spec {
            MeshSpec2D::Uniform {
                nx,
                ny,
                width,
                height,
            } => rectilinear::uniform(*nx, *ny, *width, *height)?,
            MeshSpec2D::NonUniform {
                face_locations_x,
                face_locations_y,
                cells,
            } => rectilinear::non_uniform(face_locations_x, face_locations_y, *cells)?,
            MeshSpec2D::Tilted { nx, ny, corners } => {
                tilted::tilted(*nx, *ny, corners, self.options.area_tolerance)?
            }
        };
        if self.options.check_invariants {
            mesh.validate_invariants()?;
        } else {
            mesh.debug_assert_invariants();
        }
        let [nx, ny] = mesh.number_of_cells();
        log::debug!("built {} mesh with {nx}x{ny} cells", spec.mode());
        Ok(mesh)
    }

    /// Uniform `nx x ny` mesh over `[0, width] x [0, height]`.
    pub fn uniform(
        &self,
        nx: usize,
        ny: usize,
        width: f64,
        height: f64,
    ) -> Result<MeshStructure, MeshError> {
        self.build(&MeshSpec2D::Uniform {
            nx,
            ny,
            width,
            height,
        })
    }

    /// Mesh whose faces sit at the given, strictly increasing locations.
    pub fn non_uniform(
        &self,
        face_locations_x: &[f64],
        face_locations_y: &[f64],
    ) -> Result<MeshStructure, MeshError> {
        self.build(&MeshSpec2D::NonUniform {
            face_locations_x: face_locations_x.to_vec(),
            face_locations_y: face_locations_y.to_vec(),
            cells: None,
        })
    }

    /// `nx x ny` mesh on the quadrilateral with the given corners.
    pub fn tilted(
        &self,
        nx: usize,
        ny: usize,
        corners: QuadCorners,
    ) -> Result<MeshStructure, MeshError> {
        self.build(&MeshSpec2D::Tilted { nx, ny, corners })
    }
}

/// Generate a uniform mesh with `nx x ny` cells over `[0, width] x [0, height]`.
pub fn uniform_mesh_2d(
    nx: usize,
    ny: usize,
    width: f64,
    height: f64,
) -> Result<MeshStructure, MeshError> {
    MeshBuilder2D::new().uniform(nx, ny, width, height)
}

/// Generate a non-uniform mesh from face locations along x and y.
pub fn nonuniform_mesh_2d(
    face_locations_x: &[f64],
    face_locations_y: &[f64],
) -> Result<MeshStructure, MeshError> {
    MeshBuilder2D::new().non_uniform(face_locations_x, face_locations_y)
}

/// Generate an `nx x ny` mesh on the quadrilateral `p1..p4`, ordered
/// bottom-left, top-left, top-right, bottom-right.
pub fn tilted_mesh_2d(
    nx: usize,
    ny: usize,
    p1: Point2,
    p2: Point2,
    p3: Point2,
    p4: Point2,
) -> Result<MeshStructure, MeshError> {
    MeshBuilder2D::new().tilted(nx, ny, QuadCorners::new(p1, p2, p3, p4))
}
