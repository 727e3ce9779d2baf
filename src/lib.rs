#![cfg_attr(docsrs, feature(doc_cfg))]
//! # fv-mesh
//!
//! fv-mesh builds the geometry of structured two-dimensional grids for
//! finite-volume codes. A [`MeshStructure`] records per-axis cell sizes
//! (including one ghost cell on each side), cell centers, face locations and
//! the flat indices of the four corner ghost cells of the padded grid.
//!
//! ## Construction modes
//! - **Uniform**: [`uniform_mesh_2d`]: `nx x ny` equal cells over a rectangle.
//! - **Non-uniform**: [`nonuniform_mesh_2d`]: explicit face locations per axis.
//! - **Tilted**: [`tilted_mesh_2d`]: a structured grid filling a
//!   quadrilateral given by its corners, interpolated transfinitely from the
//!   edges. Per-axis sequences become 2D coordinate fields in this mode.
//!
//! The same modes are available as a serde-tagged [`MeshSpec2D`] for
//! configuration-driven construction through [`MeshBuilder2D`].
//!
//! ## Guarantees
//! Construction is pure and all-or-nothing: either a mesh satisfying every
//! [`DebugInvariants`] check is returned or a [`MeshError`] is. Built meshes
//! are immutable and `Send + Sync`.
//!
//! ## Usage
//! ```toml
//! [dependencies]
//! fv-mesh = "0.1"
//! # features = ["strict-invariants"]
//! ```
//!
//! [`MeshStructure`]: crate::data::mesh_structure::MeshStructure
//! [`uniform_mesh_2d`]: crate::mesh_generation::uniform_mesh_2d
//! [`nonuniform_mesh_2d`]: crate::mesh_generation::nonuniform_mesh_2d
//! [`tilted_mesh_2d`]: crate::mesh_generation::tilted_mesh_2d
//! [`MeshSpec2D`]: crate::mesh_generation::MeshSpec2D
//! [`MeshBuilder2D`]: crate::mesh_generation::MeshBuilder2D
//! [`MeshError`]: crate::mesh_error::MeshError

pub mod data;
pub mod debug_invariants;
pub mod geometry;
pub mod mesh_error;
pub mod mesh_generation;
pub mod topology;

pub use debug_invariants::DebugInvariants;

/// A convenient prelude to import the most-used traits & types:
pub mod prelude {
    pub use crate::data::field::Field2D;
    pub use crate::data::mesh_structure::{Axis, AxisPair, AxisValues, MeshStructure};
    pub use crate::debug_invariants::DebugInvariants;
    pub use crate::geometry::Point2;
    pub use crate::mesh_error::MeshError;
    pub use crate::mesh_generation::{
        MeshBuilder2D, MeshGen2DOptions, MeshSpec2D, QuadCorners, nonuniform_mesh_2d,
        tilted_mesh_2d, uniform_mesh_2d,
    };
    pub use crate::topology::ghost::ghost_corner_indices;
}
