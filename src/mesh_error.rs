//! MeshError: Unified error type for fv-mesh public APIs
//!
//! Every fallible constructor in this crate returns `Result<_, MeshError>`.
//! Construction is all-or-nothing: an error means no `MeshStructure` exists.

use crate::data::mesh_structure::Axis;
use thiserror::Error;

/// Unified error type for mesh construction and validation.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MeshError {
    /// Non-positive cell counts or extents, non-monotonic face locations,
    /// non-finite coordinates, or degenerate tilted corners.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// A sequence or field has a length inconsistent with the declared cell counts.
    #[error("shape mismatch along {axis}: expected {expected} entries, found {found}")]
    ShapeMismatch {
        axis: Axis,
        expected: usize,
        found: usize,
    },
}

pub(crate) fn invalid_argument(message: impl Into<String>) -> MeshError {
    MeshError::InvalidArgument(message.into())
}
