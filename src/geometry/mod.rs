//! Geometry utilities for fv-mesh.
//!
//! This module provides the interpolation and planar measures used to lay out
//! structured grids and to reject degenerate domains.

pub mod interpolate;
pub mod metrics;

/// A point in the plane, `[x, y]`.
pub type Point2 = [f64; 2];
