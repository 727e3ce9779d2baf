//! Axis-aligned meshes from uniform spacing or explicit face locations.

use crate::data::mesh_structure::{Axis, AxisLayout, MeshStructure};
use crate::geometry::metrics::mean2;
use crate::mesh_error::{MeshError, invalid_argument};
use itertools::Itertools;

fn positive_count(axis: Axis, n: usize) -> Result<(), MeshError> {
    if n == 0 {
        return Err(invalid_argument(format!(
            "number of cells along {axis} must be positive"
        )));
    }
    Ok(())
}

fn positive_extent(axis: Axis, length: f64) -> Result<(), MeshError> {
    if !(length.is_finite() && length > 0.0) {
        return Err(invalid_argument(format!(
            "domain length along {axis} must be positive and finite, got {length}"
        )));
    }
    Ok(())
}

/// Ghost-padded sizes: the interior sizes with the first and last replicated outward.
fn pad_sizes(interior: &[f64]) -> Vec<f64> {
    let mut sizes = Vec::with_capacity(interior.len() + 2);
    if let (Some(&first), Some(&last)) = (interior.first(), interior.last()) {
        sizes.push(first);
        sizes.extend_from_slice(interior);
        sizes.push(last);
    }
    sizes
}

fn midpoints(faces: &[f64]) -> Vec<f64> {
    faces
        .iter()
        .tuple_windows()
        .map(|(&a, &b)| mean2(a, b))
        .collect()
}

/// Uniform axis of `n` cells of width `length / n`, starting at 0.
pub(crate) fn uniform_axis(axis: Axis, n: usize, length: f64) -> Result<AxisLayout, MeshError> {
    positive_count(axis, n)?;
    positive_extent(axis, length)?;
    let h = length / n as f64;
    let faces: Vec<f64> = (0..=n).map(|i| h * i as f64).collect();
    Ok(AxisLayout {
        sizes: vec![h; n + 2],
        centers: midpoints(&faces),
        faces,
    })
}

/// Axis given by explicit, strictly increasing face locations.
pub(crate) fn axis_from_faces(axis: Axis, faces: &[f64]) -> Result<AxisLayout, MeshError> {
    if faces.len() < 2 {
        return Err(invalid_argument(format!(
            "face locations along {axis} need at least 2 entries, got {}",
            faces.len()
        )));
    }
    if let Some(k) = faces.iter().position(|f| !f.is_finite()) {
        return Err(invalid_argument(format!(
            "face location {k} along {axis} is not finite ({})",
            faces[k]
        )));
    }
    if let Some((k, (a, b))) = faces
        .iter()
        .tuple_windows()
        .enumerate()
        .find(|(_, (a, b))| b <= a)
    {
        return Err(invalid_argument(format!(
            "face locations along {axis} must be strictly increasing, entry {} ({b}) follows {a}",
            k + 1
        )));
    }

    let interior: Vec<f64> = faces.iter().tuple_windows().map(|(a, b)| b - a).collect();
    Ok(AxisLayout {
        sizes: pad_sizes(&interior),
        centers: midpoints(faces),
        faces: faces.to_vec(),
    })
}

pub(crate) fn uniform(
    nx: usize,
    ny: usize,
    width: f64,
    height: f64,
) -> Result<MeshStructure, MeshError> {
    let x = uniform_axis(Axis::X, nx, width)?;
    let y = uniform_axis(Axis::Y, ny, height)?;
    Ok(MeshStructure::rectilinear(x, y))
}

pub(crate) fn non_uniform(
    face_locations_x: &[f64],
    face_locations_y: &[f64],
    cells: Option<[usize; 2]>,
) -> Result<MeshStructure, MeshError> {
    if let Some([nx, ny]) = cells {
        positive_count(Axis::X, nx)?;
        positive_count(Axis::Y, ny)?;
        for (axis, n, faces) in [
            (Axis::X, nx, face_locations_x),
            (Axis::Y, ny, face_locations_y),
        ] {
            if faces.len() != n + 1 {
                return Err(MeshError::ShapeMismatch {
                    axis,
                    expected: n + 1,
                    found: faces.len(),
                });
            }
        }
    }
    let x = axis_from_faces(Axis::X, face_locations_x)?;
    let y = axis_from_faces(Axis::Y, face_locations_y)?;
    Ok(MeshStructure::rectilinear(x, y))
}
