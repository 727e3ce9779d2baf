//! Padded index space of a structured 2D mesh.
//!
//! Interior cells `(0..nx, 0..ny)` are surrounded by one layer of ghost cells,
//! giving an `(nx + 2) x (ny + 2)` index grid. Padded coordinates `(i, j)`
//! run over `0..=nx + 1` and `0..=ny + 1`; interior cell `(ci, cj)` lives at
//! `(ci + 1, cj + 1)`. Flat indices are row-major with `i` as the row:
//! `i * (ny + 2) + j`.

/// Shape of the padded index grid, `(nx + 2, ny + 2)`.
#[inline]
pub fn padded_shape(nx: usize, ny: usize) -> (usize, usize) {
    (nx + 2, ny + 2)
}

/// Flat row-major index of padded cell `(i, j)` for a mesh with `ny` interior
/// cells along y.
#[inline]
pub fn padded_index(i: usize, j: usize, ny: usize) -> usize {
    i * (ny + 2) + j
}

/// Flat indices of the four outer corner cells of the padded grid, in
/// ascending order: `(0, 0)`, `(0, ny + 1)`, `(nx + 1, 0)`, `(nx + 1, ny + 1)`.
///
/// These are anchors for boundary-condition code, not the full ghost layer.
pub fn ghost_corner_indices(nx: usize, ny: usize) -> [usize; 4] {
    let (rows, cols) = padded_shape(nx, ny);
    [
        padded_index(0, 0, ny),
        padded_index(0, cols - 1, ny),
        padded_index(rows - 1, 0, ny),
        padded_index(rows - 1, cols - 1, ny),
    ]
}

/// Whether padded cell `(i, j)` belongs to the ghost layer.
#[inline]
pub fn is_ghost(i: usize, j: usize, nx: usize, ny: usize) -> bool {
    i == 0 || j == 0 || i == nx + 1 || j == ny + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_of_single_cell_mesh() {
        // 3x3 padded grid
        assert_eq!(ghost_corner_indices(1, 1), [0, 2, 6, 8]);
    }

    #[test]
    fn corners_of_rectangular_mesh() {
        // nx=5, ny=7 -> 7x9 padded grid
        assert_eq!(ghost_corner_indices(5, 7), [0, 8, 54, 62]);
        assert_eq!(padded_shape(5, 7), (7, 9));
    }

    #[test]
    fn last_corner_is_last_padded_index() {
        for (nx, ny) in [(1, 4), (3, 2), (10, 10)] {
            let (rows, cols) = padded_shape(nx, ny);
            assert_eq!(ghost_corner_indices(nx, ny)[3], rows * cols - 1);
        }
    }

    #[test]
    fn ghost_layer_membership() {
        assert!(is_ghost(0, 3, 2, 2));
        assert!(is_ghost(3, 1, 2, 2));
        assert!(is_ghost(1, 3, 2, 2));
        assert!(!is_ghost(1, 1, 2, 2));
        assert!(!is_ghost(2, 2, 2, 2));
    }
}
