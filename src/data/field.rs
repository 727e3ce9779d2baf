//! `Field2D`: a dense row-major scalar field over a structured index space.
//!
//! Row `i` runs along the x index direction and column `j` along y, so the
//! flat offset of `(i, j)` is `i * cols + j`. This matches the padded ghost
//! numbering in [`crate::topology::ghost`].

use std::ops::Index;

/// Dense `rows x cols` field of `f64` values stored row-major.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Field2D {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Field2D {
    /// Build a field by evaluating `f(i, j)` for every entry in row-major order.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { rows, cols, data }
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Value at `(i, j)`, or `None` when out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.rows && j < self.cols {
            Some(self.data[i * self.cols + j])
        } else {
            None
        }
    }

    /// The underlying row-major buffer.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Total number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Sum of all entries.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }
}

/// Unchecked lookup for callers that already know `(i, j)` is in range.
///
/// # Panics
/// If `i >= rows` or `j >= cols`.
impl Index<(usize, usize)> for Field2D {
    type Output = f64;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &f64 {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) out of range for a {}x{} field",
            self.rows,
            self.cols
        );
        &self.data[i * self.cols + j]
    }
}
