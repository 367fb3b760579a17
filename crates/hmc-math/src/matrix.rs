//! `Matrix` — a two-dimensional matrix of reals.
//!
//! A thin newtype around `nalgebra::DMatrix<f64>` holding the
//! `num_paths × (num_steps + 1)` price and variance grids produced by the
//! path simulator. Only the operations the simulation layer needs are
//! exposed: construction, `(row, col)` indexing, and row/column extraction.

use hmc_core::{Real, Size};
use nalgebra::DMatrix;
use std::ops::{Index, IndexMut};

/// A dynamically-sized 2D matrix of `Real` values (row-major access).
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix(DMatrix<Real>);

impl Matrix {
    /// Create a zero-filled `rows × cols` matrix.
    pub fn zeros(rows: Size, cols: Size) -> Self {
        Self(DMatrix::zeros(rows, cols))
    }

    /// Number of rows.
    pub fn rows(&self) -> Size {
        self.0.nrows()
    }

    /// Number of columns.
    pub fn cols(&self) -> Size {
        self.0.ncols()
    }

    /// Copy row `i` into a `Vec`.
    pub fn row(&self, i: Size) -> Vec<Real> {
        self.0.row(i).iter().copied().collect()
    }

    /// Copy column `j` into a `Vec`.
    pub fn column(&self, j: Size) -> Vec<Real> {
        self.0.column(j).iter().copied().collect()
    }

    /// Iterate over all elements (column-major, nalgebra's native order).
    pub fn iter(&self) -> impl Iterator<Item = &Real> {
        self.0.iter()
    }
}

impl Index<(Size, Size)> for Matrix {
    type Output = Real;

    fn index(&self, (r, c): (Size, Size)) -> &Real {
        &self.0[(r, c)]
    }
}

impl IndexMut<(Size, Size)> for Matrix {
    fn index_mut(&mut self, (r, c): (Size, Size)) -> &mut Real {
        &mut self.0[(r, c)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_and_indexing() {
        let mut m = Matrix::zeros(2, 3);
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m[(1, 2)], 0.0);
        m[(1, 2)] = 4.5;
        assert_eq!(m[(1, 2)], 4.5);
    }

    #[test]
    fn row_and_column_extraction() {
        let mut m = Matrix::zeros(2, 2);
        m[(0, 0)] = 1.0;
        m[(0, 1)] = 2.0;
        m[(1, 0)] = 3.0;
        m[(1, 1)] = 4.0;
        assert_eq!(m.row(0), vec![1.0, 2.0]);
        assert_eq!(m.column(1), vec![2.0, 4.0]);
    }

    #[test]
    fn equality_is_element_wise() {
        let mut a = Matrix::zeros(2, 2);
        let mut b = Matrix::zeros(2, 2);
        a[(0, 1)] = 1.0;
        assert_ne!(a, b);
        b[(0, 1)] = 1.0;
        assert_eq!(a, b);
    }
}
