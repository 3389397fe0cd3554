//! `Matrix` — a two-dimensional grid of reals.
//!
//! A thin newtype around `nalgebra::DMatrix<f64>` with row-major access,
//! used to hold the strike/volatility price surface.

use bsv_core::{Real, Size};
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

    /// Create a `rows × cols` matrix with `f(i, j)` at row `i`, column `j`.
    pub fn from_fn<F: FnMut(Size, Size) -> Real>(rows: Size, cols: Size, f: F) -> Self {
        Self(DMatrix::from_fn(rows, cols, f))
    }

    /// Create from a row-major data slice.
    pub fn from_row_slice(rows: Size, cols: Size, data: &[Real]) -> Self {
        Self(DMatrix::from_row_slice(rows, cols, data))
    }

    /// Number of rows.
    pub fn rows(&self) -> Size {
        self.0.nrows()
    }

    /// Number of columns.
    pub fn cols(&self) -> Size {
        self.0.ncols()
    }

    /// Extract row `i` as a `Vec`.
    pub fn row(&self, i: Size) -> Vec<Real> {
        self.0.row(i).iter().copied().collect()
    }

    /// Iterate over all elements in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Real> {
        self.0.iter()
    }

    /// Borrow the inner `DMatrix`.
    pub fn inner(&self) -> &DMatrix<Real> {
        &self.0
    }
}

impl Index<(Size, Size)> for Matrix {
    type Output = Real;

    fn index(&self, (i, j): (Size, Size)) -> &Real {
        &self.0[(i, j)]
    }
}

impl IndexMut<(Size, Size)> for Matrix {
    fn index_mut(&mut self, (i, j): (Size, Size)) -> &mut Real {
        &mut self.0[(i, j)]
    }
}
