//! Dense integer matrices.
//!
//! The matrices in this workspace are tiny (the Pell automorphism is 2×2),
//! so everything is stored row-major in a flat vector and computed exactly.

use std::ops::Index;

use dioptra_integers::Integer;

/// Dense integer matrix stored in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseMatrix {
    /// Matrix entries in row-major order.
    data: Vec<Integer>,
    /// Number of rows.
    num_rows: usize,
    /// Number of columns.
    num_cols: usize,
}

impl DenseMatrix {
    /// Creates a matrix from a 2D vector.
    ///
    /// # Panics
    ///
    /// Panics if the rows have different lengths.
    #[must_use]
    pub fn from_rows(rows: Vec<Vec<Integer>>) -> Self {
        let num_rows = rows.len();
        let num_cols = rows.first().map_or(0, Vec::len);
        let data: Vec<Integer> = rows.into_iter().flatten().collect();
        assert_eq!(data.len(), num_rows * num_cols, "ragged rows");
        Self {
            data,
            num_rows,
            num_cols,
        }
    }

    /// Creates a matrix from rows of machine integers.
    ///
    /// # Panics
    ///
    /// Panics if the rows have different lengths.
    #[must_use]
    pub fn from_i64_rows(rows: &[&[i64]]) -> Self {
        Self::from_rows(
            rows.iter()
                .map(|row| row.iter().copied().map(Integer::new).collect())
                .collect(),
        )
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.num_cols
    }
}

impl Index<(usize, usize)> for DenseMatrix {
    type Output = Integer;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(row < self.num_rows && col < self.num_cols, "index out of bounds");
        &self.data[row * self.num_cols + col]
    }
}
