use crate::{
    error::{Result, ValuationError},
    valuation_matrix::ValuationMatrix,
};
use faer::Mat;
use std::sync::Arc;

/// Sources a valuation matrix can be built from
#[derive(Debug, Clone)]
pub enum ValuationInput {
    /// Dense array, adopted as-is
    Dense(Mat<f64>),
    /// List of rows, one per agent
    Rows(Vec<Vec<f64>>),
    /// Existing matrix, whose storage is shared rather than copied
    Matrix(ValuationMatrix),
}

impl ValuationInput {
    /// Normalize into the dense storage backing a `ValuationMatrix`
    pub(crate) fn into_storage(self) -> Result<Arc<Mat<f64>>> {
        let storage = match self {
            ValuationInput::Dense(values) => Arc::new(values),
            ValuationInput::Rows(rows) => Arc::new(rows_to_dense(&rows)?),
            ValuationInput::Matrix(matrix) => matrix.storage(),
        };

        if storage.nrows() == 0 || storage.ncols() == 0 {
            return Err(ValuationError::EmptyMatrix);
        }

        Ok(storage)
    }
}

fn rows_to_dense(rows: &[Vec<f64>]) -> Result<Mat<f64>> {
    let first = rows.first().ok_or(ValuationError::EmptyMatrix)?;
    let num_of_objects = first.len();

    for (row, values) in rows.iter().enumerate().skip(1) {
        if values.len() != num_of_objects {
            return Err(ValuationError::RaggedRow {
                row,
                expected: num_of_objects,
                found: values.len(),
            });
        }
    }

    Ok(Mat::from_fn(rows.len(), num_of_objects, |i, j| rows[i][j]))
}

impl From<Mat<f64>> for ValuationInput {
    fn from(values: Mat<f64>) -> Self {
        ValuationInput::Dense(values)
    }
}

impl From<&Mat<f64>> for ValuationInput {
    fn from(values: &Mat<f64>) -> Self {
        ValuationInput::Dense(values.clone())
    }
}

impl<T: Into<f64>> From<Vec<Vec<T>>> for ValuationInput {
    fn from(rows: Vec<Vec<T>>) -> Self {
        ValuationInput::Rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }
}

impl<T: Into<f64>, const N: usize, const M: usize> From<[[T; N]; M]> for ValuationInput {
    fn from(rows: [[T; N]; M]) -> Self {
        ValuationInput::Rows(
            rows.into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        )
    }
}

impl From<ValuationMatrix> for ValuationInput {
    fn from(matrix: ValuationMatrix) -> Self {
        ValuationInput::Matrix(matrix)
    }
}

impl From<&ValuationMatrix> for ValuationInput {
    fn from(matrix: &ValuationMatrix) -> Self {
        ValuationInput::Matrix(matrix.clone())
    }
}
