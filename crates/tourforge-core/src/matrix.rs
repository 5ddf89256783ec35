//! Dense distance matrix.

use crate::distance::Distance;
use crate::error::{Result, TourForgeError};

/// A dense n×n matrix of travel costs, stored in row-major order.
///
/// `get(i, j)` is the cost of travelling from city `i` to city `j`. The
/// matrix is not required to be symmetric. Diagonal entries are never
/// consulted by any solver, so they are neither validated nor read.
///
/// # Examples
///
/// ```
/// use tourforge_core::DistanceMatrix;
///
/// let matrix = DistanceMatrix::from_rows(vec![
///     vec![0, 10, 15],
///     vec![10, 0, 35],
///     vec![15, 35, 0],
/// ]).unwrap();
///
/// assert_eq!(matrix.size(), 3);
/// assert_eq!(matrix.get(1, 2), 35);
/// assert!(matrix.is_symmetric());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawMatrix<W>",
        bound(deserialize = "W: Distance + serde::Deserialize<'de>")
    )
)]
pub struct DistanceMatrix<W = f64> {
    data: Vec<W>,
    size: usize,
}

/// Unchecked wire form; deserialization goes through [`DistanceMatrix::from_flat`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawMatrix<W> {
    data: Vec<W>,
    size: usize,
}

#[cfg(feature = "serde")]
impl<W: Distance> TryFrom<RawMatrix<W>> for DistanceMatrix<W> {
    type Error = TourForgeError;

    fn try_from(raw: RawMatrix<W>) -> Result<Self> {
        Self::from_flat(raw.size, raw.data)
    }
}

impl<W: Distance> DistanceMatrix<W> {
    /// Builds a matrix from nested rows.
    ///
    /// # Errors
    ///
    /// Returns `MalformedMatrix` if any row length differs from the row
    /// count, or if an off-diagonal entry is negative or NaN.
    pub fn from_rows(rows: Vec<Vec<W>>) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(TourForgeError::MalformedMatrix(format!(
                    "row {i} has {} entries, expected {size}",
                    row.len()
                )));
            }
            data.extend(row);
        }
        Self::from_flat(size, data)
    }

    /// Builds a matrix from `size * size` row-major entries.
    pub fn from_flat(size: usize, data: Vec<W>) -> Result<Self> {
        if data.len() != size * size {
            return Err(TourForgeError::MalformedMatrix(format!(
                "expected {} entries for {size} cities, got {}",
                size * size,
                data.len()
            )));
        }
        let matrix = Self { data, size };
        matrix.check_entries()?;
        Ok(matrix)
    }

    fn check_entries(&self) -> Result<()> {
        for i in 0..self.size {
            for j in 0..self.size {
                if i == j {
                    continue;
                }
                let w = self.get(i, j);
                if w.is_nan() {
                    return Err(TourForgeError::MalformedMatrix(format!(
                        "entry ({i}, {j}) is NaN"
                    )));
                }
                if w.is_negative() {
                    return Err(TourForgeError::MalformedMatrix(format!(
                        "entry ({i}, {j}) is negative: {w}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Returns the cost of travelling from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> W {
        self.data[from * self.size + to]
    }

    /// Returns the number of cities.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns true if the matrix has no cities.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the outgoing costs of city `from`.
    pub fn row(&self, from: usize) -> &[W] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Returns true if `get(i, j) == get(j, i)` for every off-diagonal pair.
    pub fn is_symmetric(&self) -> bool {
        (0..self.size)
            .all(|i| (i + 1..self.size).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// Returns true if some off-diagonal entry is the unreachable sentinel.
    pub fn has_unreachable_edges(&self) -> bool {
        (0..self.size).any(|i| {
            (0..self.size).any(|j| i != j && self.get(i, j).is_unreachable())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates_entries() {
        let matrix: DistanceMatrix<f64> =
            toml::from_str("size = 2\ndata = [0.0, 4.0, 5.0, 0.0]").unwrap();
        assert_eq!(matrix.get(1, 0), 5.0);

        let err = toml::from_str::<DistanceMatrix<f64>>("size = 2\ndata = [0.0, -1.0, 1.0, 0.0]")
            .unwrap_err();
        assert!(err.to_string().contains("negative"));

        let err = toml::from_str::<DistanceMatrix<u32>>("size = 3\ndata = [0, 1, 1, 0]")
            .unwrap_err();
        assert!(err.to_string().contains("expected 9 entries"));
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let err = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0]]).unwrap_err();
        assert!(matches!(err, TourForgeError::MalformedMatrix(_)));
    }

    #[test]
    fn test_rejects_non_square() {
        let err = DistanceMatrix::from_rows(vec![vec![0, 1, 2], vec![1, 0, 2]]).unwrap_err();
        assert!(matches!(err, TourForgeError::MalformedMatrix(_)));
    }

    #[test]
    fn test_rejects_negative_entry() {
        let err = DistanceMatrix::from_rows(vec![vec![0, -4], vec![4, 0]]).unwrap_err();
        assert_eq!(
            err,
            TourForgeError::MalformedMatrix("entry (0, 1) is negative: -4".to_string())
        );
    }

    #[test]
    fn test_rejects_nan_entry() {
        let err = DistanceMatrix::from_rows(vec![vec![0.0, f64::NAN], vec![1.0, 0.0]]);
        assert!(err.is_err());
    }

    #[test]
    fn test_diagonal_is_ignored() {
        let matrix = DistanceMatrix::from_rows(vec![vec![-1.0, 2.0], vec![2.0, f64::NAN]]);
        assert!(matrix.is_ok());
    }

    #[test]
    fn test_empty_matrix_is_constructible() {
        let matrix = DistanceMatrix::<u32>::from_rows(Vec::new()).unwrap();
        assert!(matrix.is_empty());
        assert_eq!(matrix.size(), 0);
    }

    #[test]
    fn test_from_flat_length_mismatch() {
        assert!(DistanceMatrix::from_flat(2, vec![0u32, 1, 2]).is_err());
    }

    #[test]
    fn test_row_and_asymmetry() {
        let matrix = DistanceMatrix::from_rows(vec![vec![0, 3], vec![7, 0]]).unwrap();
        assert_eq!(matrix.row(1), &[7, 0]);
        assert!(!matrix.is_symmetric());
    }

    #[test]
    fn test_unreachable_edges() {
        let matrix =
            DistanceMatrix::from_rows(vec![vec![0.0, f64::INFINITY], vec![1.0, 0.0]]).unwrap();
        assert!(matrix.has_unreachable_edges());
        let diagonal_only =
            DistanceMatrix::from_rows(vec![vec![f64::INFINITY, 1.0], vec![1.0, 0.0]]).unwrap();
        assert!(!diagonal_only.has_unreachable_edges());
    }
}
