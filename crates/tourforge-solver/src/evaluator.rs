//! Tour length evaluation.

use tourforge_core::{Distance, DistanceMatrix, Result, Route, TourForgeError};

/// Returns the cyclic length of a visiting order without validating it.
///
/// Sums `matrix[route[i]][route[i + 1]]` for every consecutive pair plus the
/// wrap-around edge back to `route[0]`. Routes of zero or one city have
/// length zero since the diagonal is never consulted.
///
/// This is the hot path used inside the solvers. Callers must pass a route
/// whose indices are in range.
#[inline]
pub fn tour_length<W: Distance>(matrix: &DistanceMatrix<W>, route: &[usize]) -> W {
    let n = route.len();
    if n < 2 {
        return W::zero();
    }
    let mut length = W::zero();
    for pair in route.windows(2) {
        length = length.saturating_add(matrix.get(pair[0], pair[1]));
    }
    length.saturating_add(matrix.get(route[n - 1], route[0]))
}

/// Returns the cyclic length of `route`, checking it first.
///
/// # Errors
///
/// Returns `EmptyInput` for an empty matrix and `InvalidRoute` unless the
/// route is a permutation of the matrix's cities.
///
/// # Examples
///
/// ```
/// use tourforge_core::{DistanceMatrix, Route};
/// use tourforge_solver::evaluate;
///
/// let matrix = DistanceMatrix::from_rows(vec![
///     vec![0, 10, 15, 20],
///     vec![10, 0, 35, 25],
///     vec![15, 35, 0, 30],
///     vec![20, 25, 30, 0],
/// ]).unwrap();
///
/// assert_eq!(evaluate(&Route::new(vec![0, 1, 3, 2]), &matrix).unwrap(), 80);
/// assert!(evaluate(&Route::new(vec![0, 1, 1, 2]), &matrix).is_err());
/// ```
pub fn evaluate<W: Distance>(route: &Route, matrix: &DistanceMatrix<W>) -> Result<W> {
    if matrix.is_empty() {
        return Err(TourForgeError::EmptyInput);
    }
    route.validate(matrix.size())?;
    Ok(tour_length(matrix, route.cities()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tourforge_test::matrices;

    #[test]
    fn test_sums_forward_edges_and_wrap() {
        let matrix = matrices::four_cities();
        // 0->1 (10) + 1->2 (35) + 2->3 (30) + 3->0 (20)
        assert_eq!(tour_length(&matrix, &[0, 1, 2, 3]), 95);
    }

    #[test]
    fn test_rotation_invariant() {
        let matrix = matrices::four_cities();
        let route = Route::new(vec![2, 0, 3, 1]);
        let length = evaluate(&route, &matrix).unwrap();
        for start in 0..4 {
            assert_eq!(evaluate(&route.rotated_to(start), &matrix).unwrap(), length);
        }
    }

    #[test]
    fn test_reversal_invariant_on_symmetric_matrix() {
        let matrix = matrices::random_symmetric(9, 17);
        let route = Route::new(vec![4, 8, 0, 2, 7, 1, 6, 3, 5]);
        let forward = evaluate(&route, &matrix).unwrap();
        let backward = evaluate(&route.reversed(), &matrix).unwrap();
        assert!((forward - backward).abs() < 1e-9);
    }

    #[test]
    fn test_asymmetric_uses_direction() {
        let matrix = DistanceMatrix::from_rows(vec![
            vec![0, 1, 100],
            vec![100, 0, 1],
            vec![1, 100, 0],
        ])
        .unwrap();
        assert_eq!(tour_length(&matrix, &[0, 1, 2]), 3);
        assert_eq!(tour_length(&matrix, &[0, 2, 1]), 300);
    }

    #[test]
    fn test_degenerate_sizes() {
        let single = DistanceMatrix::from_rows(vec![vec![42u32]]).unwrap();
        assert_eq!(evaluate(&Route::identity(1), &single).unwrap(), 0);

        let pair = DistanceMatrix::from_rows(vec![vec![0u32, 3], vec![4, 0]]).unwrap();
        assert_eq!(evaluate(&Route::identity(2), &pair).unwrap(), 7);

        let empty = DistanceMatrix::<u32>::from_rows(Vec::new()).unwrap();
        assert_eq!(
            evaluate(&Route::default(), &empty),
            Err(TourForgeError::EmptyInput)
        );
    }

    #[test]
    fn test_unreachable_edge_saturates() {
        let matrix = matrices::disconnected();
        assert!(tour_length(&matrix, &[0, 1, 2, 3]).is_unreachable());
    }

    #[test]
    fn test_rejects_invalid_routes() {
        let matrix = matrices::four_cities();
        assert!(matches!(
            evaluate(&Route::new(vec![0, 1, 2]), &matrix),
            Err(TourForgeError::InvalidRoute(_))
        ));
        assert!(matches!(
            evaluate(&Route::new(vec![0, 1, 2, 4]), &matrix),
            Err(TourForgeError::InvalidRoute(_))
        ));
    }
}
