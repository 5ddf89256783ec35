//! Distance matrix fixtures.
//!
//! Random matrices are seeded through ChaCha8 so every test sees the same
//! instance on every platform.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tourforge_core::DistanceMatrix;

/// The classic four-city instance. Its optimal tour `0 -> 1 -> 3 -> 2` has
/// length 80; the identity tour has length 95.
pub fn four_cities() -> DistanceMatrix<u32> {
    from_rows(vec![
        vec![0, 10, 15, 20],
        vec![10, 0, 35, 25],
        vec![15, 35, 0, 30],
        vec![20, 25, 30, 0],
    ])
}

/// Four cities where city 3 has no finite edge in either direction.
pub fn disconnected() -> DistanceMatrix<f64> {
    let inf = f64::INFINITY;
    from_rows(vec![
        vec![0.0, 1.0, 2.0, inf],
        vec![1.0, 0.0, 3.0, inf],
        vec![2.0, 3.0, 0.0, inf],
        vec![inf, inf, inf, 0.0],
    ])
}

/// Cities on a line at positions `0..n`; `d(i, j) = |i - j|`.
pub fn line(n: usize) -> DistanceMatrix<u32> {
    build(n, |i, j| i.abs_diff(j) as u32)
}

/// A hub at city 0 one unit from every other city, which are two units
/// apart from each other. Metric, and its spanning tree is a star.
pub fn star(n: usize) -> DistanceMatrix<u32> {
    build(n, |i, j| match (i, j) {
        _ if i == j => 0,
        (0, _) | (_, 0) => 1,
        _ => 2,
    })
}

/// Symmetric matrix with weights uniform in `[1, 100)`.
pub fn random_symmetric(n: usize, seed: u64) -> DistanceMatrix<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut rows = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in i + 1..n {
            let w = rng.random_range(1.0..100.0);
            rows[i][j] = w;
            rows[j][i] = w;
        }
    }
    from_rows(rows)
}

/// Matrix with independent weights per direction, uniform in `[1, 100)`.
pub fn random_asymmetric(n: usize, seed: u64) -> DistanceMatrix<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut rows = vec![vec![0.0; n]; n];
    for (i, row) in rows.iter_mut().enumerate() {
        for (j, w) in row.iter_mut().enumerate() {
            if i != j {
                *w = rng.random_range(1.0..100.0);
            }
        }
    }
    from_rows(rows)
}

/// Symmetric integer matrix with weights in `1..=50`. Small weights make
/// ties between tours likely.
pub fn random_integer_symmetric(n: usize, seed: u64) -> DistanceMatrix<u32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut rows = vec![vec![0u32; n]; n];
    for i in 0..n {
        for j in i + 1..n {
            let w = rng.random_range(1..=50);
            rows[i][j] = w;
            rows[j][i] = w;
        }
    }
    from_rows(rows)
}

/// Symmetric matrix whose ring `0 -> 1 -> ... -> n-1 -> 0` is finite while
/// every other pair is unreachable with probability one half. Connected,
/// but shortcuts off the ring may hit an unreachable edge.
pub fn sparse_ring(n: usize, seed: u64) -> DistanceMatrix<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut rows = vec![vec![0.0; n]; n];
    for i in 0..n {
        for j in i + 1..n {
            let on_ring = j == i + 1 || (i == 0 && j == n - 1);
            let w = if on_ring || rng.random_bool(0.5) {
                rng.random_range(1.0..100.0)
            } else {
                f64::INFINITY
            };
            rows[i][j] = w;
            rows[j][i] = w;
        }
    }
    from_rows(rows)
}

/// Straight-line distances between `n` random points in a 100 x 100 square.
pub fn euclidean(n: usize, seed: u64) -> DistanceMatrix<f64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let points: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
        .collect();
    build(n, |i, j| {
        let (dx, dy) = (points[i].0 - points[j].0, points[i].1 - points[j].1);
        (dx * dx + dy * dy).sqrt()
    })
}

fn build<W, F>(n: usize, weight: F) -> DistanceMatrix<W>
where
    W: tourforge_core::Distance,
    F: Fn(usize, usize) -> W,
{
    let rows = (0..n).map(|i| (0..n).map(|j| weight(i, j)).collect()).collect();
    from_rows(rows)
}

fn from_rows<W: tourforge_core::Distance>(rows: Vec<Vec<W>>) -> DistanceMatrix<W> {
    DistanceMatrix::from_rows(rows).expect("fixture matrix is well formed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tourforge_core::Distance;

    #[test]
    fn test_random_matrices_are_reproducible() {
        assert_eq!(random_symmetric(6, 1), random_symmetric(6, 1));
        assert_ne!(random_symmetric(6, 1), random_symmetric(6, 2));
    }

    #[test]
    fn test_symmetry() {
        assert!(random_symmetric(7, 3).is_symmetric());
        assert!(random_integer_symmetric(7, 3).is_symmetric());
        assert!(euclidean(7, 3).is_symmetric());
        assert!(!random_asymmetric(7, 3).is_symmetric());
    }

    #[test]
    fn test_disconnected_has_unreachable_edges() {
        assert!(disconnected().has_unreachable_edges());
        assert!(!four_cities().has_unreachable_edges());
    }

    #[test]
    fn test_sparse_ring_keeps_the_ring_finite() {
        let matrix = sparse_ring(6, 4);
        assert!(matrix.is_symmetric());
        for i in 0..6 {
            assert!(!matrix.get(i, (i + 1) % 6).is_unreachable());
        }
    }

    #[test]
    fn test_star_shape() {
        let m = star(4);
        assert_eq!(m.get(0, 3), 1);
        assert_eq!(m.get(2, 3), 2);
        assert_eq!(m.get(3, 3), 0);
    }
}
