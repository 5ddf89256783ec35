//! First-improvement 2-opt local search.

use tourforge_config::LocalSearchConfig;
use tourforge_core::{Distance, DistanceMatrix, Result, Route, Tour, TourForgeError};
use tracing::{debug, trace};

use crate::evaluator::tour_length;
use crate::scope::SolverScope;
use crate::solver::TourSolver;

/// 2-opt local search starting from the identity tour.
///
/// Each pass scans every segment `route[i..=k]` with `1 <= i < k <= n-1`.
/// City 0 stays in front, and segments ending at the final city are
/// included. The segment is reversed in place and the whole tour
/// re-evaluated; a strictly shorter tour is adopted immediately and the
/// scan continues from the next segment, otherwise the reversal is undone.
/// Passes repeat until one adopts nothing.
///
/// The result is a local optimum: running the search again on its output
/// changes nothing.
///
/// # Example
///
/// ```
/// use tourforge_core::DistanceMatrix;
/// use tourforge_solver::two_opt::solve_2opt;
///
/// let matrix = DistanceMatrix::from_rows(vec![
///     vec![0, 10, 15, 20],
///     vec![10, 0, 35, 25],
///     vec![15, 35, 0, 30],
///     vec![20, 25, 30, 0],
/// ]).unwrap();
///
/// let tour = solve_2opt(&matrix).unwrap();
/// assert_eq!(tour.length, 80);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TwoOptSolver {
    pass_limit: Option<u64>,
}

impl TwoOptSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &LocalSearchConfig) -> Self {
        Self {
            pass_limit: config.pass_limit,
        }
    }

    /// Stops after this many passes even if the last one improved.
    pub fn with_pass_limit(mut self, limit: u64) -> Self {
        self.pass_limit = Some(limit);
        self
    }

    /// Runs the search from an arbitrary starting route.
    ///
    /// # Errors
    ///
    /// Returns `EmptyInput` for an empty matrix and `InvalidRoute` if
    /// `start` is not a permutation of the matrix's cities.
    pub fn improve<W: Distance>(
        &self,
        matrix: &DistanceMatrix<W>,
        start: Route,
        scope: &mut SolverScope<'_, W>,
    ) -> Result<Tour<W>> {
        let n = matrix.size();
        if n == 0 {
            return Err(TourForgeError::EmptyInput);
        }
        start.validate(n)?;

        let mut route = start.into_inner();
        let mut best_length = tour_length(matrix, &route);
        scope.record_evaluation();
        scope.offer_tour(&route, best_length);

        let mut passes = 0u64;
        loop {
            let mut improved = false;
            for i in 1..n.saturating_sub(1) {
                for k in i + 1..n {
                    route[i..=k].reverse();
                    let length = tour_length(matrix, &route);
                    scope.record_evaluation();
                    if length < best_length {
                        trace!(event = "move", i, k, length = %length);
                        best_length = length;
                        improved = true;
                    } else {
                        route[i..=k].reverse();
                    }
                }
            }
            passes += 1;
            scope.increment_step_count();
            debug!(event = "pass", pass = passes, length = %best_length, improved);

            if !improved {
                break;
            }
            scope.offer_tour(&route, best_length);
            if self.pass_limit.is_some_and(|limit| passes >= limit) {
                scope.mark_terminated();
                break;
            }
            if scope.should_terminate() {
                break;
            }
        }

        Ok(Tour::new(Route::new(route), best_length))
    }
}

impl<W: Distance> TourSolver<W> for TwoOptSolver {
    fn solve(
        &mut self,
        matrix: &DistanceMatrix<W>,
        scope: &mut SolverScope<'_, W>,
    ) -> Result<Tour<W>> {
        self.improve(matrix, Route::identity(matrix.size()), scope)
    }

    fn solver_type_name(&self) -> &'static str {
        "TwoOpt"
    }
}

/// Runs 2-opt from the identity tour with no termination.
///
/// # Errors
///
/// Returns `EmptyInput` if the matrix has no cities.
pub fn solve_2opt<W: Distance>(matrix: &DistanceMatrix<W>) -> Result<Tour<W>> {
    let mut scope = SolverScope::new();
    scope.start_solving();
    TwoOptSolver::new().solve(matrix, &mut scope)
}
