//! Exhaustive search over every visiting order.
//!
//! Both search types walk the n! permutations of `0..n` in lexicographic
//! order starting from `0, 1, 2, ...` and keep the first strictly shortest
//! one. Lengths are summed in route order, so floating point matrices see
//! exactly the values [`tour_length`] reports.
//!
//! # Search Types
//!
//! - **Brute Force**: evaluates every permutation
//! - **Branch And Bound**: depth-first in the same order, skipping partial
//!   routes that are already at least as long as the best complete tour

use tourforge_config::{ExhaustiveConfig, ExhaustiveType};
use tourforge_core::{Distance, DistanceMatrix, Result, Tour, TourForgeError};
use tracing::debug;

use crate::evaluator::tour_length;
use crate::scope::SolverScope;
use crate::solver::TourSolver;

/// Exact solver that searches every visiting order.
///
/// Cost is O(n! · n) for brute force, so only small instances
/// (around a dozen cities) are practical. Ties keep the first tour found
/// in lexicographic order.
///
/// # Example
///
/// ```
/// use tourforge_core::DistanceMatrix;
/// use tourforge_solver::exhaustive::solve_exact;
///
/// let matrix = DistanceMatrix::from_rows(vec![
///     vec![0, 10, 15, 20],
///     vec![10, 0, 35, 25],
///     vec![15, 35, 0, 30],
///     vec![20, 25, 30, 0],
/// ]).unwrap();
///
/// let tour = solve_exact(&matrix).unwrap();
/// assert_eq!(tour.length, 80);
/// assert_eq!(tour.route.cities(), &[0, 1, 3, 2]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExhaustiveSolver {
    exhaustive_type: ExhaustiveType,
    node_limit: Option<u64>,
}

impl ExhaustiveSolver {
    pub fn new(exhaustive_type: ExhaustiveType) -> Self {
        Self {
            exhaustive_type,
            node_limit: None,
        }
    }

    pub fn brute_force() -> Self {
        Self::new(ExhaustiveType::BruteForce)
    }

    pub fn branch_and_bound() -> Self {
        Self::new(ExhaustiveType::BranchAndBound)
    }

    pub fn from_config(config: &ExhaustiveConfig) -> Self {
        Self {
            exhaustive_type: config.exhaustive_type,
            node_limit: config.node_limit,
        }
    }

    /// Stops after this many complete tours have been evaluated.
    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = Some(limit);
        self
    }

    fn brute_force_search<W: Distance>(
        &self,
        matrix: &DistanceMatrix<W>,
        scope: &mut SolverScope<'_, W>,
    ) {
        let mut route: Vec<usize> = (0..matrix.size()).collect();
        let mut evaluated = 0u64;

        loop {
            let length = tour_length(matrix, &route);
            scope.record_evaluation();
            scope.increment_step_count();
            scope.offer_tour(&route, length);
            evaluated += 1;

            if !next_permutation(&mut route) {
                break;
            }
            if self.node_limit.is_some_and(|limit| evaluated >= limit) {
                scope.mark_terminated();
                break;
            }
            if scope.should_terminate() {
                break;
            }
        }
        debug!(event = "search_end", search = "brute_force", tours = evaluated);
    }

    fn branch_and_bound_search<W: Distance>(
        &self,
        matrix: &DistanceMatrix<W>,
        scope: &mut SolverScope<'_, W>,
    ) {
        let n = matrix.size();
        let mut search = BranchAndBound {
            matrix,
            scope,
            path: Vec::with_capacity(n),
            visited: vec![false; n],
            node_limit: self.node_limit,
            evaluated: 0,
            pruned: 0,
            stopped: false,
        };
        for start in 0..n {
            search.visited[start] = true;
            search.path.push(start);
            search.descend(W::zero());
            search.path.pop();
            search.visited[start] = false;
            if search.stopped || search.scope.should_terminate() {
                break;
            }
        }
        debug!(
            event = "search_end",
            search = "branch_and_bound",
            tours = search.evaluated,
            pruned = search.pruned,
        );
    }
}

impl<W: Distance> TourSolver<W> for ExhaustiveSolver {
    fn solve(
        &mut self,
        matrix: &DistanceMatrix<W>,
        scope: &mut SolverScope<'_, W>,
    ) -> Result<Tour<W>> {
        if matrix.is_empty() {
            return Err(TourForgeError::EmptyInput);
        }

        match self.exhaustive_type {
            ExhaustiveType::BruteForce => self.brute_force_search(matrix, scope),
            ExhaustiveType::BranchAndBound => self.branch_and_bound_search(matrix, scope),
        }

        scope
            .best_tour()
            .cloned()
            .ok_or_else(|| TourForgeError::Internal("exhaustive search evaluated no tour".into()))
    }

    fn solver_type_name(&self) -> &'static str {
        match self.exhaustive_type {
            ExhaustiveType::BruteForce => "BruteForce",
            ExhaustiveType::BranchAndBound => "BranchAndBound",
        }
    }
}

struct BranchAndBound<'m, 's, 'a, W: Distance> {
    matrix: &'m DistanceMatrix<W>,
    scope: &'s mut SolverScope<'a, W>,
    path: Vec<usize>,
    visited: Vec<bool>,
    node_limit: Option<u64>,
    evaluated: u64,
    pruned: u64,
    stopped: bool,
}

impl<W: Distance> BranchAndBound<'_, '_, '_, W> {
    fn descend(&mut self, partial: W) {
        let n = self.matrix.size();
        let last = self.path[self.path.len() - 1];

        if self.path.len() == n {
            let closing = if n > 1 {
                self.matrix.get(last, self.path[0])
            } else {
                W::zero()
            };
            let length = partial.saturating_add(closing);
            self.scope.record_evaluation();
            self.scope.increment_step_count();
            self.scope.offer_tour(&self.path, length);
            self.evaluated += 1;
            if self.node_limit.is_some_and(|limit| self.evaluated >= limit) {
                self.scope.mark_terminated();
                self.stopped = true;
            }
            return;
        }

        for next in 0..n {
            if self.visited[next] {
                continue;
            }
            let extended = partial.saturating_add(self.matrix.get(last, next));
            // Weights are non-negative: no completion can beat the best.
            if self.scope.best_length().is_some_and(|best| extended >= best) {
                self.pruned += 1;
                continue;
            }
            if self.scope.best_tour().is_some() && self.scope.should_terminate() {
                self.stopped = true;
                return;
            }

            self.visited[next] = true;
            self.path.push(next);
            self.descend(extended);
            self.path.pop();
            self.visited[next] = false;

            if self.stopped {
                return;
            }
        }
    }
}

/// Rearranges `items` into the next lexicographic permutation.
///
/// Returns false (leaving `items` unchanged) if it is already the last one.
fn next_permutation(items: &mut [usize]) -> bool {
    if items.len() < 2 {
        return false;
    }
    let mut i = items.len() - 1;
    while i > 0 && items[i - 1] >= items[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = items.len() - 1;
    while items[j] <= items[i - 1] {
        j -= 1;
    }
    items.swap(i - 1, j);
    items[i..].reverse();
    true
}

/// Solves exactly with brute force and no termination.
///
/// # Errors
///
/// Returns `EmptyInput` if the matrix has no cities.
pub fn solve_exact<W: Distance>(matrix: &DistanceMatrix<W>) -> Result<Tour<W>> {
    let mut scope = SolverScope::new();
    scope.start_solving();
    ExhaustiveSolver::brute_force().solve(matrix, &mut scope)
}

#[cfg(test)]
mod tests;
