//! Spanning tree approximation (Christofides-style construct and shortcut).
//!
//! The pipeline runs four stages, each consuming the previous one's output:
//!
//! 1. [`spanning_tree::prim`] builds a minimum spanning tree from city 0
//! 2. the tree's odd-degree vertices are paired by [`matching`]
//! 3. tree and matching edges form an even-degree multigraph whose
//!    Eulerian circuit is found by [`euler::Multigraph::eulerian_circuit`]
//! 4. [`shortcut::shortcut`] keeps the first visit to every city
//!
//! With an exact matching on a metric matrix the result is at most 1.5
//! times the optimum. Greedy matching is the default and carries no such
//! bound.

pub mod euler;
pub mod matching;
pub mod shortcut;
pub mod spanning_tree;

use tourforge_config::{ApproximationConfig, MatchingType};
use tourforge_core::{Distance, DistanceMatrix, Result, Tour, TourForgeError};
use tracing::{debug, warn};

use crate::evaluator::tour_length;
use crate::scope::SolverScope;
use crate::solver::TourSolver;

use self::euler::Multigraph;
use self::matching::Matching;

/// Largest odd-vertex set matched exactly; bigger sets fall back to greedy.
pub const EXACT_MATCHING_LIMIT: usize = 20;

/// Construct-and-shortcut approximation solver.
///
/// Runs to completion once started; termination is not consulted between
/// stages. Fails with `DisconnectedGraph` only when the spanning tree cannot
/// reach every city. Shortcutting may still cross an unreachable edge on a
/// sparse matrix; that tour is returned with its unreachable length.
///
/// # Example
///
/// ```
/// use tourforge_core::DistanceMatrix;
/// use tourforge_solver::approximation::solve_approx;
///
/// let matrix = DistanceMatrix::from_rows(vec![
///     vec![0, 10, 15, 20],
///     vec![10, 0, 35, 25],
///     vec![15, 35, 0, 30],
///     vec![20, 25, 30, 0],
/// ]).unwrap();
///
/// let tour = solve_approx(&matrix).unwrap();
/// assert_eq!(tour.route.len(), 4);
/// assert!(tour.length >= 80);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ChristofidesSolver {
    matching_type: MatchingType,
}

impl ChristofidesSolver {
    pub fn new(matching_type: MatchingType) -> Self {
        Self { matching_type }
    }

    pub fn from_config(config: &ApproximationConfig) -> Self {
        Self::new(config.matching_type)
    }

    pub fn matching_type(&self) -> MatchingType {
        self.matching_type
    }

    fn pair_odd_vertices<W: Distance>(
        &self,
        matrix: &DistanceMatrix<W>,
        odd: &[usize],
    ) -> Result<Matching<W>> {
        match self.matching_type {
            MatchingType::Greedy => matching::greedy(matrix, odd),
            MatchingType::Exact if odd.len() <= EXACT_MATCHING_LIMIT => matching::exact(matrix, odd),
            MatchingType::Exact => {
                warn!(
                    odd_vertices = odd.len(),
                    limit = EXACT_MATCHING_LIMIT,
                    "Too many odd-degree vertices for exact matching, using greedy"
                );
                matching::greedy(matrix, odd)
            }
        }
    }
}

impl<W: Distance> TourSolver<W> for ChristofidesSolver {
    fn solve(
        &mut self,
        matrix: &DistanceMatrix<W>,
        scope: &mut SolverScope<'_, W>,
    ) -> Result<Tour<W>> {
        let n = matrix.size();
        if n == 0 {
            return Err(TourForgeError::EmptyInput);
        }

        let tree = spanning_tree::prim(matrix)?;
        scope.increment_step_count();
        debug!(
            event = "mst_built",
            edges = tree.edges().len(),
            weight = %tree.total_weight(),
        );

        let odd = tree.odd_degree_vertices();
        let matching = self.pair_odd_vertices(matrix, &odd)?;
        scope.increment_step_count();
        debug!(
            event = "matching_built",
            odd_vertices = odd.len(),
            pairs = matching.len(),
            weight = %matching.weight(),
        );

        let mut graph = Multigraph::new(n);
        for edge in tree.edges() {
            graph.add_edge(edge.from, edge.to);
        }
        for &(a, b) in matching.pairs() {
            graph.add_edge(a, b);
        }
        let circuit = graph.eulerian_circuit(0)?;
        scope.increment_step_count();
        debug!(event = "circuit_built", length = circuit.len());

        let route = shortcut::shortcut(&circuit, n)?;
        if let Some((from, to)) = first_unreachable_edge(matrix, route.cities()) {
            warn!(from, to, "Shortcut tour uses an unreachable edge");
        }

        let length = tour_length(matrix, route.cities());
        scope.record_evaluation();
        scope.offer_tour(route.cities(), length);
        Ok(Tour::new(route, length))
    }

    fn solver_type_name(&self) -> &'static str {
        "Christofides"
    }
}

/// First unreachable edge along the closed route.
fn first_unreachable_edge<W: Distance>(
    matrix: &DistanceMatrix<W>,
    cities: &[usize],
) -> Option<(usize, usize)> {
    let n = cities.len();
    if n < 2 {
        return None;
    }
    (0..n)
        .map(|i| (cities[i], cities[(i + 1) % n]))
        .find(|&(from, to)| matrix.get(from, to).is_unreachable())
}

/// Runs the approximation with greedy matching.
///
/// # Errors
///
/// Returns `EmptyInput` for an empty matrix and `DisconnectedGraph` when
/// the spanning tree cannot reach some city through finite edges.
pub fn solve_approx<W: Distance>(matrix: &DistanceMatrix<W>) -> Result<Tour<W>> {
    let mut scope = SolverScope::new();
    scope.start_solving();
    ChristofidesSolver::default().solve(matrix, &mut scope)
}
