//! Tests for exhaustive search.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use super::*;
use crate::termination::StepCountTermination;
use tourforge_core::Route;
use tourforge_test::matrices;

fn solve_with<W: Distance>(solver: &mut ExhaustiveSolver, matrix: &DistanceMatrix<W>) -> Tour<W> {
    let mut scope = SolverScope::new();
    scope.start_solving();
    solver.solve(matrix, &mut scope).unwrap()
}

#[test]
fn test_next_permutation_lexicographic() {
    let mut items = vec![0, 1, 2];
    let mut seen = vec![items.clone()];
    while next_permutation(&mut items) {
        seen.push(items.clone());
    }
    assert_eq!(
        seen,
        vec![
            vec![0, 1, 2],
            vec![0, 2, 1],
            vec![1, 0, 2],
            vec![1, 2, 0],
            vec![2, 0, 1],
            vec![2, 1, 0],
        ]
    );
    assert!(!next_permutation(&mut []));
    assert!(!next_permutation(&mut [7]));
}

#[test]
fn test_four_city_optimum() {
    let tour = solve_exact(&matrices::four_cities()).unwrap();
    assert_eq!(tour.length, 80);
    assert_eq!(tour.route.cities(), &[0, 1, 3, 2]);
}

#[test]
fn test_single_city() {
    let matrix = DistanceMatrix::from_rows(vec![vec![5u32]]).unwrap();
    for mut solver in [ExhaustiveSolver::brute_force(), ExhaustiveSolver::branch_and_bound()] {
        let tour = solve_with(&mut solver, &matrix);
        assert_eq!(tour.route, Route::identity(1));
        assert_eq!(tour.length, 0);
    }
}

#[test]
fn test_empty_matrix_rejected() {
    let matrix = DistanceMatrix::<u32>::from_rows(Vec::new()).unwrap();
    assert_eq!(solve_exact(&matrix), Err(TourForgeError::EmptyInput));
}

fn full_enumeration<W: Distance>(matrix: &DistanceMatrix<W>) -> (Vec<usize>, W) {
    let mut all: Vec<usize> = (0..matrix.size()).collect();
    let mut best = (all.clone(), tour_length(matrix, &all));
    while next_permutation(&mut all) {
        let length = tour_length(matrix, &all);
        if length < best.1 {
            best = (all.clone(), length);
        }
    }
    best
}

#[test]
fn test_matches_full_enumeration_on_floats() {
    // Float sums depend on the starting city, so the best tour may not
    // begin at city 0.
    for seed in 0..20 {
        let matrix = matrices::random_asymmetric(6, seed);
        let (route, length) = full_enumeration(&matrix);
        for mut solver in [ExhaustiveSolver::brute_force(), ExhaustiveSolver::branch_and_bound()] {
            let tour = solve_with(&mut solver, &matrix);
            assert_eq!(tour.route.cities(), route.as_slice(), "seed {seed}");
            assert_eq!(tour.length, length, "seed {seed}");
        }
    }
}

#[test]
fn test_brute_force_evaluates_every_order() {
    let mut scope = SolverScope::new();
    scope.start_solving();
    ExhaustiveSolver::brute_force()
        .solve(&matrices::random_symmetric(5, 2), &mut scope)
        .unwrap();
    assert_eq!(scope.stats().tours_evaluated, 120);
}

#[test]
fn test_branch_and_bound_agrees_with_brute_force() {
    for seed in 0..5 {
        let matrix = matrices::random_integer_symmetric(8, seed);
        let brute = solve_with(&mut ExhaustiveSolver::brute_force(), &matrix);
        let bounded = solve_with(&mut ExhaustiveSolver::branch_and_bound(), &matrix);
        assert_eq!(brute, bounded, "seed {seed}");
    }
}

#[test]
fn test_branch_and_bound_prunes() {
    let matrix = matrices::random_integer_symmetric(8, 11);
    let mut scope = SolverScope::new();
    scope.start_solving();
    ExhaustiveSolver::branch_and_bound()
        .solve(&matrix, &mut scope)
        .unwrap();
    // 8! = 40320 complete tours without pruning.
    assert!(scope.stats().tours_evaluated < 40320);
    assert!(!scope.is_terminated());
}

#[test]
fn test_node_limit_terminates_early() {
    let matrix = matrices::random_symmetric(7, 5);
    let mut scope = SolverScope::new();
    scope.start_solving();
    let tour = ExhaustiveSolver::brute_force()
        .with_node_limit(10)
        .solve(&matrix, &mut scope)
        .unwrap();
    assert!(scope.is_terminated());
    assert_eq!(scope.stats().tours_evaluated, 10);
    assert!(tour.route.validate(7).is_ok());
}

#[test]
fn test_step_termination_returns_best_so_far() {
    let matrix = matrices::random_symmetric(7, 9);
    let termination = StepCountTermination::new(3);
    let mut scope = SolverScope::new().with_termination(&termination);
    scope.start_solving();
    let tour = ExhaustiveSolver::brute_force()
        .solve(&matrix, &mut scope)
        .unwrap();
    assert!(scope.is_terminated());
    assert_eq!(scope.total_step_count(), 3);
    assert_eq!(tour.length, tour_length(&matrix, tour.route.cities()));
}

#[test]
fn test_preset_flag_still_yields_a_tour() {
    let matrix = matrices::four_cities();
    let mut scope = SolverScope::new();
    scope.set_terminate_early_flag(Arc::new(AtomicBool::new(true)));
    scope.start_solving();
    let tour = ExhaustiveSolver::branch_and_bound()
        .solve(&matrix, &mut scope)
        .unwrap();
    assert_eq!(tour.route.cities(), &[0, 1, 2, 3]);
    assert!(scope.is_terminated());
}

#[test]
fn test_unreachable_edges_are_avoided() {
    let matrix = DistanceMatrix::from_rows(vec![
        vec![0.0, 1.0, f64::INFINITY, 1.0],
        vec![1.0, 0.0, 1.0, f64::INFINITY],
        vec![f64::INFINITY, 1.0, 0.0, 1.0],
        vec![1.0, f64::INFINITY, 1.0, 0.0],
    ])
    .unwrap();
    let tour = solve_exact(&matrix).unwrap();
    assert_eq!(tour.length, 4.0);
    assert_eq!(tour.route.cities(), &[0, 1, 2, 3]);
}
