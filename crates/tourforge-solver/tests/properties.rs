//! Cross-solver properties on seeded instances.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tourforge_solver::{
    evaluate, solve_2opt, solve_approx, solve_exact, tour_length, Route, SolveStatus, Solver,
    SolverScope, StrategyType, TwoOptSolver,
};
use tourforge_test::matrices;

#[test]
fn exact_is_never_beaten() {
    for seed in 0..5 {
        let matrix = matrices::random_symmetric(7, seed);
        let exact = solve_exact(&matrix).unwrap();
        assert!(exact.length <= solve_2opt(&matrix).unwrap().length);
        assert!(exact.length <= solve_approx(&matrix).unwrap().length);
    }
}

#[test]
fn two_opt_output_is_a_fixed_point() {
    for seed in 0..5 {
        let matrix = matrices::random_symmetric(14, seed);
        let first = solve_2opt(&matrix).unwrap();
        assert!(first.length <= tour_length(&matrix, Route::identity(14).cities()));

        let mut scope = SolverScope::new();
        scope.start_solving();
        let again = TwoOptSolver::new()
            .improve(&matrix, first.route.clone(), &mut scope)
            .unwrap();
        assert_eq!(again.route, first.route);
        assert_eq!(scope.stats().improvements, 0);
    }
}

#[test]
fn every_route_is_a_permutation() {
    let matrix = matrices::random_asymmetric(11, 7);
    for strategy in [StrategyType::TwoOpt, StrategyType::Approximation] {
        let result = Solver::new(strategy).solve(&matrix).unwrap();
        assert_eq!(
            evaluate(&result.tour.route, &matrix).unwrap(),
            result.tour.length
        );
    }
}

#[test]
fn zero_time_limit_still_returns_a_tour() {
    let matrix = matrices::random_symmetric(11, 2);
    let result = Solver::new(StrategyType::BruteForce)
        .with_time_limit(Duration::ZERO)
        .solve(&matrix)
        .unwrap();
    assert_eq!(result.status, SolveStatus::Terminated);
    result.tour.route.validate(11).unwrap();
    assert_eq!(result.stats.step_count, 1);
}

#[test]
fn cancellation_from_another_thread() {
    // 14 cities: 13! orders, far beyond what finishes during the test.
    let matrix = matrices::random_symmetric(14, 1);
    let flag = Arc::new(AtomicBool::new(false));
    let remote = flag.clone();
    let canceller = thread::spawn(move || {
        thread::sleep(Duration::from_millis(50));
        remote.store(true, Ordering::SeqCst);
    });

    let result = Solver::new(StrategyType::BruteForce)
        .with_terminate(flag)
        .solve(&matrix)
        .unwrap();
    canceller.join().unwrap();

    assert_eq!(result.status, SolveStatus::Terminated);
    result.tour.route.validate(14).unwrap();
}
