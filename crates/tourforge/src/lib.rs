//! TourForge - Travelling salesman solvers in Rust
//!
//! Pick a strategy, hand over a distance matrix, get back a tour.
//!
//! # Example
//!
//! ```rust
//! use tourforge::prelude::*;
//!
//! let matrix = DistanceMatrix::from_rows(vec![
//!     vec![0, 10, 15, 20],
//!     vec![10, 0, 35, 25],
//!     vec![15, 35, 0, 30],
//!     vec![20, 25, 30, 0],
//! ]).unwrap();
//!
//! let result = tourforge::solve(&matrix, StrategyType::BruteForce).unwrap();
//! assert_eq!(result.tour.length, 80);
//! println!("{}", result.tour.route); // 0 -> 1 -> 3 -> 2 -> 0
//! ```

// Data model
pub use tourforge_core::{Distance, DistanceMatrix, Result, Route, Tour, TourForgeError};

// Configuration
pub use tourforge_config::{
    ApproximationConfig, ConfigError, ExhaustiveConfig, ExhaustiveType, LocalSearchConfig,
    MatchingType, SolverConfig, StrategyType, TerminationConfig,
};

// Solvers
pub use tourforge_solver::{
    evaluate, solve_2opt, solve_approx, solve_exact, ChristofidesSolver, ExhaustiveSolver,
    SolveResult, SolveStatus, Solver, SolverStats, TourSolver, TwoOptSolver,
};

/// Termination conditions for custom solver wiring.
pub mod termination {
    pub use tourforge_solver::termination::*;
}

#[cfg(feature = "console")]
pub mod console;

/// Solves `matrix` with `strategy`, default settings and no limits.
///
/// # Errors
///
/// `EmptyInput` for an empty matrix, `DisconnectedGraph` when the
/// approximation cannot span every city.
pub fn solve<W: Distance>(matrix: &DistanceMatrix<W>, strategy: StrategyType) -> Result<SolveResult<W>> {
    Solver::new(strategy).solve(matrix)
}

/// Solves `matrix` as described by `config`, limits included.
///
/// # Errors
///
/// Same as [`solve`].
pub fn solve_with_config<W: Distance>(
    matrix: &DistanceMatrix<W>,
    config: SolverConfig,
) -> Result<SolveResult<W>> {
    Solver::from_config(config).solve(matrix)
}

pub mod prelude {
    pub use super::{Distance, DistanceMatrix, Route, Tour, TourForgeError};
    pub use super::{SolveResult, SolveStatus, Solver, SolverConfig, StrategyType};
}
