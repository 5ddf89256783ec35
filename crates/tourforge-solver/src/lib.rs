//! TourForge Solver Engine
//!
//! This crate provides the travelling salesman solvers and their plumbing:
//! - Tour evaluation
//! - Exhaustive search (brute force and branch-and-bound)
//! - First-improvement 2-opt local search
//! - Spanning tree approximation (Prim, odd-vertex matching, Eulerian
//!   circuit, shortcutting)
//! - Termination conditions and solver statistics
//! - Configuration wiring (builder module)

pub mod approximation;
pub mod builder;
pub mod evaluator;
pub mod exhaustive;
pub mod scope;
pub mod solver;
pub mod stats;
pub mod termination;
pub mod two_opt;

pub use approximation::{solve_approx, ChristofidesSolver};
pub use builder::TourSolverBuilder;
pub use evaluator::{evaluate, tour_length};
pub use exhaustive::{solve_exact, ExhaustiveSolver};
pub use scope::SolverScope;
pub use solver::{SolveResult, SolveStatus, Solver, TourSolver};
pub use stats::SolverStats;
pub use termination::{
    ExternalTermination, NoTermination, OrTermination, StepCountTermination, Termination,
    TimeTermination,
};
pub use two_opt::{solve_2opt, TwoOptSolver};

pub use tourforge_config::{ExhaustiveType, MatchingType, SolverConfig, StrategyType};
pub use tourforge_core::{Distance, DistanceMatrix, Result, Route, Tour, TourForgeError};
