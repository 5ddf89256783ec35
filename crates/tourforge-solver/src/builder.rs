//! Builder module for constructing tour solvers from configuration
//!
//! This module provides the wiring between configuration types and
//! the solver implementations.

use tourforge_config::{SolverConfig, StrategyType};
use tourforge_core::Distance;

use crate::approximation::ChristofidesSolver;
use crate::exhaustive::ExhaustiveSolver;
use crate::solver::TourSolver;
use crate::two_opt::TwoOptSolver;

/// Builder for constructing solvers from configuration.
pub struct TourSolverBuilder;

impl TourSolverBuilder {
    /// Builds the solver for `config.strategy` with that strategy's settings.
    pub fn build<W: Distance>(config: &SolverConfig) -> Box<dyn TourSolver<W>> {
        match config.strategy {
            StrategyType::BruteForce => Box::new(ExhaustiveSolver::from_config(&config.exhaustive)),
            StrategyType::TwoOpt => Box::new(TwoOptSolver::from_config(&config.local_search)),
            StrategyType::Approximation => {
                Box::new(ChristofidesSolver::from_config(&config.approximation))
            }
        }
    }
}
