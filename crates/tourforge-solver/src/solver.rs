//! Solver front end.

use std::fmt::{self, Debug};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tourforge_config::{SolverConfig, StrategyType};
use tourforge_core::{Distance, DistanceMatrix, Result, Tour};
use tracing::{info, warn};

use crate::builder::TourSolverBuilder;
use crate::scope::{BestTourCallback, SolverScope};
use crate::stats::SolverStats;
use crate::termination::{ExternalTermination, OrTermination, StepCountTermination, TimeTermination};

/// Exhaustive searches above this many cities warn when nothing bounds them.
const UNBOUNDED_EXHAUSTIVE_WARN_SIZE: usize = 12;

/// A tour construction or improvement algorithm.
///
/// Implementations read the matrix, report candidate tours to the scope and
/// return the tour they settle on. They check
/// [`SolverScope::should_terminate`] at their own safe points.
pub trait TourSolver<W: Distance>: Send + Debug {
    /// Solves the instance described by `matrix`.
    fn solve(&mut self, matrix: &DistanceMatrix<W>, scope: &mut SolverScope<'_, W>)
        -> Result<Tour<W>>;

    /// Returns the name of this solver type.
    fn solver_type_name(&self) -> &'static str;
}

/// How a solve ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    /// The algorithm ran to its natural end.
    Completed,
    /// A limit or an external request stopped it; the tour is the best seen.
    Terminated,
}

/// Outcome of [`Solver::solve`].
#[derive(Debug, Clone)]
pub struct SolveResult<W> {
    pub tour: Tour<W>,
    pub status: SolveStatus,
    pub stats: SolverStats,
    pub strategy: StrategyType,
}

impl<W> SolveResult<W> {
    pub fn is_terminated(&self) -> bool {
        self.status == SolveStatus::Terminated
    }
}

/// Configured entry point for solving a matrix.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use tourforge_core::DistanceMatrix;
/// use tourforge_solver::{Solver, SolveStatus, StrategyType};
///
/// let matrix = DistanceMatrix::from_rows(vec![
///     vec![0.0, 10.0, 15.0, 20.0],
///     vec![10.0, 0.0, 35.0, 25.0],
///     vec![15.0, 35.0, 0.0, 30.0],
///     vec![20.0, 25.0, 30.0, 0.0],
/// ]).unwrap();
///
/// let result = Solver::new(StrategyType::BruteForce)
///     .with_time_limit(Duration::from_secs(5))
///     .solve(&matrix)
///     .unwrap();
/// assert_eq!(result.tour.length, 80.0);
/// assert_eq!(result.status, SolveStatus::Completed);
/// ```
pub struct Solver<W: Distance = f64> {
    config: SolverConfig,
    time_limit: Option<Duration>,
    step_limit: Option<u64>,
    terminate_early_flag: Arc<AtomicBool>,
    best_tour_callback: Option<Box<BestTourCallback<'static, W>>>,
}

impl<W: Distance> Debug for Solver<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Solver")
            .field("strategy", &self.config.strategy)
            .field("time_limit", &self.time_limit)
            .field("step_limit", &self.step_limit)
            .finish()
    }
}

impl<W: Distance> Solver<W> {
    /// Creates a solver for `strategy` with default settings and no limits.
    pub fn new(strategy: StrategyType) -> Self {
        Self::from_config(SolverConfig::new().with_strategy(strategy))
    }

    /// Creates a solver from a full configuration, including its limits.
    pub fn from_config(config: SolverConfig) -> Self {
        let time_limit = config.time_limit();
        let step_limit = config.termination.as_ref().and_then(|t| t.step_count_limit);
        Self {
            config,
            time_limit,
            step_limit,
            terminate_early_flag: Arc::new(AtomicBool::new(false)),
            best_tour_callback: None,
        }
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    pub fn with_step_limit(mut self, limit: u64) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// Shares a cancellation flag; setting it stops the search at the next
    /// safe point.
    pub fn with_terminate(mut self, flag: Arc<AtomicBool>) -> Self {
        self.terminate_early_flag = flag;
        self
    }

    /// Registers a callback invoked each time a better tour is found.
    pub fn with_best_tour_callback<F>(mut self, callback: F) -> Self
    where
        F: Fn(&Tour<W>) + Send + Sync + 'static,
    {
        self.best_tour_callback = Some(Box::new(callback));
        self
    }

    /// Requests termination of a solve in progress. Thread-safe.
    pub fn terminate_early(&self) {
        self.terminate_early_flag.store(true, Ordering::SeqCst);
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn strategy(&self) -> StrategyType {
        self.config.strategy
    }

    /// Runs the configured strategy on `matrix`.
    ///
    /// # Errors
    ///
    /// Propagates the strategy's error: `EmptyInput` for an empty matrix,
    /// `DisconnectedGraph` from the approximation.
    pub fn solve(&self, matrix: &DistanceMatrix<W>) -> Result<SolveResult<W>> {
        let mut solver = TourSolverBuilder::build::<W>(&self.config);
        let strategy = self.config.strategy;

        if strategy == StrategyType::BruteForce
            && matrix.size() > UNBOUNDED_EXHAUSTIVE_WARN_SIZE
            && self.time_limit.is_none()
            && self.step_limit.is_none()
            && self.config.exhaustive.node_limit.is_none()
        {
            warn!(
                cities = matrix.size(),
                "Exhaustive search without a limit may not finish, consider a time limit"
            );
        }

        let termination = OrTermination::new((
            self.time_limit.map(TimeTermination::new),
            self.step_limit.map(StepCountTermination::new),
            ExternalTermination::new(self.terminate_early_flag.clone()),
        ));
        let mut scope = SolverScope::new().with_termination(&termination);
        if let Some(callback) = &self.best_tour_callback {
            scope = scope.with_best_tour_callback(callback.as_ref());
        }

        info!(
            event = "solve_start",
            strategy = %strategy,
            solver = solver.solver_type_name(),
            cities = matrix.size(),
            time_limit_ms = self.time_limit.map(|d| d.as_millis() as u64),
        );
        scope.start_solving();

        let tour = solver.solve(matrix, &mut scope)?;
        let status = if scope.is_terminated() {
            SolveStatus::Terminated
        } else {
            SolveStatus::Completed
        };
        let (_, stats) = scope.into_parts();

        info!(
            event = "solve_end",
            strategy = %strategy,
            length = %tour.length,
            steps = stats.step_count,
            tours_evaluated = stats.tours_evaluated,
            duration_ms = stats.elapsed().as_millis() as u64,
            terminated = status == SolveStatus::Terminated,
        );

        Ok(SolveResult {
            tour,
            status,
            stats,
            strategy,
        })
    }
}
