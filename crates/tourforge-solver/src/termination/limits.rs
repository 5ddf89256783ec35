//! Wall-clock and step budgets for a solve.
//!
//! Both budgets are checked between units of work, never inside one: a
//! brute-force permutation, a branch-and-bound leaf or a 2-opt pass always
//! finishes before the solver looks at the clock or the step counter.

use std::time::Duration;

use tourforge_core::Distance;

use super::Termination;
use crate::scope::SolverScope;

/// Stops once the solve has run for `limit`.
///
/// Never fires before [`SolverScope::start_solving`], so a scope that is
/// only being set up cannot be cut short.
///
/// ```
/// use std::time::Duration;
/// use tourforge_solver::termination::TimeTermination;
///
/// let budget = TimeTermination::new(Duration::from_millis(250));
/// assert_eq!(budget.limit(), Duration::from_millis(250));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TimeTermination {
    limit: Duration,
}

impl TimeTermination {
    pub fn new(limit: Duration) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }
}

impl<W: Distance> Termination<W> for TimeTermination {
    fn is_terminated(&self, solver_scope: &SolverScope<'_, W>) -> bool {
        solver_scope.elapsed().is_some_and(|e| e >= self.limit)
    }
}

/// Stops once `limit` steps have been recorded.
///
/// A step is one evaluated permutation for brute force, one complete route
/// for branch and bound and one full pass for 2-opt.
#[derive(Debug, Clone, Copy)]
pub struct StepCountTermination {
    limit: u64,
}

impl StepCountTermination {
    pub fn new(limit: u64) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl<W: Distance> Termination<W> for StepCountTermination {
    fn is_terminated(&self, solver_scope: &SolverScope<'_, W>) -> bool {
        solver_scope.total_step_count() >= self.limit
    }
}
