//! Termination conditions for solvers.

mod composite;
mod external;
mod limits;

use std::fmt::Debug;

use tourforge_core::Distance;

use crate::scope::SolverScope;

pub use composite::OrTermination;
pub use external::ExternalTermination;
pub use limits::{StepCountTermination, TimeTermination};

/// Trait for determining when to stop solving.
///
/// # Type Parameters
/// * `W` - The distance type of the matrix being solved
pub trait Termination<W: Distance>: Send + Debug {
    /// Returns true if solving should terminate.
    fn is_terminated(&self, solver_scope: &SolverScope<'_, W>) -> bool;
}

/// Marker type indicating no termination.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTermination;

impl<W: Distance> Termination<W> for NoTermination {
    fn is_terminated(&self, _solver_scope: &SolverScope<'_, W>) -> bool {
        false
    }
}

impl<W: Distance, T: Termination<W>> Termination<W> for Option<T> {
    fn is_terminated(&self, solver_scope: &SolverScope<'_, W>) -> bool {
        match self {
            Some(t) => t.is_terminated(solver_scope),
            None => false,
        }
    }
}
