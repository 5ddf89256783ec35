//! External termination via AtomicBool flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tourforge_core::Distance;

use super::Termination;
use crate::scope::SolverScope;

/// Terminates when an external flag is set.
///
/// Allows another thread to cancel a long exhaustive search by setting a
/// shared `AtomicBool`.
///
/// # Example
///
/// ```
/// use std::sync::atomic::{AtomicBool, Ordering};
/// use std::sync::Arc;
/// use tourforge_solver::termination::ExternalTermination;
///
/// let flag = Arc::new(AtomicBool::new(false));
/// let term = ExternalTermination::new(flag.clone());
///
/// // Later, from anywhere:
/// flag.store(true, Ordering::SeqCst);
/// ```
#[derive(Debug, Clone)]
pub struct ExternalTermination {
    flag: Arc<AtomicBool>,
}

impl ExternalTermination {
    /// Creates a termination that checks the given flag.
    pub fn new(flag: Arc<AtomicBool>) -> Self {
        Self { flag }
    }
}

impl<W: Distance> Termination<W> for ExternalTermination {
    fn is_terminated(&self, _solver_scope: &SolverScope<'_, W>) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
