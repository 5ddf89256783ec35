//! Solve-level scope.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tourforge_core::{Distance, Route, Tour};
use tracing::trace;

use crate::stats::SolverStats;
use crate::termination::Termination;

/// Callback invoked whenever the best tour improves. `'a` lets a scope
/// borrow a closure that captures locals.
pub type BestTourCallback<'a, W> = dyn Fn(&Tour<W>) + Send + Sync + 'a;

/// Top-level scope for one solve.
///
/// Tracks timing, step counts and the best tour found so far, and answers
/// whether the solver should stop early. Solvers check
/// [`SolverScope::should_terminate`] between permutations or passes.
pub struct SolverScope<'a, W: Distance> {
    start_time: Option<Instant>,
    stats: SolverStats,
    best_tour: Option<Tour<W>>,
    termination: Option<&'a dyn Termination<W>>,
    terminate_early_flag: Option<Arc<AtomicBool>>,
    best_tour_callback: Option<&'a BestTourCallback<'a, W>>,
    terminated: bool,
}

impl<'a, W: Distance> SolverScope<'a, W> {
    pub fn new() -> Self {
        Self {
            start_time: None,
            stats: SolverStats::default(),
            best_tour: None,
            termination: None,
            terminate_early_flag: None,
            best_tour_callback: None,
            terminated: false,
        }
    }

    pub fn with_termination(mut self, termination: &'a dyn Termination<W>) -> Self {
        self.termination = Some(termination);
        self
    }

    pub fn with_best_tour_callback(mut self, callback: &'a BestTourCallback<'a, W>) -> Self {
        self.best_tour_callback = Some(callback);
        self
    }

    pub fn set_terminate_early_flag(&mut self, flag: Arc<AtomicBool>) {
        self.terminate_early_flag = Some(flag);
    }

    pub fn start_solving(&mut self) {
        self.start_time = Some(Instant::now());
        self.stats.start();
    }

    pub fn elapsed(&self) -> Option<Duration> {
        self.start_time.map(|t| t.elapsed())
    }

    pub fn increment_step_count(&mut self) -> u64 {
        self.stats.record_step();
        self.stats.step_count
    }

    pub fn total_step_count(&self) -> u64 {
        self.stats.step_count
    }

    pub fn record_evaluation(&mut self) {
        self.stats.record_evaluation();
    }

    pub fn stats(&self) -> &SolverStats {
        &self.stats
    }

    pub fn best_tour(&self) -> Option<&Tour<W>> {
        self.best_tour.as_ref()
    }

    pub fn best_length(&self) -> Option<W> {
        self.best_tour.as_ref().map(|t| t.length)
    }

    /// Offers a candidate tour. It becomes the best tour only if there is
    /// none yet or it is strictly shorter, so ties keep the earlier tour.
    ///
    /// Returns true if the candidate was adopted.
    pub fn offer_tour(&mut self, cities: &[usize], length: W) -> bool {
        let improves = match &self.best_tour {
            None => true,
            Some(best) => length < best.length,
        };
        if !improves {
            return false;
        }

        let tour = Tour::new(Route::new(cities.to_vec()), length);
        trace!(event = "best_tour", step = self.stats.step_count, length = %length);
        if let Some(callback) = self.best_tour_callback {
            callback(&tour);
        }
        if self.best_tour.is_some() {
            self.stats.record_improvement();
        }
        self.best_tour = Some(tour);
        true
    }

    /// Returns true if solving should stop now. Once true, stays true.
    pub fn should_terminate(&mut self) -> bool {
        if self.terminated {
            return true;
        }
        let flagged = self
            .terminate_early_flag
            .as_ref()
            .is_some_and(|f| f.load(Ordering::SeqCst));
        let limited = match self.termination {
            Some(t) => t.is_terminated(self),
            None => false,
        };
        self.terminated = flagged || limited;
        self.terminated
    }

    /// Records that the solver stopped before completing its search.
    pub fn mark_terminated(&mut self) {
        self.terminated = true;
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Consumes the scope, returning the best tour and the statistics.
    pub fn into_parts(self) -> (Option<Tour<W>>, SolverStats) {
        (self.best_tour, self.stats)
    }
}

impl<W: Distance> Default for SolverScope<'_, W> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::termination::StepCountTermination;
    use std::sync::Mutex;

    #[test]
    fn test_offer_keeps_first_of_ties() {
        let mut scope = SolverScope::<u32>::new();
        assert!(scope.offer_tour(&[0, 1, 2], 10));
        assert!(!scope.offer_tour(&[0, 2, 1], 10));
        assert_eq!(scope.best_tour().unwrap().route.cities(), &[0, 1, 2]);
        assert!(scope.offer_tour(&[0, 2, 1], 9));
        assert_eq!(scope.best_length(), Some(9));
        assert_eq!(scope.stats().improvements, 1);
    }

    #[test]
    fn test_callback_sees_each_improvement() {
        let seen = Mutex::new(Vec::new());
        let callback = |tour: &Tour<u32>| seen.lock().unwrap().push(tour.length);
        let mut scope = SolverScope::new().with_best_tour_callback(&callback);
        scope.offer_tour(&[0, 1], 8);
        scope.offer_tour(&[1, 0], 8);
        scope.offer_tour(&[1, 0], 3);
        assert_eq!(*seen.lock().unwrap(), vec![8, 3]);
    }

    #[test]
    fn test_terminate_early_flag() {
        let flag = Arc::new(AtomicBool::new(false));
        let mut scope = SolverScope::<f64>::new();
        scope.set_terminate_early_flag(flag.clone());
        assert!(!scope.should_terminate());
        flag.store(true, Ordering::SeqCst);
        assert!(scope.should_terminate());
        flag.store(false, Ordering::SeqCst);
        assert!(scope.should_terminate());
        assert!(scope.is_terminated());
    }

    #[test]
    fn test_termination_condition() {
        let termination = StepCountTermination::new(2);
        let mut scope = SolverScope::<f64>::new().with_termination(&termination);
        scope.increment_step_count();
        assert!(!scope.should_terminate());
        scope.increment_step_count();
        assert!(scope.should_terminate());
    }
}
