//! Solver statistics.
//!
//! Plain counters for solve performance tracking.

use std::time::{Duration, Instant};

/// Solve-level statistics.
///
/// # Example
///
/// ```
/// use tourforge_solver::stats::SolverStats;
///
/// let mut stats = SolverStats::default();
/// stats.start();
/// stats.record_step();
/// stats.record_evaluation();
/// stats.record_evaluation();
/// stats.record_improvement();
///
/// assert_eq!(stats.step_count, 1);
/// assert_eq!(stats.tours_evaluated, 2);
/// assert_eq!(stats.improvements, 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct SolverStats {
    start_time: Option<Instant>,
    /// Steps taken: complete permutations, 2-opt passes or pipeline stages.
    pub step_count: u64,
    /// Total tour length evaluations performed.
    pub tours_evaluated: u64,
    /// Number of times the best tour improved.
    pub improvements: u64,
}

impl SolverStats {
    /// Marks the start of solving.
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Returns the elapsed time since solving started.
    pub fn elapsed(&self) -> Duration {
        self.start_time.map(|t| t.elapsed()).unwrap_or_default()
    }

    /// Records a step completion.
    pub fn record_step(&mut self) {
        self.step_count += 1;
    }

    /// Records a tour length evaluation.
    pub fn record_evaluation(&mut self) {
        self.tours_evaluated += 1;
    }

    /// Records an improvement of the best tour.
    pub fn record_improvement(&mut self) {
        self.improvements += 1;
    }

    /// Returns the tour evaluation rate.
    pub fn evaluations_per_second(&self) -> f64 {
        let secs = self.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.tours_evaluated as f64 / secs
        } else {
            0.0
        }
    }
}
