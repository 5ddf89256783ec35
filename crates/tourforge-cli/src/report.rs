//! Run summaries printed after each solve.

use std::fmt;
use std::path::Path;
use std::time::Duration;

use tourforge::{SolveResult, SolveStatus};

/// What one strategy produced for one file.
pub struct Report<'a> {
    pub file: &'a Path,
    pub result: &'a SolveResult<f64>,
    pub wall_time: Duration,
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tour = &self.result.tour;
        writeln!(f, "File: {}", self.file.display())?;
        writeln!(f, "Algorithm: {}", self.result.strategy)?;
        writeln!(f, "Best route: {}", tour.route)?;
        writeln!(f, "Distance: {}", tour.length)?;
        if self.result.status == SolveStatus::Terminated {
            writeln!(f, "Status: terminated early, best tour so far")?;
        }
        write!(
            f,
            "Execution time: {:.6} seconds",
            self.wall_time.as_secs_f64()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tourforge::{DistanceMatrix, Solver, StrategyType};

    fn four_cities() -> DistanceMatrix<f64> {
        DistanceMatrix::from_rows(vec![
            vec![0.0, 10.0, 15.0, 20.0],
            vec![10.0, 0.0, 35.0, 25.0],
            vec![15.0, 35.0, 0.0, 30.0],
            vec![20.0, 25.0, 30.0, 0.0],
        ])
        .unwrap()
    }

    #[test]
    fn test_completed_report() {
        let result = Solver::new(StrategyType::BruteForce)
            .solve(&four_cities())
            .unwrap();
        let report = Report {
            file: Path::new("data/four.txt"),
            result: &result,
            wall_time: Duration::from_millis(1500),
        };
        assert_eq!(
            report.to_string(),
            "File: data/four.txt\n\
             Algorithm: brute-force\n\
             Best route: 0 -> 1 -> 3 -> 2 -> 0\n\
             Distance: 80\n\
             Execution time: 1.500000 seconds"
        );
    }

    #[test]
    fn test_terminated_report() {
        let result = Solver::new(StrategyType::BruteForce)
            .with_step_limit(1)
            .solve(&four_cities())
            .unwrap();
        let report = Report {
            file: Path::new("m.txt"),
            result: &result,
            wall_time: Duration::ZERO,
        };
        let text = report.to_string();
        assert!(text.contains("Distance: 95"));
        assert!(text.contains("Status: terminated early"));
    }
}
