//! Plain-text distance matrix files.
//!
//! One row per line, entries separated by whitespace. Blank lines are
//! skipped. `inf` or `-` marks a pair with no direct edge.
//!
//! ```text
//! 0 10 15 20
//! 10 0 35 25
//! 15 35 0 30
//! 20 25 30 0
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;
use tourforge::{DistanceMatrix, TourForgeError};

/// Errors from reading a matrix file. Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum MatrixFileError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: '{token}' is not a distance")]
    InvalidEntry { line: usize, token: String },

    #[error("line {line}: row has {found} entries, expected {expected}")]
    RowLength {
        line: usize,
        found: usize,
        expected: usize,
    },

    #[error(transparent)]
    Matrix(#[from] TourForgeError),
}

/// Reads and parses the matrix stored at `path`.
pub fn load(path: &Path) -> Result<DistanceMatrix<f64>, MatrixFileError> {
    let text = std::fs::read_to_string(path).map_err(|source| MatrixFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&text)
}

/// Parses matrix text. Row count must equal row length.
pub fn parse(text: &str) -> Result<DistanceMatrix<f64>, MatrixFileError> {
    let mut rows: Vec<Vec<f64>> = Vec::new();
    let mut expected = None;

    for (idx, raw) in text.lines().enumerate() {
        let line = idx + 1;
        if raw.trim().is_empty() {
            continue;
        }
        let row = raw
            .split_whitespace()
            .map(|token| parse_entry(token, line))
            .collect::<Result<Vec<_>, _>>()?;

        let expected = *expected.get_or_insert(row.len());
        if row.len() != expected {
            return Err(MatrixFileError::RowLength {
                line,
                found: row.len(),
                expected,
            });
        }
        rows.push(row);
    }

    Ok(DistanceMatrix::from_rows(rows)?)
}

fn parse_entry(token: &str, line: usize) -> Result<f64, MatrixFileError> {
    match token {
        "-" => Ok(f64::INFINITY),
        _ if token.eq_ignore_ascii_case("inf") => Ok(f64::INFINITY),
        _ => token
            .parse::<f64>()
            .ok()
            .filter(|w| !w.is_nan())
            .ok_or_else(|| MatrixFileError::InvalidEntry {
                line,
                token: token.to_string(),
            }),
    }
}
