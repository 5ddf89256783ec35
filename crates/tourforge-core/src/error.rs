//! Error types for TourForge

use thiserror::Error;

/// Main error type for TourForge operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourForgeError {
    /// Matrix is not square or holds a negative or NaN entry
    #[error("Malformed matrix: {0}")]
    MalformedMatrix(String),

    /// No cities to visit
    #[error("Empty input: the distance matrix has no cities")]
    EmptyInput,

    /// No finite-cost edge reaches the given city
    #[error("Disconnected graph: no finite-cost edge reaches city {city}")]
    DisconnectedGraph { city: usize },

    /// Route is not a permutation of the matrix's cities
    #[error("Invalid route: {0}")]
    InvalidRoute(String),

    /// Internal error (should not occur in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for TourForge operations
pub type Result<T> = std::result::Result<T, TourForgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let cases = [
            (TourForgeError::MalformedMatrix("row 1".into()), "Malformed matrix: row 1"),
            (
                TourForgeError::EmptyInput,
                "Empty input: the distance matrix has no cities",
            ),
            (
                TourForgeError::DisconnectedGraph { city: 3 },
                "Disconnected graph: no finite-cost edge reaches city 3",
            ),
            (TourForgeError::InvalidRoute("dup".into()), "Invalid route: dup"),
            (TourForgeError::Internal("x".into()), "Internal error: x"),
        ];
        for (err, message) in cases {
            assert_eq!(err.to_string(), message);
        }
    }
}
