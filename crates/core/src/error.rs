//! Error types for exopack.

use thiserror::Error;

/// Result type alias for exopack operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during sizing and packing.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid circle radius provided.
    #[error("Invalid radius: {0}")]
    InvalidRadius(String),

    /// Invalid container provided.
    #[error("Invalid boundary: {0}")]
    InvalidBoundary(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A circle could not be placed within the attempt budget.
    #[error(
        "Packing infeasible: circle {index} (radius {radius}) not placed after {attempts} attempts"
    )]
    NoPlacement {
        /// Position of the circle in placement order.
        index: usize,
        /// Radius of the circle.
        radius: f64,
        /// Attempts spent on this circle.
        attempts: u64,
    },

    /// Computation cancelled.
    #[error("Computation cancelled")]
    Cancelled,

    /// Timeout exceeded.
    #[error("Timeout exceeded after {0}ms")]
    Timeout(u64),
}

impl Error {
    /// Returns true if a fresh placement pass could succeed where this one failed.
    ///
    /// A circle rejected before any sample was drawn can never fit its region.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::NoPlacement { attempts, .. } if *attempts > 0)
    }
}
