//! Error types for the solvers.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TspError>;

/// Precondition violations reported by the distance model and solvers.
///
/// Every variant is a programming or configuration error detected at the
/// entry of an operation. None of them is transient.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TspError {
    /// Distance requested between points of different dimensionality.
    #[error("dimension mismatch: {left}-d point vs {right}-d point")]
    DimensionMismatch {
        /// Dimension of the first point.
        left: usize,
        /// Dimension of the second point.
        right: usize,
    },

    /// A tour needs at least two stops.
    #[error("degenerate tour: {len} point(s), at least 2 required")]
    DegenerateTour {
        /// Number of points supplied.
        len: usize,
    },

    /// A tour refers to a city that does not exist.
    #[error("city index {index} out of range for {len} cities")]
    CityOutOfRange {
        /// Offending index.
        index: usize,
        /// Number of cities.
        len: usize,
    },

    /// The exhaustive search refuses instances above its ceiling.
    #[error("search space too large: {cities} cities exceeds the limit of {max_cities}")]
    SearchSpaceTooLarge {
        /// Number of cities requested.
        cities: usize,
        /// Configured ceiling.
        max_cities: usize,
    },

    /// The annealing schedule would never terminate or is ill-formed.
    #[error("invalid annealing schedule: {0}")]
    InvalidAnnealingSchedule(String),
}
