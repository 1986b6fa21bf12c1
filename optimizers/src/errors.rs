use thiserror::Error;

/// Everything that can go wrong while setting up an optimization run.
/// Stepping an already constructed optimizer cannot fail.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A swarm needs at least one particle to seed its global best from
    #[error("swarm must contain at least one particle")]
    EmptySwarm,

    /// The search space has no dimensions
    #[error("search space must have at least one dimension")]
    ZeroDimensions,

    /// Bounds, particles or objective disagree on the dimensionality
    #[error("expected {expected} dimensions, got {actual}")]
    DimensionMismatch {
        /// The dimensionality that was established first
        expected: usize,
        /// The offending dimensionality
        actual: usize,
    },

    /// The range of a single dimension is empty or not finite
    #[error("invalid bounds [{min}, {max}) for dimension {dimension}")]
    InvalidBounds {
        /// Index of the dimension
        dimension: usize,
        /// Lower bound
        min: f64,
        /// Upper bound
        max: f64,
    },

    /// The velocity clamp can not be satisfied
    #[error("invalid velocity limits [{min}, {max}]")]
    InvalidVelocityLimits {
        /// Lower velocity limit
        min: f64,
        /// Upper velocity limit
        max: f64,
    },

    /// The maximum initial speed must be finite and not negative
    #[error("invalid maximum initial speed {0}")]
    InvalidSpeed(f64),

    /// A lifecycle operation was called out of order
    #[error("operation called out of order: {0}")]
    OutOfOrder(&'static str),
}
