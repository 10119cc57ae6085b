//! Error types for marga

use thiserror::Error;

/// Crate-level error returned synchronously by the router entry points.
#[derive(Error, Debug)]
pub enum MargaError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Failed to spawn planning worker: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Invalid motion profile or planner settings.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be positive, got {value}")]
    NonPositive { field: &'static str, value: f32 },

    #[error("{field} must be finite")]
    NonFinite { field: &'static str },

    #[error("surface band is inverted: min {min} > max {max}")]
    InvertedSurfaceBand { min: f32, max: f32 },

    #[error("max_expansions must be at least 1")]
    ZeroExpansionBudget,
}

/// Failure of an external world service query.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorldError {
    #[error("no terrain data at ({x}, {z})")]
    OutOfBounds { x: f32, z: f32 },

    #[error("world service unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, MargaError>;

/// Reject non-finite or non-positive values.
pub(crate) fn require_positive(field: &'static str, value: f32) -> std::result::Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { field });
    }
    if value <= 0.0 {
        return Err(ConfigError::NonPositive { field, value });
    }
    Ok(())
}
