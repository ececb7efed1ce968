//! Error types for session setup and entity creation

use thiserror::Error;

use crate::sim::EntityKind;

/// Simulation error type
#[derive(Debug, Error)]
pub enum SimError {
    /// A width, height or radius was zero, negative or not finite
    #[error("invalid {what}: {value} (must be positive and finite)")]
    InvalidDimension { what: &'static str, value: f32 },

    /// A second paddle or ball was created in the same store
    #[error("a {0:?} already exists in this store")]
    DuplicateEntity(EntityKind),

    /// Configuration rejected by validation
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Configuration document failed to parse
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SimError {
    /// Check that a dimension is strictly positive and finite
    pub(crate) fn check_dimension(what: &'static str, value: f32) -> Result<f32, SimError> {
        if value.is_finite() && value > 0.0 {
            Ok(value)
        } else {
            Err(SimError::InvalidDimension { what, value })
        }
    }
}
