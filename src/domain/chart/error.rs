// Projection errors - input contract violations rejected before any geometry is built
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    #[error("invalid range: max ({max}) must be greater than min ({min})")]
    InvalidRange { min: f64, max: f64 },

    #[error("series is empty")]
    EmptySeries,

    #[error("radar needs exactly {expected} axes, got {found}")]
    AxisCount { expected: usize, found: usize },

    #[error("{field} is not a finite number")]
    NonFinite { field: String },

    #[error("{field} must not be negative (got {value})")]
    NegativeValue { field: String, value: f64 },

    #[error("{field} must be positive (got {value})")]
    NonPositive { field: String, value: f64 },
}

impl ProjectionError {
    pub(crate) fn non_finite(field: impl Into<String>) -> Self {
        ProjectionError::NonFinite {
            field: field.into(),
        }
    }
}
