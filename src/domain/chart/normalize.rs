// Normalizer - linear rescaling of a metric into the unit interval
use super::ProjectionError;
use serde::{Deserialize, Serialize};

/// What to do with normalized values that fall outside [0, 1].
///
/// `Overshoot` leaves them alone, so radar vertices can land past the outer
/// ring or fold through the center for extreme readings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClampPolicy {
    #[default]
    Overshoot,
    Clamp,
}

impl ClampPolicy {
    pub fn apply(self, t: f64) -> f64 {
        match self {
            ClampPolicy::Overshoot => t,
            ClampPolicy::Clamp => t.clamp(0.0, 1.0),
        }
    }
}

/// `(value - min) / (max - min)`, with no clamping.
pub fn normalize(value: f64, min: f64, max: f64) -> Result<f64, ProjectionError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(ProjectionError::non_finite("range bound"));
    }
    if !value.is_finite() {
        return Err(ProjectionError::non_finite("value"));
    }
    if max <= min {
        return Err(ProjectionError::InvalidRange { min, max });
    }
    Ok((value - min) / (max - min))
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricRange {
    pub min: f64,
    pub max: f64,
}

impl MetricRange {
    pub fn new(min: f64, max: f64) -> Result<Self, ProjectionError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ProjectionError::non_finite("range bound"));
        }
        if max <= min {
            return Err(ProjectionError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn normalize(&self, value: f64) -> Result<f64, ProjectionError> {
        normalize(value, self.min, self.max)
    }
}

/// A labelled reading together with the range it is plotted against.
/// The value may lie outside the range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricSample {
    pub label: String,
    pub value: f64,
    pub range: MetricRange,
}

impl MetricSample {
    pub fn new(label: impl Into<String>, value: f64, range: MetricRange) -> Self {
        Self {
            label: label.into(),
            value,
            range,
        }
    }

    pub fn normalized(&self) -> Result<f64, ProjectionError> {
        self.range.normalize(self.value)
    }
}
