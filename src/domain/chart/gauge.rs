// Gauge projector - circular progress ring drawn with a stroke dash offset
use super::ProjectionError;
use super::normalize::{ClampPolicy, MetricRange};
use serde::Serialize;
use std::f64::consts::PI;

pub const DEFAULT_GAUGE_RADIUS: f64 = 45.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Gauge {
    pub fraction: f64,
    pub percent: f64,
    pub radius: f64,
    pub circumference: f64,
    /// Stroke dash offset; the visible arc is `circumference - dash_offset`.
    pub dash_offset: f64,
}

pub fn validate_radius(radius: f64) -> Result<(), ProjectionError> {
    if !radius.is_finite() {
        return Err(ProjectionError::non_finite("gauge radius"));
    }
    if radius < 0.0 {
        return Err(ProjectionError::NegativeValue {
            field: "gauge radius".to_string(),
            value: radius,
        });
    }
    Ok(())
}

pub fn project_gauge(
    value: f64,
    range: &MetricRange,
    radius: f64,
    clamp: ClampPolicy,
) -> Result<Gauge, ProjectionError> {
    validate_radius(radius)?;
    let fraction = clamp.apply(range.normalize(value)?);
    let circumference = 2.0 * PI * radius;
    Ok(Gauge {
        fraction,
        percent: fraction * 100.0,
        radius,
        circumference,
        dash_offset: circumference - fraction * circumference,
    })
}
