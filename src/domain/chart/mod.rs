// Chart surface - coordinate types shared by every projector
pub mod error;
pub mod gauge;
pub mod normalize;
pub mod radar;
pub mod series;

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

pub use error::ProjectionError;

/// A point in the chart's pixel space (+y points down).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectedPoint {
    pub x: f64,
    pub y: f64,
}

impl ProjectedPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[cfg(test)]
    pub fn distance_to(&self, other: &ProjectedPoint) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Ordered vertices rendered as straight segments, optionally closed.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPath {
    pub points: Vec<ProjectedPoint>,
    pub closed: bool,
}

impl ChartPath {
    pub fn open(points: Vec<ProjectedPoint>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    pub fn closed(points: Vec<ProjectedPoint>) -> Self {
        Self {
            points,
            closed: true,
        }
    }

    /// SVG path description: `M x y L x y ...`, terminated by `Z` when closed.
    pub fn path_data(&self) -> String {
        let mut out = self
            .points
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let command = if i == 0 { 'M' } else { 'L' };
                format!("{} {} {}", command, format_coord(point.x), format_coord(point.y))
            })
            .collect::<Vec<_>>()
            .join(" ");
        if self.closed && !self.points.is_empty() {
            out.push_str(" Z");
        }
        out
    }
}

impl fmt::Display for ChartPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path_data())
    }
}

impl Serialize for ChartPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ChartPath", 3)?;
        state.serialize_field("points", &self.points)?;
        state.serialize_field("closed", &self.closed)?;
        state.serialize_field("d", &self.path_data())?;
        state.end()
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: ProjectedPoint,
    pub radius: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartLabel {
    pub text: String,
    pub position: ProjectedPoint,
}

impl ChartLabel {
    pub fn new(text: impl Into<String>, position: ProjectedPoint) -> Self {
        Self {
            text: text.into(),
            position,
        }
    }
}

/// Straight guide line with an optional axis label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub from: ProjectedPoint,
    pub to: ProjectedPoint,
    pub label: Option<ChartLabel>,
}

/// What a renderer receives for one chart: either projected geometry or the
/// neutral placeholder substituted when the input was rejected.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum ChartState<T> {
    Ready(T),
    Empty { reason: String },
}

impl<T> ChartState<T> {
    pub fn from_result(result: Result<T, ProjectionError>) -> Self {
        match result {
            Ok(chart) => ChartState::Ready(chart),
            Err(e) => ChartState::Empty {
                reason: e.to_string(),
            },
        }
    }

    #[cfg(test)]
    pub fn ready(&self) -> Option<&T> {
        match self {
            ChartState::Ready(chart) => Some(chart),
            ChartState::Empty { .. } => None,
        }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        matches!(self, ChartState::Empty { .. })
    }
}

/// Two decimals, trailing zeros dropped, never "-0".
pub(crate) fn format_coord(value: f64) -> String {
    let mut s = format!("{:.2}", value);
    if s.contains('.') {
        let trimmed = s.trim_end_matches('0').trim_end_matches('.').len();
        s.truncate(trimmed);
    }
    if s == "-0" {
        s = "0".to_string();
    }
    s
}
