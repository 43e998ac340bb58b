// Radar projector - six metrics spread evenly around a circle
use super::normalize::{ClampPolicy, MetricSample};
use super::{ChartLabel, ChartPath, Circle, ProjectedPoint, ProjectionError};
use serde::{Deserialize, Serialize};

pub const RADAR_AXES: usize = 6;

/// Concentric grid rings as fractions of the full radius.
pub const GRID_FRACTIONS: [f64; 5] = [0.2, 0.4, 0.6, 0.8, 1.0];

/// Exactly six samples, one per axis, in axis order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarSeries {
    samples: Vec<MetricSample>,
}

impl RadarSeries {
    pub fn samples(&self) -> &[MetricSample] {
        &self.samples
    }
}

impl TryFrom<Vec<MetricSample>> for RadarSeries {
    type Error = ProjectionError;

    fn try_from(samples: Vec<MetricSample>) -> Result<Self, Self::Error> {
        if samples.is_empty() {
            return Err(ProjectionError::EmptySeries);
        }
        if samples.len() != RADAR_AXES {
            return Err(ProjectionError::AxisCount {
                expected: RADAR_AXES,
                found: samples.len(),
            });
        }
        Ok(Self { samples })
    }
}

/// Where the radar sits inside its viewBox.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadarGeometry {
    pub center: ProjectedPoint,
    pub max_radius: f64,
    /// Distance past the outer ring at which axis labels are placed.
    pub label_offset: f64,
}

impl RadarGeometry {
    pub fn validate(&self) -> Result<(), ProjectionError> {
        if !self.center.x.is_finite() || !self.center.y.is_finite() {
            return Err(ProjectionError::non_finite("radar center"));
        }
        if !self.label_offset.is_finite() {
            return Err(ProjectionError::non_finite("label offset"));
        }
        if !self.max_radius.is_finite() {
            return Err(ProjectionError::non_finite("max radius"));
        }
        if self.max_radius < 0.0 {
            return Err(ProjectionError::NegativeValue {
                field: "max radius".to_string(),
                value: self.max_radius,
            });
        }
        Ok(())
    }
}

impl Default for RadarGeometry {
    fn default() -> Self {
        Self {
            center: ProjectedPoint::new(150.0, 150.0),
            max_radius: 120.0,
            label_offset: 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarGrid {
    pub rings: Vec<Circle>,
    pub spokes: Vec<ChartPath>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarChart {
    pub center: ProjectedPoint,
    pub max_radius: f64,
    pub grid: RadarGrid,
    pub polygon: ChartPath,
    pub points: Vec<ProjectedPoint>,
    pub labels: Vec<ChartLabel>,
    pub normalized: Vec<f64>,
}

/// Angle of axis `index`, in degrees clockwise from "up".
pub fn axis_angle(index: usize) -> f64 {
    index as f64 * (360.0 / RADAR_AXES as f64)
}

/// Screen-space point at `radius` along a clockwise-from-up angle.
pub fn polar_point(center: ProjectedPoint, angle_deg: f64, radius: f64) -> ProjectedPoint {
    let radian = (angle_deg - 90.0).to_radians();
    ProjectedPoint::new(
        radian.cos().mul_add(radius, center.x),
        radian.sin().mul_add(radius, center.y),
    )
}

pub fn project_radar(
    series: &RadarSeries,
    geometry: &RadarGeometry,
    clamp: ClampPolicy,
) -> Result<RadarChart, ProjectionError> {
    geometry.validate()?;

    let normalized = series
        .samples()
        .iter()
        .map(|sample| sample.normalized().map(|t| clamp.apply(t)))
        .collect::<Result<Vec<_>, _>>()?;

    let center = geometry.center;
    let rings = GRID_FRACTIONS
        .iter()
        .map(|fraction| Circle {
            center,
            radius: geometry.max_radius * fraction,
        })
        .collect();

    let spokes = (0..RADAR_AXES)
        .map(|i| {
            ChartPath::open(vec![
                center,
                polar_point(center, axis_angle(i), geometry.max_radius),
            ])
        })
        .collect();

    let points: Vec<ProjectedPoint> = normalized
        .iter()
        .enumerate()
        .map(|(i, t)| polar_point(center, axis_angle(i), t * geometry.max_radius))
        .collect();

    let label_radius = geometry.max_radius + geometry.label_offset;
    let labels = series
        .samples()
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            ChartLabel::new(
                sample.label.clone(),
                polar_point(center, axis_angle(i), label_radius),
            )
        })
        .collect();

    Ok(RadarChart {
        center,
        max_radius: geometry.max_radius,
        grid: RadarGrid { rings, spokes },
        polygon: ChartPath::closed(points.clone()),
        points,
        labels,
        normalized,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::chart::normalize::MetricRange;

    const EPS: f64 = 1e-9;

    fn range(min: f64, max: f64) -> MetricRange {
        MetricRange::new(min, max).unwrap()
    }

    fn uniform_series(value: f64) -> RadarSeries {
        (0..RADAR_AXES)
            .map(|i| MetricSample::new(format!("m{}", i), value, range(0.0, 10.0)))
            .collect::<Vec<_>>()
            .try_into()
            .unwrap()
    }

    fn weather_series() -> RadarSeries {
        vec![
            MetricSample::new("Humidity", 65.0, range(0.0, 100.0)),
            MetricSample::new("Pressure", 1013.0, range(950.0, 1050.0)),
            MetricSample::new("Wind", 12.0, range(0.0, 50.0)),
            MetricSample::new("UV", 6.0, range(0.0, 11.0)),
            MetricSample::new("Visibility", 10.0, range(0.0, 20.0)),
            MetricSample::new("Clouds", 40.0, range(0.0, 100.0)),
        ]
        .try_into()
        .unwrap()
    }

    #[test]
    fn test_series_requires_six_axes() {
        assert_eq!(
            RadarSeries::try_from(Vec::new()),
            Err(ProjectionError::EmptySeries)
        );
        let five = vec![MetricSample::new("a", 1.0, range(0.0, 1.0)); 5];
        assert_eq!(
            RadarSeries::try_from(five),
            Err(ProjectionError::AxisCount {
                expected: 6,
                found: 5
            })
        );
    }

    #[test]
    fn test_axis_angles() {
        let angles: Vec<f64> = (0..RADAR_AXES).map(axis_angle).collect();
        assert_eq!(angles, vec![0.0, 60.0, 120.0, 180.0, 240.0, 300.0]);
    }

    #[test]
    fn test_angle_zero_points_up() {
        let center = ProjectedPoint::new(150.0, 150.0);
        let p = polar_point(center, 0.0, 120.0);
        assert!((p.x - 150.0).abs() < EPS);
        assert!((p.y - 30.0).abs() < EPS);

        let right = polar_point(center, 90.0, 120.0);
        assert!((right.x - 270.0).abs() < EPS);
        assert!((right.y - 150.0).abs() < EPS);
    }

    #[test]
    fn test_full_scale_vertices_on_outer_ring() {
        let geometry = RadarGeometry::default();
        let chart =
            project_radar(&uniform_series(10.0), &geometry, ClampPolicy::Overshoot).unwrap();
        for point in &chart.points {
            assert!((point.distance_to(&geometry.center) - geometry.max_radius).abs() < EPS);
        }
    }

    #[test]
    fn test_zero_vertices_collapse_to_center() {
        let geometry = RadarGeometry::default();
        let chart = project_radar(&uniform_series(0.0), &geometry, ClampPolicy::Overshoot).unwrap();
        for point in &chart.points {
            assert!(point.distance_to(&geometry.center) < EPS);
        }
    }

    #[test]
    fn test_vertex_angles_match_axes() {
        let geometry = RadarGeometry::default();
        let chart = project_radar(&uniform_series(7.0), &geometry, ClampPolicy::Overshoot).unwrap();
        for (i, point) in chart.points.iter().enumerate() {
            let dx = point.x - geometry.center.x;
            let dy = point.y - geometry.center.y;
            let angle = (dy.atan2(dx).to_degrees() + 90.0).rem_euclid(360.0);
            let expected = axis_angle(i);
            let diff = (angle - expected).abs();
            assert!(diff < 1e-6 || (360.0 - diff) < 1e-6, "axis {i}: {angle} vs {expected}");
        }
    }

    #[test]
    fn test_weather_scenario() {
        let chart =
            project_radar(&weather_series(), &RadarGeometry::default(), ClampPolicy::Overshoot)
                .unwrap();
        let expected = [0.65, 0.63, 0.24, 6.0 / 11.0, 0.5, 0.4];
        assert_eq!(chart.normalized.len(), 6);
        for (got, want) in chart.normalized.iter().zip(expected) {
            assert!((got - want).abs() < EPS, "{got} vs {want}");
        }
        assert!((chart.normalized[3] - 0.545).abs() < 1e-3);

        assert_eq!(chart.polygon.points.len(), 6);
        assert!(chart.polygon.closed);
        let d = chart.polygon.path_data();
        assert!(d.starts_with("M "));
        assert!(d.ends_with(" Z"));
        assert_eq!(d.matches('L').count(), 5);
    }

    #[test]
    fn test_grid_is_independent_of_data() {
        let geometry = RadarGeometry::default();
        let low = project_radar(&uniform_series(1.0), &geometry, ClampPolicy::Overshoot).unwrap();
        let high = project_radar(&uniform_series(9.0), &geometry, ClampPolicy::Overshoot).unwrap();
        assert_eq!(low.grid, high.grid);

        let radii: Vec<f64> = low.grid.rings.iter().map(|c| c.radius).collect();
        assert_eq!(radii.len(), 5);
        assert!((radii[0] - 24.0).abs() < EPS);
        assert!((radii[4] - 120.0).abs() < EPS);

        assert_eq!(low.grid.spokes.len(), 6);
        for spoke in &low.grid.spokes {
            assert!(!spoke.closed);
            assert_eq!(spoke.points[0], geometry.center);
            assert!((spoke.points[1].distance_to(&geometry.center) - 120.0).abs() < EPS);
        }
    }

    #[test]
    fn test_labels_sit_outside_the_grid() {
        let geometry = RadarGeometry::default();
        let chart = project_radar(&weather_series(), &geometry, ClampPolicy::Overshoot).unwrap();
        assert_eq!(chart.labels[0].text, "Humidity");
        for label in &chart.labels {
            assert!((label.position.distance_to(&geometry.center) - 140.0).abs() < EPS);
        }
    }

    #[test]
    fn test_overshoot_and_clamp() {
        let geometry = RadarGeometry::default();
        let series = uniform_series(15.0);

        let overshoot = project_radar(&series, &geometry, ClampPolicy::Overshoot).unwrap();
        assert!((overshoot.points[0].distance_to(&geometry.center) - 180.0).abs() < EPS);

        let clamped = project_radar(&series, &geometry, ClampPolicy::Clamp).unwrap();
        assert!((clamped.points[0].distance_to(&geometry.center) - 120.0).abs() < EPS);
    }

    #[test]
    fn test_negative_value_inverts_through_center() {
        let geometry = RadarGeometry::default();
        let chart =
            project_radar(&uniform_series(-5.0), &geometry, ClampPolicy::Overshoot).unwrap();
        // axis 0 points up; a negative radius lands below the center
        assert!(chart.points[0].y > geometry.center.y);
    }

    #[test]
    fn test_projection_is_idempotent() {
        let geometry = RadarGeometry::default();
        let first = project_radar(&weather_series(), &geometry, ClampPolicy::Overshoot).unwrap();
        let second = project_radar(&weather_series(), &geometry, ClampPolicy::Overshoot).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_non_finite_sample_is_rejected() {
        let series: RadarSeries = (0..RADAR_AXES)
            .map(|i| {
                let value = if i == 2 { f64::NAN } else { 1.0 };
                MetricSample::new("m", value, range(0.0, 10.0))
            })
            .collect::<Vec<_>>()
            .try_into()
            .unwrap();
        assert!(matches!(
            project_radar(&series, &RadarGeometry::default(), ClampPolicy::Overshoot),
            Err(ProjectionError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_bad_geometry_is_rejected() {
        let negative = RadarGeometry {
            max_radius: -5.0,
            ..RadarGeometry::default()
        };
        assert!(matches!(
            project_radar(&weather_series(), &negative, ClampPolicy::Overshoot),
            Err(ProjectionError::NegativeValue { .. })
        ));

        let off_canvas = RadarGeometry {
            center: ProjectedPoint::new(f64::NAN, 150.0),
            ..RadarGeometry::default()
        };
        assert!(matches!(
            off_canvas.validate(),
            Err(ProjectionError::NonFinite { field }) if field == "radar center"
        ));

        let zero = RadarGeometry {
            max_radius: 0.0,
            ..RadarGeometry::default()
        };
        assert!(zero.validate().is_ok());
    }
}
