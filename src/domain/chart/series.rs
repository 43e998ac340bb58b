// Series projector - temperature line/area and precipitation bars on a shared timeline
use super::{ChartLabel, ChartPath, GridLine, ProjectedPoint, ProjectionError, Rect, format_coord};
use serde::{Deserialize, Serialize};

/// One chronological sample. Labels are categorical (day names), not timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub label: String,
    pub temperature: f64,
    pub precipitation: f64,
}

impl TimeSeriesPoint {
    pub fn new(label: impl Into<String>, temperature: f64, precipitation: f64) -> Self {
        Self {
            label: label.into(),
            temperature,
            precipitation,
        }
    }
}

/// Pixel layout of the line/bar chart inside its viewBox.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotArea {
    pub x_origin: f64,
    /// Horizontal span from the first to the last column.
    pub plot_width: f64,
    /// Right edge of the horizontal guide lines.
    pub grid_right: f64,
    pub y_baseline: f64,
    pub plot_height: f64,
    pub grid_top: f64,
    pub grid_lines: usize,
    pub bar_baseline: f64,
    pub bar_max_height: f64,
    pub bar_width: f64,
    pub label_y: f64,
    pub value_label_offset: f64,
}

impl Default for PlotArea {
    fn default() -> Self {
        Self {
            x_origin: 60.0,
            plot_width: 330.0,
            grid_right: 440.0,
            y_baseline: 250.0,
            plot_height: 160.0,
            grid_top: 50.0,
            grid_lines: 6,
            bar_baseline: 260.0,
            bar_max_height: 30.0,
            bar_width: 10.0,
            label_y: 280.0,
            value_label_offset: 10.0,
        }
    }
}

impl PlotArea {
    /// Rejects layouts that would put non-finite coordinates into the chart.
    pub fn validate(&self) -> Result<(), ProjectionError> {
        let fields = [
            ("x_origin", self.x_origin),
            ("plot_width", self.plot_width),
            ("grid_right", self.grid_right),
            ("y_baseline", self.y_baseline),
            ("plot_height", self.plot_height),
            ("grid_top", self.grid_top),
            ("bar_baseline", self.bar_baseline),
            ("bar_max_height", self.bar_max_height),
            ("bar_width", self.bar_width),
            ("label_y", self.label_y),
            ("value_label_offset", self.value_label_offset),
        ];
        if let Some((field, _)) = fields.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ProjectionError::non_finite(*field));
        }
        if self.plot_height <= 0.0 {
            return Err(ProjectionError::NonPositive {
                field: "plot_height".to_string(),
                value: self.plot_height,
            });
        }
        for (field, value) in [
            ("plot_width", self.plot_width),
            ("bar_max_height", self.bar_max_height),
            ("bar_width", self.bar_width),
        ] {
            if value < 0.0 {
                return Err(ProjectionError::NegativeValue {
                    field: field.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesChart {
    pub line: ChartPath,
    pub area: ChartPath,
    pub points: Vec<ProjectedPoint>,
    pub bars: Vec<Rect>,
    pub x_labels: Vec<ChartLabel>,
    pub value_labels: Vec<ChartLabel>,
    pub y_grid_lines: Vec<GridLine>,
    pub x_grid_lines: Vec<GridLine>,
    pub min_temperature: f64,
    pub max_temperature: f64,
    pub max_precipitation: f64,
}

struct Scale {
    min_temp: f64,
    max_temp: f64,
    max_precip: f64,
}

impl Scale {
    /// Single pass over the whole series; the scale is fixed for the chart.
    fn scan(points: &[TimeSeriesPoint]) -> Self {
        let mut scale = Scale {
            min_temp: f64::INFINITY,
            max_temp: f64::NEG_INFINITY,
            max_precip: 0.0,
        };
        for point in points {
            scale.min_temp = scale.min_temp.min(point.temperature);
            scale.max_temp = scale.max_temp.max(point.temperature);
            scale.max_precip = scale.max_precip.max(point.precipitation);
        }
        scale
    }

    /// Temperature span, or 1 for a flat series so every point sits on the baseline.
    fn temp_span(&self) -> f64 {
        if self.max_temp == self.min_temp {
            1.0
        } else {
            self.max_temp - self.min_temp
        }
    }

    fn temp_fraction(&self, temperature: f64) -> f64 {
        (temperature - self.min_temp) / self.temp_span()
    }

    fn precip_fraction(&self, precipitation: f64) -> f64 {
        if self.max_precip == 0.0 {
            0.0
        } else {
            precipitation / self.max_precip
        }
    }
}

fn validate(points: &[TimeSeriesPoint]) -> Result<(), ProjectionError> {
    if points.is_empty() {
        return Err(ProjectionError::EmptySeries);
    }
    for (i, point) in points.iter().enumerate() {
        if !point.temperature.is_finite() {
            return Err(ProjectionError::non_finite(format!("temperature[{i}]")));
        }
        if !point.precipitation.is_finite() {
            return Err(ProjectionError::non_finite(format!("precipitation[{i}]")));
        }
        if point.precipitation < 0.0 {
            return Err(ProjectionError::NegativeValue {
                field: format!("precipitation[{i}]"),
                value: point.precipitation,
            });
        }
    }
    Ok(())
}

pub fn project_series(
    points: &[TimeSeriesPoint],
    area: &PlotArea,
) -> Result<SeriesChart, ProjectionError> {
    area.validate()?;
    validate(points)?;
    let scale = Scale::scan(points);

    let column_width = if points.len() > 1 {
        area.plot_width / (points.len() - 1) as f64
    } else {
        0.0
    };
    let column_x = |i: usize| area.x_origin + i as f64 * column_width;

    let vertices: Vec<ProjectedPoint> = points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            ProjectedPoint::new(
                column_x(i),
                area.y_baseline - scale.temp_fraction(point.temperature) * area.plot_height,
            )
        })
        .collect();

    let line = ChartPath::open(vertices.clone());

    let mut outline = vertices.clone();
    if let (Some(first), Some(last)) = (vertices.first(), vertices.last()) {
        outline.push(ProjectedPoint::new(last.x, area.y_baseline));
        outline.push(ProjectedPoint::new(first.x, area.y_baseline));
    }
    let area_path = ChartPath::closed(outline);

    let bars = points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let height = scale.precip_fraction(point.precipitation) * area.bar_max_height;
            Rect {
                x: column_x(i) - area.bar_width / 2.0,
                y: area.bar_baseline - height,
                width: area.bar_width,
                height,
            }
        })
        .collect();

    let x_labels = points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            ChartLabel::new(point.label.clone(), ProjectedPoint::new(column_x(i), area.label_y))
        })
        .collect();

    let value_labels = points
        .iter()
        .zip(&vertices)
        .map(|(point, vertex)| {
            ChartLabel::new(
                format!("{}°", format_coord(point.temperature)),
                ProjectedPoint::new(vertex.x, vertex.y - area.value_label_offset),
            )
        })
        .collect();

    let x_grid_lines = (0..points.len())
        .map(|i| GridLine {
            from: ProjectedPoint::new(column_x(i), area.grid_top),
            to: ProjectedPoint::new(column_x(i), area.y_baseline),
            label: None,
        })
        .collect();

    Ok(SeriesChart {
        line,
        area: area_path,
        points: vertices,
        bars,
        x_labels,
        value_labels,
        y_grid_lines: y_grid_lines(&scale, area),
        x_grid_lines,
        min_temperature: scale.min_temp,
        max_temperature: scale.max_temp,
        max_precipitation: scale.max_precip,
    })
}

/// Horizontal guides from `grid_top` down to the baseline, each labelled with
/// the temperature the scale maps to that height.
fn y_grid_lines(scale: &Scale, area: &PlotArea) -> Vec<GridLine> {
    let step = match area.grid_lines {
        0 => return Vec::new(),
        1 => 0.0,
        n => (area.y_baseline - area.grid_top) / (n - 1) as f64,
    };

    (0..area.grid_lines)
        .map(|i| {
            let y = if area.grid_lines == 1 {
                area.y_baseline
            } else {
                area.grid_top + i as f64 * step
            };
            let temperature =
                scale.min_temp + (area.y_baseline - y) / area.plot_height * scale.temp_span();
            GridLine {
                from: ProjectedPoint::new(area.x_origin, y),
                to: ProjectedPoint::new(area.grid_right, y),
                label: Some(ChartLabel::new(
                    format!("{}°", format_coord(temperature)),
                    ProjectedPoint::new(area.x_origin - 10.0, y + 5.0),
                )),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn temps(values: &[f64]) -> Vec<TimeSeriesPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, t)| TimeSeriesPoint::new(format!("d{i}"), *t, 0.0))
            .collect()
    }

    fn precips(values: &[f64]) -> Vec<TimeSeriesPoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, p)| TimeSeriesPoint::new(format!("d{i}"), 20.0, *p))
            .collect()
    }

    fn week() -> Vec<TimeSeriesPoint> {
        [
            ("Mon", 18.0, 0.2),
            ("Tue", 20.0, 0.8),
            ("Wed", 22.0, 0.1),
            ("Thu", 19.0, 1.2),
            ("Fri", 21.0, 0.0),
            ("Sat", 24.0, 0.3),
            ("Sun", 22.0, 0.0),
        ]
        .into_iter()
        .map(|(day, t, p)| TimeSeriesPoint::new(day, t, p))
        .collect()
    }

    #[test]
    fn test_min_maps_to_baseline_and_max_to_top() {
        let area = PlotArea::default();
        let chart = project_series(&temps(&[18.0, 24.0]), &area).unwrap();
        assert!((chart.points[0].y - area.y_baseline).abs() < EPS);
        assert!((chart.points[1].y - (area.y_baseline - area.plot_height)).abs() < EPS);
        assert_eq!(chart.line.path_data(), "M 60 250 L 390 90");
    }

    #[test]
    fn test_flat_series_sits_on_baseline() {
        let area = PlotArea::default();
        let chart = project_series(&temps(&[20.0, 20.0, 20.0, 20.0]), &area).unwrap();
        for point in &chart.points {
            assert!(point.y.is_finite());
            assert!((point.y - area.y_baseline).abs() < EPS);
        }
        for line in &chart.y_grid_lines {
            assert!(line.label.as_ref().unwrap().text.ends_with('°'));
        }
    }

    #[test]
    fn test_precipitation_bar_heights() {
        let area = PlotArea::default();
        let chart = project_series(&precips(&[0.0, 5.0, 10.0]), &area).unwrap();
        let heights: Vec<f64> = chart.bars.iter().map(|b| b.height).collect();
        assert_eq!(heights, vec![0.0, area.bar_max_height * 0.5, area.bar_max_height]);
        for bar in &chart.bars {
            assert!((bar.y + bar.height - area.bar_baseline).abs() < EPS);
        }
    }

    #[test]
    fn test_dry_week_has_zero_height_bars() {
        let chart = project_series(&precips(&[0.0, 0.0, 0.0]), &PlotArea::default()).unwrap();
        assert!(chart.bars.iter().all(|b| b.height == 0.0 && b.y.is_finite()));
    }

    #[test]
    fn test_week_layout_matches_column_pitch() {
        let chart = project_series(&week(), &PlotArea::default()).unwrap();
        let xs: Vec<f64> = chart.points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![60.0, 115.0, 170.0, 225.0, 280.0, 335.0, 390.0]);

        // bars are centered on their column, narrower than the pitch
        assert_eq!(chart.bars[0].x, 55.0);
        assert_eq!(chart.bars[0].width, 10.0);
        // Thu has the most rain
        assert_eq!(chart.bars[3].height, 30.0);

        let labels: Vec<&str> = chart.x_labels.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(labels, vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
        assert_eq!(chart.x_labels[0].position, ProjectedPoint::new(60.0, 280.0));

        assert_eq!(chart.value_labels[5].text, "24°");
        assert_eq!(chart.min_temperature, 18.0);
        assert_eq!(chart.max_temperature, 24.0);
        assert_eq!(chart.max_precipitation, 1.2);
    }

    #[test]
    fn test_area_closes_along_baseline() {
        let area = PlotArea::default();
        let chart = project_series(&week(), &area).unwrap();
        assert!(chart.area.closed);
        assert!(!chart.line.closed);

        let outline = &chart.area.points;
        assert_eq!(outline.len(), chart.points.len() + 2);
        assert_eq!(&outline[..chart.points.len()], chart.points.as_slice());
        assert_eq!(outline[outline.len() - 2], ProjectedPoint::new(390.0, area.y_baseline));
        assert_eq!(outline[outline.len() - 1], ProjectedPoint::new(60.0, area.y_baseline));
        assert!(chart.area.path_data().ends_with("L 60 250 Z"));
    }

    #[test]
    fn test_order_is_preserved() {
        let chart = project_series(&temps(&[24.0, 18.0, 21.0]), &PlotArea::default()).unwrap();
        assert!(chart.points.windows(2).all(|w| w[0].x < w[1].x));
        assert_eq!(chart.x_labels[0].text, "d0");
        assert!(chart.points[0].y < chart.points[2].y);
        assert!(chart.points[2].y < chart.points[1].y);
    }

    #[test]
    fn test_single_point() {
        let area = PlotArea::default();
        let chart = project_series(&temps(&[15.0]), &area).unwrap();
        assert_eq!(chart.points, vec![ProjectedPoint::new(60.0, 250.0)]);
        assert_eq!(chart.area.points.len(), 3);
    }

    #[test]
    fn test_y_grid_lines() {
        let area = PlotArea::default();
        let chart = project_series(&temps(&[18.0, 24.0]), &area).unwrap();
        let ys: Vec<f64> = chart.y_grid_lines.iter().map(|g| g.from.y).collect();
        assert_eq!(ys, vec![50.0, 90.0, 130.0, 170.0, 210.0, 250.0]);

        let texts: Vec<String> = chart
            .y_grid_lines
            .iter()
            .map(|g| g.label.as_ref().unwrap().text.clone())
            .collect();
        assert_eq!(texts[1], "24°");
        assert_eq!(texts[5], "18°");
        assert_eq!(chart.y_grid_lines[0].to.x, 440.0);
        assert_eq!(chart.x_grid_lines.len(), 2);
    }

    #[test]
    fn test_rejects_invalid_input() {
        let area = PlotArea::default();
        assert_eq!(project_series(&[], &area), Err(ProjectionError::EmptySeries));

        let mut points = week();
        points[2].temperature = f64::NAN;
        assert!(matches!(
            project_series(&points, &area),
            Err(ProjectionError::NonFinite { field }) if field == "temperature[2]"
        ));

        let mut points = week();
        points[4].precipitation = -1.0;
        assert!(matches!(
            project_series(&points, &area),
            Err(ProjectionError::NegativeValue { .. })
        ));
    }

    #[test]
    fn test_projection_is_idempotent() {
        let area = PlotArea::default();
        assert_eq!(
            project_series(&week(), &area).unwrap(),
            project_series(&week(), &area).unwrap()
        );
    }

    #[test]
    fn test_rejects_degenerate_plot_area() {
        let points = temps(&[18.0, 24.0]);

        let flat = PlotArea {
            plot_height: 0.0,
            ..PlotArea::default()
        };
        assert!(matches!(
            project_series(&points, &flat),
            Err(ProjectionError::NonPositive { field, .. }) if field == "plot_height"
        ));

        let unbounded = PlotArea {
            plot_width: f64::NAN,
            ..PlotArea::default()
        };
        assert!(matches!(
            project_series(&points, &unbounded),
            Err(ProjectionError::NonFinite { field }) if field == "plot_width"
        ));

        let narrow = PlotArea {
            bar_width: -10.0,
            ..PlotArea::default()
        };
        assert!(matches!(
            narrow.validate(),
            Err(ProjectionError::NegativeValue { field, .. }) if field == "bar_width"
        ));
    }
}
