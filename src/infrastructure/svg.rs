// SVG renderer - turns projected chart geometry into standalone SVG documents
use crate::domain::chart::radar::RadarChart;
use crate::domain::chart::series::SeriesChart;
use crate::domain::chart::{ChartState, GridLine, ProjectedPoint, format_coord};

const RADAR_VIEWBOX: (u32, u32) = (300, 300);
const SERIES_VIEWBOX: (u32, u32) = (500, 300);

const GRID_STROKE: &str = "rgba(168, 85, 247, 0.3)";
const ACCENT: &str = "rgba(168, 85, 247, 1)";
const LABEL_FILL: &str = "rgba(255, 255, 255, 0.8)";

const RADAR_DEFS: &str = r##"<defs><radialGradient id="radarGradient" cx="50%" cy="50%" r="50%"><stop offset="0%" stop-color="rgba(168, 85, 247, 0.3)"/><stop offset="50%" stop-color="rgba(168, 85, 247, 0.1)"/><stop offset="100%" stop-color="rgba(168, 85, 247, 0.05)"/></radialGradient><linearGradient id="dataGradient" x1="0%" y1="0%" x2="100%" y2="100%"><stop offset="0%" stop-color="rgba(168, 85, 247, 0.8)"/><stop offset="50%" stop-color="rgba(236, 72, 153, 0.6)"/><stop offset="100%" stop-color="rgba(168, 85, 247, 0.4)"/></linearGradient></defs>"##;

const SERIES_DEFS: &str = r##"<defs><linearGradient id="tempGradient" x1="0%" y1="0%" x2="100%" y2="0%"><stop offset="0%" stop-color="#A855F7" stop-opacity="0.8"/><stop offset="50%" stop-color="#EC4899" stop-opacity="0.6"/><stop offset="100%" stop-color="#8B5CF6" stop-opacity="0.8"/></linearGradient><linearGradient id="tempAreaGradient" x1="0%" y1="0%" x2="0%" y2="100%"><stop offset="0%" stop-color="#A855F7" stop-opacity="0.3"/><stop offset="100%" stop-color="#A855F7" stop-opacity="0.05"/></linearGradient><linearGradient id="precipGradient" x1="0%" y1="0%" x2="100%" y2="0%"><stop offset="0%" stop-color="#06B6D4" stop-opacity="0.6"/><stop offset="100%" stop-color="#8B5CF6" stop-opacity="0.4"/></linearGradient></defs>"##;

pub fn render_radar(chart: &ChartState<RadarChart>) -> String {
    match chart {
        ChartState::Ready(radar) => render_radar_svg(radar),
        ChartState::Empty { reason } => placeholder(RADAR_VIEWBOX, reason),
    }
}

pub fn render_series(chart: &ChartState<SeriesChart>) -> String {
    match chart {
        ChartState::Ready(series) => render_series_svg(series),
        ChartState::Empty { reason } => placeholder(SERIES_VIEWBOX, reason),
    }
}

pub fn render_radar_svg(radar: &RadarChart) -> String {
    let mut svg = open_svg(RADAR_VIEWBOX);
    svg.push_str(RADAR_DEFS);

    // Grid rings and spokes
    for ring in &radar.grid.rings {
        svg.push_str(&format!(
            r#"<circle cx="{}" cy="{}" r="{}" stroke="{GRID_STROKE}" stroke-width="1" fill="none"/>"#,
            format_coord(ring.center.x),
            format_coord(ring.center.y),
            format_coord(ring.radius),
        ));
    }

    for spoke in &radar.grid.spokes {
        if let [from, to] = spoke.points.as_slice() {
            line(&mut svg, from, to, GRID_STROKE, None);
        }
    }

    // Data polygon
    svg.push_str(&format!(
        r#"<path d="{}" fill="url(#dataGradient)" stroke="rgba(168, 85, 247, 0.8)" stroke-width="2"/>"#,
        radar.polygon.path_data()
    ));

    for point in &radar.points {
        let (x, y) = (format_coord(point.x), format_coord(point.y));
        svg.push_str(&format!(
            r#"<g><circle cx="{x}" cy="{y}" r="4" fill="{ACCENT}"/><circle cx="{x}" cy="{y}" r="8" fill="none" stroke="rgba(168, 85, 247, 0.5)" stroke-width="1"/></g>"#
        ));
    }

    for label in &radar.labels {
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" fill="{LABEL_FILL}" font-size="12">{}</text>"#,
            format_coord(label.position.x),
            format_coord(label.position.y),
            escape(&label.text)
        ));
    }

    svg.push_str(&format!(
        r#"<circle cx="{}" cy="{}" r="3" fill="{ACCENT}"/>"#,
        format_coord(radar.center.x),
        format_coord(radar.center.y)
    ));

    svg.push_str("</svg>");
    svg
}

pub fn render_series_svg(chart: &SeriesChart) -> String {
    let mut svg = open_svg(SERIES_VIEWBOX);
    svg.push_str(SERIES_DEFS);

    // Grid lines
    for grid in &chart.y_grid_lines {
        grid_line(&mut svg, grid, "rgba(168, 85, 247, 0.2)");
    }
    for grid in &chart.x_grid_lines {
        grid_line(&mut svg, grid, "rgba(168, 85, 247, 0.1)");
    }

    svg.push_str(&format!(
        r#"<path d="{}" fill="url(#tempAreaGradient)"/>"#,
        chart.area.path_data()
    ));
    svg.push_str(&format!(
        r#"<path d="{}" stroke="url(#tempGradient)" stroke-width="3" fill="none" stroke-linecap="round"/>"#,
        chart.line.path_data()
    ));

    for point in &chart.points {
        let (x, y) = (format_coord(point.x), format_coord(point.y));
        svg.push_str(&format!(
            r#"<g><circle cx="{x}" cy="{y}" r="6" fill="url(#tempGradient)"/><circle cx="{x}" cy="{y}" r="12" fill="none" stroke="{GRID_STROKE}" stroke-width="1"/></g>"#
        ));
    }

    for label in &chart.value_labels {
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" text-anchor="middle" fill="white" font-size="10" font-weight="bold">{}</text>"#,
            format_coord(label.position.x),
            format_coord(label.position.y),
            escape(&label.text)
        ));
    }

    // Precipitation bars
    for bar in &chart.bars {
        let (x, y) = (format_coord(bar.x), format_coord(bar.y));
        let (w, h) = (format_coord(bar.width), format_coord(bar.height));
        svg.push_str(&format!(
            r#"<g><rect x="{x}" y="{y}" width="{w}" height="{h}" fill="url(#precipGradient)" rx="2"/><rect x="{x}" y="{y}" width="{w}" height="{h}" fill="none" stroke="rgba(168, 85, 247, 0.5)" stroke-width="1" rx="2"/></g>"#
        ));
    }

    for label in &chart.x_labels {
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" text-anchor="middle" fill="rgba(255, 255, 255, 0.7)" font-size="12">{}</text>"#,
            format_coord(label.position.x),
            format_coord(label.position.y),
            escape(&label.text)
        ));
    }

    svg.push_str("</svg>");
    svg
}

/// Neutral frame shown instead of a chart whose input was rejected.
fn placeholder((width, height): (u32, u32), reason: &str) -> String {
    let mut svg = open_svg((width, height));
    svg.push_str(&format!(
        r#"<rect x="0" y="0" width="{width}" height="{height}" fill="none" stroke="{GRID_STROKE}" stroke-width="1" stroke-dasharray="2,2"/><text x="{}" y="{}" text-anchor="middle" dominant-baseline="middle" fill="rgba(255, 255, 255, 0.5)" font-size="12">No data</text><desc>{}</desc></svg>"#,
        width / 2,
        height / 2,
        escape(reason)
    ));
    svg
}

fn open_svg((width, height): (u32, u32)) -> String {
    format!(r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {width} {height}">"#)
}

fn line(
    svg: &mut String,
    from: &ProjectedPoint,
    to: &ProjectedPoint,
    stroke: &str,
    dash: Option<&str>,
) {
    svg.push_str(&format!(
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{stroke}" stroke-width="1""#,
        format_coord(from.x),
        format_coord(from.y),
        format_coord(to.x),
        format_coord(to.y),
    ));
    if let Some(dash) = dash {
        svg.push_str(&format!(r#" stroke-dasharray="{dash}""#));
    }
    svg.push_str("/>");
}

fn grid_line(svg: &mut String, grid: &GridLine, stroke: &str) {
    line(svg, &grid.from, &grid.to, stroke, Some("2,2"));
    if let Some(label) = &grid.label {
        svg.push_str(&format!(
            r#"<text x="{}" y="{}" fill="rgba(255, 255, 255, 0.5)" font-size="10" text-anchor="end">{}</text>"#,
            format_coord(label.position.x),
            format_coord(label.position.y),
            escape(&label.text)
        ));
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
