// Configuration loading - file and environment layers over built-in defaults
use crate::domain::chart::gauge::{DEFAULT_GAUGE_RADIUS, validate_radius};
use crate::domain::chart::normalize::{ClampPolicy, MetricRange};
use crate::domain::chart::radar::{RADAR_AXES, RadarGeometry};
use crate::domain::chart::series::PlotArea;
use crate::domain::chart::{ProjectedPoint, ProjectionError};
use crate::domain::weather::Metric;
use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub dashboard: DashboardSettings,
    pub radar: RadarSettings,
    pub week: PlotArea,
    pub gauge: GaugeSettings,
    /// JSON fixture file; the built-in mock data is used when absent
    pub fixtures: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
    pub addr: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            addr: "0.0.0.0:8080".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct DashboardSettings {
    pub default_city: String,
    pub max_suggestions: usize,
    /// Gauges in display order
    pub stats: Vec<MetricConfig>,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            default_city: "London".to_string(),
            max_suggestions: 5,
            stats: vec![
                MetricConfig::new(Metric::Humidity, "Humidity", 0.0, 100.0),
                MetricConfig::new(Metric::WindSpeed, "Wind Speed", 0.0, 50.0),
                MetricConfig::new(Metric::Pressure, "Pressure", 950.0, 1050.0),
                MetricConfig::new(Metric::UvIndex, "UV Index", 0.0, 11.0),
                MetricConfig::new(Metric::Visibility, "Visibility", 0.0, 20.0),
                MetricConfig::new(Metric::CloudCover, "Cloud Cover", 0.0, 100.0),
            ],
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MetricConfig {
    pub metric: Metric,
    /// Display name; the metric's own name when omitted
    #[serde(default)]
    pub label: Option<String>,
    pub min: f64,
    pub max: f64,
}

impl MetricConfig {
    pub fn new(metric: Metric, label: &str, min: f64, max: f64) -> Self {
        Self {
            metric,
            label: Some(label.to_string()),
            min,
            max,
        }
    }

    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(self.metric.label())
    }

    pub fn range(&self) -> Result<MetricRange, ProjectionError> {
        MetricRange::new(self.min, self.max)
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct RadarSettings {
    pub center_x: f64,
    pub center_y: f64,
    pub max_radius: f64,
    pub label_offset: f64,
    pub clamp: ClampPolicy,
    /// Axes clockwise from the top
    pub axes: Vec<MetricConfig>,
}

impl Default for RadarSettings {
    fn default() -> Self {
        let geometry = RadarGeometry::default();
        Self {
            center_x: geometry.center.x,
            center_y: geometry.center.y,
            max_radius: geometry.max_radius,
            label_offset: geometry.label_offset,
            clamp: ClampPolicy::Overshoot,
            axes: vec![
                MetricConfig::new(Metric::Humidity, "Humidity", 0.0, 100.0),
                MetricConfig::new(Metric::Pressure, "Pressure", 950.0, 1050.0),
                MetricConfig::new(Metric::WindSpeed, "Wind", 0.0, 50.0),
                MetricConfig::new(Metric::UvIndex, "UV", 0.0, 11.0),
                MetricConfig::new(Metric::Visibility, "Visibility", 0.0, 20.0),
                MetricConfig::new(Metric::CloudCover, "Clouds", 0.0, 100.0),
            ],
        }
    }
}

impl RadarSettings {
    pub fn geometry(&self) -> RadarGeometry {
        RadarGeometry {
            center: ProjectedPoint::new(self.center_x, self.center_y),
            max_radius: self.max_radius,
            label_offset: self.label_offset,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct GaugeSettings {
    pub radius: f64,
    pub clamp: ClampPolicy,
}

impl Default for GaugeSettings {
    fn default() -> Self {
        Self {
            radius: DEFAULT_GAUGE_RADIUS,
            clamp: ClampPolicy::Overshoot,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.radar.axes.len() != RADAR_AXES {
            anyhow::bail!(
                "radar needs exactly {} axes, {} configured",
                RADAR_AXES,
                self.radar.axes.len()
            );
        }
        for axis in self.radar.axes.iter().chain(&self.dashboard.stats) {
            axis.range()
                .with_context(|| format!("invalid range for {}", axis.label()))?;
        }
        self.radar.geometry().validate().context("invalid radar geometry")?;
        self.week.validate().context("invalid week plot area")?;
        validate_radius(self.gauge.radius).context("invalid gauge radius")?;
        if self.dashboard.max_suggestions == 0 {
            anyhow::bail!("dashboard.max_suggestions must be at least 1");
        }
        Ok(())
    }
}

/// Optional `config/dashboard.*` file, then `WEATHER_*` environment overrides
/// (`WEATHER_SERVER__ADDR=127.0.0.1:3000`).
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    load_app_config_from("config/dashboard")
}

pub fn load_app_config_from(path: &str) -> anyhow::Result<AppConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .add_source(
            config::Environment::with_prefix("WEATHER")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: AppConfig = settings.try_deserialize()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_toml(source: &str) -> anyhow::Result<AppConfig> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()?;
        let config: AppConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = load_app_config_from("does/not/exist").unwrap();
        assert_eq!(config.dashboard.default_city, "London");
        assert_eq!(config.radar.axes.len(), 6);
        assert_eq!(config.radar.axes[1].metric, Metric::Pressure);
        assert_eq!(config.week, PlotArea::default());
        assert_eq!(config.radar.clamp, ClampPolicy::Overshoot);
        assert!(config.fixtures.is_none());
    }

    #[test]
    fn test_shipped_file_matches_defaults() {
        let config = load_app_config_from("config/dashboard").unwrap();
        let defaults = AppConfig::default();
        assert_eq!(config.radar.axes, defaults.radar.axes);
        assert_eq!(config.dashboard.stats, defaults.dashboard.stats);
        assert_eq!(config.week, defaults.week);
    }

    #[test]
    fn test_partial_override() {
        let config = from_toml(
            r#"
            [radar]
            max_radius = 100.0
            clamp = "clamp"

            [week]
            bar_max_height = 40.0
            "#,
        )
        .unwrap();
        assert_eq!(config.radar.max_radius, 100.0);
        assert_eq!(config.radar.clamp, ClampPolicy::Clamp);
        assert_eq!(config.radar.center_x, 150.0);
        assert_eq!(config.week.bar_max_height, 40.0);
        assert_eq!(config.week.x_origin, 60.0);
    }

    #[test]
    fn test_rejects_wrong_axis_count() {
        let err = from_toml(
            r#"
            [[radar.axes]]
            metric = "humidity"
            label = "Humidity"
            min = 0.0
            max = 100.0
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("exactly 6 axes"));
    }

    #[test]
    fn test_rejects_bad_geometry() {
        let mut config = AppConfig::default();
        config.week.plot_height = 0.0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.radar.max_radius = -5.0;
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.gauge.radius = -1.0;
        let err = config.validate().unwrap_err();
        assert!(format!("{:#}", err).contains("gauge radius"));
    }

    #[test]
    fn test_label_falls_back_to_metric_name() {
        let config = from_toml(
            r#"
            [[dashboard.stats]]
            metric = "uv-index"
            min = 0.0
            max = 11.0
            "#,
        )
        .unwrap();
        assert_eq!(config.dashboard.stats[0].label, None);
        assert_eq!(config.dashboard.stats[0].label(), "UV Index");
    }

    #[test]
    fn test_rejects_inverted_range() {
        let mut config = AppConfig::default();
        config.dashboard.stats[0].max = -1.0;
        assert!(config.validate().is_err());
    }
}
