// Dashboard service - Use case for building dashboards
use crate::application::weather_provider::WeatherProvider;
use crate::domain::chart::gauge::project_gauge;
use crate::domain::chart::normalize::MetricSample;
use crate::domain::chart::radar::{RadarChart, RadarSeries, project_radar};
use crate::domain::chart::series::{SeriesChart, TimeSeriesPoint, project_series};
use crate::domain::chart::{ChartState, ProjectionError};
use crate::domain::dashboard::{CurrentPanel, Dashboard, ForecastCard, ForecastDetail, StatGauge};
use crate::domain::weather::{CurrentConditions, ForecastDay, HistoricalDay};
use crate::infrastructure::config::AppConfig;
use anyhow::Context;
use chrono::NaiveDate;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    provider: Arc<dyn WeatherProvider>,
    config: Arc<AppConfig>,
}

impl DashboardService {
    pub fn new(provider: Arc<dyn WeatherProvider>, config: AppConfig) -> Self {
        Self {
            provider,
            config: Arc::new(config),
        }
    }

    pub fn provider(&self) -> Arc<dyn WeatherProvider> {
        self.provider.clone()
    }

    pub async fn get_dashboard(&self, city: &str) -> anyhow::Result<Dashboard> {
        let (current, forecast, history) = tokio::try_join!(
            self.provider.current(city),
            self.provider.forecast(city),
            self.provider.history(city),
        )
        .with_context(|| format!("fetching weather for {}", city))?;

        tracing::debug!(
            "Building dashboard for {}: {} forecast days, {} history days",
            current.city,
            forecast.len(),
            history.len()
        );

        Ok(Dashboard {
            city: current.city.clone(),
            current: CurrentPanel::from(&current),
            stats: self.build_stats(&current),
            radar: self.build_radar(&current),
            week: self.build_week(&history),
            forecast: Self::forecast_cards(&forecast),
        })
    }

    pub async fn radar_chart(&self, city: &str) -> anyhow::Result<ChartState<RadarChart>> {
        let current = self.provider.current(city).await?;
        Ok(self.build_radar(&current))
    }

    pub async fn week_chart(&self, city: &str) -> anyhow::Result<ChartState<SeriesChart>> {
        let history = self.provider.history(city).await?;
        Ok(self.build_week(&history))
    }

    /// Detail view for one forecast day; `None` when the date is not in the forecast.
    pub async fn forecast_detail(
        &self,
        city: &str,
        date: NaiveDate,
    ) -> anyhow::Result<Option<ForecastDetail>> {
        let forecast = self.provider.forecast(city).await?;
        Ok(forecast
            .iter()
            .find(|day| day.date == date)
            .map(ForecastDetail::from))
    }

    pub fn build_stats(&self, current: &CurrentConditions) -> Vec<StatGauge> {
        self.config
            .dashboard
            .stats
            .iter()
            .map(|stat| {
                let value = stat.metric.value_in(current);
                let gauge = stat.range().and_then(|range| {
                    project_gauge(value, &range, self.config.gauge.radius, self.config.gauge.clamp)
                });
                if let Err(e) = &gauge {
                    tracing::warn!("Gauge {} for {} rejected: {}", stat.label(), current.city, e);
                }
                StatGauge::new(
                    stat.metric,
                    stat.label().to_string(),
                    value,
                    ChartState::from_result(gauge),
                )
            })
            .collect()
    }

    pub fn build_radar(&self, current: &CurrentConditions) -> ChartState<RadarChart> {
        let radar = &self.config.radar;
        let result = radar
            .axes
            .iter()
            .map(|axis| {
                axis.range().map(|range| {
                    MetricSample::new(axis.label(), axis.metric.value_in(current), range)
                })
            })
            .collect::<Result<Vec<_>, ProjectionError>>()
            .and_then(RadarSeries::try_from)
            .and_then(|series| project_radar(&series, &radar.geometry(), radar.clamp));

        if let Err(e) = &result {
            tracing::warn!("Radar for {} rejected: {}", current.city, e);
        }
        ChartState::from_result(result)
    }

    pub fn build_week(&self, history: &[HistoricalDay]) -> ChartState<SeriesChart> {
        let points: Vec<TimeSeriesPoint> = history.iter().map(TimeSeriesPoint::from).collect();
        let result = project_series(&points, &self.config.week);

        if let Err(e) = &result {
            tracing::warn!("Week chart rejected: {}", e);
        }
        ChartState::from_result(result)
    }

    pub fn forecast_cards(forecast: &[ForecastDay]) -> Vec<ForecastCard> {
        forecast.iter().map(ForecastCard::from).collect()
    }
}
