// Dashboard domain model - view models handed to the presentation layer
use super::chart::ChartState;
use super::chart::gauge::Gauge;
use super::chart::radar::RadarChart;
use super::chart::series::SeriesChart;
use super::condition::{Icon, Scene, WeatherCondition};
use super::weather::{CurrentConditions, ForecastDay, Metric};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub city: String,
    pub current: CurrentPanel,
    pub stats: Vec<StatGauge>,
    pub radar: ChartState<RadarChart>,
    pub week: ChartState<SeriesChart>,
    pub forecast: Vec<ForecastCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentPanel {
    pub city: String,
    pub country: String,
    pub coordinates: String,
    pub temperature: f64,
    pub feels_like: f64,
    pub condition: WeatherCondition,
    pub icon: Icon,
    pub description: String,
    pub sunrise: String,
    pub sunset: String,
    pub wind_direction: f64,
    pub uv_index: f64,
}

impl From<&CurrentConditions> for CurrentPanel {
    fn from(current: &CurrentConditions) -> Self {
        Self {
            city: current.city.clone(),
            country: current.country.clone(),
            coordinates: format!("{:.2}°, {:.2}°", current.coords.lat, current.coords.lon),
            temperature: current.temperature,
            feels_like: current.feels_like,
            condition: current.condition,
            icon: current.condition.icon(),
            description: current.description.clone(),
            sunrise: current.sunrise.clone(),
            sunset: current.sunset.clone(),
            wind_direction: current.wind_direction,
            uv_index: current.uv_index,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct StatGauge {
    pub metric: Metric,
    pub label: String,
    pub unit: &'static str,
    pub value: f64,
    pub display: String,
    pub gauge: ChartState<Gauge>,
}

impl StatGauge {
    pub fn new(metric: Metric, label: String, value: f64, gauge: ChartState<Gauge>) -> Self {
        Self {
            metric,
            label,
            unit: metric.unit(),
            value,
            display: format!("{}{}", value, metric.unit()),
            gauge,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastCard {
    pub date: NaiveDate,
    pub weekday: String,
    pub day_of_month: u32,
    pub month: String,
    pub condition: WeatherCondition,
    pub icon: Icon,
    pub description: String,
    pub high: f64,
    pub low: f64,
    pub precipitation: f64,
    pub humidity: f64,
}

impl From<&ForecastDay> for ForecastCard {
    fn from(day: &ForecastDay) -> Self {
        Self {
            date: day.date,
            weekday: day.date.format("%a").to_string(),
            day_of_month: day.date.day(),
            month: day.date.format("%b").to_string(),
            condition: day.condition,
            icon: day.condition.icon(),
            description: day.description.clone(),
            high: day.high,
            low: day.low,
            precipitation: day.precipitation,
            humidity: day.humidity,
        }
    }
}

/// Horizontal percentage bar; the width is clamped so it never spills out of its track.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PercentBar {
    pub value: f64,
    pub width_percent: f64,
}

impl PercentBar {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            width_percent: value.clamp(0.0, 100.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastDetail {
    pub date: NaiveDate,
    pub title: String,
    pub condition: WeatherCondition,
    pub icon: Icon,
    pub scene: Scene,
    pub description: String,
    pub high: f64,
    pub low: f64,
    pub precipitation: PercentBar,
    pub humidity: PercentBar,
}

impl From<&ForecastDay> for ForecastDetail {
    fn from(day: &ForecastDay) -> Self {
        Self {
            date: day.date,
            title: day.date.format("%A, %B %-d, %Y").to_string(),
            condition: day.condition,
            icon: day.condition.icon(),
            scene: day.condition.scene(),
            description: day.description.clone(),
            high: day.high,
            low: day.low,
            precipitation: PercentBar::new(day.precipitation),
            humidity: PercentBar::new(day.humidity),
        }
    }
}
