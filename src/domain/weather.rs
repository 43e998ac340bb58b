// Weather domain models - current conditions, forecast and past-week history
use super::chart::series::TimeSeriesPoint;
use super::condition::WeatherCondition;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    pub city: String,
    pub country: String,
    pub temperature: f64,
    pub condition: WeatherCondition,
    pub description: String,
    /// Percent.
    pub humidity: f64,
    /// hPa.
    pub pressure: f64,
    /// km/h.
    pub wind_speed: f64,
    /// Degrees, meteorological.
    pub wind_direction: f64,
    /// km.
    pub visibility: f64,
    pub uv_index: f64,
    /// Percent.
    pub cloud_cover: f64,
    pub sunrise: String,
    pub sunset: String,
    pub feels_like: f64,
    pub coords: Coordinates,
}

/// The six readings shown as gauges and radar axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Metric {
    Humidity,
    Pressure,
    WindSpeed,
    UvIndex,
    Visibility,
    CloudCover,
}

impl Metric {
    pub fn value_in(self, current: &CurrentConditions) -> f64 {
        match self {
            Self::Humidity => current.humidity,
            Self::Pressure => current.pressure,
            Self::WindSpeed => current.wind_speed,
            Self::UvIndex => current.uv_index,
            Self::Visibility => current.visibility,
            Self::CloudCover => current.cloud_cover,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Humidity => "Humidity",
            Self::Pressure => "Pressure",
            Self::WindSpeed => "Wind Speed",
            Self::UvIndex => "UV Index",
            Self::Visibility => "Visibility",
            Self::CloudCover => "Cloud Cover",
        }
    }

    pub const fn unit(self) -> &'static str {
        match self {
            Self::Humidity | Self::CloudCover => "%",
            Self::Pressure => "hPa",
            Self::WindSpeed => "km/h",
            Self::UvIndex => "",
            Self::Visibility => "km",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastDay {
    pub date: NaiveDate,
    pub high: f64,
    pub low: f64,
    pub condition: WeatherCondition,
    /// Chance of precipitation, percent.
    pub precipitation: f64,
    pub humidity: f64,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalDay {
    pub day: String,
    pub temperature: f64,
    /// Millimetres.
    pub precipitation: f64,
    pub humidity: f64,
}

impl From<&HistoricalDay> for TimeSeriesPoint {
    fn from(day: &HistoricalDay) -> Self {
        TimeSeriesPoint::new(day.day.clone(), day.temperature, day.precipitation)
    }
}
