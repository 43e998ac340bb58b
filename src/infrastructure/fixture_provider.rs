// Static fixture provider - serves mock weather for any requested city
use crate::application::weather_provider::{ProviderError, WeatherProvider};
use crate::domain::condition::WeatherCondition;
use crate::domain::weather::{Coordinates, CurrentConditions, ForecastDay, HistoricalDay};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;

const KNOWN_CITIES: [&str; 20] = [
    "London",
    "New York",
    "Tokyo",
    "Paris",
    "Sydney",
    "Dubai",
    "Singapore",
    "Berlin",
    "Madrid",
    "Rome",
    "Amsterdam",
    "Barcelona",
    "Istanbul",
    "Moscow",
    "Los Angeles",
    "Chicago",
    "Miami",
    "Toronto",
    "Vancouver",
    "Mumbai",
];

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherFixture {
    #[serde(default = "default_cities")]
    pub cities: Vec<String>,
    pub current: CurrentConditions,
    pub forecast: Vec<ForecastDay>,
    pub history: Vec<HistoricalDay>,
}

fn default_cities() -> Vec<String> {
    KNOWN_CITIES.iter().map(|c| c.to_string()).collect()
}

#[derive(Debug, Clone)]
pub struct StaticWeatherProvider {
    fixture: WeatherFixture,
}

impl StaticWeatherProvider {
    pub fn new(fixture: WeatherFixture) -> Self {
        Self { fixture }
    }

    /// The mock snapshot the dashboard ships with
    pub fn builtin() -> Self {
        Self::new(builtin_fixture())
    }

    pub async fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ProviderError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| ProviderError::Fixture(format!("{}: {}", path.display(), e)))?;
        let fixture: WeatherFixture = serde_json::from_str(&raw)
            .map_err(|e| ProviderError::Fixture(format!("{}: {}", path.display(), e)))?;

        tracing::info!(
            "Loaded weather fixture from {} ({} forecast days, {} history days)",
            path.display(),
            fixture.forecast.len(),
            fixture.history.len()
        );
        Ok(Self::new(fixture))
    }

    fn check_city(city: &str) -> Result<&str, ProviderError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(ProviderError::UnknownCity(city.to_string()));
        }
        Ok(city)
    }
}

#[async_trait]
impl WeatherProvider for StaticWeatherProvider {
    async fn list_cities(&self) -> Result<Vec<String>, ProviderError> {
        Ok(self.fixture.cities.clone())
    }

    async fn current(&self, city: &str) -> Result<CurrentConditions, ProviderError> {
        let city = Self::check_city(city)?;
        Ok(CurrentConditions {
            city: city.to_string(),
            ..self.fixture.current.clone()
        })
    }

    async fn forecast(&self, city: &str) -> Result<Vec<ForecastDay>, ProviderError> {
        Self::check_city(city)?;
        Ok(self.fixture.forecast.clone())
    }

    async fn history(&self, city: &str) -> Result<Vec<HistoricalDay>, ProviderError> {
        Self::check_city(city)?;
        Ok(self.fixture.history.clone())
    }
}

fn forecast_day(
    (year, month, day): (i32, u32, u32),
    high: f64,
    low: f64,
    condition: WeatherCondition,
    precipitation: f64,
    humidity: f64,
    description: &str,
) -> Option<ForecastDay> {
    Some(ForecastDay {
        date: NaiveDate::from_ymd_opt(year, month, day)?,
        high,
        low,
        condition,
        precipitation,
        humidity,
        description: description.to_string(),
    })
}

fn builtin_fixture() -> WeatherFixture {
    use WeatherCondition::*;

    let current = CurrentConditions {
        city: "London".to_string(),
        country: "GB".to_string(),
        temperature: 22.0,
        condition: PartlyCloudy,
        description: "Partly Cloudy".to_string(),
        humidity: 65.0,
        pressure: 1013.0,
        wind_speed: 12.0,
        wind_direction: 180.0,
        visibility: 10.0,
        uv_index: 6.0,
        cloud_cover: 40.0,
        sunrise: "06:30".to_string(),
        sunset: "19:45".to_string(),
        feels_like: 24.0,
        coords: Coordinates {
            lat: 51.5074,
            lon: -0.1278,
        },
    };

    let forecast = [
        forecast_day((2025, 1, 1), 25.0, 18.0, Sunny, 0.0, 60.0, "Sunny"),
        forecast_day((2025, 1, 2), 23.0, 16.0, PartlyCloudy, 10.0, 65.0, "Partly Cloudy"),
        forecast_day((2025, 1, 3), 20.0, 14.0, Rainy, 80.0, 85.0, "Rainy"),
        forecast_day((2025, 1, 4), 18.0, 12.0, Cloudy, 20.0, 70.0, "Cloudy"),
        forecast_day((2025, 1, 5), 21.0, 15.0, Sunny, 0.0, 55.0, "Sunny"),
        forecast_day((2025, 1, 6), 24.0, 17.0, PartlyCloudy, 15.0, 62.0, "Partly Cloudy"),
        forecast_day((2025, 1, 7), 26.0, 19.0, Sunny, 5.0, 58.0, "Sunny"),
    ]
    .into_iter()
    .flatten()
    .collect();

    let history = [
        ("Mon", 18.0, 0.2, 65.0),
        ("Tue", 20.0, 0.8, 70.0),
        ("Wed", 22.0, 0.1, 60.0),
        ("Thu", 19.0, 1.2, 75.0),
        ("Fri", 21.0, 0.0, 58.0),
        ("Sat", 24.0, 0.3, 62.0),
        ("Sun", 22.0, 0.0, 55.0),
    ]
    .into_iter()
    .map(|(day, temperature, precipitation, humidity)| HistoricalDay {
        day: day.to_string(),
        temperature,
        precipitation,
        humidity,
    })
    .collect();

    WeatherFixture {
        cities: default_cities(),
        current,
        forecast,
        history,
    }
}
