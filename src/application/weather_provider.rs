// Provider trait for weather data access
use crate::domain::weather::{CurrentConditions, ForecastDay, HistoricalDay};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("unknown city: {0}")]
    UnknownCity(String),

    #[error("failed to load weather fixtures: {0}")]
    Fixture(String),
}

#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Cities offered as search suggestions, in display order
    async fn list_cities(&self) -> Result<Vec<String>, ProviderError>;

    /// Current conditions for a city
    async fn current(&self, city: &str) -> Result<CurrentConditions, ProviderError>;

    /// Upcoming daily forecast, chronological
    async fn forecast(&self, city: &str) -> Result<Vec<ForecastDay>, ProviderError>;

    /// Past week of daily samples, chronological
    async fn history(&self, city: &str) -> Result<Vec<HistoricalDay>, ProviderError>;
}
