// Search service - Use case for city suggestions
use crate::application::weather_provider::{ProviderError, WeatherProvider};
use std::sync::Arc;

#[derive(Clone)]
pub struct SearchService {
    provider: Arc<dyn WeatherProvider>,
    max_suggestions: usize,
}

impl SearchService {
    pub fn new(provider: Arc<dyn WeatherProvider>, max_suggestions: usize) -> Self {
        Self {
            provider,
            max_suggestions,
        }
    }

    /// Case-insensitive substring match over the known cities, in list order.
    /// An empty query suggests nothing.
    pub async fn suggestions(&self, query: &str) -> Result<Vec<String>, ProviderError> {
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let needle = query.to_lowercase();
        let cities = self.provider.list_cities().await?;
        Ok(cities
            .into_iter()
            .filter(|city| city.to_lowercase().contains(&needle))
            .take(self.max_suggestions)
            .collect())
    }

    /// The city a submitted search selects; free text is accepted as-is.
    pub fn resolve(query: &str) -> Option<String> {
        let trimmed = query.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    }
}
