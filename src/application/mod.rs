// Application layer - Use cases over the weather provider
pub mod dashboard_service;
pub mod search_service;
pub mod streaming_service;
pub mod weather_provider;
