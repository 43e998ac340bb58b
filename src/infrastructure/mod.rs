// Infrastructure layer - External dependencies and adapters
pub mod chunked_stream;
pub mod config;
pub mod fixture_provider;
pub mod http_response;
pub mod svg;
