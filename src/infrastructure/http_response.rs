// HTTP response utilities for JSON and SVG bodies with optional Brotli encoding
use async_compression::tokio::bufread::BrotliEncoder;
use axum::{
    body::Body,
    http::{HeaderValue, Response, StatusCode, header},
};
use serde::Serialize;
use tokio::io::AsyncReadExt;

pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

pub(crate) async fn brotli(bytes: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = BrotliEncoder::new(bytes);
    let mut compressed = Vec::new();
    encoder.read_to_end(&mut compressed).await?;
    Ok(compressed)
}

/// Build a response from raw bytes, compressing them when the client accepts `br`
pub async fn encoded_response(
    bytes: Vec<u8>,
    content_type: &'static str,
    compress: bool,
) -> Result<Response<Body>, StatusCode> {
    let (body_bytes, content_encoding) = if compress {
        let compressed = brotli(&bytes).await.map_err(|e| {
            tracing::error!("Brotli compression error: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;
        tracing::debug!("Compressed {} -> {} bytes", bytes.len(), compressed.len());
        (compressed, Some("br"))
    } else {
        (bytes, None)
    };

    let mut response_builder = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, content_type)
        .header(header::CONTENT_LENGTH, HeaderValue::from(body_bytes.len()));

    if let Some(encoding) = content_encoding {
        response_builder = response_builder.header(header::CONTENT_ENCODING, encoding);
    }

    response_builder.body(Body::from(body_bytes)).map_err(|e| {
        tracing::error!("Response build error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

pub async fn json_response<T: Serialize>(
    data: &T,
    compress: bool,
) -> Result<Response<Body>, StatusCode> {
    let bytes = serde_json::to_vec(data).map_err(|e| {
        tracing::error!("JSON serialization error: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;
    encoded_response(bytes, JSON_CONTENT_TYPE, compress).await
}

pub async fn svg_response(svg: String, compress: bool) -> Result<Response<Body>, StatusCode> {
    encoded_response(svg.into_bytes(), SVG_CONTENT_TYPE, compress).await
}
