// Chunked JSON streaming utilities
use crate::application::streaming_service::StreamMessage;
use crate::infrastructure::http_response::{JSON_CONTENT_TYPE, brotli};
use axum::body::Body;
use axum::http::{Response, StatusCode, header};
use axum::response::IntoResponse;
use bytes::{BufMut, Bytes, BytesMut};
use futures::StreamExt;
use futures::stream::Stream;

/// Create a chunked streaming response of length-prefixed JSON messages
pub fn chunked_json_stream<S>(stream: S, compress: bool) -> Result<Response<Body>, StatusCode>
where
    S: Stream<Item = StreamMessage> + Send + 'static,
{
    let byte_stream = stream.then(move |msg| async move { serialize_chunk(&msg, compress).await });

    // Chunks are compressed individually, so the response carries no Content-Encoding
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, JSON_CONTENT_TYPE)
        .header(header::TRANSFER_ENCODING, "chunked")
        .body(Body::from_stream(byte_stream))
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

/// One frame: 4-byte big-endian payload length, then the (optionally Brotli) JSON payload
pub async fn serialize_chunk(msg: &StreamMessage, compress: bool) -> Result<Bytes, std::io::Error> {
    let json = serde_json::to_vec(msg)?;

    let payload = if compress { brotli(&json).await? } else { json };

    let length = u32::try_from(payload.len())
        .map_err(|_| std::io::Error::new(std::io::ErrorKind::InvalidData, "chunk too large"))?;
    let mut chunk = BytesMut::with_capacity(4 + payload.len());
    chunk.put_u32(length);
    chunk.put_slice(&payload);

    Ok(chunk.freeze())
}

/// Helper to create a streaming response from a receiver
pub fn stream_from_receiver(
    mut rx: tokio::sync::mpsc::Receiver<StreamMessage>,
    compress: bool,
) -> impl IntoResponse {
    let stream = async_stream::stream! {
        while let Some(msg) = rx.recv().await {
            yield msg;
        }
    };

    match chunked_json_stream(stream, compress) {
        Ok(response) => response,
        Err(status) => status.into_response(),
    }
}
