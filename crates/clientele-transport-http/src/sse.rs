//! One-shot Server-Sent-Events responses.

use std::convert::Infallible;

use axum::response::sse::{Event, Sse};
use axum::response::{IntoResponse, Response};

/// Wraps `data` as a single `data: ...\n\n` frame; the stream then ends.
pub(crate) fn single_event(data: String) -> Response {
    let stream = tokio_stream::once(Ok::<_, Infallible>(Event::default().data(data)));
    Sse::new(stream).into_response()
}
