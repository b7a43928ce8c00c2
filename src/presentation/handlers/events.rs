use std::convert::Infallible;

use axum::extract::State;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures_util::stream::Stream;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

use crate::presentation::state::AppState;

/// SSE feed of change signals. Every event means "re-fetch"; a lagged
/// receiver still gets a single coalesced signal, which is equivalent for
/// consumers that only re-fetch.
pub async fn events_handler(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    tracing::debug!("SSE client connected");

    let rx = state.job_service.subscribe_changes();

    let stream = BroadcastStream::new(rx)
        .map(|_| Ok(Event::default().event("changed").data("refresh")));

    Sse::new(stream).keep_alive(KeepAlive::default())
}
