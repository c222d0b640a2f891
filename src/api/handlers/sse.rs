use crate::api::responses::FormView;
use crate::events::Event;
use crate::AppState;
use axum::{
    extract::State,
    response::sse::{Event as SseEvent, KeepAlive, Sse},
};
use futures::stream::Stream;
use std::convert::Infallible;
use std::sync::Arc;
use tokio_stream::wrappers::errors::BroadcastStreamRecvError;
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;
use tracing::warn;

fn to_sse(event: &Event) -> Option<SseEvent> {
    match serde_json::to_string(event) {
        Ok(json) => Some(SseEvent::default().event(event.event_type()).data(json)),
        Err(e) => {
            warn!("Failed to serialize {} event: {e}", event.event_type());
            None
        }
    }
}

/// Stream form events. New subscribers first receive a `form_snapshot` so they
/// can render without a separate GET.
pub(crate) async fn sse_events(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<SseEvent, Infallible>>> {
    let rx = state.event_hub.subscribe();

    let snapshot = {
        let form = state.form.read().await;
        serde_json::to_string(&FormView::from(&*form))
            .ok()
            .map(|json| Ok::<_, Infallible>(SseEvent::default().event("form_snapshot").data(json)))
    };

    let updates = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(event) => to_sse(&event).map(Ok::<_, Infallible>),
        Err(BroadcastStreamRecvError::Lagged(skipped)) => {
            warn!("SSE subscriber lagged behind, {skipped} events dropped");
            None
        }
    });

    Sse::new(tokio_stream::iter(snapshot).chain(updates)).keep_alive(KeepAlive::default())
}
