use crate::api::responses::{ApiResponse, StatusResponse};
use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

pub(crate) async fn get_status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let form = state.form.read().await;
    Json(ApiResponse::ok(StatusResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        about: env!("CARGO_PKG_DESCRIPTION").to_string(),
        started_at: state.started_at,
        session_id: form.session_id,
        revision: form.revision,
    }))
}
