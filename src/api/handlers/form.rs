use crate::api::responses::{ApiResponse, FormView, ProbeRequest, ProbeResponse};
use crate::events::Event;
use crate::form::FormEdit;
use crate::volume::{self, ProbeError};
use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn get_form(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let form = state.form.read().await;
    Json(ApiResponse::ok(FormView::from(&*form)))
}

pub(crate) async fn edit_form(
    State(state): State<Arc<AppState>>,
    Json(edit): Json<FormEdit>,
) -> impl IntoResponse {
    match state.apply_edit(edit).await {
        Ok(form) => Json(ApiResponse::ok(FormView::from(&form))),
        Err(e) => Json(ApiResponse::<FormView>::err(e.to_string())),
    }
}

pub(crate) async fn clear_form(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.apply_edit(FormEdit::Clear).await {
        Ok(form) => Json(ApiResponse::ok(FormView::from(&form))),
        Err(e) => Json(ApiResponse::<FormView>::err(e.to_string())),
    }
}

pub(crate) async fn probe_volume(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ProbeRequest>,
) -> impl IntoResponse {
    if !state.config.allow_probe {
        return Json(ApiResponse::<ProbeResponse>::err(ProbeError::Disabled.to_string()));
    }

    let path = req.path.clone();
    let reading = match tokio::task::spawn_blocking(move || volume::probe(&path)).await {
        Ok(Ok(reading)) => reading,
        Ok(Err(e)) => {
            warn!("Volume probe failed: {e}");
            state.event_hub.publish(Event::ProbeFailed { path: req.path, message: e.to_string() });
            return Json(ApiResponse::<ProbeResponse>::err(e.to_string()));
        }
        Err(e) => {
            return Json(ApiResponse::<ProbeResponse>::err(format!("Volume probe task failed: {e}")));
        }
    };

    info!(
        "Loaded volume {}: {:.2} GB total, {:.2} GB free",
        reading.path, reading.total_gb, reading.free_gb
    );
    state.event_hub.publish(Event::VolumeLoaded {
        path: reading.path.clone(),
        total_gb: reading.total_gb,
        free_gb: reading.free_gb,
    });

    let edit = FormEdit::LoadVolume { total: reading.total_gb, free: reading.free_gb };
    match state.apply_edit(edit).await {
        Ok(form) => {
            Json(ApiResponse::ok(ProbeResponse { volume: reading, form: FormView::from(&form) }))
        }
        Err(e) => Json(ApiResponse::<ProbeResponse>::err(e.to_string())),
    }
}
