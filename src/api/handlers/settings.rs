use crate::api::responses::ApiResponse;
use crate::config::SettingsUpdate;
use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn get_settings(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    Json(ApiResponse::ok(state.config.clone()))
}

/// Merge, validate and persist new settings. The running daemon keeps its
/// current config until restart.
pub(crate) async fn update_settings(
    State(state): State<Arc<AppState>>,
    Json(update): Json<SettingsUpdate>,
) -> impl IntoResponse {
    let config = state.config.merged(update);

    let saved = config.validate().and_then(|()| config.save());
    match saved {
        Ok(()) => {
            info!("Settings written to {}", config.config_path);
            Json(ApiResponse::ok("Settings saved (restart to apply)"))
        }
        Err(e) => {
            warn!("Settings rejected: {e:#}");
            Json(ApiResponse::<&str>::err(format!("Settings not saved: {e}")))
        }
    }
}
