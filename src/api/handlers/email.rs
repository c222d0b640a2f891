use crate::api::responses::ApiResponse;
use crate::email::{self, EmailDraft, EmailRequest};
use crate::events::Event;
use crate::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::{info, warn};

pub(crate) async fn compose_email(
    State(state): State<Arc<AppState>>,
    Json(req): Json<EmailRequest>,
) -> impl IntoResponse {
    let form = state.form.read().await;
    let result = email::compose(
        &form,
        &req,
        &state.config.mail_to,
        &state.config.client_abbreviation,
    );

    match result {
        Ok(draft) => {
            info!("Composed email: {}", draft.subject);
            state.event_hub.publish(Event::EmailComposed {
                subject: draft.subject.clone(),
                generated_at: chrono::Utc::now(),
            });
            Json(ApiResponse::ok(draft))
        }
        Err(e) => {
            warn!("Email not composed: {e}");
            Json(ApiResponse::<EmailDraft>::err(e.to_string()))
        }
    }
}
