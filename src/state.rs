use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::events::{Event, EventHub};
use crate::form::{self, FormEdit, FormError, FormState};

/// Shared application state passed to all API handlers via axum's State extractor.
pub struct AppState {
    pub config: AppConfig,
    pub event_hub: EventHub,
    /// The one calculator form this daemon serves. Every edit runs under the write lock.
    pub form: tokio::sync::RwLock<FormState>,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(config: AppConfig, event_hub: EventHub) -> Self {
        let form = FormState::new(&config.form_settings());
        Self {
            config,
            event_hub,
            form: tokio::sync::RwLock::new(form),
            started_at: Utc::now(),
        }
    }

    /// Run one edit through the reducer and replace the form with the result.
    pub(crate) async fn apply_edit(&self, edit: FormEdit) -> Result<FormState, FormError> {
        let settings = self.config.form_settings();
        let mut current = self.form.write().await;

        let next = match form::apply(&current, edit, &settings) {
            Ok(next) => next,
            Err(e) => {
                warn!("Rejected form edit: {e}");
                self.event_hub.publish(Event::InputRejected { message: e.to_string() });
                return Err(e);
            }
        };

        if next.session_id == current.session_id {
            self.event_hub.publish(Event::FormUpdated {
                session_id: next.session_id,
                revision: next.revision,
                results: next.results.to_string(),
                is_error: next.results.is_error(),
            });
        } else {
            info!("Form cleared, new session {}", next.session_id);
            self.event_hub.publish(Event::FormCleared { session_id: next.session_id });
        }

        *current = next.clone();
        Ok(next)
    }
}
