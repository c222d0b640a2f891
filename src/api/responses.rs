use crate::form::{FormState, Results, SpaceField};
use crate::volume::VolumeReading;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub(crate) struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub(crate) const fn ok(data: T) -> Self {
        Self { success: true, data: Some(data), error: None }
    }

    pub(crate) fn err(msg: impl Into<String>) -> Self {
        Self { success: false, data: None, error: Some(msg.into()) }
    }
}

/// Daemon identity returned by the status endpoint.
#[derive(Debug, Serialize)]
pub(crate) struct StatusResponse {
    pub version: String,
    pub about: String,
    pub started_at: DateTime<Utc>,
    pub session_id: Uuid,
    pub revision: u64,
}

/// What a front end needs to render the form and its results area.
#[derive(Debug, Serialize)]
pub(crate) struct FormView {
    pub session_id: Uuid,
    pub revision: u64,
    pub total: SpaceField,
    pub free: SpaceField,
    pub used: SpaceField,
    pub target: String,
    pub results: Results,
    /// `results` rendered as the text shown in the results area.
    pub results_text: String,
}

impl From<&FormState> for FormView {
    fn from(form: &FormState) -> Self {
        Self {
            session_id: form.session_id,
            revision: form.revision,
            total: form.total.clone(),
            free: form.free.clone(),
            used: form.used.clone(),
            target: form.target_text.clone(),
            results: form.results.clone(),
            results_text: form.results.to_string(),
        }
    }
}

/// Request body for POST /api/form/probe.
#[derive(Debug, Deserialize)]
pub(crate) struct ProbeRequest {
    pub path: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ProbeResponse {
    pub volume: VolumeReading,
    pub form: FormView,
}
