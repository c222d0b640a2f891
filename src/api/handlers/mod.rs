mod email;
mod form;
mod settings;
mod sse;
mod status;

pub(super) use email::compose_email;
pub(super) use form::{clear_form, edit_form, get_form, probe_volume};
pub(super) use settings::{get_settings, update_settings};
pub(super) use sse::sse_events;
pub(super) use status::get_status;
