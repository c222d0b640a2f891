use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::broadcast;
use uuid::Uuid;

/// Events that flow from form edits to SSE subscribers.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "event", content = "data")]
pub enum Event {
    /// An edit was accepted; `results` is the rendered results area.
    FormUpdated { session_id: Uuid, revision: u64, results: String, is_error: bool },

    /// The form was reset and a new session started.
    FormCleared { session_id: Uuid },

    /// An edit was refused and the form left unchanged.
    InputRejected { message: String },

    /// A mounted volume's capacity was loaded into the form.
    VolumeLoaded { path: String, total_gb: f64, free_gb: f64 },

    /// An alert email draft was produced.
    EmailComposed { subject: String, generated_at: DateTime<Utc> },

    /// A volume probe failed.
    ProbeFailed { path: String, message: String },
}

impl Event {
    /// Returns the SSE event type name for this event variant.
    pub const fn event_type(&self) -> &'static str {
        match self {
            Self::FormUpdated { .. } => "form_updated",
            Self::FormCleared { .. } => "form_cleared",
            Self::InputRejected { .. } => "input_rejected",
            Self::VolumeLoaded { .. } => "volume_loaded",
            Self::EmailComposed { .. } => "email_composed",
            Self::ProbeFailed { .. } => "probe_failed",
        }
    }
}

/// The central event broadcast hub.
///
/// Handlers send events here via `publish()`. The SSE endpoint subscribes via
/// `subscribe()` and forwards events to the browser.
#[derive(Debug, Clone)]
pub struct EventHub {
    sender: broadcast::Sender<Event>,
}

impl EventHub {
    /// Create a new EventHub with the given channel capacity.
    ///
    /// Subscribers that fall behind by more than `capacity` events miss the
    /// intermediate ones.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// Events are fire-and-forget: having no subscribers is not an error.
    pub fn publish(&self, event: Event) {
        if let Err(e) = self.sender.send(event) {
            tracing::trace!("No SSE subscribers for {}", e.0.event_type());
        }
    }

    /// Subscribe to the event stream. Returns a broadcast Receiver.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }
}
