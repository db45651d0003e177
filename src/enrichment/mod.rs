//! AI text enrichment for the detail panel.
//!
//! Every selection change starts exactly one request on a worker thread.
//! Replies come back over a channel tagged with the ticket they were issued
//! for; a reply whose ticket is no longer current is dropped, so a slow
//! answer for an earlier selection can never replace a newer one.

pub mod gemini;

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex};

use bevy::prelude::*;
use thiserror::Error;

use crate::shell::CurrentSelection;
use crate::types::SceneSystems;

pub use self::gemini::GeminiClient;

/// Shown in place of enrichment text whenever a request fails.
pub const FALLBACK_TEXT: &str = "暂时无法获取该深空探测对象的详细实时数据。请检查网络或稍后重试。";

/// Why an enrichment request produced no text.
#[derive(Debug, Error)]
pub enum EnrichmentError {
    #[error("no API key configured")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Transport(String),
    #[error("service answered with HTTP {0}")]
    Status(u16),
    #[error("malformed reply: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("reply contained no text")]
    Empty,
    #[error("enrichment worker unavailable: {0}")]
    Worker(String),
}

/// A service that turns a subject name into descriptive text.
///
/// Called from worker threads; implementations may block.
pub trait EnrichmentSource: Send + Sync + 'static {
    fn describe(&self, subject: &str) -> Result<String, EnrichmentError>;
}

/// Describe `subject`, degrading any failure to [`FALLBACK_TEXT`].
pub fn describe_or_fallback(source: &dyn EnrichmentSource, subject: &str) -> String {
    match source.describe(subject) {
        Ok(text) => text,
        Err(err) => {
            warn!("Enrichment for {} failed: {}", subject, err);
            FALLBACK_TEXT.to_string()
        }
    }
}

/// The enrichment source used by the app.
#[derive(Resource, Clone)]
pub struct EnrichmentClient(pub Arc<dyn EnrichmentSource>);

impl EnrichmentClient {
    pub fn new(source: impl EnrichmentSource) -> Self {
        Self(Arc::new(source))
    }
}

/// Identifies the request a reply belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnrichmentTicket(u64);

/// What the AI tab should show.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum EnrichmentStatus {
    /// Nothing selected.
    #[default]
    Idle,
    Loading,
    Ready(String),
}

/// Enrichment text for the current selection.
#[derive(Resource, Default, Debug)]
pub struct EnrichmentState {
    generation: u64,
    subject: Option<String>,
    status: EnrichmentStatus,
}

impl EnrichmentState {
    /// Start a request for `subject`. Any previous text is dropped and any
    /// outstanding ticket becomes stale.
    pub fn begin(&mut self, subject: &str) -> EnrichmentTicket {
        self.generation += 1;
        self.subject = Some(subject.to_string());
        self.status = EnrichmentStatus::Loading;
        EnrichmentTicket(self.generation)
    }

    /// Apply a reply. Returns `false` (and changes nothing) for a stale ticket.
    pub fn complete(&mut self, ticket: EnrichmentTicket, text: String) -> bool {
        if ticket.0 != self.generation || self.status != EnrichmentStatus::Loading {
            return false;
        }
        self.status = EnrichmentStatus::Ready(text);
        true
    }

    /// Forget the current subject; outstanding replies become stale.
    pub fn clear(&mut self) {
        self.generation += 1;
        self.subject = None;
        self.status = EnrichmentStatus::Idle;
    }

    pub fn status(&self) -> &EnrichmentStatus {
        &self.status
    }

    pub fn subject(&self) -> Option<&str> {
        self.subject.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.status == EnrichmentStatus::Loading
    }

    pub fn text(&self) -> Option<&str> {
        match &self.status {
            EnrichmentStatus::Ready(text) => Some(text),
            _ => None,
        }
    }
}

/// A finished request on its way back from a worker.
#[derive(Debug)]
pub struct EnrichmentReply {
    pub ticket: EnrichmentTicket,
    pub text: String,
}

/// Channel between worker threads and the main schedule.
#[derive(Resource)]
pub struct EnrichmentInbox {
    sender: Sender<EnrichmentReply>,
    receiver: Mutex<Receiver<EnrichmentReply>>,
}

impl Default for EnrichmentInbox {
    fn default() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            sender,
            receiver: Mutex::new(receiver),
        }
    }
}

/// Plugin wiring selection changes to enrichment requests.
pub struct EnrichmentPlugin;

impl Plugin for EnrichmentPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EnrichmentState>()
            .init_resource::<EnrichmentInbox>()
            .add_systems(
                Update,
                (
                    request_enrichment.run_if(resource_changed::<CurrentSelection>),
                    receive_enrichment,
                )
                    .chain()
                    .after(SceneSystems::Selection),
            );
    }
}

/// Issue one request for the newly selected entry.
fn request_enrichment(
    selection: Res<CurrentSelection>,
    client: Option<Res<EnrichmentClient>>,
    inbox: Res<EnrichmentInbox>,
    mut state: ResMut<EnrichmentState>,
) {
    let Some(entry) = selection.entry() else {
        state.clear();
        return;
    };

    let subject = entry.display_name();
    let ticket = state.begin(subject);
    debug!("Requesting enrichment for {} ({:?})", subject, ticket);

    let Some(client) = client else {
        warn!("No enrichment client configured");
        state.complete(ticket, FALLBACK_TEXT.to_string());
        return;
    };

    let source = Arc::clone(&client.0);
    let sender = inbox.sender.clone();
    let spawned = std::thread::Builder::new()
        .name(format!("enrichment-{}", entry.id()))
        .spawn(move || {
            let text = describe_or_fallback(source.as_ref(), subject);
            // The receiver only goes away at shutdown.
            let _ = sender.send(EnrichmentReply { ticket, text });
        });

    if let Err(err) = spawned {
        warn!("{}", EnrichmentError::Worker(err.to_string()));
        state.complete(ticket, FALLBACK_TEXT.to_string());
    }
}

/// Apply finished replies, dropping stale ones.
fn receive_enrichment(inbox: Res<EnrichmentInbox>, mut state: ResMut<EnrichmentState>) {
    let Ok(receiver) = inbox.receiver.lock() else {
        return;
    };

    while let Ok(reply) = receiver.try_recv() {
        if !state.complete(reply.ticket, reply.text) {
            debug!("Discarded stale enrichment reply {:?}", reply.ticket);
        }
    }
}
