//! Backend handle
//!
//! Wraps the askdeck-core services behind spawn helpers: the update
//! layer stays synchronous, fires a task here, and the completion
//! comes back through the message channel as a `BackendMessage`.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;

use askdeck_core::services::{execute_bulk, BulkOp, ServiceContext, UndoCommand};
use askdeck_core::services::{HttpMediaResolver, HttpQuestionService, QuestionListController};
use askdeck_core::types::QuestionFilter;
use askdeck_core::{ClipboardPort, CoreResult, NoticeKind, Notifier, PinStore};

use super::clipboard::Osc52Clipboard;
use super::config::AppConfig;
use super::location::HistoryLocation;
use super::notifier::ChannelNotifier;
use super::pin_repository::JsonPinStore;
use crate::message::{AppMessage, BackendMessage};

/// TUI backend handle
///
/// Owns the service instances and the sending half of the message
/// channel. Cheap to clone into spawned tasks.
pub struct Backend {
    /// Question API and media resolver
    pub ctx: ServiceContext,
    /// Pin persistence
    pub pins: Arc<dyn PinStore>,
    /// Host clipboard
    pub clipboard: Arc<dyn ClipboardPort>,
    /// Address-bar history
    pub location: Arc<HistoryLocation>,
    /// Notice sink for spawned tasks
    notifier: Arc<dyn Notifier>,
    /// Completion channel into the main loop
    tx: UnboundedSender<AppMessage>,
}

impl Backend {
    /// Create the backend over HTTP services
    pub fn new(
        config: &AppConfig,
        location: Arc<HistoryLocation>,
        tx: UnboundedSender<AppMessage>,
    ) -> Self {
        let ctx = ServiceContext::new(
            Arc::new(HttpQuestionService::new(&config.api_base_url)),
            Arc::new(HttpMediaResolver::new(&config.api_base_url)),
        );
        Self::with_context(ctx, location, tx)
    }

    /// Create the backend over an existing service context
    ///
    /// Lets the spawn helpers run against in-process services.
    pub fn with_context(
        ctx: ServiceContext,
        location: Arc<HistoryLocation>,
        tx: UnboundedSender<AppMessage>,
    ) -> Self {
        Self {
            ctx,
            pins: Arc::new(JsonPinStore),
            clipboard: Arc::new(Osc52Clipboard),
            location,
            notifier: Arc::new(ChannelNotifier::new(tx.clone())),
            tx,
        }
    }

    fn send(&self, msg: BackendMessage) {
        // A closed channel means the app is shutting down
        let _ = self.tx.send(AppMessage::Backend(msg));
    }

    /// Fetch a page in the background
    pub fn spawn_refresh(&self, generation: u64, filter: QuestionFilter) {
        let ctx = self.ctx.clone();
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = QuestionListController::fetch(&ctx, &filter).await;
            let _ = tx.send(AppMessage::Backend(BackendMessage::QuestionsLoaded {
                generation,
                result,
            }));
        });
    }

    /// Freshen a single question in the background
    ///
    /// Fired when its detail opens, so the focused item reflects
    /// server truth even between page refreshes.
    pub fn spawn_freshen(&self, id: String) {
        let questions = Arc::clone(&self.ctx.questions);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = questions.get(&id).await;
            let _ = tx.send(AppMessage::Backend(BackendMessage::QuestionFreshened(
                result,
            )));
        });
    }

    /// Run a bulk operation in the background
    pub fn spawn_bulk(&self, op: BulkOp, ids: Vec<String>) {
        let questions = Arc::clone(&self.ctx.questions);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = execute_bulk(&questions, op, ids).await;
            let _ = tx.send(AppMessage::Backend(BackendMessage::BulkSettled(outcome)));
        });
    }

    /// Run an undo inverse in the background
    pub fn spawn_undo(&self, description: String, command: UndoCommand) {
        let questions = Arc::clone(&self.ctx.questions);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let outcome = execute_bulk(&questions, command.inverse, command.target_ids).await;
            let _ = tx.send(AppMessage::Backend(BackendMessage::UndoSettled {
                description,
                outcome,
            }));
        });
    }

    /// Load the persisted pins in the background
    pub fn spawn_load_pins(&self) {
        let pins = Arc::clone(&self.pins);
        let tx = self.tx.clone();
        tokio::spawn(async move {
            let result = pins.load().await;
            let _ = tx.send(AppMessage::Backend(BackendMessage::PinsLoaded(result)));
        });
    }

    /// Persist the pin set in the background
    ///
    /// Failure only warrants a notice; the in-memory pins stay applied.
    pub fn spawn_save_pins(&self, set: std::collections::HashSet<String>) {
        let pins = Arc::clone(&self.pins);
        let notifier = Arc::clone(&self.notifier);
        tokio::spawn(async move {
            if let Err(e) = pins.save(&set).await {
                log::warn!("saving pins failed: {e}");
                notifier.notify("Couldn't save pins", NoticeKind::Warning);
            }
        });
    }

    /// Copy text to the host clipboard
    pub fn copy_text(&self, text: &str) -> CoreResult<()> {
        self.clipboard.copy_text(text)
    }
}
