//! Business services module
//!
//! Each service owns one concern of the inbox:
//! - `panels`: the layered view stack
//! - `url_sync`: the address-bar mirror of the stack
//! - `selection`: multi-select over the visible list
//! - `pins`: pinned-first ordering override
//! - `list_controller`: criteria plus the cached result page
//! - `bulk`: concurrent reversible mutations
//! - `undo`: time-boxed inverse descriptors

mod bulk;
mod list_controller;
mod panels;
mod pins;
mod selection;
mod undo;
mod url_sync;

#[cfg(feature = "http")]
mod http;

use std::sync::Arc;

use crate::traits::{MediaResolver, QuestionService};

pub use bulk::{execute_bulk, BulkOp, BulkOutcome};
pub use list_controller::QuestionListController;
pub use panels::{Panel, PanelKind, PanelPayload, PanelStack};
pub use pins::PinSet;
pub use selection::SelectionSet;
pub use undo::{UndoCommand, UndoEntry, UndoStack, UNDO_WINDOW_SECS};
pub use url_sync::{stack_to_url, UrlSynchronizer};

#[cfg(feature = "http")]
pub use http::{HttpMediaResolver, HttpQuestionService};

/// Shared handles to the external collaborators the services need
#[derive(Clone)]
pub struct ServiceContext {
    /// Question data service
    pub questions: Arc<dyn QuestionService>,
    /// Media-enrichment collaborator
    pub media: Arc<dyn MediaResolver>,
}

impl ServiceContext {
    /// Bundle the collaborators
    #[must_use]
    pub fn new(questions: Arc<dyn QuestionService>, media: Arc<dyn MediaResolver>) -> Self {
        Self { questions, media }
    }
}
