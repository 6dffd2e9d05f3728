//! Async completion messages
//!
//! Backend tasks run on the runtime and report back through the
//! message channel; the update layer lands their results on the model.

use std::collections::HashSet;

use askdeck_core::services::BulkOutcome;
use askdeck_core::types::{PaginatedResponse, Question};
use askdeck_core::CoreResult;

/// Completion of a spawned backend task
#[derive(Debug)]
pub enum BackendMessage {
    /// A list refresh settled
    QuestionsLoaded {
        /// Refresh generation, for last-write-wins
        generation: u64,
        /// Fetched and media-enriched page
        result: CoreResult<PaginatedResponse<Question>>,
    },

    /// A single-item freshening fetch settled
    QuestionFreshened(CoreResult<Question>),

    /// A bulk action settled (every per-item request completed)
    BulkSettled(BulkOutcome),

    /// An undo inverse settled
    UndoSettled {
        /// Description of the forward action that was reversed
        description: String,
        /// Outcome of the inverse batch
        outcome: BulkOutcome,
    },

    /// Persisted pins arrived at startup
    PinsLoaded(CoreResult<HashSet<String>>),
}
