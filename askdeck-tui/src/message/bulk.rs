//! Bulk action and undo messages

/// Bulk action message
#[derive(Debug, Clone)]
pub enum BulkMessage {
    /// Hide the selected questions
    HideSelected,
    /// Mark the selected questions answered
    AnswerSelected,
    /// Run the most recent undo entry
    Undo,
}
