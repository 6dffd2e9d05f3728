//! Panel stack messages

/// Panel stack message
#[derive(Debug, Clone)]
pub enum PanelMessage {
    /// Open the detail panel for the cursor item
    OpenDetail,
    /// Open the answer panel for the current detail item
    OpenAnswer,
    /// Close the topmost non-list panel
    CloseTop,
    /// Collapse back to the list
    CloseAll,
    /// Copy a deep link to the current detail item
    CopyDeepLink,
    /// Go back in location history
    HistoryBack,
    /// Go forward in location history
    HistoryForward,

    // ========== Answer draft ==========
    /// Type into the answer draft
    AnswerInput(char),
    /// Delete the last draft character
    AnswerBackspace,
    /// Submit the draft: marks the question answered
    SubmitAnswer,
}
