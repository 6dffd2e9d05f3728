//! Inbox list messages
//!
//! Cursor movement, selection, pinning and criteria changes.

/// Inbox list message
#[derive(Debug, Clone)]
pub enum ListMessage {
    // ========== Cursor ==========
    /// Move the cursor up
    CursorUp,
    /// Move the cursor down
    CursorDown,
    /// Jump to the first item
    CursorFirst,
    /// Jump to the last item
    CursorLast,

    // ========== Selection ==========
    /// Toggle selection of the cursor item
    ToggleSelect,
    /// Range-select from the anchor to the cursor item
    RangeSelect,
    /// Select every visible item
    SelectAll,
    /// Drop the selection
    ClearSelection,

    // ========== Pinning ==========
    /// Toggle the pin of the detail item, or the cursor item
    TogglePin,

    // ========== Criteria ==========
    /// Cycle the status bucket
    CycleStatusFilter,
    /// Cycle the sort order
    CycleSort,
    /// Next result page
    NextPage,
    /// Previous result page
    PrevPage,
    /// Refetch the current page
    Refresh,

    // ========== Search ==========
    /// Focus the search box
    BeginSearch,
    /// Type into the search box
    SearchInput(char),
    /// Delete the last search character
    SearchBackspace,
    /// Commit the search and refresh
    CommitSearch,
    /// Abandon the search edit
    CancelSearch,
}
