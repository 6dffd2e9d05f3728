//! Inbox filter/sort/search criteria

use serde::{Deserialize, Serialize};

use super::question::QuestionStatus;

/// Status bucket shown in the inbox
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Questions awaiting an answer
    #[default]
    Pending,
    /// Already answered
    Answered,
    /// Hidden from triage
    Hidden,
    /// Everything
    All,
}

impl StatusFilter {
    /// Cycle to the next bucket (used by the filter shortcut)
    pub fn next(self) -> Self {
        match self {
            Self::Pending => Self::Answered,
            Self::Answered => Self::Hidden,
            Self::Hidden => Self::All,
            Self::All => Self::Pending,
        }
    }

    /// Whether a status belongs to this bucket
    pub fn accepts(self, status: QuestionStatus) -> bool {
        match self {
            Self::Pending => status == QuestionStatus::Pending,
            Self::Answered => status == QuestionStatus::Answered,
            Self::Hidden => status == QuestionStatus::Hidden,
            Self::All => true,
        }
    }

    /// Label for the status bar
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Answered => "Answered",
            Self::Hidden => "Hidden",
            Self::All => "All",
        }
    }
}

/// Sort order for the visible list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Newest submissions first
    #[default]
    Newest,
    /// Oldest submissions first
    Oldest,
    /// Closest SLA deadline first
    SlaDue,
}

impl SortKey {
    /// Cycle to the next order (used by the sort shortcut)
    pub fn next(self) -> Self {
        match self {
            Self::Newest => Self::Oldest,
            Self::Oldest => Self::SlaDue,
            Self::SlaDue => Self::Newest,
        }
    }

    /// Short label for the status bar
    pub fn label(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::SlaDue => "sla due",
        }
    }
}

/// Complete list criteria sent to the data service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionFilter {
    /// Status bucket
    pub status: StatusFilter,
    /// Free-text search, empty = no search
    pub search: String,
    /// Sort order
    pub sort: SortKey,
    /// 1-based page number
    pub page: u32,
    /// Items per page
    pub page_size: u32,
}

impl Default for QuestionFilter {
    fn default() -> Self {
        Self {
            status: StatusFilter::default(),
            search: String::new(),
            sort: SortKey::default(),
            page: 1,
            page_size: 25,
        }
    }
}

