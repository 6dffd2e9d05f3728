//! Question domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::media::{MediaRef, MediaSegment};

/// Triage status of a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionStatus {
    /// Awaiting an answer
    Pending,
    /// Answered by the owner
    Answered,
    /// Hidden from the inbox
    Hidden,
}

/// Resolution state of a question's attached media
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaState {
    /// Question has no media attached
    #[default]
    None,
    /// Media reference present, segment not yet resolved
    Pending,
    /// Resolved to a playable segment
    Ready(MediaSegment),
    /// Resolution failed; treated as "no media"
    Failed,
}

/// A single audience question
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    /// Unique question ID
    pub id: String,
    /// Display name of the asker
    pub author: String,
    /// Question text
    pub body: String,
    /// Triage status
    pub status: QuestionStatus,
    /// Optional response-time commitment attached by the data service
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sla_due: Option<DateTime<Utc>>,
    /// Opaque media reference, if the question was recorded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<MediaRef>,
    /// Enrichment result for `media`
    #[serde(skip)]
    pub media_state: MediaState,
    /// Submission time
    pub created_at: DateTime<Utc>,
}

/// Partial update sent to the data service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPatch {
    /// New triage status, if changing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<QuestionStatus>,
}

impl QuestionPatch {
    /// Patch that sets the triage status
    pub fn set_status(status: QuestionStatus) -> Self {
        Self {
            status: Some(status),
        }
    }
}
