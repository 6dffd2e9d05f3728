//! Media reference and segment types

use serde::{Deserialize, Serialize};

/// Kind of recorded media
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Audio,
    Video,
}

/// Opaque reference to a recorded question, resolved by the media collaborator
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRef {
    /// Provider-side media ID
    pub id: String,
    /// Audio or video
    pub kind: MediaKind,
}

/// Normalized playable-segment descriptor
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaSegment {
    /// Playback URL
    pub url: String,
    /// Segment duration in milliseconds
    pub duration_ms: u64,
    /// MIME type of the segment
    pub mime: String,
}
