//! Status notice state

use askdeck_core::NoticeKind;
use chrono::{DateTime, Duration, Utc};

/// How long a notice stays on the status bar
const NOTICE_TTL_SECS: i64 = 5;

/// A dismissible status-bar message
#[derive(Debug, Clone)]
pub struct Notice {
    /// Message text
    pub message: String,
    /// Severity, drives the color
    pub kind: NoticeKind,
    /// When the notice disappears on its own
    pub expires_at: DateTime<Utc>,
}

impl Notice {
    /// Notice created now with the default TTL
    pub fn new(message: impl Into<String>, kind: NoticeKind) -> Self {
        Self {
            message: message.into(),
            kind,
            expires_at: Utc::now() + Duration::seconds(NOTICE_TTL_SECS),
        }
    }

    /// Whether the notice should still be shown at `now`
    pub fn live_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}
