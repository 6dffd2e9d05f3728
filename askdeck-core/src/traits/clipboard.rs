//! Clipboard abstract trait

use crate::error::CoreResult;

/// Host clipboard primitive
///
/// Failures are surfaced to the user as a notification, never
/// propagated past the caller.
pub trait ClipboardPort: Send + Sync {
    /// Copy text to the host clipboard
    fn copy_text(&self, text: &str) -> CoreResult<()>;
}
