//! User notification abstract trait

/// Severity of a user-facing notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Warning,
    Error,
}

/// Dismissible user notification sink
pub trait Notifier: Send + Sync {
    /// Show a notice to the user
    fn notify(&self, message: &str, kind: NoticeKind);
}
