//! Notice sink
//!
//! Notices flow through the message channel so spawned tasks can show
//! them without touching the model.

use tokio::sync::mpsc::UnboundedSender;

use askdeck_core::{Notifier, NoticeKind};

use crate::message::AppMessage;

/// Channel-backed implementation of [`Notifier`]
pub struct ChannelNotifier {
    tx: UnboundedSender<AppMessage>,
}

impl ChannelNotifier {
    pub fn new(tx: UnboundedSender<AppMessage>) -> Self {
        Self { tx }
    }
}

impl Notifier for ChannelNotifier {
    fn notify(&self, message: &str, kind: NoticeKind) {
        // A closed channel means the app is shutting down
        let _ = self.tx.send(AppMessage::Notice(message.to_string(), kind));
    }
}
