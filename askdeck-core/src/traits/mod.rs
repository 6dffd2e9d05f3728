//! Abstract ports implemented by the host platform
//!
//! The core never talks to a transport, a terminal or a file directly.
//! Each external collaborator is reached through one of these traits,
//! so the services stay platform-independent and mockable.

mod clipboard;
mod location;
mod media_resolver;
mod notifier;
mod pin_store;
mod question_service;

pub use clipboard::ClipboardPort;
pub use location::LocationPort;
pub use media_resolver::MediaResolver;
pub use notifier::{NoticeKind, Notifier};
pub use pin_store::PinStore;
pub use question_service::QuestionService;
