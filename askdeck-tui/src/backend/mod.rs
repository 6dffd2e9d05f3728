//! Backend layer: platform services and async task dispatch
//!
//! Everything that touches the network, the filesystem, or the host
//! terminal lives here, behind the askdeck-core ports. Spawned tasks
//! report completions through the message channel; the backend never
//! mutates the model.

mod clipboard;
mod config;
mod core_service;
mod location;
mod notifier;
mod pin_repository;

pub use clipboard::Osc52Clipboard;
pub use config::{config_dir, AppConfig};
pub use core_service::Backend;
pub use location::HistoryLocation;
pub use notifier::ChannelNotifier;
pub use pin_repository::JsonPinStore;
