//! Pin persistence abstract trait

use std::collections::HashSet;

use async_trait::async_trait;

use crate::error::CoreResult;

/// Client-side pin persistence
///
/// Pins are a purely local ordering override; they are never sent to
/// the data service.
///
/// Platform implementation:
/// - TUI: `JsonPinStore` (JSON file under the config dir)
#[async_trait]
pub trait PinStore: Send + Sync {
    /// Load the persisted pin set
    async fn load(&self) -> CoreResult<HashSet<String>>;

    /// Persist the pin set
    async fn save(&self, pins: &HashSet<String>) -> CoreResult<()>;
}
