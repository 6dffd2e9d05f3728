//! Pin repository
//!
//! Persists the pin set as a JSON file under the config dir.
//! Implements the askdeck-core PinStore trait.

use std::collections::HashSet;
use std::path::PathBuf;

use async_trait::async_trait;
use tokio::fs;

use askdeck_core::{CoreError, CoreResult, PinStore};

use super::config::config_dir;

fn pins_file() -> PathBuf {
    config_dir().join("pins.json")
}

/// JSON-file implementation of [`PinStore`]
pub struct JsonPinStore;

impl JsonPinStore {
    async fn ensure_config_dir() -> CoreResult<()> {
        let dir = config_dir();
        if !dir.exists() {
            fs::create_dir_all(&dir)
                .await
                .map_err(|e| CoreError::StorageError(e.to_string()))?;
        }
        Ok(())
    }
}

#[async_trait]
impl PinStore for JsonPinStore {
    async fn load(&self) -> CoreResult<HashSet<String>> {
        let path = pins_file();
        if !path.exists() {
            return Ok(HashSet::new());
        }

        let content = fs::read_to_string(&path)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))?;

        serde_json::from_str(&content).map_err(|e| CoreError::SerializationError(e.to_string()))
    }

    async fn save(&self, pins: &HashSet<String>) -> CoreResult<()> {
        Self::ensure_config_dir().await?;

        // Sorted for a stable file, the set itself is unordered
        let mut ids: Vec<&String> = pins.iter().collect();
        ids.sort();
        let content = serde_json::to_string_pretty(&ids)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;

        fs::write(pins_file(), content)
            .await
            .map_err(|e| CoreError::StorageError(e.to_string()))
    }
}
