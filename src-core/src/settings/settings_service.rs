//! Process-wide user settings.

use std::sync::Arc;

use log::info;
use tokio::sync::RwLock;

use crate::errors::Result;
use crate::storage::{codec, keys, StorageBackend};

/// Owner of the dark-mode flag.
///
/// The flag is persisted as the literal string `"true"` / `"false"`;
/// only the exact string `"true"` reads back as enabled. A data reset
/// leaves this key alone.
pub struct SettingsService<S: StorageBackend> {
    backend: Arc<S>,
    dark_mode: RwLock<bool>,
}

impl<S: StorageBackend> SettingsService<S> {
    pub fn new(backend: Arc<S>) -> Self {
        Self {
            backend,
            dark_mode: RwLock::new(false),
        }
    }

    /// Read the persisted flag; anything unreadable defaults to false.
    pub async fn load(&self) {
        let value = codec::load_flag(self.backend.as_ref(), keys::DARK_MODE).await;
        *self.dark_mode.write().await = value;
    }

    pub async fn dark_mode(&self) -> bool {
        *self.dark_mode.read().await
    }

    /// Persist the flag, then update memory.
    pub async fn set_dark_mode(&self, enabled: bool) -> Result<()> {
        let mut slot = self.dark_mode.write().await;
        self.backend
            .set(keys::DARK_MODE, codec::encode_flag(enabled))
            .await?;
        *slot = enabled;
        info!("dark mode set to {}", enabled);
        Ok(())
    }
}
