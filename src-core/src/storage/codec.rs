//! Shared serialization layer between the services and the backend.
//!
//! Collections are stored as one JSON document per key and always written
//! whole. Reads never fail: anything unreadable degrades to the key's
//! default so the app still comes up, and the failure is logged instead.

use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::storage_traits::StorageBackend;
use crate::errors::Result;

/// Load the JSON collection stored under `key`.
///
/// A missing key, a backend failure or an unparseable payload all yield
/// an empty collection.
pub async fn load_collection<T, S>(backend: &S, key: &str) -> Vec<T>
where
    T: DeserializeOwned,
    S: StorageBackend + ?Sized,
{
    let raw = match backend.get(key).await {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            warn!("failed to read '{}', starting empty: {}", key, e);
            return Vec::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(items) => items,
        Err(e) => {
            warn!("failed to parse '{}', starting empty: {}", key, e);
            Vec::new()
        }
    }
}

/// Serialize `items` and persist the full collection under `key`.
pub async fn save_collection<T, S>(backend: &S, key: &str, items: &[T]) -> Result<()>
where
    T: Serialize,
    S: StorageBackend + ?Sized,
{
    let payload = serde_json::to_string(items)?;
    backend.set(key, &payload).await?;
    debug!("persisted {} entries under '{}'", items.len(), key);
    Ok(())
}

/// Load a boolean flag stored as the string `"true"` / `"false"`.
///
/// Only the exact string `"true"` reads as true; absence, a read failure
/// and any other payload read as false.
pub async fn load_flag<S>(backend: &S, key: &str) -> bool
where
    S: StorageBackend + ?Sized,
{
    match backend.get(key).await {
        Ok(Some(raw)) => raw == "true",
        Ok(None) => false,
        Err(e) => {
            warn!("failed to read '{}', defaulting to false: {}", key, e);
            false
        }
    }
}

/// Wire encoding of a boolean flag.
pub fn encode_flag(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
