//! Persistence layer: the pluggable key-value backend contract, the
//! shipped backends, and the JSON codec every service shares.

pub mod codec;
pub mod file_backend;
pub mod memory_backend;
pub mod storage_traits;

pub use file_backend::FileBackend;
pub use memory_backend::MemoryBackend;
pub use storage_traits::{StorageBackend, StorageError};

/// Persisted key names. The whole data set lives under these three keys.
pub mod keys {
    /// JSON array of budget items.
    pub const BUDGET_ITEMS: &str = "budgetItems";
    /// JSON array of wishlist items.
    pub const WISHLIST_ITEMS: &str = "wishlistItems";
    /// Dark-mode flag, stored as `"true"` / `"false"`.
    pub const DARK_MODE: &str = "darkMode";
}
