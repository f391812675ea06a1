//! Wishlist collection ownership and mutations.
//!
//! Same persistence discipline as the budget service: single writer for
//! the `wishlistItems` key, write-then-commit under the collection lock.

use std::sync::Arc;

use chrono::Utc;
use log::info;
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::wishlist_model::{ItemKind, NewWishlistItem, WishlistItem, WishlistItemUpdate};
use crate::errors::{MutationOutcome, Result};
use crate::storage::{codec, keys, StorageBackend};

pub struct WishlistService<S: StorageBackend> {
    backend: Arc<S>,
    items: RwLock<Vec<WishlistItem>>,
}

impl<S: StorageBackend> WishlistService<S> {
    pub fn new(backend: Arc<S>) -> Self {
        Self {
            backend,
            items: RwLock::new(Vec::new()),
        }
    }

    /// Replace the in-memory collection with whatever is persisted.
    /// Unreadable data degrades to an empty collection.
    pub async fn load(&self) {
        let loaded = codec::load_collection(self.backend.as_ref(), keys::WISHLIST_ITEMS).await;
        *self.items.write().await = loaded;
    }

    /// Snapshot of the current collection, in insertion order.
    pub async fn items(&self) -> Vec<WishlistItem> {
        self.items.read().await.clone()
    }

    /// Create a wishlist item, unpurchased and freshly stamped.
    pub async fn add_item(&self, new_item: NewWishlistItem) -> Result<WishlistItem> {
        let item = WishlistItem {
            id: Uuid::new_v4().to_string(),
            name: new_item.name,
            amount: new_item.amount,
            category: new_item.category,
            kind: new_item.kind,
            importance: new_item.importance,
            is_purchased: false,
            date: Utc::now(),
        };

        let mut items = self.items.write().await;
        let mut next = items.clone();
        next.push(item.clone());
        self.commit(&mut items, next).await?;
        Ok(item)
    }

    /// Merge `update` into the item with `id`.
    pub async fn update_item(
        &self,
        id: &str,
        update: WishlistItemUpdate,
    ) -> Result<MutationOutcome> {
        let mut items = self.items.write().await;
        let mut next = items.clone();
        let Some(item) = next.iter_mut().find(|i| i.id == id) else {
            return Ok(MutationOutcome::NotFound);
        };

        if let Some(name) = update.name {
            item.name = name;
        }
        if let Some(amount) = update.amount {
            item.amount = amount;
        }
        if let Some(category) = update.category {
            item.category = category;
        }
        if let Some(kind) = update.kind {
            item.kind = kind;
        }
        if let Some(importance) = update.importance {
            item.importance = importance;
        }

        self.commit(&mut items, next).await?;
        Ok(MutationOutcome::Applied)
    }

    /// Remove the item with `id`.
    pub async fn delete_item(&self, id: &str) -> Result<MutationOutcome> {
        let mut items = self.items.write().await;
        if !items.iter().any(|i| i.id == id) {
            return Ok(MutationOutcome::NotFound);
        }

        let next: Vec<WishlistItem> = items.iter().filter(|i| i.id != id).cloned().collect();
        self.commit(&mut items, next).await?;
        Ok(MutationOutcome::Applied)
    }

    /// Flip the purchase flag. The item stays in the collection either
    /// way, so a second toggle restores the previous state.
    pub async fn toggle_purchased(&self, id: &str) -> Result<MutationOutcome> {
        let mut items = self.items.write().await;
        let mut next = items.clone();
        let Some(item) = next.iter_mut().find(|i| i.id == id) else {
            return Ok(MutationOutcome::NotFound);
        };
        item.is_purchased = !item.is_purchased;

        self.commit(&mut items, next).await?;
        Ok(MutationOutcome::Applied)
    }

    /// Total of unpurchased items, optionally narrowed to one kind.
    pub async fn active_total(&self, kind: Option<ItemKind>) -> Decimal {
        self.items
            .read()
            .await
            .iter()
            .filter(|i| !i.is_purchased && kind.map_or(true, |k| i.kind == k))
            .map(|i| i.amount)
            .sum()
    }

    /// Unpurchased items of one kind, most important first. Ties keep
    /// insertion order.
    pub async fn by_kind(&self, kind: ItemKind) -> Vec<WishlistItem> {
        let mut filtered: Vec<WishlistItem> = self
            .items
            .read()
            .await
            .iter()
            .filter(|i| i.kind == kind && !i.is_purchased)
            .cloned()
            .collect();
        filtered.sort_by(|a, b| b.importance.cmp(&a.importance));
        filtered
    }

    /// Drop the persisted collection and clear memory.
    pub async fn reset(&self) -> Result<()> {
        let mut items = self.items.write().await;
        self.backend.remove(keys::WISHLIST_ITEMS).await?;
        items.clear();
        info!("wishlist items cleared");
        Ok(())
    }

    async fn commit(&self, slot: &mut Vec<WishlistItem>, next: Vec<WishlistItem>) -> Result<()> {
        codec::save_collection(self.backend.as_ref(), keys::WISHLIST_ITEMS, &next).await?;
        *slot = next;
        Ok(())
    }
}
