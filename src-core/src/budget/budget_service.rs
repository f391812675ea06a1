//! Budget collection ownership and mutations.
//!
//! The service is the single writer for the `budgetItems` key: every
//! mutation runs under the collection's write lock, persists the updated
//! collection, and only then commits it to memory. A failed write leaves
//! both the backend and memory at the previous state.

use std::sync::Arc;

use chrono::Utc;
use log::info;
use rust_decimal::Decimal;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::budget_model::{
    BudgetItem, BudgetItemUpdate, NewBudgetItem, NewSubItem, Period, SubItem, SubItemUpdate,
};
use crate::errors::{MutationOutcome, Result};
use crate::storage::{codec, keys, StorageBackend};

pub struct BudgetService<S: StorageBackend> {
    backend: Arc<S>,
    items: RwLock<Vec<BudgetItem>>,
}

impl<S: StorageBackend> BudgetService<S> {
    pub fn new(backend: Arc<S>) -> Self {
        Self {
            backend,
            items: RwLock::new(Vec::new()),
        }
    }

    /// Replace the in-memory collection with whatever is persisted.
    /// Unreadable data degrades to an empty collection.
    pub async fn load(&self) {
        let loaded = codec::load_collection(self.backend.as_ref(), keys::BUDGET_ITEMS).await;
        *self.items.write().await = loaded;
    }

    /// Snapshot of the current collection, in insertion order.
    pub async fn items(&self) -> Vec<BudgetItem> {
        self.items.read().await.clone()
    }

    /// Create a budget item. Compound items start with a zero amount and
    /// an empty sub-item list regardless of the submitted amount; plain
    /// items carry no sub-item list at all.
    pub async fn add_item(&self, new_item: NewBudgetItem) -> Result<BudgetItem> {
        let item = BudgetItem {
            id: Uuid::new_v4().to_string(),
            name: new_item.name,
            amount: if new_item.is_compound {
                Decimal::ZERO
            } else {
                new_item.amount
            },
            category: new_item.category,
            period: new_item.period,
            is_compound: new_item.is_compound,
            sub_items: if new_item.is_compound {
                Some(Vec::new())
            } else {
                None
            },
            date: Utc::now(),
        };

        let mut items = self.items.write().await;
        let mut next = items.clone();
        next.push(item.clone());
        self.commit(&mut items, next).await?;
        Ok(item)
    }

    /// Merge `update` into the item with `id`. The amount is taken as
    /// given, even on compound items; only sub-item mutations re-derive
    /// it.
    pub async fn update_item(&self, id: &str, update: BudgetItemUpdate) -> Result<MutationOutcome> {
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
        if let Some(period) = update.period {
            item.period = period;
        }

        self.commit(&mut items, next).await?;
        Ok(MutationOutcome::Applied)
    }

    /// Remove the item with `id` together with its sub-items.
    pub async fn delete_item(&self, id: &str) -> Result<MutationOutcome> {
        let mut items = self.items.write().await;
        if !items.iter().any(|i| i.id == id) {
            return Ok(MutationOutcome::NotFound);
        }

        let next: Vec<BudgetItem> = items.iter().filter(|i| i.id != id).cloned().collect();
        self.commit(&mut items, next).await?;
        Ok(MutationOutcome::Applied)
    }

    /// Append a sub-item to a compound budget item and refresh the parent
    /// amount. Returns `None` when the target is missing or not compound;
    /// nothing is written in that case.
    pub async fn add_sub_item(
        &self,
        budget_id: &str,
        new_sub: NewSubItem,
    ) -> Result<Option<SubItem>> {
        let mut items = self.items.write().await;
        let mut next = items.clone();
        let Some(item) = next.iter_mut().find(|i| i.id == budget_id) else {
            return Ok(None);
        };
        let Some(subs) = item.sub_items.as_mut() else {
            return Ok(None);
        };

        let sub = SubItem {
            id: Uuid::new_v4().to_string(),
            name: new_sub.name,
            amount: new_sub.amount,
        };
        subs.push(sub.clone());
        item.amount = item.sub_item_total();

        self.commit(&mut items, next).await?;
        Ok(Some(sub))
    }

    /// Merge `update` into one sub-item and refresh the parent amount.
    pub async fn update_sub_item(
        &self,
        budget_id: &str,
        sub_item_id: &str,
        update: SubItemUpdate,
    ) -> Result<MutationOutcome> {
        let mut items = self.items.write().await;
        let mut next = items.clone();
        let Some(item) = next.iter_mut().find(|i| i.id == budget_id) else {
            return Ok(MutationOutcome::NotFound);
        };
        let Some(subs) = item.sub_items.as_mut() else {
            return Ok(MutationOutcome::NotFound);
        };
        let Some(sub) = subs.iter_mut().find(|s| s.id == sub_item_id) else {
            return Ok(MutationOutcome::NotFound);
        };

        if let Some(name) = update.name {
            sub.name = name;
        }
        if let Some(amount) = update.amount {
            sub.amount = amount;
        }
        item.amount = item.sub_item_total();

        self.commit(&mut items, next).await?;
        Ok(MutationOutcome::Applied)
    }

    /// Remove one sub-item and refresh the parent amount. Removing the
    /// last sub-item leaves the parent at zero with an empty list.
    pub async fn delete_sub_item(
        &self,
        budget_id: &str,
        sub_item_id: &str,
    ) -> Result<MutationOutcome> {
        let mut items = self.items.write().await;
        let mut next = items.clone();
        let Some(item) = next.iter_mut().find(|i| i.id == budget_id) else {
            return Ok(MutationOutcome::NotFound);
        };
        let Some(subs) = item.sub_items.as_mut() else {
            return Ok(MutationOutcome::NotFound);
        };

        let before = subs.len();
        subs.retain(|s| s.id != sub_item_id);
        if subs.len() == before {
            return Ok(MutationOutcome::NotFound);
        }
        item.amount = item.sub_item_total();

        self.commit(&mut items, next).await?;
        Ok(MutationOutcome::Applied)
    }

    /// Sum of the item amounts for one period, recomputed per call.
    pub async fn total_for_period(&self, period: Period) -> Decimal {
        self.items
            .read()
            .await
            .iter()
            .filter(|i| i.period == period)
            .map(|i| i.amount)
            .sum()
    }

    /// Drop the persisted collection and clear memory.
    pub async fn reset(&self) -> Result<()> {
        let mut items = self.items.write().await;
        self.backend.remove(keys::BUDGET_ITEMS).await?;
        items.clear();
        info!("budget items cleared");
        Ok(())
    }

    async fn commit(&self, slot: &mut Vec<BudgetItem>, next: Vec<BudgetItem>) -> Result<()> {
        codec::save_collection(self.backend.as_ref(), keys::BUDGET_ITEMS, &next).await?;
        *slot = next;
        Ok(())
    }
}
