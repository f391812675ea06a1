//! Application store facade.
//!
//! Owns the domain services and the readiness flag. Embedders construct
//! one `AppStore` over a backend and reach every collection through it;
//! the collections themselves are never shared out.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::NaiveDate;
use log::info;
use rust_decimal::Decimal;

use crate::budget::BudgetService;
use crate::errors::Result;
use crate::insights::{self, SpendingSummary};
use crate::settings::SettingsService;
use crate::storage::StorageBackend;
use crate::wishlist::WishlistService;

pub struct AppStore<S: StorageBackend> {
    budget: BudgetService<S>,
    wishlist: WishlistService<S>,
    settings: SettingsService<S>,
    is_loaded: AtomicBool,
}

impl<S: StorageBackend> AppStore<S> {
    /// Build a store over `backend` with empty collections. Nothing is
    /// read until [`load`](Self::load).
    pub fn new(backend: Arc<S>) -> Self {
        Self {
            budget: BudgetService::new(backend.clone()),
            wishlist: WishlistService::new(backend.clone()),
            settings: SettingsService::new(backend),
            is_loaded: AtomicBool::new(false),
        }
    }

    /// Hydrate every collection from the backend.
    ///
    /// Each key falls back to its default independently, so the store
    /// always comes up; once this returns, [`is_loaded`](Self::is_loaded)
    /// reports true for the rest of the process. Calling it again simply
    /// re-reads whatever is persisted.
    pub async fn load(&self) {
        self.budget.load().await;
        self.wishlist.load().await;
        self.settings.load().await;
        self.is_loaded.store(true, Ordering::SeqCst);
        info!("store loaded");
    }

    /// Whether an initial [`load`](Self::load) has completed.
    pub fn is_loaded(&self) -> bool {
        self.is_loaded.load(Ordering::SeqCst)
    }

    pub fn budget(&self) -> &BudgetService<S> {
        &self.budget
    }

    pub fn wishlist(&self) -> &WishlistService<S> {
        &self.wishlist
    }

    pub fn settings(&self) -> &SettingsService<S> {
        &self.settings
    }

    /// Clear both collections and their persisted keys. The dark-mode
    /// flag survives a reset.
    pub async fn reset_data(&self) -> Result<()> {
        self.budget.reset().await?;
        self.wishlist.reset().await?;
        info!("user data reset");
        Ok(())
    }

    /// Spending summary over the full wishlist as of `today`.
    pub async fn spending_summary(&self, budget: Decimal, today: NaiveDate) -> SpendingSummary {
        let items = self.wishlist.items().await;
        insights::spending_summary(&items, budget, today)
    }
}
