//! PocketPlan core: client-side state and persistence for a personal
//! finance tracker.
//!
//! The crate owns three persisted collections: budget items with optional
//! aggregatable sub-items, wishlist items split into needs and wants, and
//! the dark-mode flag. They live in memory behind [`AppStore`] and every
//! mutation syncs to a pluggable key-value [`storage::StorageBackend`]
//! before it becomes visible. Derived views (per-period totals,
//! needs/wants splits, spending projections) are recomputed from the
//! collections on demand and never cached.

pub mod budget;
pub mod errors;
pub mod insights;
pub mod settings;
pub mod storage;
pub mod store;
pub mod wishlist;

pub use errors::{Error, MutationOutcome, Result};
pub use store::AppStore;
