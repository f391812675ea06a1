use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budget::Category;

/// Whether a wishlist entry is a necessity or a discretionary purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Need,
    Want,
}

/// A planned or completed purchase. Purchased items stay in the
/// collection; views filter on the flag instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
    pub category: Category,
    /// Serialized as `type` in the persisted JSON.
    #[serde(rename = "type")]
    pub kind: ItemKind,
    /// 1 (low) to 5 (critical).
    pub importance: u8,
    pub is_purchased: bool,
    /// Creation timestamp, immutable after insert.
    pub date: DateTime<Utc>,
}

/// Payload for creating a wishlist item. Identity, purchase state and the
/// timestamp are assigned by the store; new items always start
/// unpurchased.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWishlistItem {
    pub name: String,
    pub amount: Decimal,
    pub category: Category,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub importance: u8,
}

/// Partial update for a wishlist item; `None` fields keep their current
/// value. Purchase state only moves through `toggle_purchased`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItemUpdate {
    pub name: Option<String>,
    pub amount: Option<Decimal>,
    pub category: Option<Category>,
    #[serde(rename = "type")]
    pub kind: Option<ItemKind>,
    pub importance: Option<u8>,
}
