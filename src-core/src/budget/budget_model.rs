use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Fixed spending categories shared by budget and wishlist entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Food,
    Transport,
    Utilities,
    Entertainment,
    Shopping,
    Health,
    Rent,
    Others,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Food => "Food",
            Category::Transport => "Transport",
            Category::Utilities => "Utilities",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Health => "Health",
            Category::Rent => "Rent",
            Category::Others => "Others",
        };
        f.write_str(name)
    }
}

/// Recurrence period a budget item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Weekly,
    Monthly,
}

/// A single expense line inside a compound budget item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubItem {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
}

/// A recurring expense, either a plain amount or a compound item whose
/// amount is always the sum of its sub-items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetItem {
    pub id: String,
    pub name: String,
    /// For compound items, maintained by the service as the sub-item sum.
    pub amount: Decimal,
    pub category: Category,
    pub period: Period,
    pub is_compound: bool,
    /// `Some` exactly for compound items; plain items omit the field.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_items: Option<Vec<SubItem>>,
    /// Creation timestamp, immutable after insert.
    pub date: DateTime<Utc>,
}

impl BudgetItem {
    /// Sum of the sub-item amounts, zero when the item has none.
    pub fn sub_item_total(&self) -> Decimal {
        self.sub_items
            .as_deref()
            .map(|subs| subs.iter().map(|s| s.amount).sum())
            .unwrap_or(Decimal::ZERO)
    }
}

/// Payload for creating a budget item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBudgetItem {
    pub name: String,
    /// Ignored for compound items, which always start at zero.
    pub amount: Decimal,
    pub category: Category,
    pub period: Period,
    pub is_compound: bool,
}

/// Payload for creating a sub-item under a compound budget item.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSubItem {
    pub name: String,
    pub amount: Decimal,
}

/// Partial update for a budget item; `None` fields keep their current
/// value. Identity, structure and the creation date never change through
/// an update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetItemUpdate {
    pub name: Option<String>,
    pub amount: Option<Decimal>,
    pub category: Option<Category>,
    pub period: Option<Period>,
}

/// Partial update for a sub-item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubItemUpdate {
    pub name: Option<String>,
    pub amount: Option<Decimal>,
}
