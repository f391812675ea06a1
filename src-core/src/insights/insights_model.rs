use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::budget::Category;

/// How spending splits between needs and wants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpendingProfile {
    NeedsFocused,
    WantsFocused,
    Balanced,
}

/// Spending aggregated for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryTotal {
    pub category: Category,
    pub total: Decimal,
}

/// Spending measured against a budget, recomputed on demand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendingSummary {
    pub total_spent: Decimal,
    /// Budget minus total spent; negative when overrunning.
    pub remaining: Decimal,
    pub needs_total: Decimal,
    pub wants_total: Decimal,
    /// Whole percents of total spending, 0 when nothing is recorded.
    pub needs_percent: u32,
    pub wants_percent: u32,
    /// Total spent divided by the day of the month.
    pub average_per_day: Decimal,
    /// Days left in the fixed 30-day window; negative on the 31st.
    pub days_remaining: i64,
    /// Average daily spend extended over the full 30-day window.
    pub projected_spending: Decimal,
    pub profile: SpendingProfile,
}
