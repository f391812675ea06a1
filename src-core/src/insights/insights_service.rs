//! Pure aggregation over wishlist entries.
//!
//! Nothing here caches or mutates; every function recomputes from the
//! slice it is handed, so the results can never go stale.

use chrono::{Datelike, NaiveDate};
use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::insights_model::{CategoryTotal, SpendingProfile, SpendingSummary};
use crate::wishlist::{ItemKind, WishlistItem};

/// The projection always assumes a 30-day month.
pub const DAYS_IN_MONTH: i64 = 30;

const PROFILE_THRESHOLD: u32 = 70;

/// Sum of all item amounts.
pub fn total_amount(items: &[WishlistItem]) -> Decimal {
    items.iter().map(|i| i.amount).sum()
}

/// Sum of the amounts of one kind.
pub fn kind_total(items: &[WishlistItem], kind: ItemKind) -> Decimal {
    items
        .iter()
        .filter(|i| i.kind == kind)
        .map(|i| i.amount)
        .sum()
}

/// `part` as a whole percent of `whole`, rounded half away from zero.
/// A zero `whole` yields 0 rather than dividing.
pub fn percentage(part: Decimal, whole: Decimal) -> u32 {
    if whole.is_zero() {
        return 0;
    }
    (part / whole * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u32()
        .unwrap_or(0)
}

/// Per-category totals ordered biggest first. Categories keep their
/// first-seen position when totals tie.
pub fn category_totals(items: &[WishlistItem]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for item in items {
        match totals.iter_mut().find(|t| t.category == item.category) {
            Some(entry) => entry.total += item.amount,
            None => totals.push(CategoryTotal {
                category: item.category,
                total: item.amount,
            }),
        }
    }
    totals.sort_by(|a, b| b.total.cmp(&a.total));
    totals
}

/// The `limit` biggest category totals.
pub fn top_categories(items: &[WishlistItem], limit: usize) -> Vec<CategoryTotal> {
    let mut totals = category_totals(items);
    totals.truncate(limit);
    totals
}

/// Needs at or past the threshold win, then wants, otherwise balanced.
pub fn classify_profile(needs_percent: u32, wants_percent: u32) -> SpendingProfile {
    if needs_percent >= PROFILE_THRESHOLD {
        SpendingProfile::NeedsFocused
    } else if wants_percent >= PROFILE_THRESHOLD {
        SpendingProfile::WantsFocused
    } else {
        SpendingProfile::Balanced
    }
}

/// Aggregate spending against `budget` as of `today`.
///
/// The projection divides month-to-date spending by the day of the month
/// and extends it over a fixed 30-day window, so `days_remaining` goes
/// negative on the 31st.
pub fn spending_summary(
    items: &[WishlistItem],
    budget: Decimal,
    today: NaiveDate,
) -> SpendingSummary {
    let total_spent = total_amount(items);
    let needs_total = kind_total(items, ItemKind::Need);
    let wants_total = kind_total(items, ItemKind::Want);
    let needs_percent = percentage(needs_total, total_spent);
    let wants_percent = percentage(wants_total, total_spent);

    let day_of_month = i64::from(today.day());
    let average_per_day = total_spent / Decimal::from(day_of_month);
    let projected_spending = (average_per_day * Decimal::from(DAYS_IN_MONTH))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);

    SpendingSummary {
        total_spent,
        remaining: budget - total_spent,
        needs_total,
        wants_total,
        needs_percent,
        wants_percent,
        average_per_day,
        days_remaining: DAYS_IN_MONTH - day_of_month,
        projected_spending,
        profile: classify_profile(needs_percent, wants_percent),
    }
}
