pub mod insights_model;
pub mod insights_service;

pub use insights_model::{CategoryTotal, SpendingProfile, SpendingSummary};
pub use insights_service::{
    category_totals, classify_profile, kind_total, percentage, spending_summary, top_categories,
    total_amount, DAYS_IN_MONTH,
};
