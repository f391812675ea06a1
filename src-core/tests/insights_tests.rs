/// Tests for the derived spending views: percentage math, needs/wants
/// classification, category breakdowns and the 30-day projection.
use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use pocketplan_core::budget::Category;
use pocketplan_core::insights::{
    category_totals, classify_profile, kind_total, percentage, spending_summary, top_categories,
    total_amount, SpendingProfile,
};
use pocketplan_core::wishlist::{ItemKind, WishlistItem};

fn entry(name: &str, amount: Decimal, category: Category, kind: ItemKind) -> WishlistItem {
    WishlistItem {
        id: name.to_string(),
        name: name.to_string(),
        amount,
        category,
        kind,
        importance: 3,
        is_purchased: false,
        date: Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap(),
    }
}

fn mid_march() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

#[cfg(test)]
mod percentage_tests {
    use super::*;

    #[test]
    fn zero_whole_yields_zero() {
        assert_eq!(
            percentage(dec!(50), Decimal::ZERO),
            0,
            "an empty total must not divide"
        );
        assert_eq!(percentage(Decimal::ZERO, Decimal::ZERO), 0);
    }

    #[test]
    fn rounds_to_the_nearest_whole_percent() {
        assert_eq!(percentage(dec!(1), dec!(3)), 33);
        assert_eq!(percentage(dec!(2), dec!(3)), 67);
        assert_eq!(percentage(dec!(1), dec!(8)), 13, "12.5 rounds away from zero");
        assert_eq!(percentage(dec!(70), dec!(100)), 70);
    }

    #[test]
    fn profiles_flip_at_seventy_percent() {
        assert_eq!(classify_profile(70, 30), SpendingProfile::NeedsFocused);
        assert_eq!(classify_profile(69, 31), SpendingProfile::Balanced);
        assert_eq!(classify_profile(30, 70), SpendingProfile::WantsFocused);
        assert_eq!(classify_profile(31, 69), SpendingProfile::Balanced);
        assert_eq!(classify_profile(50, 50), SpendingProfile::Balanced);
    }
}

#[cfg(test)]
mod aggregate_tests {
    use super::*;

    #[test]
    fn totals_split_by_kind() {
        let items = vec![
            entry("Rice", dec!(80), Category::Food, ItemKind::Need),
            entry("Bus", dec!(30), Category::Transport, ItemKind::Need),
            entry("Cinema", dec!(40), Category::Entertainment, ItemKind::Want),
        ];

        assert_eq!(total_amount(&items), dec!(150));
        assert_eq!(kind_total(&items, ItemKind::Need), dec!(110));
        assert_eq!(kind_total(&items, ItemKind::Want), dec!(40));
    }

    #[test]
    fn empty_slices_sum_to_zero() {
        assert_eq!(total_amount(&[]), Decimal::ZERO);
        assert_eq!(kind_total(&[], ItemKind::Need), Decimal::ZERO);
    }
}

#[cfg(test)]
mod summary_tests {
    use super::*;

    #[test]
    fn empty_collections_produce_a_quiet_summary() {
        let summary = spending_summary(&[], dec!(100000), mid_march());

        assert_eq!(summary.total_spent, Decimal::ZERO);
        assert_eq!(summary.remaining, dec!(100000));
        assert_eq!(summary.needs_percent, 0);
        assert_eq!(summary.wants_percent, 0);
        assert_eq!(summary.average_per_day, Decimal::ZERO);
        assert_eq!(summary.projected_spending, Decimal::ZERO);
        assert_eq!(summary.days_remaining, 20);
        assert_eq!(summary.profile, SpendingProfile::Balanced);
    }

    #[test]
    fn projection_extends_the_daily_average_over_thirty_days() {
        // 3000 spent by the 10th: 300 a day, 9000 over the window.
        let items = vec![
            entry("Rice", dec!(1800), Category::Food, ItemKind::Need),
            entry("Cinema", dec!(1200), Category::Entertainment, ItemKind::Want),
        ];
        let summary = spending_summary(&items, dec!(100000), mid_march());

        assert_eq!(summary.total_spent, dec!(3000));
        assert_eq!(summary.average_per_day, dec!(300));
        assert_eq!(summary.projected_spending, dec!(9000));
        assert_eq!(summary.days_remaining, 20);
    }

    #[test]
    fn projection_rounds_to_a_whole_amount() {
        // 1000 over 3 days projects to 10000, not 9999.99...
        let items = vec![entry("Rice", dec!(1000), Category::Food, ItemKind::Need)];
        let summary = spending_summary(
            &items,
            dec!(100000),
            NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
        );

        assert_eq!(summary.projected_spending, dec!(10000));
    }

    #[test]
    fn needs_heavy_spending_is_flagged() {
        let items = vec![
            entry("Rice", dec!(7000), Category::Food, ItemKind::Need),
            entry("Cinema", dec!(3000), Category::Entertainment, ItemKind::Want),
        ];
        let summary = spending_summary(&items, dec!(100000), mid_march());

        assert_eq!(summary.needs_total, dec!(7000));
        assert_eq!(summary.wants_total, dec!(3000));
        assert_eq!(summary.needs_percent, 70);
        assert_eq!(summary.wants_percent, 30);
        assert_eq!(summary.profile, SpendingProfile::NeedsFocused);
    }

    #[test]
    fn wants_heavy_spending_is_flagged() {
        let items = vec![
            entry("Rice", dec!(3000), Category::Food, ItemKind::Need),
            entry("Console", dec!(7000), Category::Entertainment, ItemKind::Want),
        ];
        let summary = spending_summary(&items, dec!(100000), mid_march());

        assert_eq!(summary.profile, SpendingProfile::WantsFocused);
    }

    #[test]
    fn an_even_split_reads_as_balanced() {
        let items = vec![
            entry("Rice", dec!(5000), Category::Food, ItemKind::Need),
            entry("Cinema", dec!(5000), Category::Entertainment, ItemKind::Want),
        ];
        let summary = spending_summary(&items, dec!(100000), mid_march());

        assert_eq!(summary.profile, SpendingProfile::Balanced);
    }

    #[test]
    fn overruns_drive_remaining_negative() {
        let items = vec![entry("Rent", dec!(1500), Category::Rent, ItemKind::Need)];
        let summary = spending_summary(&items, dec!(1000), mid_march());

        assert_eq!(summary.remaining, dec!(-500));
    }

    #[test]
    fn days_remaining_goes_negative_past_day_thirty() {
        let summary = spending_summary(
            &[],
            dec!(1000),
            NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
        );

        assert_eq!(summary.days_remaining, -1);
    }

    #[test]
    fn purchased_items_still_count_toward_spending() {
        let mut bought = entry("Blender", dec!(120), Category::Shopping, ItemKind::Want);
        bought.is_purchased = true;
        let items = vec![
            bought,
            entry("Rice", dec!(80), Category::Food, ItemKind::Need),
        ];
        let summary = spending_summary(&items, dec!(1000), mid_march());

        assert_eq!(
            summary.total_spent,
            dec!(200),
            "the summary aggregates every recorded entry"
        );
    }
}

#[cfg(test)]
mod category_tests {
    use super::*;

    #[test]
    fn totals_aggregate_by_category_biggest_first() {
        let items = vec![
            entry("Bus", dec!(30), Category::Transport, ItemKind::Need),
            entry("Rice", dec!(80), Category::Food, ItemKind::Need),
            entry("Pepper", dec!(20), Category::Food, ItemKind::Need),
        ];
        let totals = category_totals(&items);

        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].category, Category::Food);
        assert_eq!(totals[0].total, dec!(100));
        assert_eq!(totals[1].category, Category::Transport);
        assert_eq!(totals[1].total, dec!(30));
    }

    #[test]
    fn tied_totals_keep_first_seen_order() {
        let items = vec![
            entry("Bus", dec!(50), Category::Transport, ItemKind::Need),
            entry("Rice", dec!(50), Category::Food, ItemKind::Need),
            entry("Soap", dec!(30), Category::Shopping, ItemKind::Need),
        ];
        let totals = category_totals(&items);

        assert_eq!(
            totals[0].category,
            Category::Transport,
            "ties keep first-seen order"
        );
        assert_eq!(totals[1].category, Category::Food);
        assert_eq!(totals[2].category, Category::Shopping);
    }

    #[test]
    fn top_categories_keeps_only_the_biggest() {
        let items = vec![
            entry("Rice", dec!(60), Category::Food, ItemKind::Need),
            entry("Bus", dec!(50), Category::Transport, ItemKind::Need),
            entry("Power", dec!(40), Category::Utilities, ItemKind::Need),
            entry("Cinema", dec!(30), Category::Entertainment, ItemKind::Want),
            entry("Soap", dec!(20), Category::Shopping, ItemKind::Want),
            entry("Gym", dec!(10), Category::Health, ItemKind::Want),
        ];
        let top = top_categories(&items, 5);

        assert_eq!(top.len(), 5);
        assert_eq!(top[0].category, Category::Food);
        assert_eq!(top[4].category, Category::Shopping);
        assert!(
            top.iter().all(|t| t.category != Category::Health),
            "the smallest category drops off"
        );
    }
}
