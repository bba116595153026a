//! Deterministic demo data for running the cashback screen without a backend.

use common::{CashbackCategory, CashbackSummary, CategoryCashback, MonthBounds, YearMonth};
use rust_decimal::{Decimal, RoundingStrategy};
use std::cmp::Ordering;

use crate::api_client::cashback::CashbackSnapshot;

/// (name, icon, color, rate in basis points, base monthly spend)
const DEMO_CATEGORIES: [(&str, &str, &str, i64, i64); 5] = [
    ("Dining", "fa-utensils", "#f97316", 500, 140),
    ("Groceries", "fa-cart-shopping", "#22c55e", 300, 320),
    ("Travel", "fa-plane", "#3b82f6", 200, 90),
    ("Fuel", "fa-gas-pump", "#eab308", 200, 110),
    ("Everything else", "fa-bag-shopping", "#64748b", 100, 180),
];

pub fn mock_categories() -> Vec<CashbackCategory> {
    DEMO_CATEGORIES
        .iter()
        .enumerate()
        .map(|(i, (name, icon, color, rate_bp, _))| {
            CashbackCategory::new(i as i32 + 1, *name, *icon, *color, Decimal::new(*rate_bp, 4))
        })
        .collect()
}

fn month_index(month: YearMonth) -> i64 {
    month.year as i64 * 12 + month.month as i64
}

/// Spend and credited cashback per category for `month`.
fn month_activity(month: YearMonth) -> Vec<(CashbackCategory, Decimal, Decimal)> {
    let idx = month_index(month);
    // Every seventh month is a quiet one
    if idx % 7 == 0 {
        return Vec::new();
    }

    mock_categories()
        .into_iter()
        .zip(DEMO_CATEGORIES.iter())
        .enumerate()
        .map(|(i, (category, (_, _, _, _, base)))| {
            let i = i as i64;
            let spend = Decimal::new(base * 100 + (idx * (i + 3) * 3_737) % 9_000, 2);
            let rewarded = (idx + i) % 4 != 0;
            let cashback = if rewarded {
                (spend * category.rate).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
            } else {
                Decimal::ZERO
            };
            (category, spend, cashback)
        })
        .collect()
}

pub fn mock_summary(month: YearMonth) -> CashbackSummary {
    let activity = month_activity(month);
    let total: Decimal = activity.iter().map(|(_, _, cashback)| *cashback).sum();
    if total.is_zero() {
        return CashbackSummary::empty(month);
    }

    let mut entries: Vec<CategoryCashback> = activity
        .into_iter()
        .filter(|(_, _, cashback)| !cashback.is_zero())
        .map(|(category, _, amount)| CategoryCashback {
            category,
            amount,
            percentage: amount / total * Decimal::ONE_HUNDRED,
        })
        .collect();
    entries.sort_by(|a, b| match b.amount.cmp(&a.amount) {
        Ordering::Equal => a.category.name.cmp(&b.category.name),
        other => other,
    });

    CashbackSummary {
        month,
        total_cashback: total,
        category_cashback: entries,
    }
}

pub fn mock_potential(month: YearMonth) -> Decimal {
    month_activity(month)
        .iter()
        .map(|(category, spend, _)| {
            (*spend * category.rate).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        })
        .sum()
}

/// Sum of every demo month up to and including `latest`.
pub fn mock_total_until(latest: YearMonth) -> Decimal {
    let mut month = YearMonth::earliest();
    let mut total = Decimal::ZERO;
    while month <= latest {
        total += mock_summary(month).total_cashback;
        month = month.succ();
    }
    total
}

pub fn cashback_snapshot(month: YearMonth) -> CashbackSnapshot {
    CashbackSnapshot {
        summary: mock_summary(month),
        potential: mock_potential(month),
        total_all_time: mock_total_until(MonthBounds::current().latest),
        categories: mock_categories(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    #[test]
    fn test_demo_data_is_deterministic() {
        assert_eq!(mock_summary(ym(2024, 3)), mock_summary(ym(2024, 3)));
        assert_eq!(mock_potential(ym(2023, 11)), mock_potential(ym(2023, 11)));
    }

    #[test]
    fn test_summary_is_consistent() {
        let mut month = ym(2022, 1);
        while month <= ym(2023, 12) {
            let summary = mock_summary(month);
            assert_eq!(summary.month, month);

            let sum: Decimal = summary.category_cashback.iter().map(|e| e.amount).sum();
            assert_eq!(sum, summary.total_cashback);
            assert!(mock_potential(month) >= summary.total_cashback);

            let amounts: Vec<Decimal> = summary.category_cashback.iter().map(|e| e.amount).collect();
            assert!(amounts.windows(2).all(|w| w[0] >= w[1]));
            month = month.succ();
        }
    }

    #[test]
    fn test_some_months_are_quiet() {
        // 2024 * 12 + 2 is a multiple of seven
        let quiet = mock_summary(ym(2024, 2));
        assert!(quiet.is_empty());
        assert_eq!(mock_potential(ym(2024, 2)), Decimal::ZERO);
    }

    #[test]
    fn test_categories_carry_rate_labels() {
        let categories = mock_categories();
        assert_eq!(categories.len(), 5);
        assert_eq!(categories[0].formatted_cashback_rate, "5% back");
        assert_eq!(categories[4].formatted_cashback_rate, "1% back");
    }

    #[test]
    fn test_total_accumulates() {
        let one = mock_total_until(ym(2020, 1));
        let two = mock_total_until(ym(2020, 2));
        assert_eq!(two - one, mock_summary(ym(2020, 2)).total_cashback);
    }
}
