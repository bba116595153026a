use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::entities::{cashback_category, purchase};

/// A rewarded category as seen by the analytics layer.
#[derive(Debug, Clone, PartialEq)]
pub struct RewardCategory {
    pub id: i32,
    pub name: String,
    pub icon: String,
    pub color: String,
    /// Earn rate as a fraction of the purchase amount.
    pub rate: Decimal,
}

impl RewardCategory {
    pub fn new(id: i32, name: &str, icon: &str, color: &str, rate: Decimal) -> Self {
        Self {
            id,
            name: name.to_string(),
            icon: icon.to_string(),
            color: color.to_string(),
            rate,
        }
    }

    /// Cashback `amount` would have earned at this category's rate.
    pub fn cashback_for(&self, amount: Decimal) -> Decimal {
        amount * self.rate
    }

    /// Cashback credited for a fully rewarded purchase, rounded to cents.
    pub fn credited_for(&self, amount: Decimal) -> Decimal {
        self.cashback_for(amount)
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    }
}

impl From<cashback_category::Model> for RewardCategory {
    fn from(model: cashback_category::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            icon: model.icon,
            color: model.color,
            rate: model.rate,
        }
    }
}

/// A single purchase with the cashback credited for it.
#[derive(Debug, Clone, PartialEq)]
pub struct Purchase {
    date: NaiveDate,
    amount: Decimal,
    category_id: i32,
    cashback: Decimal,
}

impl Purchase {
    /// Creates a purchase that earned `cashback`.
    pub fn new(date: NaiveDate, amount: Decimal, category_id: i32, cashback: Decimal) -> Self {
        Self {
            date,
            amount,
            category_id,
            cashback,
        }
    }

    /// Creates a purchase that earned nothing.
    pub fn unrewarded(date: NaiveDate, amount: Decimal, category_id: i32) -> Self {
        Self::new(date, amount, category_id, Decimal::ZERO)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn category_id(&self) -> i32 {
        self.category_id
    }

    pub fn cashback(&self) -> Decimal {
        self.cashback
    }

    /// Checks if the purchase happened between `start` and `end` (inclusive).
    pub fn is_within(&self, start: NaiveDate, end: NaiveDate) -> bool {
        self.date >= start && self.date <= end
    }
}

impl From<purchase::Model> for Purchase {
    fn from(model: purchase::Model) -> Self {
        Self::new(model.date, model.amount, model.category_id, model.cashback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cashback_for_applies_rate() {
        let category = RewardCategory::new(1, "Dining", "fa-utensils", "#f97316", Decimal::new(5, 2));
        assert_eq!(category.cashback_for(Decimal::new(4000, 2)), Decimal::new(200, 2));
    }

    #[test]
    fn test_credited_for_rounds_to_cents() {
        let category = RewardCategory::new(1, "Groceries", "fa-cart-shopping", "#22c55e", Decimal::new(3, 2));
        // 33.33 * 0.03 = 0.9999
        assert_eq!(category.credited_for(Decimal::new(3333, 2)), Decimal::new(100, 2));
    }

    #[test]
    fn test_unrewarded_purchase_has_zero_cashback() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let purchase = Purchase::unrewarded(date, Decimal::new(1500, 2), 3);

        assert_eq!(purchase.cashback(), Decimal::ZERO);
        assert_eq!(purchase.amount(), Decimal::new(1500, 2));
        assert_eq!(purchase.category_id(), 3);
    }

    #[test]
    fn test_is_within_is_inclusive() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();

        let first = Purchase::unrewarded(start, Decimal::ONE, 1);
        let last = Purchase::unrewarded(end, Decimal::ONE, 1);
        let after = Purchase::unrewarded(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(), Decimal::ONE, 1);

        assert!(first.is_within(start, end));
        assert!(last.is_within(start, end));
        assert!(!after.is_within(start, end));
    }

    #[test]
    fn test_from_entity_model() {
        let model = purchase::Model {
            id: 7,
            date: NaiveDate::from_ymd_opt(2024, 2, 2).unwrap(),
            merchant: "Fuel Stop".to_string(),
            amount: Decimal::new(6000, 2),
            category_id: 2,
            cashback: Decimal::new(120, 2),
        };

        let purchase = Purchase::from(model);
        assert_eq!(purchase.cashback(), Decimal::new(120, 2));
        assert_eq!(purchase.category_id(), 2);
    }
}
