use crate::format::format_cashback_rate;
use crate::month::YearMonth;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Display descriptor for a category that earns cashback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CashbackCategory {
    pub id: i32,
    pub name: String,
    /// Font Awesome glyph name, e.g. "fa-cart-shopping"
    pub icon: String,
    /// Hex color used for the icon badge, e.g. "#22c55e"
    pub color: String,
    /// Earn rate as a fraction (0.05 = 5%)
    pub rate: Decimal,
    /// Human readable earn rate, e.g. "5% back"
    pub formatted_cashback_rate: String,
}

impl CashbackCategory {
    pub fn new(id: i32, name: impl Into<String>, icon: impl Into<String>, color: impl Into<String>, rate: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            icon: icon.into(),
            color: color.into(),
            rate,
            formatted_cashback_rate: format_cashback_rate(rate),
        }
    }
}

/// Cashback one category contributed to a month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CategoryCashback {
    pub category: CashbackCategory,
    /// Cashback earned in this category
    pub amount: Decimal,
    /// Share of the month total in percent (0-100)
    pub percentage: Decimal,
}

/// Cashback earned in one month with its per-category breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CashbackSummary {
    pub month: YearMonth,
    pub total_cashback: Decimal,
    /// Ordered by contribution, largest first
    pub category_cashback: Vec<CategoryCashback>,
}

impl CashbackSummary {
    /// A month without any cashback.
    pub fn empty(month: YearMonth) -> Self {
        Self {
            month,
            total_cashback: Decimal::ZERO,
            category_cashback: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.category_cashback.is_empty()
    }
}

/// Cashback that could have been earned in a month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PotentialCashback {
    pub month: YearMonth,
    pub potential_cashback: Decimal,
}

/// Cumulative cashback over the whole history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CashbackTotal {
    pub total_cashback: Decimal,
}

/// A recorded card purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PurchaseDto {
    pub id: i32,
    pub date: chrono::NaiveDate,
    pub merchant: String,
    pub amount: Decimal,
    pub category_id: i32,
    pub cashback: Decimal,
}
