//! Cashback analytics.
//!
//! A [`CashbackLedger`] holds the reward categories and purchases needed to
//! answer the questions the cashback screen asks: how much was earned in a
//! month and where, how much could have been earned, and how much was
//! earned overall.

pub mod source;

use chrono::NaiveDate;
use common::{CashbackCategory, CashbackSummary, CategoryCashback, YearMonth};
use model::cashback::{Purchase, RewardCategory};
use rust_decimal::{Decimal, RoundingStrategy};
use sea_orm::DatabaseConnection;
use std::cmp::Ordering;
use std::collections::HashMap;
use tracing::{debug, instrument, trace};

use crate::error::{ComputeError, Result};

/// Per-month figures computed from purchases.
pub trait CashbackAnalyticsProvider {
    /// Cashback earned in `month` broken down by category.
    fn summary(&self, month: YearMonth) -> Result<CashbackSummary>;

    /// Cashback that would have been earned in `month` if every purchase had
    /// been rewarded at its category rate.
    fn potential(&self, month: YearMonth) -> Result<Decimal>;
}

/// Reference data and lifetime figures.
pub trait CashbackDataProvider {
    /// Sum of all cashback ever credited.
    fn total_all_time(&self) -> Decimal;

    /// Every rewarded category, highest rate first.
    fn categories(&self) -> Vec<CashbackCategory>;
}

/// Categories and purchases loaded into memory.
#[derive(Debug, Clone, Default)]
pub struct CashbackLedger {
    categories: Vec<RewardCategory>,
    purchases: Vec<Purchase>,
}

impl CashbackLedger {
    pub fn new(categories: Vec<RewardCategory>, purchases: Vec<Purchase>) -> Self {
        Self {
            categories,
            purchases,
        }
    }

    /// Loads every category and every purchase from the database.
    #[instrument(skip(db))]
    pub async fn load(db: &DatabaseConnection) -> Result<Self> {
        let categories = source::load_categories(db).await?;
        let purchases = source::load_purchases(db, None).await?;
        debug!(
            "Loaded cashback ledger with {} categories and {} purchases",
            categories.len(),
            purchases.len()
        );
        Ok(Self::new(categories, purchases))
    }

    /// Loads every category but only the purchases of `month`.
    ///
    /// Enough for [`CashbackAnalyticsProvider`] queries about that month.
    #[instrument(skip(db), fields(month = %month))]
    pub async fn load_month(db: &DatabaseConnection, month: YearMonth) -> Result<Self> {
        let categories = source::load_categories(db).await?;
        let purchases =
            source::load_purchases(db, Some((month.first_day(), month.last_day()))).await?;
        debug!("Loaded {} purchases for {}", purchases.len(), month);
        Ok(Self::new(categories, purchases))
    }

    pub fn purchases(&self) -> &[Purchase] {
        &self.purchases
    }

    fn category(&self, id: i32) -> Result<&RewardCategory> {
        self.categories
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| ComputeError::Category(format!("Purchase references unknown category {}", id)))
    }

    fn purchases_in(&self, month: YearMonth) -> impl Iterator<Item = &Purchase> {
        let (start, end) = month_range(month);
        self.purchases.iter().filter(move |p| p.is_within(start, end))
    }
}

impl CashbackAnalyticsProvider for CashbackLedger {
    #[instrument(skip(self), fields(month = %month))]
    fn summary(&self, month: YearMonth) -> Result<CashbackSummary> {
        let mut per_category: HashMap<i32, Decimal> = HashMap::new();
        for purchase in self.purchases_in(month) {
            // Validate the reference even when nothing was earned
            self.category(purchase.category_id())?;
            *per_category.entry(purchase.category_id()).or_insert(Decimal::ZERO) += purchase.cashback();
        }

        let total: Decimal = per_category.values().copied().sum();
        trace!("Month {} earned {} across {} categories", month, total, per_category.len());

        if total.is_zero() {
            return Ok(CashbackSummary::empty(month));
        }

        let mut entries = Vec::new();
        for (category_id, amount) in per_category {
            if amount.is_zero() {
                continue;
            }
            let category = self.category(category_id)?;
            entries.push(CategoryCashback {
                category: to_display(category),
                amount,
                percentage: amount / total * Decimal::ONE_HUNDRED,
            });
        }

        entries.sort_by(|a, b| match b.amount.cmp(&a.amount) {
            Ordering::Equal => a.category.name.cmp(&b.category.name),
            other => other,
        });

        Ok(CashbackSummary {
            month,
            total_cashback: total,
            category_cashback: entries,
        })
    }

    #[instrument(skip(self), fields(month = %month))]
    fn potential(&self, month: YearMonth) -> Result<Decimal> {
        let mut potential = Decimal::ZERO;
        for purchase in self.purchases_in(month) {
            let category = self.category(purchase.category_id())?;
            potential += category.cashback_for(purchase.amount());
        }
        Ok(potential.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }
}

impl CashbackDataProvider for CashbackLedger {
    fn total_all_time(&self) -> Decimal {
        self.purchases.iter().map(|p| p.cashback()).sum()
    }

    fn categories(&self) -> Vec<CashbackCategory> {
        let mut categories: Vec<&RewardCategory> = self.categories.iter().collect();
        categories.sort_by(|a, b| match b.rate.cmp(&a.rate) {
            Ordering::Equal => a.name.cmp(&b.name),
            other => other,
        });
        categories.into_iter().map(to_display).collect()
    }
}

/// Converts an analytics category into the transport descriptor.
pub fn to_display(category: &RewardCategory) -> CashbackCategory {
    CashbackCategory::new(
        category.id,
        category.name.clone(),
        category.icon.clone(),
        category.color.clone(),
        category.rate,
    )
}

/// First and last day of `month`.
pub fn month_range(month: YearMonth) -> (NaiveDate, NaiveDate) {
    (month.first_day(), month.last_day())
}
