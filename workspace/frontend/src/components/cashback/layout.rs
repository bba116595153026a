//! What the cashback screen shows, independent of how it is drawn.
//!
//! [`CashbackLayout::build`] turns a month and the provider figures into
//! display-ready text. The Yew components in this module only render the
//! result, so every formatting and visibility rule lives (and is tested) here.

use common::format::{format_currency, format_percentage};
use common::{CashbackCategory, YearMonth};
use rust_decimal::Decimal;

use crate::api_client::cashback::CashbackSnapshot;

pub const EMPTY_TITLE: &str = "No cashback yet";
pub const EMPTY_MESSAGE: &str =
    "You haven't earned cashback in this month. Purchases in rewarded categories will show up here.";
pub const EDUCATION_TITLE: &str = "How cashback works";
pub const EDUCATION_INTRO: &str = "Every purchase earns a percentage back depending on its category:";
pub const EDUCATION_FOOTER: &str =
    "Cashback is credited to your account at the end of each statement period.";

/// Sections in the order they appear on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    SummaryCard,
    MonthSelector,
    MissedOpportunity,
    CategoryBreakdown,
    Education,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCard {
    pub all_time: String,
    pub this_month: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthSelector {
    pub month: YearMonth,
    pub label: String,
}

impl MonthSelector {
    pub fn new(month: YearMonth) -> Self {
        Self {
            month,
            label: month.label(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MissedOpportunity {
    /// The difference between potential and earned cashback
    pub amount: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BreakdownRow {
    pub icon: String,
    pub color: String,
    pub name: String,
    pub percentage: String,
    pub amount: String,
    pub rate_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CategoryBreakdown {
    Rows(Vec<BreakdownRow>),
    Empty { title: String, message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RateBadge {
    pub icon: String,
    pub color: String,
    pub name: String,
    pub rate_label: String,
}

impl From<&CashbackCategory> for RateBadge {
    fn from(category: &CashbackCategory) -> Self {
        Self {
            icon: category.icon.clone(),
            color: category.color.clone(),
            name: category.name.clone(),
            rate_label: category.formatted_cashback_rate.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Education {
    pub title: String,
    pub intro: String,
    pub categories: Vec<RateBadge>,
    pub footer: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CashbackLayout {
    pub summary_card: SummaryCard,
    pub month_selector: MonthSelector,
    pub missed_opportunity: Option<MissedOpportunity>,
    pub breakdown: CategoryBreakdown,
    pub education: Education,
}

impl CashbackLayout {
    pub fn build(month: YearMonth, snapshot: &CashbackSnapshot, currency_code: &str) -> Self {
        let earned = snapshot.summary.total_cashback;
        let currency = |amount: Decimal| format_currency(amount, currency_code);

        let missed_opportunity = (snapshot.potential > earned).then(|| {
            let amount = currency(snapshot.potential - earned);
            MissedOpportunity {
                message: format!(
                    "You could have earned {} more this month by paying with your card in every category.",
                    amount
                ),
                amount,
            }
        });

        let breakdown = if snapshot.summary.category_cashback.is_empty() {
            CategoryBreakdown::Empty {
                title: EMPTY_TITLE.to_string(),
                message: EMPTY_MESSAGE.to_string(),
            }
        } else {
            CategoryBreakdown::Rows(
                snapshot
                    .summary
                    .category_cashback
                    .iter()
                    .map(|entry| BreakdownRow {
                        icon: entry.category.icon.clone(),
                        color: entry.category.color.clone(),
                        name: entry.category.name.clone(),
                        percentage: format_percentage(entry.percentage),
                        amount: currency(entry.amount),
                        rate_label: entry.category.formatted_cashback_rate.clone(),
                    })
                    .collect(),
            )
        };

        Self {
            summary_card: SummaryCard {
                all_time: currency(snapshot.total_all_time),
                this_month: currency(earned),
            },
            month_selector: MonthSelector::new(month),
            missed_opportunity,
            breakdown,
            education: Education {
                title: EDUCATION_TITLE.to_string(),
                intro: EDUCATION_INTRO.to_string(),
                categories: snapshot.categories.iter().map(RateBadge::from).collect(),
                footer: EDUCATION_FOOTER.to_string(),
            },
        }
    }

    /// Visible sections, top to bottom.
    pub fn sections(&self) -> Vec<Section> {
        let mut sections = vec![Section::SummaryCard, Section::MonthSelector];
        if self.missed_opportunity.is_some() {
            sections.push(Section::MissedOpportunity);
        }
        sections.push(Section::CategoryBreakdown);
        sections.push(Section::Education);
        sections
    }
}
