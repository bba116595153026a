use common::{CashbackCategory, CashbackSummary, CashbackTotal, PotentialCashback, YearMonth};
use rust_decimal::Decimal;

use crate::api_client;
use crate::mock_data;
use crate::settings;

/// Everything the cashback screen shows for one month.
#[derive(Debug, Clone, PartialEq)]
pub struct CashbackSnapshot {
    pub summary: CashbackSummary,
    pub potential: Decimal,
    pub total_all_time: Decimal,
    pub categories: Vec<CashbackCategory>,
}

fn month_query(month: YearMonth) -> String {
    format!("year={}&month={}", month.year, month.month)
}

pub fn summary_endpoint(month: YearMonth) -> String {
    format!("/cashback/summary?{}", month_query(month))
}

pub fn potential_endpoint(month: YearMonth) -> String {
    format!("/cashback/potential?{}", month_query(month))
}

pub const TOTAL_ENDPOINT: &str = "/cashback/total";
pub const CATEGORIES_ENDPOINT: &str = "/cashback/categories";

/// Get the cashback earned in `month`, broken down by category
pub async fn get_cashback_summary(month: YearMonth) -> Result<CashbackSummary, String> {
    log::trace!("Fetching cashback summary for {}", month);
    let result = api_client::get::<CashbackSummary>(&summary_endpoint(month)).await;
    match &result {
        Ok(summary) => log::info!(
            "Fetched summary for {}: {} in {} categories",
            month,
            summary.total_cashback,
            summary.category_cashback.len()
        ),
        Err(e) => log::error!("Failed to fetch cashback summary for {}: {}", month, e),
    }
    result
}

/// Get the cashback `month` would have earned at full rates
pub async fn get_potential_cashback(month: YearMonth) -> Result<Decimal, String> {
    log::trace!("Fetching potential cashback for {}", month);
    api_client::get::<PotentialCashback>(&potential_endpoint(month))
        .await
        .map(|p| p.potential_cashback)
        .inspect_err(|e| log::error!("Failed to fetch potential cashback for {}: {}", month, e))
}

/// Get the cashback earned since the first purchase
pub async fn get_total_cashback_all_time() -> Result<Decimal, String> {
    log::trace!("Fetching all-time cashback");
    api_client::get::<CashbackTotal>(TOTAL_ENDPOINT)
        .await
        .map(|t| t.total_cashback)
        .inspect_err(|e| log::error!("Failed to fetch all-time cashback: {}", e))
}

/// Get every cashback category
pub async fn get_cashback_categories() -> Result<Vec<CashbackCategory>, String> {
    log::trace!("Fetching cashback categories");
    let result = api_client::get::<Vec<CashbackCategory>>(CATEGORIES_ENDPOINT).await;
    match &result {
        Ok(categories) => log::info!("Fetched {} cashback categories", categories.len()),
        Err(e) => log::error!("Failed to fetch cashback categories: {}", e),
    }
    result
}

/// Load the figures for `month` from the API, or from demo data when
/// `use_mock_data` is set.
pub async fn load_snapshot(month: YearMonth) -> Result<CashbackSnapshot, String> {
    if settings::get_settings().use_mock_data {
        log::debug!("Using demo cashback data for {}", month);
        return Ok(mock_data::cashback_snapshot(month));
    }

    let summary = get_cashback_summary(month).await?;
    let potential = get_potential_cashback(month).await?;
    let total_all_time = get_total_cashback_all_time().await?;
    let categories = get_cashback_categories().await?;

    Ok(CashbackSnapshot {
        summary,
        potential,
        total_all_time,
        categories,
    })
}
