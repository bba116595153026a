use axum::{
    extract::{Query, State},
    response::Json,
};
use axum_valid::Valid;
use chrono::Local;
use common::{CashbackSummary, CashbackTotal, PotentialCashback};
use compute::{CashbackAnalyticsProvider, CashbackDataProvider, CashbackLedger};
use tracing::{debug, instrument, trace};

use crate::helpers::month::{cache_key, resolve_month};
use crate::helpers::responses::{compute_error, ok, ApiError};
use crate::schemas::{ApiResponse, AppState, CachedData, MonthQuery};

const TOTAL_CACHE_KEY: &str = "total";

/// Get cashback earned in one month, broken down by category
#[utoipa::path(
    get,
    path = "/api/v1/cashback/summary",
    tag = "cashback",
    params(MonthQuery),
    responses(
        (status = 200, description = "Cashback summary retrieved successfully", body = ApiResponse<CashbackSummary>),
        (status = 400, description = "Invalid or out-of-range month", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_cashback_summary(
    Valid(Query(query)): Valid<Query<MonthQuery>>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CashbackSummary>>, ApiError> {
    let month = resolve_month(&query, Local::now().date_naive())?;
    let key = state.versioned_key(&cache_key("summary", month));

    if let Some(CachedData::Summary(summary)) = state.cache.get(&key).await {
        trace!("Cache hit for {}", key);
        return Ok(ok(summary, "Cashback summary retrieved from cache"));
    }

    let ledger = CashbackLedger::load_month(&state.db, month)
        .await
        .map_err(compute_error)?;
    let summary = ledger.summary(month).map_err(compute_error)?;
    debug!(
        "Computed summary for {}: {} across {} categories",
        month,
        summary.total_cashback,
        summary.category_cashback.len()
    );

    state.cache.insert(key, CachedData::Summary(summary.clone())).await;

    Ok(ok(summary, "Cashback summary retrieved successfully"))
}

/// Get the cashback one month would have earned at full category rates
#[utoipa::path(
    get,
    path = "/api/v1/cashback/potential",
    tag = "cashback",
    params(MonthQuery),
    responses(
        (status = 200, description = "Potential cashback retrieved successfully", body = ApiResponse<PotentialCashback>),
        (status = 400, description = "Invalid or out-of-range month", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_potential_cashback(
    Valid(Query(query)): Valid<Query<MonthQuery>>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<PotentialCashback>>, ApiError> {
    let month = resolve_month(&query, Local::now().date_naive())?;
    let key = state.versioned_key(&cache_key("potential", month));

    if let Some(CachedData::Potential(potential)) = state.cache.get(&key).await {
        trace!("Cache hit for {}", key);
        return Ok(ok(potential, "Potential cashback retrieved from cache"));
    }

    let ledger = CashbackLedger::load_month(&state.db, month)
        .await
        .map_err(compute_error)?;
    let potential = PotentialCashback {
        month,
        potential_cashback: ledger.potential(month).map_err(compute_error)?,
    };

    state.cache.insert(key, CachedData::Potential(potential.clone())).await;

    Ok(ok(potential, "Potential cashback retrieved successfully"))
}

/// Get the cashback earned since the first recorded purchase
#[utoipa::path(
    get,
    path = "/api/v1/cashback/total",
    tag = "cashback",
    responses(
        (status = 200, description = "All-time cashback retrieved successfully", body = ApiResponse<CashbackTotal>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_total_cashback(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<CashbackTotal>>, ApiError> {
    let key = state.versioned_key(TOTAL_CACHE_KEY);
    if let Some(CachedData::Total(total)) = state.cache.get(&key).await {
        return Ok(ok(total, "All-time cashback retrieved from cache"));
    }

    let ledger = CashbackLedger::load(&state.db).await.map_err(compute_error)?;
    let total = CashbackTotal {
        total_cashback: ledger.total_all_time(),
    };

    state.cache.insert(key, CachedData::Total(total.clone())).await;

    Ok(ok(total, "All-time cashback retrieved successfully"))
}
