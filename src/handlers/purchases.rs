use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Json,
};
use axum_valid::Valid;
use chrono::{Local, NaiveDate};
use common::PurchaseDto;
use model::cashback::RewardCategory;
use model::entities::{cashback_category, purchase};
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::helpers::month::resolve_optional_month;
use crate::helpers::responses::{database_error, error_response, ok, ApiError};
use crate::schemas::{ApiResponse, AppState, MonthQuery};

/// Request body for recording a purchase
#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct CreatePurchaseRequest {
    pub date: NaiveDate,
    #[validate(length(min = 1, max = 128))]
    pub merchant: String,
    #[validate(custom(function = "validate_non_negative"))]
    pub amount: Decimal,
    pub category_id: i32,
    /// Credited cashback; defaults to the full category rate
    #[validate(custom(function = "validate_non_negative"))]
    pub cashback: Option<Decimal>,
}

fn validate_non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::new("negative_amount"));
    }
    Ok(())
}

fn to_dto(model: purchase::Model) -> PurchaseDto {
    PurchaseDto {
        id: model.id,
        date: model.date,
        merchant: model.merchant,
        amount: model.amount,
        category_id: model.category_id,
        cashback: model.cashback,
    }
}

/// List purchases, optionally restricted to one month
#[utoipa::path(
    get,
    path = "/api/v1/purchases",
    tag = "purchases",
    params(MonthQuery),
    responses(
        (status = 200, description = "Purchases retrieved successfully", body = ApiResponse<Vec<PurchaseDto>>),
        (status = 400, description = "Invalid or out-of-range month", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_purchases(
    Valid(Query(query)): Valid<Query<MonthQuery>>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<PurchaseDto>>>, ApiError> {
    let month = resolve_optional_month(&query, Local::now().date_naive())?;

    let mut select = purchase::Entity::find();
    if let Some(month) = month {
        select = select
            .filter(purchase::Column::Date.gte(month.first_day()))
            .filter(purchase::Column::Date.lte(month.last_day()));
    }

    let purchases = select
        .order_by_desc(purchase::Column::Date)
        .order_by_desc(purchase::Column::Id)
        .all(&state.db)
        .await
        .map_err(|e| database_error("Failed to retrieve purchases", e))?;
    debug!("Found {} purchases", purchases.len());

    Ok(ok(
        purchases.into_iter().map(to_dto).collect(),
        "Purchases retrieved successfully",
    ))
}

/// Record a purchase
#[utoipa::path(
    post,
    path = "/api/v1/purchases",
    tag = "purchases",
    request_body = CreatePurchaseRequest,
    responses(
        (status = 201, description = "Purchase recorded successfully", body = ApiResponse<PurchaseDto>),
        (status = 400, description = "Invalid request or unknown category", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_purchase(
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<CreatePurchaseRequest>>,
) -> Result<(StatusCode, Json<ApiResponse<PurchaseDto>>), ApiError> {
    let category = cashback_category::Entity::find_by_id(request.category_id)
        .one(&state.db)
        .await
        .map_err(|e| database_error("Failed to look up category", e))?;

    let Some(category) = category else {
        warn!("Purchase references unknown category {}", request.category_id);
        return Err(error_response(
            StatusCode::BAD_REQUEST,
            "INVALID_CATEGORY_ID",
            format!("Category {} does not exist", request.category_id),
        ));
    };

    let cashback = request
        .cashback
        .unwrap_or_else(|| RewardCategory::from(category).credited_for(request.amount));

    let model = purchase::ActiveModel {
        date: Set(request.date),
        merchant: Set(request.merchant),
        amount: Set(request.amount),
        category_id: Set(request.category_id),
        cashback: Set(cashback),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .map_err(|e| database_error("Failed to record purchase", e))?;

    info!("Recorded purchase {} on {} ({} cashback)", model.id, model.date, model.cashback);
    state.invalidate_cache();

    Ok((StatusCode::CREATED, ok(to_dto(model), "Purchase recorded successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_values_are_rejected() {
        let mut request = CreatePurchaseRequest {
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            merchant: "Corner Market".to_string(),
            amount: Decimal::new(1250, 2),
            category_id: 1,
            cashback: None,
        };
        assert!(request.validate().is_ok());

        request.cashback = Some(Decimal::new(-1, 2));
        assert!(request.validate().is_err());

        request.cashback = Some(Decimal::ZERO);
        request.amount = Decimal::new(-500, 2);
        assert!(request.validate().is_err());
    }
}
