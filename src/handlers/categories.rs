use axum::{extract::State, http::StatusCode, response::Json};
use axum_valid::Valid;
use common::CashbackCategory;
use compute::cashback::{source, to_display};
use compute::{CashbackDataProvider, CashbackLedger};
use model::cashback::RewardCategory;
use model::entities::cashback_category;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, DbErr, Set, SqlErr};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, trace, warn};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::helpers::responses::{compute_error, database_error, error_response, ok, ApiError};
use crate::schemas::{ApiResponse, AppState, CachedData};

const CATEGORIES_CACHE_KEY: &str = "categories";

/// Request body for creating a cashback category
#[derive(Debug, Deserialize, Serialize, ToSchema, Validate)]
pub struct CreateCategoryRequest {
    /// Unique display name
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    /// Font Awesome glyph name (e.g. "fa-utensils")
    #[validate(length(min = 1))]
    pub icon: String,
    /// Badge color (e.g. "#f97316")
    #[validate(length(min = 1))]
    pub color: String,
    /// Earn rate as a fraction, 0.05 for 5%
    #[validate(custom(function = "validate_rate"))]
    pub rate: Decimal,
    pub description: Option<String>,
}

fn validate_rate(rate: &Decimal) -> Result<(), ValidationError> {
    if *rate < Decimal::ZERO || *rate > Decimal::ONE {
        return Err(ValidationError::new("rate_out_of_range"));
    }
    Ok(())
}

fn duplicate_category(name: &str) -> ApiError {
    warn!("Category '{}' already exists", name);
    error_response(
        StatusCode::CONFLICT,
        "DUPLICATE_CATEGORY",
        format!("Category '{}' already exists", name),
    )
}

/// A concurrent create can take the name between the lookup and the insert;
/// the unique index then reports it.
fn insert_error(name: &str, err: DbErr) -> ApiError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => duplicate_category(name),
        _ => database_error("Failed to create category", err),
    }
}

/// List every cashback category, highest rate first
#[utoipa::path(
    get,
    path = "/api/v1/cashback/categories",
    tag = "categories",
    responses(
        (status = 200, description = "Categories retrieved successfully", body = ApiResponse<Vec<CashbackCategory>>),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_categories(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<CashbackCategory>>>, ApiError> {
    let key = state.versioned_key(CATEGORIES_CACHE_KEY);
    if let Some(CachedData::Categories(categories)) = state.cache.get(&key).await {
        trace!("Cache hit for categories");
        return Ok(ok(categories, "Categories retrieved from cache"));
    }

    let reward_categories = source::load_categories(&state.db)
        .await
        .map_err(compute_error)?;
    let categories = CashbackLedger::new(reward_categories, Vec::new()).categories();
    debug!("Found {} categories", categories.len());

    state.cache.insert(key, CachedData::Categories(categories.clone())).await;

    Ok(ok(categories, "Categories retrieved successfully"))
}

/// Create a new cashback category
#[utoipa::path(
    post,
    path = "/api/v1/cashback/categories",
    tag = "categories",
    request_body = CreateCategoryRequest,
    responses(
        (status = 201, description = "Category created successfully", body = ApiResponse<CashbackCategory>),
        (status = 400, description = "Invalid request"),
        (status = 409, description = "A category with this name already exists", body = crate::schemas::ErrorResponse),
        (status = 500, description = "Internal server error", body = crate::schemas::ErrorResponse)
    )
)]
#[instrument(skip(state))]
pub async fn create_category(
    State(state): State<AppState>,
    Valid(Json(request)): Valid<Json<CreateCategoryRequest>>,
) -> Result<(StatusCode, Json<ApiResponse<CashbackCategory>>), ApiError> {
    debug!("Creating category: {}", request.name);

    let existing = cashback_category::Model::find_by_name(&state.db, &request.name)
        .await
        .map_err(|e| database_error("Failed to look up category", e))?;
    if existing.is_some() {
        return Err(duplicate_category(&request.name));
    }

    let name = request.name.clone();
    let model = cashback_category::ActiveModel {
        name: Set(request.name),
        icon: Set(request.icon),
        color: Set(request.color),
        rate: Set(request.rate),
        description: Set(request.description),
        ..Default::default()
    }
    .insert(&state.db)
    .await
    .map_err(|e| insert_error(&name, e))?;

    info!("Created category {} with ID {}", model.name, model.id);
    state.invalidate_cache();

    let category = to_display(&RewardCategory::from(model));
    Ok((StatusCode::CREATED, ok(category, "Category created successfully")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_utils::{insert_category, setup_test_db};

    fn request(name: &str, rate: Decimal) -> CreateCategoryRequest {
        CreateCategoryRequest {
            name: name.to_string(),
            icon: "fa-plane".to_string(),
            color: "#3b82f6".to_string(),
            rate,
            description: None,
        }
    }

    #[tokio::test]
    async fn test_unique_violation_maps_to_conflict() {
        let db = setup_test_db().await;
        insert_category(&db, "Dining", "fa-utensils", "0.05").await;

        let err = cashback_category::ActiveModel {
            name: Set("Dining".to_string()),
            icon: Set("fa-utensils".to_string()),
            color: Set("#f97316".to_string()),
            rate: Set(Decimal::new(5, 2)),
            description: Set(None),
            ..Default::default()
        }
        .insert(&db)
        .await
        .expect_err("name is unique");

        let (status, Json(body)) = insert_error("Dining", err);
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body.code, "DUPLICATE_CATEGORY");
        assert_eq!(body.error, "Category 'Dining' already exists");

        let (status, Json(body)) = insert_error("Dining", DbErr::Custom("disk full".to_string()));
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.code, "DATABASE_ERROR");
    }

    #[test]
    fn test_validation_rules() {
        assert!(request("Travel", Decimal::new(2, 2)).validate().is_ok());
        assert!(request("Travel", Decimal::ONE).validate().is_ok());
        assert!(request("", Decimal::new(2, 2)).validate().is_err());
        assert!(request(&"x".repeat(65), Decimal::new(2, 2)).validate().is_err());
        assert!(request("Travel", Decimal::new(11, 1)).validate().is_err());
        assert!(request("Travel", Decimal::new(-1, 2)).validate().is_err());

        let mut no_icon = request("Travel", Decimal::new(2, 2));
        no_icon.icon.clear();
        assert!(no_icon.validate().is_err());
    }
}
