use common::{
    CashbackCategory, CashbackSummary, CashbackTotal, CategoryCashback, PotentialCashback,
    PurchaseDto, YearMonth,
};
use moka::future::Cache;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use utoipa::{IntoParams, OpenApi, ToSchema};
use validator::Validate;

pub use common::{ApiResponse, ErrorResponse};

use crate::handlers::categories::CreateCategoryRequest;
use crate::handlers::purchases::CreatePurchaseRequest;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
    /// Cache for computed cashback figures
    pub cache: Cache<String, CachedData>,
    /// Bumped by every write; cached entries are keyed by it
    pub generation: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(db: DatabaseConnection, cache: Cache<String, CachedData>) -> Self {
        Self {
            db,
            cache,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// `key` tagged with the current write generation.
    ///
    /// Take the key before reading the database: a figure computed from data
    /// older than a write is then stored under a generation nobody reads again.
    pub fn versioned_key(&self, key: &str) -> String {
        format!("{}@{}", key, self.generation.load(Ordering::Acquire))
    }

    /// Start a new write generation and drop every cached figure.
    pub fn invalidate_cache(&self) {
        let generation = self.generation.fetch_add(1, Ordering::AcqRel) + 1;
        tracing::debug!("Cache invalidated, write generation {}", generation);
        self.cache.invalidate_all();
    }
}

/// Cached data types
#[derive(Clone, Debug)]
pub enum CachedData {
    Summary(CashbackSummary),
    Potential(PotentialCashback),
    Total(CashbackTotal),
    Categories(Vec<CashbackCategory>),
}

/// Month selector shared by the monthly endpoints.
///
/// Either both fields are given or neither (meaning the current month).
#[derive(Debug, Default, Deserialize, Serialize, ToSchema, IntoParams, Validate)]
pub struct MonthQuery {
    /// Year (e.g., 2024)
    pub year: Option<i32>,
    /// Month (1-12)
    #[validate(range(min = 1, max = 12))]
    pub month: Option<u32>,
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::cashback::get_cashback_summary,
        crate::handlers::cashback::get_potential_cashback,
        crate::handlers::cashback::get_total_cashback,
        crate::handlers::categories::get_categories,
        crate::handlers::categories::create_category,
        crate::handlers::purchases::get_purchases,
        crate::handlers::purchases::create_purchase,
    ),
    components(
        schemas(
            ApiResponse<CashbackSummary>,
            ApiResponse<PotentialCashback>,
            ApiResponse<CashbackTotal>,
            ApiResponse<Vec<CashbackCategory>>,
            ApiResponse<CashbackCategory>,
            ApiResponse<Vec<PurchaseDto>>,
            ApiResponse<PurchaseDto>,
            ErrorResponse,
            HealthResponse,
            MonthQuery,
            YearMonth,
            CashbackSummary,
            CategoryCashback,
            CashbackCategory,
            PotentialCashback,
            CashbackTotal,
            PurchaseDto,
            CreateCategoryRequest,
            CreatePurchaseRequest,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "cashback", description = "Monthly and all-time cashback figures"),
        (name = "categories", description = "Cashback category catalog"),
        (name = "purchases", description = "Purchases that earn cashback"),
    ),
    info(
        title = "Cashback API",
        description = "Cashback rewards tracker: earned and missed cashback per month and category",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
