use crate::handlers::{
    cashback::{get_cashback_summary, get_potential_cashback, get_total_cashback},
    categories::{create_category, get_categories},
    health::health_check,
    purchases::{create_purchase, get_purchases},
};
use crate::schemas::{ApiDoc, AppState};
use axum::{routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create application router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        // Monthly and all-time figures
        .route("/api/v1/cashback/summary", get(get_cashback_summary))
        .route("/api/v1/cashback/potential", get(get_potential_cashback))
        .route("/api/v1/cashback/total", get(get_total_cashback))
        // Category catalog
        .route(
            "/api/v1/cashback/categories",
            get(get_categories).post(create_category),
        )
        // Purchases
        .route("/api/v1/purchases", get(get_purchases).post(create_purchase))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(TimeoutLayer::new(Duration::from_secs(30)))
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}
