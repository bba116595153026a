use axum::{http::StatusCode, response::Json};
use compute::error::ComputeError;
use tracing::error;

use crate::schemas::{ApiResponse, ErrorResponse};

pub type ApiError = (StatusCode, Json<ErrorResponse>);

/// Build an error response with a stable `code`.
pub fn error_response(status: StatusCode, code: &str, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
            code: code.to_string(),
            success: false,
        }),
    )
}

/// Wrap `data` in the success envelope.
pub fn ok<T>(data: T, message: &str) -> Json<ApiResponse<T>> {
    Json(ApiResponse {
        data,
        message: message.to_string(),
        success: true,
    })
}

pub fn database_error(context: &str, err: impl std::fmt::Display) -> ApiError {
    error!("{}: {}", context, err);
    error_response(StatusCode::INTERNAL_SERVER_ERROR, "DATABASE_ERROR", context)
}

/// Map an analytics failure onto an HTTP error.
pub fn compute_error(err: ComputeError) -> ApiError {
    error!("Cashback computation failed: {}", err);
    let code = match err {
        ComputeError::Database(_) => "DATABASE_ERROR",
        ComputeError::Category(_) => "INCONSISTENT_DATA",
        ComputeError::Date(_) => "INVALID_DATE_RANGE",
    };
    error_response(StatusCode::INTERNAL_SERVER_ERROR, code, err.to_string())
}
