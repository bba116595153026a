//! Common transport-layer types shared between backend and frontend.
//! These structs mirror the backend handlers' request/response payloads
//! so the frontend can deserialize API responses without duplicating shapes.

mod cashback;
pub mod format;
mod month;

pub use cashback::{
    CashbackCategory, CashbackSummary, CashbackTotal, CategoryCashback, PotentialCashback,
    PurchaseDto,
};
pub use month::{MonthBounds, YearMonth, EARLIEST_MONTH, EARLIEST_YEAR};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Envelope of every successful API response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success flag
    pub success: bool,
}

/// Error payload returned by the backend for failed requests.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub success: bool,
}
