use axum::http::StatusCode;
use chrono::NaiveDate;
use common::{MonthBounds, YearMonth};
use thiserror::Error;

use crate::helpers::responses::{error_response, ApiError};
use crate::schemas::MonthQuery;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MonthQueryError {
    #[error("Both 'year' and 'month' must be given, or neither")]
    Incomplete,

    #[error("{0}-{1:02} is not a valid month")]
    Invalid(i32, u32),

    #[error("{requested} is outside the selectable range {earliest} to {latest}")]
    OutOfRange {
        requested: YearMonth,
        earliest: YearMonth,
        latest: YearMonth,
    },
}

impl MonthQueryError {
    pub fn code(&self) -> &'static str {
        match self {
            MonthQueryError::Incomplete | MonthQueryError::Invalid(..) => "INVALID_MONTH",
            MonthQueryError::OutOfRange { .. } => "MONTH_OUT_OF_RANGE",
        }
    }
}

impl From<MonthQueryError> for ApiError {
    fn from(err: MonthQueryError) -> Self {
        error_response(StatusCode::BAD_REQUEST, err.code(), err.to_string())
    }
}

/// Resolve the month a query asks for, relative to `today`.
///
/// No parameters means the month containing `today`.
pub fn resolve_month(query: &MonthQuery, today: NaiveDate) -> Result<YearMonth, MonthQueryError> {
    let bounds = MonthBounds::until(today);
    let month = match (query.year, query.month) {
        (None, None) => return Ok(bounds.latest),
        (Some(year), Some(month)) => {
            YearMonth::new(year, month).ok_or(MonthQueryError::Invalid(year, month))?
        }
        _ => return Err(MonthQueryError::Incomplete),
    };

    if !bounds.contains(month) {
        return Err(MonthQueryError::OutOfRange {
            requested: month,
            earliest: bounds.earliest,
            latest: bounds.latest,
        });
    }
    Ok(month)
}

/// Like [`resolve_month`] but also accepts no month at all.
pub fn resolve_optional_month(
    query: &MonthQuery,
    today: NaiveDate,
) -> Result<Option<YearMonth>, MonthQueryError> {
    match (query.year, query.month) {
        (None, None) => Ok(None),
        _ => resolve_month(query, today).map(Some),
    }
}

/// Cache key of a per-month figure.
pub fn cache_key(kind: &str, month: YearMonth) -> String {
    format!("{}_{}", kind, month)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn query(year: Option<i32>, month: Option<u32>) -> MonthQuery {
        MonthQuery { year, month }
    }

    #[test]
    fn test_missing_month_means_current() {
        let month = resolve_month(&MonthQuery::default(), today()).unwrap();
        assert_eq!(month, YearMonth::new(2024, 6).unwrap());
    }

    #[test]
    fn test_bounds_are_inclusive() {
        assert_eq!(
            resolve_month(&query(Some(2020), Some(1)), today()),
            Ok(YearMonth::new(2020, 1).unwrap())
        );
        assert_eq!(
            resolve_month(&query(Some(2024), Some(6)), today()),
            Ok(YearMonth::new(2024, 6).unwrap())
        );
    }

    #[test]
    fn test_out_of_range_months_are_rejected() {
        let before = resolve_month(&query(Some(2019), Some(12)), today()).unwrap_err();
        assert_eq!(before.code(), "MONTH_OUT_OF_RANGE");

        let future = resolve_month(&query(Some(2024), Some(7)), today()).unwrap_err();
        assert_eq!(future.code(), "MONTH_OUT_OF_RANGE");
        assert_eq!(
            future.to_string(),
            "2024-07 is outside the selectable range 2020-01 to 2024-06"
        );
    }

    #[test]
    fn test_partial_or_invalid_query() {
        assert_eq!(
            resolve_month(&query(Some(2024), None), today()),
            Err(MonthQueryError::Incomplete)
        );
        assert_eq!(
            resolve_month(&query(None, Some(3)), today()),
            Err(MonthQueryError::Incomplete)
        );
        assert_eq!(
            resolve_month(&query(Some(2023), Some(13)), today()).unwrap_err().code(),
            "INVALID_MONTH"
        );
    }

    #[test]
    fn test_optional_month() {
        assert_eq!(resolve_optional_month(&MonthQuery::default(), today()), Ok(None));
        assert_eq!(
            resolve_optional_month(&query(Some(2023), Some(2)), today()),
            Ok(Some(YearMonth::new(2023, 2).unwrap()))
        );
    }

    #[test]
    fn test_cache_key() {
        assert_eq!(cache_key("summary", YearMonth::new(2024, 3).unwrap()), "summary_2024-03");
    }
}
