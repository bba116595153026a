use thiserror::Error;

/// Error types for the compute module
#[derive(Error, Debug)]
pub enum ComputeError {
    /// Error from the database operations
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A purchase points at a category that does not exist
    #[error("Category error: {0}")]
    Category(String),

    /// Error from date operations
    #[error("Date error: {0}")]
    Date(String),
}

/// Type alias for Result with ComputeError
pub type Result<T> = std::result::Result<T, ComputeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ComputeError::Category("Unknown category 9".to_string());
        assert_eq!(err.to_string(), "Category error: Unknown category 9");

        let err = ComputeError::from(sea_orm::DbErr::Custom("boom".to_string()));
        assert!(err.to_string().starts_with("Database error:"));
    }
}
