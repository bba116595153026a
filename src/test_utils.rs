#[cfg(test)]
pub mod test_utils {
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use chrono::NaiveDate;
    use migration::{Migrator, MigratorTrait};
    use model::entities::{cashback_category, purchase};
    use moka::future::Cache;
    use rust_decimal::Decimal;
    use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};
    use std::str::FromStr;
    use tracing::Level;
    use tracing_subscriber::FmtSubscriber;

    /// Create an in-memory SQLite database for testing
    pub async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory database");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        db
    }

    pub fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).expect("Invalid decimal literal")
    }

    pub async fn insert_category(db: &DatabaseConnection, name: &str, icon: &str, rate: &str) -> cashback_category::Model {
        cashback_category::ActiveModel {
            name: Set(name.to_string()),
            icon: Set(icon.to_string()),
            color: Set("#64748b".to_string()),
            rate: Set(dec(rate)),
            description: Set(None),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("Failed to create test category")
    }

    pub async fn insert_purchase(
        db: &DatabaseConnection,
        date: NaiveDate,
        merchant: &str,
        amount: &str,
        category_id: i32,
        cashback: &str,
    ) -> purchase::Model {
        purchase::ActiveModel {
            date: Set(date),
            merchant: Set(merchant.to_string()),
            amount: Set(dec(amount)),
            category_id: Set(category_id),
            cashback: Set(dec(cashback)),
            ..Default::default()
        }
        .insert(db)
        .await
        .expect("Failed to create test purchase")
    }

    /// Create AppState for testing.
    ///
    /// March 2024 holds 12.00 earned out of a possible 20.00:
    /// Dining 9.00 (75%), Groceries 3.00 (25%), Fuel unrewarded.
    /// February 2024 adds 116.40 so the all-time total is 128.40.
    pub async fn setup_test_app_state() -> AppState {
        let db = setup_test_db().await;

        let dining = insert_category(&db, "Dining", "fa-utensils", "0.05").await;
        let groceries = insert_category(&db, "Groceries", "fa-cart-shopping", "0.03").await;
        let fuel = insert_category(&db, "Fuel", "fa-gas-pump", "0.02").await;

        let march = |day| NaiveDate::from_ymd_opt(2024, 3, day).expect("Invalid test date");
        insert_purchase(&db, march(2), "Trattoria", "180.00", dining.id, "9.00").await;
        insert_purchase(&db, march(9), "Corner Market", "100.00", groceries.id, "3.00").await;
        insert_purchase(&db, march(20), "City Fuel", "400.00", fuel.id, "0").await;
        insert_purchase(&db, march(31), "Corner Market", "0", groceries.id, "0").await;

        let february = NaiveDate::from_ymd_opt(2024, 2, 14).expect("Invalid test date");
        insert_purchase(&db, february, "Steakhouse", "2328.00", dining.id, "116.40").await;

        let cache = Cache::new(100);

        AppState::new(db, cache)
    }

    /// Initialize tracing for tests with output to STDERR.
    ///
    /// The log level is taken from RUST_LOG and defaults to WARN.
    fn init_test_tracing() -> tracing::subscriber::DefaultGuard {
        let log_level = std::env::var("RUST_LOG")
            .ok()
            .and_then(|level| match level.to_uppercase().as_str() {
                "ERROR" => Some(Level::ERROR),
                "WARN" => Some(Level::WARN),
                "INFO" => Some(Level::INFO),
                "DEBUG" => Some(Level::DEBUG),
                "TRACE" => Some(Level::TRACE),
                _ => None,
            })
            .unwrap_or(Level::WARN);

        let subscriber = FmtSubscriber::builder()
            .with_max_level(log_level)
            .with_writer(std::io::stderr)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    /// Create axum app for testing
    pub async fn setup_test_app() -> Router {
        let _guard = init_test_tracing();

        let state = setup_test_app_state().await;
        create_router(state)
    }
}
