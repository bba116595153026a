use chrono::NaiveDate;
use model::cashback::{Purchase, RewardCategory};
use model::entities::{cashback_category, purchase};
use sea_orm::{ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use tracing::{instrument, trace};

use crate::error::{ComputeError, Result};

/// Gets every reward category.
#[instrument(skip(db))]
pub async fn load_categories(db: &DatabaseConnection) -> Result<Vec<RewardCategory>> {
    let categories = cashback_category::Entity::find()
        .order_by_asc(cashback_category::Column::Id)
        .all(db)
        .await?;
    trace!("Loaded {} cashback categories", categories.len());
    Ok(categories.into_iter().map(RewardCategory::from).collect())
}

/// Gets purchases, optionally limited to the inclusive `range`.
#[instrument(skip(db), fields(range = ?range))]
pub async fn load_purchases(
    db: &DatabaseConnection,
    range: Option<(NaiveDate, NaiveDate)>,
) -> Result<Vec<Purchase>> {
    let mut query = purchase::Entity::find();

    if let Some((start_date, end_date)) = range {
        if start_date > end_date {
            return Err(ComputeError::Date(format!(
                "Start date {} is after end date {}",
                start_date, end_date
            )));
        }
        query = query.filter(
            Condition::all()
                .add(purchase::Column::Date.gte(start_date))
                .add(purchase::Column::Date.lte(end_date)),
        );
    }

    let purchases = query
        .order_by_asc(purchase::Column::Date)
        .order_by_asc(purchase::Column::Id)
        .all(db)
        .await?;
    trace!("Loaded {} purchases", purchases.len());

    Ok(purchases.into_iter().map(Purchase::from).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cashback::{CashbackAnalyticsProvider, CashbackDataProvider, CashbackLedger};
    use common::YearMonth;
    use migration::{Migrator, MigratorTrait};
    use rust_decimal::Decimal;
    use sea_orm::{ActiveModelTrait, Database, Set};

    async fn setup_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        Migrator::up(&db, None).await.expect("Migrations failed.");
        db
    }

    async fn insert_category(db: &DatabaseConnection, name: &str, rate: Decimal) -> cashback_category::Model {
        cashback_category::ActiveModel {
            name: Set(name.to_string()),
            icon: Set("fa-tag".to_string()),
            color: Set("#64748b".to_string()),
            rate: Set(rate),
            description: Set(None),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap()
    }

    async fn insert_purchase(
        db: &DatabaseConnection,
        date: NaiveDate,
        amount: Decimal,
        category_id: i32,
        cashback: Decimal,
    ) {
        purchase::ActiveModel {
            date: Set(date),
            merchant: Set("Shop".to_string()),
            amount: Set(amount),
            category_id: Set(category_id),
            cashback: Set(cashback),
            ..Default::default()
        }
        .insert(db)
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn test_load_purchases_filters_by_range() {
        let db = setup_db().await;
        let category = insert_category(&db, "Groceries", Decimal::new(3, 2)).await;

        insert_purchase(&db, NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(), Decimal::new(100, 0), category.id, Decimal::new(3, 0)).await;
        insert_purchase(&db, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(), Decimal::new(50, 0), category.id, Decimal::new(150, 2)).await;
        insert_purchase(&db, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(), Decimal::new(20, 0), category.id, Decimal::ZERO).await;

        let all = load_purchases(&db, None).await.unwrap();
        assert_eq!(all.len(), 3);

        let february = YearMonth::new(2024, 2).unwrap();
        let in_february = load_purchases(&db, Some((february.first_day(), february.last_day())))
            .await
            .unwrap();
        assert_eq!(in_february.len(), 2);
        assert!(in_february.iter().all(|p| february.contains(p.date())));
    }

    #[tokio::test]
    async fn test_load_purchases_rejects_inverted_range() {
        let db = setup_db().await;
        let start = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();

        let result = load_purchases(&db, Some((start, end))).await;
        assert!(matches!(result, Err(ComputeError::Date(_))));
    }

    #[tokio::test]
    async fn test_ledger_from_database() {
        let db = setup_db().await;
        let groceries = insert_category(&db, "Groceries", Decimal::new(3, 2)).await;
        let dining = insert_category(&db, "Dining", Decimal::new(5, 2)).await;

        insert_purchase(&db, NaiveDate::from_ymd_opt(2024, 4, 3).unwrap(), Decimal::new(100, 0), groceries.id, Decimal::new(3, 0)).await;
        insert_purchase(&db, NaiveDate::from_ymd_opt(2024, 4, 9).unwrap(), Decimal::new(40, 0), dining.id, Decimal::ZERO).await;
        insert_purchase(&db, NaiveDate::from_ymd_opt(2024, 5, 9).unwrap(), Decimal::new(40, 0), dining.id, Decimal::new(2, 0)).await;

        let april = YearMonth::new(2024, 4).unwrap();
        let ledger = CashbackLedger::load_month(&db, april).await.unwrap();
        assert_eq!(ledger.purchases().len(), 2);

        let summary = ledger.summary(april).unwrap();
        assert_eq!(summary.total_cashback, Decimal::new(3, 0));
        assert_eq!(summary.category_cashback.len(), 1);
        assert_eq!(summary.category_cashback[0].category.name, "Groceries");

        // 100 * 0.03 + 40 * 0.05
        assert_eq!(ledger.potential(april).unwrap(), Decimal::new(5, 0));

        let full = CashbackLedger::load(&db).await.unwrap();
        assert_eq!(full.total_all_time(), Decimal::new(5, 0));
        assert_eq!(full.categories()[0].name, "Dining");
    }
}
