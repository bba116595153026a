use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use model::entities::{cashback_category, purchase};
use model::cashback::RewardCategory;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set, TransactionTrait};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, trace, warn};

/// Contents of a seed file.
#[derive(Debug, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub categories: Vec<SeedCategory>,
    #[serde(default)]
    pub purchases: Vec<SeedPurchase>,
}

#[derive(Debug, Deserialize)]
pub struct SeedCategory {
    pub name: String,
    pub icon: String,
    pub color: String,
    pub rate: Decimal,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SeedPurchase {
    pub date: NaiveDate,
    pub merchant: String,
    pub amount: Decimal,
    /// Category name
    pub category: String,
    /// Credited cashback; when missing the category rate is applied
    pub cashback: Option<Decimal>,
}

/// Counts of inserted rows.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub categories: usize,
    pub reused_categories: usize,
    pub purchases: usize,
}

impl SeedFile {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        serde_yaml::from_reader(reader).context("Failed to parse YAML")
    }
}

pub async fn import_yaml(yaml_path: &str, database_url: &str) -> Result<()> {
    trace!("Entering import_yaml function");
    info!("Starting cashback data import");
    debug!("YAML path: {}", yaml_path);
    debug!("Database URL: {}", database_url);

    let db = Database::connect(database_url)
        .await
        .context("Failed to connect to database")?;
    info!("Connected to database");

    let file = File::open(Path::new(yaml_path))
        .with_context(|| format!("Failed to open file: {}", yaml_path))?;
    let seed = SeedFile::from_reader(file)?;
    info!(
        "Loaded {} categories and {} purchases from {}",
        seed.categories.len(),
        seed.purchases.len(),
        yaml_path
    );

    let report = import_seed(&db, seed).await?;
    info!(
        "Import finished: {} categories created, {} reused, {} purchases",
        report.categories, report.reused_categories, report.purchases
    );
    Ok(())
}

/// Insert `seed` in a single transaction.
pub async fn import_seed(db: &DatabaseConnection, seed: SeedFile) -> Result<ImportReport> {
    let txn = db.begin().await?;
    let mut report = ImportReport::default();
    let mut categories: HashMap<String, cashback_category::Model> = HashMap::new();

    info!("Importing categories...");
    for category in seed.categories {
        if category.rate < Decimal::ZERO || category.rate > Decimal::ONE {
            bail!("Category '{}' has rate {} outside 0..=1", category.name, category.rate);
        }

        if let Some(existing) = cashback_category::Model::find_by_name(&txn, &category.name).await? {
            warn!("Category '{}' already exists, reusing ID {}", category.name, existing.id);
            report.reused_categories += 1;
            categories.insert(existing.name.clone(), existing);
            continue;
        }

        let inserted = cashback_category::ActiveModel {
            name: Set(category.name.clone()),
            icon: Set(category.icon),
            color: Set(category.color),
            rate: Set(category.rate),
            description: Set(category.description),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .with_context(|| format!("Failed to insert category '{}'", category.name))?;
        debug!("Imported category {} -> ID {}", inserted.name, inserted.id);
        report.categories += 1;
        categories.insert(inserted.name.clone(), inserted);
    }

    info!("Importing purchases...");
    for seed_purchase in seed.purchases {
        if seed_purchase.amount < Decimal::ZERO {
            bail!(
                "Purchase at '{}' on {} has negative amount {}",
                seed_purchase.merchant,
                seed_purchase.date,
                seed_purchase.amount
            );
        }
        if let Some(cashback) = seed_purchase.cashback.filter(|c| *c < Decimal::ZERO) {
            bail!(
                "Purchase at '{}' on {} has negative cashback {}",
                seed_purchase.merchant,
                seed_purchase.date,
                cashback
            );
        }

        let category = match categories.get(&seed_purchase.category) {
            Some(category) => category.clone(),
            None => match cashback_category::Model::find_by_name(&txn, &seed_purchase.category).await? {
                Some(category) => {
                    categories.insert(category.name.clone(), category.clone());
                    category
                }
                None => bail!(
                    "Purchase at '{}' on {} references unknown category '{}'",
                    seed_purchase.merchant,
                    seed_purchase.date,
                    seed_purchase.category
                ),
            },
        };

        let cashback = seed_purchase
            .cashback
            .unwrap_or_else(|| RewardCategory::from(category.clone()).credited_for(seed_purchase.amount));

        let inserted = purchase::ActiveModel {
            date: Set(seed_purchase.date),
            merchant: Set(seed_purchase.merchant),
            amount: Set(seed_purchase.amount),
            category_id: Set(category.id),
            cashback: Set(cashback),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        trace!("Imported purchase {} ({} cashback)", inserted.id, inserted.cashback);
        report.purchases += 1;
    }

    txn.commit().await?;
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_utils::setup_test_db;
    use model::entities::prelude::{CashbackCategory, Purchase};
    use sea_orm::EntityTrait;
    use std::str::FromStr;

    const SEED: &str = r##"
categories:
  - name: Groceries
    icon: fa-cart-shopping
    color: "#22c55e"
    rate: "0.03"
  - name: Dining
    icon: fa-utensils
    color: "#f97316"
    rate: "0.05"
    description: Restaurants and cafes
purchases:
  - date: 2024-03-02
    merchant: Corner Market
    amount: "100.00"
    category: Groceries
  - date: 2024-03-09
    merchant: Trattoria
    amount: "40.00"
    category: Dining
    cashback: "0"
"##;

    #[test]
    fn test_parse_seed_file() {
        let seed = SeedFile::from_reader(SEED.as_bytes()).unwrap();

        assert_eq!(seed.categories.len(), 2);
        assert_eq!(seed.categories[1].description.as_deref(), Some("Restaurants and cafes"));
        assert_eq!(seed.purchases[0].date, NaiveDate::from_ymd_opt(2024, 3, 2).unwrap());
        assert!(seed.purchases[0].cashback.is_none());
    }

    #[tokio::test]
    async fn test_import_seed_applies_rate_when_cashback_missing() {
        let db = setup_test_db().await;
        let seed = SeedFile::from_reader(SEED.as_bytes()).unwrap();

        let report = import_seed(&db, seed).await.unwrap();
        assert_eq!(
            report,
            ImportReport {
                categories: 2,
                reused_categories: 0,
                purchases: 2
            }
        );

        let purchases = Purchase::find().all(&db).await.unwrap();
        let market = purchases.iter().find(|p| p.merchant == "Corner Market").unwrap();
        assert_eq!(market.cashback, Decimal::from_str("3.00").unwrap());
        let trattoria = purchases.iter().find(|p| p.merchant == "Trattoria").unwrap();
        assert_eq!(trattoria.cashback, Decimal::ZERO);
    }

    #[tokio::test]
    async fn test_import_twice_reuses_categories() {
        let db = setup_test_db().await;

        import_seed(&db, SeedFile::from_reader(SEED.as_bytes()).unwrap()).await.unwrap();
        let report = import_seed(&db, SeedFile::from_reader(SEED.as_bytes()).unwrap()).await.unwrap();

        assert_eq!(report.categories, 0);
        assert_eq!(report.reused_categories, 2);
        assert_eq!(report.purchases, 2);
    }

    #[tokio::test]
    async fn test_unknown_category_rolls_back() {
        let db = setup_test_db().await;
        let seed = SeedFile::from_reader(
            r#"
purchases:
  - date: 2024-01-05
    merchant: Somewhere
    amount: "10"
    category: Missing
"#
            .as_bytes(),
        )
        .unwrap();

        assert!(import_seed(&db, seed).await.is_err());
        assert!(Purchase::find().all(&db).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_negative_figures_are_rejected() {
        let seed = |amount: &str, cashback: &str| {
            format!(
                r##"
categories:
  - name: Dining
    icon: fa-utensils
    color: "#f97316"
    rate: "0.05"
purchases:
  - date: 2024-03-02
    merchant: Trattoria
    amount: "{}"
    category: Dining
    cashback: "{}"
"##,
                amount, cashback
            )
        };

        for (amount, cashback) in [("-40.00", "0"), ("40.00", "-2.00")] {
            let db = setup_test_db().await;
            let file = SeedFile::from_reader(seed(amount, cashback).as_bytes()).unwrap();

            let err = import_seed(&db, file).await.unwrap_err();
            assert!(err.to_string().contains("negative"), "unexpected error: {}", err);
            assert!(Purchase::find().all(&db).await.unwrap().is_empty());
            assert!(CashbackCategory::find().all(&db).await.unwrap().is_empty());
        }

        let db = setup_test_db().await;
        let file = SeedFile::from_reader(seed("0", "0").as_bytes()).unwrap();
        assert_eq!(import_seed(&db, file).await.unwrap().purchases, 1);
    }
}
