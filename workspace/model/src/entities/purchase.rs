use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

use super::cashback_category;

/// A card purchase together with the cashback the issuer paid for it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "purchases")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Day the purchase was made.
    pub date: NaiveDate,
    pub merchant: String,
    /// Amount spent. Always positive.
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub amount: Decimal,
    pub category_id: i32,
    /// Cashback actually credited for this purchase. Zero when the purchase
    /// did not qualify (e.g. the offer was not activated).
    #[sea_orm(column_type = "Decimal(Some((16, 4)))")]
    pub cashback: Decimal,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "cashback_category::Entity",
        from = "Column::CategoryId",
        to = "cashback_category::Column::Id",
        on_delete = "Cascade"
    )]
    Category,
}

impl Related<cashback_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
