use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder};

use super::purchase;

/// A spending category the card pays cashback on (e.g. "Groceries", 3%).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cashback_categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    /// Font Awesome glyph shown next to the category.
    pub icon: String,
    /// Hex color of the category badge.
    pub color: String,
    /// Earn rate as a fraction of the purchase amount (0.05 = 5%).
    #[sea_orm(column_type = "Decimal(Some((8, 4)))")]
    pub rate: Decimal,
    pub description: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "purchase::Entity")]
    Purchase,
}

impl Related<purchase::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Purchase.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Finds a category by its unique name.
    pub async fn find_by_name<C: ConnectionTrait>(db: &C, name: &str) -> Result<Option<Model>, DbErr> {
        Entity::find().filter(Column::Name.eq(name)).one(db).await
    }

    /// Gets all purchases booked against this category, oldest first.
    pub async fn purchases<C: ConnectionTrait>(&self, db: &C) -> Result<Vec<purchase::Model>, DbErr> {
        tracing::trace!("Loading purchases for category {} ({})", self.name, self.id);
        purchase::Entity::find()
            .filter(purchase::Column::CategoryId.eq(self.id))
            .order_by_asc(purchase::Column::Date)
            .all(db)
            .await
    }
}
