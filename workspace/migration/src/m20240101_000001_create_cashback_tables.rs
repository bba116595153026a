use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create cashback categories table
        manager
            .create_table(
                Table::create()
                    .table(CashbackCategories::Table)
                    .if_not_exists()
                    .col(pk_auto(CashbackCategories::Id))
                    .col(string(CashbackCategories::Name).unique_key())
                    .col(string(CashbackCategories::Icon))
                    .col(string(CashbackCategories::Color))
                    .col(decimal(CashbackCategories::Rate).decimal_len(8, 4))
                    .to_owned(),
            )
            .await?;

        // Create purchases table
        manager
            .create_table(
                Table::create()
                    .table(Purchases::Table)
                    .if_not_exists()
                    .col(pk_auto(Purchases::Id))
                    .col(date(Purchases::Date))
                    .col(string(Purchases::Merchant))
                    .col(decimal(Purchases::Amount).decimal_len(16, 4))
                    .col(integer(Purchases::CategoryId))
                    .col(decimal(Purchases::Cashback).decimal_len(16, 4).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_purchase_category")
                            .from(Purchases::Table, Purchases::CategoryId)
                            .to(CashbackCategories::Table, CashbackCategories::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Monthly summaries filter on the purchase date
        manager
            .create_index(
                Index::create()
                    .name("idx_purchases_date")
                    .table(Purchases::Table)
                    .col(Purchases::Date)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Purchases::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(CashbackCategories::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum CashbackCategories {
    Table,
    Id,
    Name,
    Icon,
    Color,
    Rate,
}

#[derive(DeriveIden)]
enum Purchases {
    Table,
    Id,
    Date,
    Merchant,
    Amount,
    CategoryId,
    Cashback,
}
