use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(Alias::new("cashback_categories"))
                    .add_column(ColumnDef::new(Alias::new("description")).string())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite only supports DROP COLUMN since 3.35
        manager
            .alter_table(
                Table::alter()
                    .table(Alias::new("cashback_categories"))
                    .drop_column(Alias::new("description"))
                    .to_owned(),
            )
            .await
    }
}
