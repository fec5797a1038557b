use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Navigation::Table)
                    .if_not_exists()
                    .col(pk_auto(Navigation::Id))
                    .col(string_uniq(Navigation::Slug))
                    .col(string(Navigation::Name))
                    .col(timestamp_with_time_zone(Navigation::CreatedAt))
                    .col(timestamp_with_time_zone(Navigation::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Navigation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Navigation {
    Table,
    Id,
    Slug,
    Name,
    CreatedAt,
    UpdatedAt,
}
