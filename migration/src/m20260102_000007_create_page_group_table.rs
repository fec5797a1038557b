use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PageGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(PageGroup::Id))
                    .col(string_uniq(PageGroup::Slug))
                    .col(string(PageGroup::Name))
                    .col(string_null(PageGroup::Description))
                    .col(integer(PageGroup::SortOrder).default(0))
                    .col(timestamp_with_time_zone(PageGroup::CreatedAt))
                    .col(timestamp_with_time_zone(PageGroup::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PageGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PageGroup {
    Table,
    Id,
    Slug,
    Name,
    Description,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}
