use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Category::Table)
                    .if_not_exists()
                    .col(pk_auto(Category::Id))
                    .col(string_len(Category::Name, 50))
                    .col(string_uniq(Category::Slug))
                    .col(string_len(Category::Description, 500))
                    .col(string_null(Category::Icon))
                    .col(string_null(Category::Color))
                    .col(string_null(Category::Gradient))
                    .col(string_null(Category::AccentClass))
                    .col(integer(Category::SortOrder).default(0))
                    .col(timestamp_with_time_zone(Category::CreatedAt))
                    .col(timestamp_with_time_zone(Category::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Category::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Category {
    Table,
    Id,
    Name,
    Slug,
    Description,
    Icon,
    Color,
    Gradient,
    AccentClass,
    SortOrder,
    CreatedAt,
    UpdatedAt,
}
