use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Author::Table)
                    .if_not_exists()
                    .col(pk_auto(Author::Id))
                    .col(string_len(Author::Name, 100))
                    .col(string_uniq(Author::Slug))
                    .col(string_null(Author::Email))
                    .col(string_null(Author::Avatar))
                    .col(string_len(Author::Role, 100))
                    .col(text_null(Author::Bio))
                    .col(string_null(Author::Twitter))
                    .col(string_null(Author::Linkedin))
                    .col(string_null(Author::Github))
                    .col(string_null(Author::Website))
                    .col(timestamp_with_time_zone(Author::CreatedAt))
                    .col(timestamp_with_time_zone(Author::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Author::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Author {
    Table,
    Id,
    Name,
    Slug,
    Email,
    Avatar,
    Role,
    Bio,
    Twitter,
    Linkedin,
    Github,
    Website,
    CreatedAt,
    UpdatedAt,
}
