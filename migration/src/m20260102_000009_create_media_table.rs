use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Media::Table)
                    .if_not_exists()
                    .col(pk_auto(Media::Id))
                    .col(string(Media::Filename))
                    .col(string(Media::OriginalName))
                    .col(string(Media::MimeType))
                    .col(big_integer(Media::Size))
                    .col(string(Media::Url))
                    .col(string_null(Media::Alt))
                    .col(string_null(Media::Caption))
                    .col(integer_null(Media::Width))
                    .col(integer_null(Media::Height))
                    .col(string_null(Media::Folder))
                    .col(timestamp_with_time_zone(Media::CreatedAt))
                    .col(timestamp_with_time_zone(Media::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_media_folder")
                    .table(Media::Table)
                    .col(Media::Folder)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Media::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Media {
    Table,
    Id,
    Filename,
    OriginalName,
    MimeType,
    Size,
    Url,
    Alt,
    Caption,
    Width,
    Height,
    Folder,
    CreatedAt,
    UpdatedAt,
}
