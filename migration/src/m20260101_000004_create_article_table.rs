use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260101_000001_create_author_table::Author,
    m20260101_000002_create_category_table::Category,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Article::Table)
                    .if_not_exists()
                    .col(pk_auto(Article::Id))
                    .col(string_len(Article::Title, 200))
                    .col(string_uniq(Article::Slug))
                    .col(text(Article::Excerpt))
                    .col(text(Article::Content))
                    .col(string(Article::Image))
                    .col(integer(Article::CategoryId))
                    .col(integer(Article::AuthorId))
                    .col(string(Article::ReadTime))
                    .col(big_integer(Article::Views).default(0))
                    .col(boolean(Article::IsFeatured).default(false))
                    .col(string_len(Article::Status, 16).default("draft"))
                    .col(timestamp_with_time_zone_null(Article::PublishedAt))
                    .col(json(Article::Sections))
                    .col(timestamp_with_time_zone(Article::CreatedAt))
                    .col(timestamp_with_time_zone(Article::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_category_id")
                            .from(Article::Table, Article::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_author_id")
                            .from(Article::Table, Article::AuthorId)
                            .to(Author::Table, Author::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_article_status_published_at")
                    .table(Article::Table)
                    .col(Article::Status)
                    .col(Article::PublishedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_article_views")
                    .table(Article::Table)
                    .col(Article::Views)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Article::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Article {
    Table,
    Id,
    Title,
    Slug,
    Excerpt,
    Content,
    Image,
    CategoryId,
    AuthorId,
    ReadTime,
    Views,
    IsFeatured,
    Status,
    PublishedAt,
    Sections,
    CreatedAt,
    UpdatedAt,
}
