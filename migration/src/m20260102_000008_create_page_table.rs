use sea_orm_migration::{prelude::*, schema::*};

use super::m20260102_000007_create_page_group_table::PageGroup;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Page::Table)
                    .if_not_exists()
                    .col(pk_auto(Page::Id))
                    .col(string_uniq(Page::Slug))
                    .col(string(Page::Title))
                    .col(string_null(Page::Description))
                    .col(json(Page::Content))
                    .col(integer_null(Page::GroupId))
                    .col(string_len(Page::Status, 16).default("draft"))
                    .col(integer(Page::SortOrder).default(0))
                    .col(json(Page::Seo))
                    .col(timestamp_with_time_zone_null(Page::PublishedAt))
                    .col(timestamp_with_time_zone(Page::CreatedAt))
                    .col(timestamp_with_time_zone(Page::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_page_group_id")
                            .from(Page::Table, Page::GroupId)
                            .to(PageGroup::Table, PageGroup::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Page::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Page {
    Table,
    Id,
    Slug,
    Title,
    Description,
    Content,
    GroupId,
    Status,
    SortOrder,
    Seo,
    PublishedAt,
    CreatedAt,
    UpdatedAt,
}
