use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260102_000008_create_page_table::Page, m20260102_000010_create_navigation_table::Navigation,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NavigationItem::Table)
                    .if_not_exists()
                    .col(pk_auto(NavigationItem::Id))
                    .col(integer(NavigationItem::NavigationId))
                    .col(integer_null(NavigationItem::ParentId))
                    .col(string(NavigationItem::Label))
                    .col(string_null(NavigationItem::Url))
                    .col(integer_null(NavigationItem::PageId))
                    .col(string_len(NavigationItem::Target, 16).default("_self"))
                    .col(string_null(NavigationItem::Icon))
                    .col(integer(NavigationItem::SortOrder).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_navigation_item_navigation_id")
                            .from(NavigationItem::Table, NavigationItem::NavigationId)
                            .to(Navigation::Table, Navigation::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_navigation_item_page_id")
                            .from(NavigationItem::Table, NavigationItem::PageId)
                            .to(Page::Table, Page::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NavigationItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum NavigationItem {
    Table,
    Id,
    NavigationId,
    ParentId,
    Label,
    Url,
    PageId,
    Target,
    Icon,
    SortOrder,
}
