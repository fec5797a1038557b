use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SiteSetting::Table)
                    .if_not_exists()
                    .col(pk_auto(SiteSetting::Id))
                    .col(string_uniq(SiteSetting::Key))
                    .col(json(SiteSetting::Value))
                    .col(string_len(SiteSetting::SettingType, 16).default("string"))
                    .col(string_len(SiteSetting::SettingGroup, 16).default("general"))
                    .col(string(SiteSetting::Label))
                    .col(string_null(SiteSetting::Description))
                    .col(boolean(SiteSetting::IsPublic).default(true))
                    .col(timestamp_with_time_zone(SiteSetting::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_site_setting_group")
                    .table(SiteSetting::Table)
                    .col(SiteSetting::SettingGroup)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SiteSetting::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum SiteSetting {
    Table,
    Id,
    Key,
    Value,
    SettingType,
    SettingGroup,
    Label,
    Description,
    IsPublic,
    UpdatedAt,
}
