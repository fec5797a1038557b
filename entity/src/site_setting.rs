use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::{SettingGroup, SettingType};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "site_setting")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub key: String,
    pub value: Json,
    pub setting_type: SettingType,
    pub setting_group: SettingGroup,
    pub label: String,
    pub description: Option<String>,
    /// Private settings are never exposed through the API.
    pub is_public: bool,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
