//! Site setting factory.

use entity::sea_orm_active_enums::{SettingGroup, SettingType};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::base_time;

/// Factory for creating site settings.
///
/// Settings default to the `general` group, `string` type, and public visibility.
pub struct SiteSettingFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::site_setting::Model,
}

impl<'a> SiteSettingFactory<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        key: impl Into<String>,
        value: serde_json::Value,
    ) -> Self {
        let key = key.into();

        Self {
            db,
            entity: entity::site_setting::Model {
                id: 0,
                label: key.clone(),
                key,
                value,
                setting_type: SettingType::String,
                setting_group: SettingGroup::General,
                description: None,
                is_public: true,
                updated_at: base_time(),
            },
        }
    }

    pub fn group(mut self, group: SettingGroup) -> Self {
        self.entity.setting_group = group;
        self
    }

    pub fn setting_type(mut self, setting_type: SettingType) -> Self {
        self.entity.setting_type = setting_type;
        self
    }

    pub fn private(mut self) -> Self {
        self.entity.is_public = false;
        self
    }

    pub async fn build(self) -> Result<entity::site_setting::Model, DbErr> {
        let e = self.entity;

        entity::site_setting::ActiveModel {
            id: ActiveValue::NotSet,
            key: ActiveValue::Set(e.key),
            value: ActiveValue::Set(e.value),
            setting_type: ActiveValue::Set(e.setting_type),
            setting_group: ActiveValue::Set(e.setting_group),
            label: ActiveValue::Set(e.label),
            description: ActiveValue::Set(e.description),
            is_public: ActiveValue::Set(e.is_public),
            updated_at: ActiveValue::Set(e.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a public general-group string setting.
pub async fn create_setting(
    db: &DatabaseConnection,
    key: impl Into<String>,
    value: serde_json::Value,
) -> Result<entity::site_setting::Model, DbErr> {
    SiteSettingFactory::new(db, key, value).build().await
}
