use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::{SettingGroup, SettingType};
use sea_orm::ActiveEnum;

use crate::model::setting::SettingDto;

/// A public site setting. Private settings never reach this type.
#[derive(Debug, Clone, PartialEq)]
pub struct Setting {
    pub key: String,
    pub value: serde_json::Value,
    pub setting_type: SettingType,
    pub group: SettingGroup,
    pub label: String,
    pub description: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl Setting {
    pub fn from_entity(entity: entity::site_setting::Model) -> Self {
        Self {
            key: entity.key,
            value: entity.value,
            setting_type: entity.setting_type,
            group: entity.setting_group,
            label: entity.label,
            description: entity.description,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> SettingDto {
        SettingDto {
            key: self.key,
            value: self.value,
            setting_type: self.setting_type.to_value(),
            group: self.group.to_value(),
            label: self.label,
            description: self.description,
            updated_at: self.updated_at,
        }
    }
}
