use entity::sea_orm_active_enums::SettingGroup;
use sea_orm::DatabaseConnection;
use serde_json::{Map, Value};

use crate::server::{data::setting::SettingRepository, error::AppError, model::setting::Setting};

pub struct SettingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every public setting ordered by key.
    pub async fn get_public(&self) -> Result<Vec<Setting>, AppError> {
        let settings = SettingRepository::new(self.db).get_public().await?;

        Ok(settings.into_iter().map(Setting::from_entity).collect())
    }

    /// Gets every public setting flattened into a `{key: value}` object.
    pub async fn get_public_object(&self) -> Result<Map<String, Value>, AppError> {
        let settings = self.get_public().await?;

        Ok(settings.into_iter().map(|s| (s.key, s.value)).collect())
    }

    /// Gets the public settings of a group.
    ///
    /// # Arguments
    /// - `group` - Lowercase group name, e.g. `seo`
    ///
    /// # Returns
    /// - `Ok(Some(settings))` - Known group; `settings` may be empty
    /// - `Ok(None)` - Unknown group name
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn get_public_by_group(&self, group: &str) -> Result<Option<Vec<Setting>>, AppError> {
        let Some(group) = SettingGroup::from_name(group) else {
            return Ok(None);
        };

        let settings = SettingRepository::new(self.db)
            .get_public_by_group(group)
            .await?;

        Ok(Some(settings.into_iter().map(Setting::from_entity).collect()))
    }

    pub async fn get_public_by_key(&self, key: &str) -> Result<Option<Setting>, AppError> {
        let setting = SettingRepository::new(self.db).find_public_by_key(key).await?;

        Ok(setting.map(Setting::from_entity))
    }
}
