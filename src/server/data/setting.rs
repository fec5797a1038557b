use entity::sea_orm_active_enums::SettingGroup;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Select,
};

pub struct SettingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every public setting ordered by key.
    pub async fn get_public(&self) -> Result<Vec<entity::site_setting::Model>, DbErr> {
        public()
            .order_by_asc(entity::site_setting::Column::Key)
            .all(self.db)
            .await
    }

    /// Gets the public settings in one group ordered by key.
    pub async fn get_public_by_group(
        &self,
        group: SettingGroup,
    ) -> Result<Vec<entity::site_setting::Model>, DbErr> {
        public()
            .filter(entity::site_setting::Column::SettingGroup.eq(group))
            .order_by_asc(entity::site_setting::Column::Key)
            .all(self.db)
            .await
    }

    /// Finds a setting by key. Private settings are treated as missing.
    pub async fn find_public_by_key(
        &self,
        key: &str,
    ) -> Result<Option<entity::site_setting::Model>, DbErr> {
        public()
            .filter(entity::site_setting::Column::Key.eq(key))
            .one(self.db)
            .await
    }
}

fn public() -> Select<entity::site_setting::Entity> {
    entity::prelude::SiteSetting::find().filter(entity::site_setting::Column::IsPublic.eq(true))
}
