use crate::server::data::setting::SettingRepository;
use entity::sea_orm_active_enums::SettingGroup;
use sea_orm::DbErr;
use serde_json::json;
use test_utils::{
    builder::TestBuilder,
    factory::{self, site_setting::SiteSettingFactory},
};

mod get_public;
