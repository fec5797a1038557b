use sea_orm::{entity::prelude::*, Iterable};

/// Publication state shared by articles and pages.
///
/// Only `Published` rows are ever returned by the read API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum PublicationStatus {
    #[sea_orm(string_value = "draft")]
    Draft,
    #[sea_orm(string_value = "published")]
    Published,
}

/// Browsing context a navigation link opens in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum LinkTarget {
    #[sea_orm(string_value = "_self")]
    SameWindow,
    #[sea_orm(string_value = "_blank")]
    NewWindow,
}

/// How a site setting's JSON value should be interpreted by clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum SettingType {
    #[sea_orm(string_value = "string")]
    String,
    #[sea_orm(string_value = "number")]
    Number,
    #[sea_orm(string_value = "boolean")]
    Boolean,
    #[sea_orm(string_value = "json")]
    Json,
    #[sea_orm(string_value = "image")]
    Image,
}

/// Logical grouping of site settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum SettingGroup {
    #[sea_orm(string_value = "general")]
    General,
    #[sea_orm(string_value = "seo")]
    Seo,
    #[sea_orm(string_value = "social")]
    Social,
    #[sea_orm(string_value = "appearance")]
    Appearance,
    #[sea_orm(string_value = "contact")]
    Contact,
    #[sea_orm(string_value = "analytics")]
    Analytics,
}

impl SettingGroup {
    /// Parses a group from its lowercase wire name, returning `None` for unknown groups.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::iter().find(|group| group.to_value() == name)
    }
}
