use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::PublicationStatus;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "page")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    /// Ordered content blocks, stored as a JSON array of `{type, data}` objects.
    pub content: Json,
    pub group_id: Option<i32>,
    pub status: PublicationStatus,
    pub sort_order: i32,
    /// SEO overrides, stored as a JSON object.
    pub seo: Json,
    pub published_at: Option<DateTimeUtc>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::page_group::Entity",
        from = "Column::GroupId",
        to = "super::page_group::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    PageGroup,
}

impl Related<super::page_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PageGroup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
