use sea_orm::entity::prelude::*;

use super::sea_orm_active_enums::LinkTarget;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "navigation_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub navigation_id: i32,
    /// Enclosing item for nested menus; `None` for top-level items.
    pub parent_id: Option<i32>,
    pub label: String,
    pub url: Option<String>,
    pub page_id: Option<i32>,
    pub target: LinkTarget,
    pub icon: Option<String>,
    pub sort_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::navigation::Entity",
        from = "Column::NavigationId",
        to = "super::navigation::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Navigation,
    #[sea_orm(
        belongs_to = "super::page::Entity",
        from = "Column::PageId",
        to = "super::page::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    Page,
}

impl Related<super::navigation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Navigation.def()
    }
}

impl Related<super::page::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Page.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
