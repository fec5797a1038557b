use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "navigation")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub slug: String,
    pub name: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::navigation_item::Entity")]
    NavigationItem,
}

impl Related<super::navigation_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::NavigationItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
