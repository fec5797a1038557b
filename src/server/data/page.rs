use entity::sea_orm_active_enums::PublicationStatus;
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, Select,
};

use crate::server::model::page::PageWithGroup;

pub struct PageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every published page with its group, ordered by display order.
    pub async fn get_published(&self) -> Result<Vec<PageWithGroup>, DbErr> {
        let pages = published()
            .find_also_related(entity::prelude::PageGroup)
            .order_by_asc(entity::page::Column::SortOrder)
            .order_by_asc(entity::page::Column::Id)
            .all(self.db)
            .await?;

        Ok(pages
            .into_iter()
            .map(|(page, group)| PageWithGroup { page, group })
            .collect())
    }

    /// Gets the published pages in a group, ordered by display order.
    pub async fn get_published_by_group_id(
        &self,
        group_id: i32,
    ) -> Result<Vec<PageWithGroup>, DbErr> {
        let pages = published()
            .filter(entity::page::Column::GroupId.eq(group_id))
            .find_also_related(entity::prelude::PageGroup)
            .order_by_asc(entity::page::Column::SortOrder)
            .order_by_asc(entity::page::Column::Id)
            .all(self.db)
            .await?;

        Ok(pages
            .into_iter()
            .map(|(page, group)| PageWithGroup { page, group })
            .collect())
    }

    /// Finds a published page by slug with its group.
    pub async fn find_published_by_slug(&self, slug: &str) -> Result<Option<PageWithGroup>, DbErr> {
        let page = published()
            .filter(entity::page::Column::Slug.eq(slug))
            .find_also_related(entity::prelude::PageGroup)
            .one(self.db)
            .await?;

        Ok(page.map(|(page, group)| PageWithGroup { page, group }))
    }

    /// Gets every page group ordered by display order then name.
    pub async fn get_groups(&self) -> Result<Vec<entity::page_group::Model>, DbErr> {
        entity::prelude::PageGroup::find()
            .order_by_asc(entity::page_group::Column::SortOrder)
            .order_by_asc(entity::page_group::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn find_group_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<entity::page_group::Model>, DbErr> {
        entity::prelude::PageGroup::find()
            .filter(entity::page_group::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }
}

fn published() -> Select<entity::page::Entity> {
    entity::prelude::Page::find()
        .filter(entity::page::Column::Status.eq(PublicationStatus::Published))
}
