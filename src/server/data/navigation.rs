use std::collections::{HashMap, HashSet};

use entity::sea_orm_active_enums::PublicationStatus;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

use crate::server::model::navigation::NavigationWithItems;

pub struct NavigationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NavigationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every navigation menu with its flat item list and linked pages.
    pub async fn get_all(&self) -> Result<Vec<NavigationWithItems>, DbErr> {
        let navigations = entity::prelude::Navigation::find()
            .order_by_asc(entity::navigation::Column::Id)
            .all(self.db)
            .await?;

        self.load_items(navigations).await
    }

    /// Finds a navigation menu by slug with its flat item list and linked pages.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<NavigationWithItems>, DbErr> {
        let Some(navigation) = entity::prelude::Navigation::find()
            .filter(entity::navigation::Column::Slug.eq(slug))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        Ok(self.load_items(vec![navigation]).await?.pop())
    }

    /// Batch-loads items for the given menus plus the published pages they link to.
    ///
    /// Items come back ordered by display order, then ID. Links to unpublished pages are
    /// left unresolved.
    async fn load_items(
        &self,
        navigations: Vec<entity::navigation::Model>,
    ) -> Result<Vec<NavigationWithItems>, DbErr> {
        if navigations.is_empty() {
            return Ok(Vec::new());
        }

        let navigation_ids: Vec<i32> = navigations.iter().map(|n| n.id).collect();
        let items = entity::prelude::NavigationItem::find()
            .filter(entity::navigation_item::Column::NavigationId.is_in(navigation_ids))
            .order_by_asc(entity::navigation_item::Column::SortOrder)
            .order_by_asc(entity::navigation_item::Column::Id)
            .all(self.db)
            .await?;

        let page_ids: HashSet<i32> = items.iter().filter_map(|i| i.page_id).collect();
        let pages: HashMap<i32, entity::page::Model> = if page_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Page::find()
                .filter(entity::page::Column::Id.is_in(page_ids))
                .filter(entity::page::Column::Status.eq(PublicationStatus::Published))
                .all(self.db)
                .await?
                .into_iter()
                .map(|p| (p.id, p))
                .collect()
        };

        let mut items_by_navigation: HashMap<i32, Vec<entity::navigation_item::Model>> =
            HashMap::new();
        for item in items {
            items_by_navigation
                .entry(item.navigation_id)
                .or_default()
                .push(item);
        }

        Ok(navigations
            .into_iter()
            .map(|navigation| {
                let items = items_by_navigation
                    .remove(&navigation.id)
                    .unwrap_or_default();
                let pages = items
                    .iter()
                    .filter_map(|i| i.page_id)
                    .filter_map(|id| pages.get(&id).map(|p| (id, p.clone())))
                    .collect();

                NavigationWithItems {
                    navigation,
                    items,
                    pages,
                }
            })
            .collect())
    }
}
