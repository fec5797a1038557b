//! Navigation menu and navigation item factories.

use entity::sea_orm_active_enums::LinkTarget;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::{base_time, next_id};

/// Creates a navigation menu with a unique slug.
pub async fn create_navigation(
    db: &DatabaseConnection,
) -> Result<entity::navigation::Model, DbErr> {
    let id = next_id();
    let now = base_time();

    entity::navigation::ActiveModel {
        id: ActiveValue::NotSet,
        slug: ActiveValue::Set(format!("menu-{}", id)),
        name: ActiveValue::Set(format!("Menu {}", id)),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}

/// Factory for creating navigation items.
///
/// # Example
///
/// ```rust,ignore
/// let parent = NavigationItemFactory::new(&db, menu.id).label("Docs").build().await?;
/// let child = NavigationItemFactory::new(&db, menu.id)
///     .parent(parent.id)
///     .sort_order(1)
///     .build()
///     .await?;
/// ```
pub struct NavigationItemFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::navigation_item::Model,
}

impl<'a> NavigationItemFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, navigation_id: i32) -> Self {
        let id = next_id();

        Self {
            db,
            entity: entity::navigation_item::Model {
                id: 0,
                navigation_id,
                parent_id: None,
                label: format!("Link {}", id),
                url: Some(format!("/link-{}", id)),
                page_id: None,
                target: LinkTarget::SameWindow,
                icon: None,
                sort_order: 0,
            },
        }
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.entity.label = label.into();
        self
    }

    pub fn parent(mut self, parent_id: i32) -> Self {
        self.entity.parent_id = Some(parent_id);
        self
    }

    /// Links the item to a page instead of a URL.
    pub fn page(mut self, page_id: i32) -> Self {
        self.entity.page_id = Some(page_id);
        self.entity.url = None;
        self
    }

    pub fn sort_order(mut self, sort_order: i32) -> Self {
        self.entity.sort_order = sort_order;
        self
    }

    pub fn new_window(mut self) -> Self {
        self.entity.target = LinkTarget::NewWindow;
        self
    }

    pub async fn build(self) -> Result<entity::navigation_item::Model, DbErr> {
        let e = self.entity;

        entity::navigation_item::ActiveModel {
            id: ActiveValue::NotSet,
            navigation_id: ActiveValue::Set(e.navigation_id),
            parent_id: ActiveValue::Set(e.parent_id),
            label: ActiveValue::Set(e.label),
            url: ActiveValue::Set(e.url),
            page_id: ActiveValue::Set(e.page_id),
            target: ActiveValue::Set(e.target),
            icon: ActiveValue::Set(e.icon),
            sort_order: ActiveValue::Set(e.sort_order),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a top-level navigation item with default values.
pub async fn create_navigation_item(
    db: &DatabaseConnection,
    navigation_id: i32,
) -> Result<entity::navigation_item::Model, DbErr> {
    NavigationItemFactory::new(db, navigation_id).build().await
}
