//! Navigation menu domain models.
//!
//! Items are stored flat with an optional parent item; [`NavigationItemNode`] is the
//! nested form returned to clients.

use std::collections::HashMap;

use sea_orm::ActiveEnum;

use crate::model::navigation::{NavigationDto, NavigationItemDto, NavigationPageDto};

/// Entity bundle returned by the navigation repository.
#[derive(Debug, Clone)]
pub struct NavigationWithItems {
    pub navigation: entity::navigation::Model,
    pub items: Vec<entity::navigation_item::Model>,
    /// Pages referenced by `items`, keyed by page ID.
    pub pages: HashMap<i32, entity::page::Model>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationItem {
    pub id: i32,
    pub parent_id: Option<i32>,
    pub label: String,
    pub url: Option<String>,
    /// `(slug, title)` of the linked page.
    pub page: Option<(String, String)>,
    /// `_self` or `_blank`.
    pub target: String,
    pub icon: Option<String>,
    pub order: i32,
}

impl NavigationItem {
    /// Converts an item entity, resolving its page link from the preloaded pages.
    pub fn from_entity(
        entity: entity::navigation_item::Model,
        pages: &HashMap<i32, entity::page::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            parent_id: entity.parent_id,
            label: entity.label,
            url: entity.url,
            page: entity
                .page_id
                .and_then(|id| pages.get(&id))
                .map(|p| (p.slug.clone(), p.title.clone())),
            target: entity.target.to_value(),
            icon: entity.icon,
            order: entity.sort_order,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavigationItemNode {
    pub item: NavigationItem,
    pub children: Vec<NavigationItemNode>,
}

impl NavigationItemNode {
    pub fn into_dto(self) -> NavigationItemDto {
        let item = self.item;

        NavigationItemDto {
            id: item.id,
            label: item.label,
            url: item.url,
            page: item
                .page
                .map(|(slug, title)| NavigationPageDto { slug, title }),
            target: item.target,
            icon: item.icon,
            order: item.order,
            children: self
                .children
                .into_iter()
                .map(NavigationItemNode::into_dto)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Navigation {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub items: Vec<NavigationItemNode>,
}

impl Navigation {
    pub fn into_dto(self) -> NavigationDto {
        NavigationDto {
            id: self.id,
            slug: self.slug,
            name: self.name,
            items: self
                .items
                .into_iter()
                .map(NavigationItemNode::into_dto)
                .collect(),
        }
    }
}
