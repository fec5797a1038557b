//! Category domain model.

use crate::model::{article::ArticleCategoryDto, category::CategoryDto};

/// Category with the number of published articles filed under it.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub gradient: Option<String>,
    pub accent_class: Option<String>,
    /// Display position; lower sorts first.
    pub order: i32,
    pub article_count: u64,
}

/// Entity bundle returned by the category repository.
#[derive(Debug, Clone)]
pub struct CategoryWithCount {
    pub category: entity::category::Model,
    pub article_count: u64,
}

impl Category {
    pub fn from_with_count(result: CategoryWithCount) -> Self {
        let entity = result.category;

        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
            description: entity.description,
            icon: entity.icon,
            color: entity.color,
            gradient: entity.gradient,
            accent_class: entity.accent_class,
            order: entity.sort_order,
            article_count: result.article_count,
        }
    }

    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
            description: self.description,
            icon: self.icon,
            color: self.color,
            gradient: self.gradient,
            accent_class: self.accent_class,
            order: self.order,
            article_count: self.article_count,
        }
    }
}

/// Category fields embedded in article payloads.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleCategory {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub icon: Option<String>,
    pub color: Option<String>,
}

impl ArticleCategory {
    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
            description: entity.description,
            icon: entity.icon,
            color: entity.color,
        }
    }

    pub fn into_dto(self) -> ArticleCategoryDto {
        ArticleCategoryDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
            description: self.description,
            icon: self.icon,
            color: self.color,
        }
    }
}
