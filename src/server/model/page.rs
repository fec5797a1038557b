//! Page and page group domain models.

use chrono::{DateTime, Utc};

use crate::{
    model::page::{ContentBlock, PageDto, PageGroupDto, PageGroupRefDto, SeoDto},
    server::error::internal::InternalError,
};

#[derive(Debug, Clone, PartialEq)]
pub struct PageGroup {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub order: i32,
}

impl PageGroup {
    pub fn from_entity(entity: entity::page_group::Model) -> Self {
        Self {
            id: entity.id,
            slug: entity.slug,
            name: entity.name,
            description: entity.description,
            order: entity.sort_order,
        }
    }

    pub fn into_dto(self) -> PageGroupDto {
        PageGroupDto {
            id: self.id,
            slug: self.slug,
            name: self.name,
            description: self.description,
            order: self.order,
        }
    }
}

/// Entity bundle returned by the page repository.
#[derive(Debug, Clone)]
pub struct PageWithGroup {
    pub page: entity::page::Model,
    pub group: Option<entity::page_group::Model>,
}

/// A published standalone page with decoded rich content.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub id: i32,
    pub slug: String,
    pub title: String,
    pub description: Option<String>,
    pub content: Vec<ContentBlock>,
    /// `(slug, name)` of the owning group.
    pub group: Option<(String, String)>,
    pub order: i32,
    pub seo: SeoDto,
    pub published_at: Option<DateTime<Utc>>,
}

impl Page {
    /// Converts a page entity bundle into a domain model.
    ///
    /// # Returns
    /// - `Ok(Page)` - Content blocks and SEO fields decoded
    /// - `Err(InternalError::InvalidStoredJson)` - `content` or `seo` has an unexpected shape
    pub fn from_with_group(result: PageWithGroup) -> Result<Self, InternalError> {
        let entity = result.page;
        let id = entity.id;

        let content = if entity.content.is_null() {
            Vec::new()
        } else {
            serde_json::from_value::<Vec<ContentBlock>>(entity.content).map_err(|e| {
                InternalError::InvalidStoredJson {
                    table: "page",
                    column: "content",
                    id,
                    source: e,
                }
            })?
        };

        let seo = if entity.seo.is_null() {
            SeoDto::default()
        } else {
            serde_json::from_value::<SeoDto>(entity.seo).map_err(|e| {
                InternalError::InvalidStoredJson {
                    table: "page",
                    column: "seo",
                    id,
                    source: e,
                }
            })?
        };

        Ok(Self {
            id,
            slug: entity.slug,
            title: entity.title,
            description: entity.description,
            content,
            group: result.group.map(|g| (g.slug, g.name)),
            order: entity.sort_order,
            seo,
            published_at: entity.published_at,
        })
    }

    pub fn into_dto(self) -> PageDto {
        PageDto {
            id: self.id,
            slug: self.slug,
            title: self.title,
            description: self.description,
            content: self.content,
            group: self
                .group
                .map(|(slug, name)| PageGroupRefDto { slug, name }),
            order: self.order,
            seo: self.seo,
            published_at: self.published_at,
        }
    }
}
