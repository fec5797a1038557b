use crate::model::{article::ArticleTagDto, tag::TagDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub description: Option<String>,
    pub color: Option<String>,
}

impl Tag {
    pub fn from_entity(entity: entity::tag::Model) -> Self {
        Self {
            id: entity.id,
            slug: entity.slug,
            name: entity.name,
            description: entity.description,
            color: entity.color,
        }
    }

    pub fn into_dto(self) -> TagDto {
        TagDto {
            id: self.id,
            slug: self.slug,
            name: self.name,
            description: self.description,
            color: self.color,
        }
    }

    pub fn into_article_tag_dto(self) -> ArticleTagDto {
        ArticleTagDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
            color: self.color,
        }
    }
}
