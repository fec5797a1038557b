//! Author domain model.

use chrono::{DateTime, Utc};

use crate::model::{
    article::ArticleAuthorDto,
    author::{AuthorDto, AuthorSocialDto},
};

/// Author profile. The stored email address is intentionally not carried over.
#[derive(Debug, Clone, PartialEq)]
pub struct Author {
    pub id: i32,
    pub name: String,
    pub slug: String,
    pub avatar: Option<String>,
    pub role: String,
    pub bio: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub website: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Author {
    pub fn from_entity(entity: entity::author::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            slug: entity.slug,
            avatar: entity.avatar,
            role: entity.role,
            bio: entity.bio,
            twitter: entity.twitter,
            linkedin: entity.linkedin,
            github: entity.github,
            website: entity.website,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> AuthorDto {
        AuthorDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
            avatar: self.avatar,
            role: self.role,
            bio: self.bio,
            social: AuthorSocialDto {
                twitter: self.twitter,
                linkedin: self.linkedin,
                github: self.github,
                website: self.website,
            },
        }
    }

    /// Byline shown on article cards.
    pub fn into_byline_dto(self) -> ArticleAuthorDto {
        ArticleAuthorDto {
            id: self.id,
            name: self.name,
            slug: self.slug,
            avatar: self.avatar,
            role: self.role,
        }
    }
}
