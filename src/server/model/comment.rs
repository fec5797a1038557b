//! Comment domain models.
//!
//! Comments are stored flat with an optional parent reference. [`CommentNode`] is the
//! derived nested form, built fresh for every request and never persisted.

use chrono::{DateTime, Utc};

use crate::model::comment::CommentDto;

/// One remark attached to an article.
#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i32,
    pub article_id: i32,
    /// Comment this one replies to; `None` for top-level comments.
    pub parent_id: Option<i32>,
    pub author: String,
    pub avatar: String,
    pub content: String,
    pub likes: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Comment {
    /// Converts an entity model to a comment domain model at the repository boundary.
    pub fn from_entity(entity: entity::comment::Model) -> Self {
        Self {
            id: entity.id,
            article_id: entity.article_id,
            parent_id: entity.parent_id,
            author: entity.author,
            avatar: entity.avatar,
            content: entity.content,
            likes: entity.likes,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

/// A comment and its direct replies, each of which may have replies of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct CommentNode {
    pub comment: Comment,
    pub replies: Vec<CommentNode>,
}

impl CommentNode {
    /// Counts this node and every descendant.
    pub fn node_count(&self) -> usize {
        1 + self.replies.iter().map(CommentNode::node_count).sum::<usize>()
    }

    pub fn into_dto(self) -> CommentDto {
        let comment = self.comment;

        CommentDto {
            id: comment.id,
            author: comment.author,
            avatar: comment.avatar,
            content: comment.content,
            likes: comment.likes,
            replies: self.replies.into_iter().map(CommentNode::into_dto).collect(),
            created_at: comment.created_at,
            updated_at: comment.updated_at,
        }
    }
}
