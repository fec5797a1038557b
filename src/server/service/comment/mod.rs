//! Comment retrieval for articles.

pub mod tree;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{article::ArticleRepository, comment::CommentRepository},
    error::AppError,
    model::comment::{Comment, CommentNode},
};

pub use tree::build_comment_tree;

pub struct CommentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CommentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the reply forest for an article, drafts included.
    ///
    /// An unknown slug yields an empty forest rather than an error.
    pub async fn get_tree_by_article_slug(&self, slug: &str) -> Result<Vec<CommentNode>, AppError> {
        let Some(article) = ArticleRepository::new(self.db).find_any_by_slug(slug).await? else {
            return Ok(Vec::new());
        };

        let comments = CommentRepository::new(self.db)
            .get_by_article_id(article.id)
            .await?
            .into_iter()
            .map(Comment::from_entity)
            .collect();

        let tree = build_comment_tree(comments);
        tracing::debug!(
            "Built {} comments under {} roots for article {}",
            tree.iter().map(CommentNode::node_count).sum::<usize>(),
            tree.len(),
            slug
        );

        Ok(tree)
    }

    /// Counts every comment on an article, `0` for unknown slugs.
    pub async fn count_by_article_slug(&self, slug: &str) -> Result<u64, AppError> {
        let Some(article) = ArticleRepository::new(self.db).find_any_by_slug(slug).await? else {
            return Ok(0);
        };

        Ok(CommentRepository::new(self.db)
            .count_by_article_id(article.id)
            .await?)
    }
}
