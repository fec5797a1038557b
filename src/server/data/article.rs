use std::collections::{HashMap, HashSet};

use entity::sea_orm_active_enums::PublicationStatus;
use sea_orm::{
    sea_query::{Expr, Query},
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select,
};

use crate::server::{
    model::article::{ArticleFilter, ArticleSort, ArticleWithRelations},
    util::pagination::{page_in_range, page_index},
};

pub struct ArticleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ArticleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets one page of published articles matching the filter, with relations loaded.
    ///
    /// # Arguments
    /// - `filter` - Restrictions on category, tag, author, featured flag and search text
    /// - `sort` - Listing order
    /// - `page` - 1-based page number
    /// - `limit` - Page size
    ///
    /// # Returns
    /// - `Ok((articles, total))` - The requested page and the total number of matches
    /// - `Err(DbErr)` - Database error
    pub async fn get_paginated(
        &self,
        filter: &ArticleFilter,
        sort: ArticleSort,
        page: u64,
        limit: u64,
    ) -> Result<(Vec<ArticleWithRelations>, u64), DbErr> {
        let query = apply_sort(apply_filter(published(), filter), sort);
        let paginator = query.paginate(self.db, limit);

        let total = paginator.num_items().await?;
        let articles = if page_in_range(page, limit, total) {
            paginator.fetch_page(page_index(page)).await?
        } else {
            Vec::new()
        };

        Ok((self.load_relations(articles).await?, total))
    }

    /// Gets the first `limit` published articles matching the filter in the given order.
    pub async fn get_top(
        &self,
        filter: &ArticleFilter,
        sort: ArticleSort,
        limit: u64,
    ) -> Result<Vec<ArticleWithRelations>, DbErr> {
        let articles = apply_sort(apply_filter(published(), filter), sort)
            .limit(limit)
            .all(self.db)
            .await?;

        self.load_relations(articles).await
    }

    /// Finds a published article by slug without loading relations.
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<entity::article::Model>, DbErr> {
        published()
            .filter(entity::article::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Finds an article by slug whatever its status.
    pub async fn find_any_by_slug(
        &self,
        slug: &str,
    ) -> Result<Option<entity::article::Model>, DbErr> {
        entity::prelude::Article::find()
            .filter(entity::article::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }

    /// Gets a published article by slug with its category, author and tags.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<ArticleWithRelations>, DbErr> {
        let Some(article) = self.find_by_slug(slug).await? else {
            return Ok(None);
        };

        Ok(self.load_relations(vec![article]).await?.pop())
    }

    /// Gets published articles sharing the given article's category or any of its tags.
    ///
    /// The article itself is excluded. Results are most recently published first.
    pub async fn get_related(
        &self,
        article: &entity::article::Model,
        limit: u64,
    ) -> Result<Vec<ArticleWithRelations>, DbErr> {
        let shared_tag_articles = Query::select()
            .column(entity::article_tag::Column::ArticleId)
            .from(entity::article_tag::Entity)
            .and_where(
                entity::article_tag::Column::TagId.in_subquery(
                    Query::select()
                        .column(entity::article_tag::Column::TagId)
                        .from(entity::article_tag::Entity)
                        .and_where(entity::article_tag::Column::ArticleId.eq(article.id))
                        .to_owned(),
                ),
            )
            .to_owned();

        let articles = published()
            .filter(entity::article::Column::Id.ne(article.id))
            .filter(
                Condition::any()
                    .add(entity::article::Column::CategoryId.eq(article.category_id))
                    .add(entity::article::Column::Id.in_subquery(shared_tag_articles)),
            )
            .order_by_desc(entity::article::Column::PublishedAt)
            .order_by_desc(entity::article::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        self.load_relations(articles).await
    }

    /// Batch-loads categories, authors and tags for a list of articles.
    ///
    /// Issues one query per relation regardless of how many articles are passed and
    /// preserves the input order. Tags are ordered by name.
    async fn load_relations(
        &self,
        articles: Vec<entity::article::Model>,
    ) -> Result<Vec<ArticleWithRelations>, DbErr> {
        if articles.is_empty() {
            return Ok(Vec::new());
        }

        let article_ids: Vec<i32> = articles.iter().map(|a| a.id).collect();
        let category_ids: HashSet<i32> = articles.iter().map(|a| a.category_id).collect();
        let author_ids: HashSet<i32> = articles.iter().map(|a| a.author_id).collect();

        let categories: HashMap<i32, entity::category::Model> = entity::prelude::Category::find()
            .filter(entity::category::Column::Id.is_in(category_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|c| (c.id, c))
            .collect();

        let authors: HashMap<i32, entity::author::Model> = entity::prelude::Author::find()
            .filter(entity::author::Column::Id.is_in(author_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|a| (a.id, a))
            .collect();

        let links = entity::prelude::ArticleTag::find()
            .filter(entity::article_tag::Column::ArticleId.is_in(article_ids))
            .all(self.db)
            .await?;

        let tag_ids: HashSet<i32> = links.iter().map(|l| l.tag_id).collect();
        let tags: Vec<entity::tag::Model> = if tag_ids.is_empty() {
            Vec::new()
        } else {
            entity::prelude::Tag::find()
                .filter(entity::tag::Column::Id.is_in(tag_ids))
                .order_by_asc(entity::tag::Column::Name)
                .all(self.db)
                .await?
        };

        let mut tag_ids_by_article: HashMap<i32, HashSet<i32>> = HashMap::new();
        for link in links {
            tag_ids_by_article
                .entry(link.article_id)
                .or_default()
                .insert(link.tag_id);
        }

        Ok(articles
            .into_iter()
            .map(|article| {
                let article_tags = tag_ids_by_article
                    .get(&article.id)
                    .map(|ids| tags.iter().filter(|t| ids.contains(&t.id)).cloned().collect())
                    .unwrap_or_default();

                ArticleWithRelations {
                    category: categories.get(&article.category_id).cloned(),
                    author: authors.get(&article.author_id).cloned(),
                    tags: article_tags,
                    article,
                }
            })
            .collect())
    }
}

fn published() -> Select<entity::article::Entity> {
    entity::prelude::Article::find()
        .filter(entity::article::Column::Status.eq(PublicationStatus::Published))
}

fn apply_filter(
    mut query: Select<entity::article::Entity>,
    filter: &ArticleFilter,
) -> Select<entity::article::Entity> {
    if let Some(category_id) = filter.category_id {
        query = query.filter(entity::article::Column::CategoryId.eq(category_id));
    }

    if let Some(author_id) = filter.author_id {
        query = query.filter(entity::article::Column::AuthorId.eq(author_id));
    }

    if let Some(featured) = filter.featured {
        query = query.filter(entity::article::Column::IsFeatured.eq(featured));
    }

    if let Some(tag_id) = filter.tag_id {
        query = query.filter(
            entity::article::Column::Id.in_subquery(
                Query::select()
                    .column(entity::article_tag::Column::ArticleId)
                    .from(entity::article_tag::Entity)
                    .and_where(entity::article_tag::Column::TagId.eq(tag_id))
                    .to_owned(),
            ),
        );
    }

    if let Some(term) = filter.search.as_deref() {
        let pattern = format!("%{}%", escape_like(&term.to_lowercase()));
        let contains = |column: &str| {
            Expr::cust_with_values(
                format!("LOWER({}) LIKE ? ESCAPE '\\'", column),
                [pattern.clone()],
            )
        };

        query = query.filter(
            Condition::any()
                .add(contains("title"))
                .add(contains("excerpt"))
                .add(contains("content")),
        );
    }

    query
}

fn apply_sort(
    query: Select<entity::article::Entity>,
    sort: ArticleSort,
) -> Select<entity::article::Entity> {
    match sort {
        ArticleSort::Latest => query
            .order_by_desc(entity::article::Column::PublishedAt)
            .order_by_desc(entity::article::Column::Id),
        ArticleSort::Oldest => query
            .order_by_asc(entity::article::Column::PublishedAt)
            .order_by_asc(entity::article::Column::Id),
        ArticleSort::Popular | ArticleSort::Trending => query
            .order_by_desc(entity::article::Column::Views)
            .order_by_desc(entity::article::Column::PublishedAt)
            .order_by_desc(entity::article::Column::Id),
    }
}

/// Escapes `%`, `_` and the escape character itself so user input matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
