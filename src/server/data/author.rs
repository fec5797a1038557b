use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct AuthorRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthorRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every author ordered by name.
    pub async fn get_all(&self) -> Result<Vec<entity::author::Model>, DbErr> {
        entity::prelude::Author::find()
            .order_by_asc(entity::author::Column::Name)
            .all(self.db)
            .await
    }

    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<entity::author::Model>, DbErr> {
        entity::prelude::Author::find()
            .filter(entity::author::Column::Slug.eq(slug))
            .one(self.db)
            .await
    }
}
