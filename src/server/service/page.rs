use sea_orm::DatabaseConnection;

use crate::server::{
    data::page::PageRepository,
    error::AppError,
    model::page::{Page, PageGroup, PageWithGroup},
};

pub struct PageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every published page in display order.
    pub async fn get_published(&self) -> Result<Vec<Page>, AppError> {
        let pages = PageRepository::new(self.db).get_published().await?;

        convert(pages)
    }

    /// Gets the published pages of a group; an unknown group yields an empty list.
    pub async fn get_by_group(&self, group_slug: &str) -> Result<Vec<Page>, AppError> {
        let repo = PageRepository::new(self.db);

        let Some(group) = repo.find_group_by_slug(group_slug).await? else {
            return Ok(Vec::new());
        };

        convert(repo.get_published_by_group_id(group.id).await?)
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Page>, AppError> {
        let page = PageRepository::new(self.db)
            .find_published_by_slug(slug)
            .await?;

        page.map(Page::from_with_group)
            .transpose()
            .map_err(Into::into)
    }

    pub async fn get_groups(&self) -> Result<Vec<PageGroup>, AppError> {
        let groups = PageRepository::new(self.db).get_groups().await?;

        Ok(groups.into_iter().map(PageGroup::from_entity).collect())
    }

    /// Gets a page group with its published pages.
    ///
    /// # Returns
    /// - `Ok(Some((group, pages)))` - Group found; `pages` may be empty
    /// - `Ok(None)` - No group with this slug
    /// - `Err(AppError)` - Database or stored content error
    pub async fn get_group_with_pages(
        &self,
        slug: &str,
    ) -> Result<Option<(PageGroup, Vec<Page>)>, AppError> {
        let repo = PageRepository::new(self.db);

        let Some(group) = repo.find_group_by_slug(slug).await? else {
            return Ok(None);
        };

        let pages = convert(repo.get_published_by_group_id(group.id).await?)?;

        Ok(Some((PageGroup::from_entity(group), pages)))
    }
}

fn convert(results: Vec<PageWithGroup>) -> Result<Vec<Page>, AppError> {
    results
        .into_iter()
        .map(Page::from_with_group)
        .collect::<Result<Vec<_>, _>>()
        .map_err(Into::into)
}
