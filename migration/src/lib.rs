pub use sea_orm_migration::prelude::*;

mod m20260101_000001_create_author_table;
mod m20260101_000002_create_category_table;
mod m20260101_000003_create_tag_table;
mod m20260101_000004_create_article_table;
mod m20260101_000005_create_article_tag_table;
mod m20260101_000006_create_comment_table;
mod m20260102_000007_create_page_group_table;
mod m20260102_000008_create_page_table;
mod m20260102_000009_create_media_table;
mod m20260102_000010_create_navigation_table;
mod m20260102_000011_create_navigation_item_table;
mod m20260102_000012_create_site_setting_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260101_000001_create_author_table::Migration),
            Box::new(m20260101_000002_create_category_table::Migration),
            Box::new(m20260101_000003_create_tag_table::Migration),
            Box::new(m20260101_000004_create_article_table::Migration),
            Box::new(m20260101_000005_create_article_tag_table::Migration),
            Box::new(m20260101_000006_create_comment_table::Migration),
            Box::new(m20260102_000007_create_page_group_table::Migration),
            Box::new(m20260102_000008_create_page_table::Migration),
            Box::new(m20260102_000009_create_media_table::Migration),
            Box::new(m20260102_000010_create_navigation_table::Migration),
            Box::new(m20260102_000011_create_navigation_item_table::Migration),
            Box::new(m20260102_000012_create_site_setting_table::Migration),
        ]
    }
}
