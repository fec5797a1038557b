pub use super::article::Entity as Article;
pub use super::article_tag::Entity as ArticleTag;
pub use super::author::Entity as Author;
pub use super::category::Entity as Category;
pub use super::comment::Entity as Comment;
pub use super::media::Entity as Media;
pub use super::navigation::Entity as Navigation;
pub use super::navigation_item::Entity as NavigationItem;
pub use super::page::Entity as Page;
pub use super::page_group::Entity as PageGroup;
pub use super::site_setting::Entity as SiteSetting;
pub use super::tag::Entity as Tag;
