use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct NavigationPageDto {
    pub slug: String,
    pub title: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct NavigationItemDto {
    pub id: i32,
    pub label: String,
    pub url: Option<String>,
    /// Linked page, when the item points at a page instead of a URL.
    pub page: Option<NavigationPageDto>,
    /// `_self` or `_blank`.
    pub target: String,
    pub icon: Option<String>,
    pub order: i32,
    #[schema(no_recursion)]
    pub children: Vec<NavigationItemDto>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
pub struct NavigationDto {
    pub id: i32,
    pub slug: String,
    pub name: String,
    pub items: Vec<NavigationItemDto>,
}
