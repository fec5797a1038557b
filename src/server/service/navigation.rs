use sea_orm::DatabaseConnection;

use crate::server::{
    data::navigation::NavigationRepository,
    error::AppError,
    model::navigation::{Navigation, NavigationItem, NavigationItemNode, NavigationWithItems},
    util::forest::Forest,
};

pub struct NavigationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NavigationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<Navigation>, AppError> {
        let navigations = NavigationRepository::new(self.db).get_all().await?;

        Ok(navigations.into_iter().map(assemble).collect())
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Option<Navigation>, AppError> {
        let navigation = NavigationRepository::new(self.db).find_by_slug(slug).await?;

        Ok(navigation.map(assemble))
    }
}

fn assemble(result: NavigationWithItems) -> Navigation {
    let items = result
        .items
        .into_iter()
        .map(|item| NavigationItem::from_entity(item, &result.pages))
        .collect();

    Navigation {
        id: result.navigation.id,
        slug: result.navigation.slug,
        name: result.navigation.name,
        items: build_item_tree(items),
    }
}

/// Nests flat menu items under their parents.
///
/// Top-level items keep their input order and every child list is sorted by `order`,
/// ties keeping input order. Items whose parent is missing, or that sit on a parent
/// cycle, are promoted to the top level the same way reply comments are.
pub fn build_item_tree(items: Vec<NavigationItem>) -> Vec<NavigationItemNode> {
    let links: Vec<(i32, Option<i32>)> = items.iter().map(|i| (i.id, i.parent_id)).collect();

    let mut forest = Forest::link(&links);
    forest.sort_children_by_key(|position| items[position].order);

    forest.assemble(items, |item, children| NavigationItemNode { item, children })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i32, parent_id: Option<i32>, order: i32) -> NavigationItem {
        NavigationItem {
            id,
            parent_id,
            label: format!("Item {}", id),
            url: Some(format!("/item-{}", id)),
            page: None,
            target: "_self".to_string(),
            icon: None,
            order,
        }
    }

    fn ids(nodes: &[NavigationItemNode]) -> Vec<i32> {
        nodes.iter().map(|n| n.item.id).collect()
    }

    #[test]
    fn nests_children_sorted_by_order() {
        let tree = build_item_tree(vec![
            item(1, None, 0),
            item(2, None, 1),
            item(3, Some(1), 2),
            item(4, Some(1), 0),
            item(5, Some(4), 0),
        ]);

        assert_eq!(ids(&tree), vec![1, 2]);
        assert_eq!(ids(&tree[0].children), vec![4, 3]);
        assert_eq!(ids(&tree[0].children[0].children), vec![5]);
        assert!(tree[1].children.is_empty());
    }

    #[test]
    fn promotes_items_with_missing_parent() {
        let tree = build_item_tree(vec![item(1, None, 0), item(2, Some(77), 1)]);

        assert_eq!(ids(&tree), vec![1, 2]);
    }

    #[test]
    fn empty_menu_has_no_items() {
        assert!(build_item_tree(Vec::new()).is_empty());
    }
}
