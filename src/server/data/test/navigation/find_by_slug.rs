use super::*;

/// Tests loading a menu with its items ordered by sort order.
///
/// Expected: Ok(Some) with items of this menu only, ordered by sort order
#[tokio::test]
async fn loads_items_in_sort_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let menu = factory::create_navigation(db).await?;
    let other = factory::create_navigation(db).await?;
    let second = NavigationItemFactory::new(db, menu.id)
        .sort_order(2)
        .build()
        .await?;
    let first = NavigationItemFactory::new(db, menu.id)
        .sort_order(1)
        .build()
        .await?;
    let child = NavigationItemFactory::new(db, menu.id)
        .parent(first.id)
        .sort_order(0)
        .build()
        .await?;
    factory::create_navigation_item(db, other.id).await?;

    let result = NavigationRepository::new(db)
        .find_by_slug(&menu.slug)
        .await?;

    assert!(result.is_some());
    let result = result.unwrap();
    let ids: Vec<i32> = result.items.iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![child.id, first.id, second.id]);

    Ok(())
}

/// Tests that linked pages are resolved only when published.
///
/// Expected: the published page is in the page map, the draft page is not
#[tokio::test]
async fn resolves_published_linked_pages() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let menu = factory::create_navigation(db).await?;
    let about = PageFactory::new(db).slug("about").build().await?;
    let hidden = PageFactory::new(db).slug("hidden").draft().build().await?;
    NavigationItemFactory::new(db, menu.id)
        .page(about.id)
        .build()
        .await?;
    NavigationItemFactory::new(db, menu.id)
        .page(hidden.id)
        .build()
        .await?;

    let result = NavigationRepository::new(db)
        .find_by_slug(&menu.slug)
        .await?
        .unwrap();

    assert_eq!(result.items.len(), 2);
    assert!(result.pages.contains_key(&about.id));
    assert!(!result.pages.contains_key(&hidden.id));

    Ok(())
}

/// Tests lookup of an unknown menu slug.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = NavigationRepository::new(db).find_by_slug("footer").await?;

    assert!(result.is_none());

    Ok(())
}
