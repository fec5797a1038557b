use super::*;

/// Tests that only published pages are listed, in sort order, with their group.
///
/// Expected: Ok with the two published pages ordered by sort order
#[tokio::test]
async fn lists_published_pages_in_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = factory::create_page_group(db).await?;
    let second = PageFactory::new(db)
        .group(group.id)
        .sort_order(2)
        .build()
        .await?;
    let first = PageFactory::new(db).sort_order(1).build().await?;
    PageFactory::new(db).draft().build().await?;

    let pages = PageRepository::new(db).get_published().await?;

    let ids: Vec<i32> = pages.iter().map(|p| p.page.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);
    assert!(pages[0].group.is_none());
    assert_eq!(pages[1].group.as_ref().map(|g| g.id), Some(group.id));

    Ok(())
}

/// Tests listing the published pages of one group.
#[tokio::test]
async fn lists_published_pages_of_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let legal = factory::create_page_group(db).await?;
    let docs = factory::create_page_group(db).await?;
    let terms = PageFactory::new(db).group(legal.id).build().await?;
    PageFactory::new(db).group(legal.id).draft().build().await?;
    PageFactory::new(db).group(docs.id).build().await?;

    let pages = PageRepository::new(db)
        .get_published_by_group_id(legal.id)
        .await?;

    assert_eq!(pages.len(), 1);
    assert_eq!(pages[0].page.id, terms.id);

    Ok(())
}

/// Tests that page groups are ordered by sort order.
#[tokio::test]
async fn orders_groups_by_sort_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let later = PageGroupFactory::new(db).sort_order(5).build().await?;
    let earlier = PageGroupFactory::new(db).sort_order(1).build().await?;

    let groups = PageRepository::new(db).get_groups().await?;

    let ids: Vec<i32> = groups.iter().map(|g| g.id).collect();
    assert_eq!(ids, vec![earlier.id, later.id]);

    Ok(())
}
