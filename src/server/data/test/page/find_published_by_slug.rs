use super::*;

/// Tests finding a published page by slug.
#[tokio::test]
async fn finds_published_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let page = PageFactory::new(db).slug("about").build().await?;

    let result = PageRepository::new(db).find_published_by_slug("about").await?;

    assert_eq!(result.map(|r| r.page.id), Some(page.id));

    Ok(())
}

/// Tests that a draft page is hidden.
///
/// Expected: Ok(None)
#[tokio::test]
async fn hides_draft_page() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    PageFactory::new(db).slug("roadmap").draft().build().await?;

    let result = PageRepository::new(db)
        .find_published_by_slug("roadmap")
        .await?;

    assert!(result.is_none());

    Ok(())
}
