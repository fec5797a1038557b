use super::*;

/// Tests finding a category by slug with its article count.
#[tokio::test]
async fn finds_category_with_count() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;
    let category = CategoryFactory::new(db).slug("systems").build().await?;
    factory::create_article(db, category.id, author.id).await?;

    let result = CategoryRepository::new(db).find_by_slug("systems").await?;

    assert!(result.is_some());
    let result = result.unwrap();
    assert_eq!(result.category.id, category.id);
    assert_eq!(result.article_count, 1);

    Ok(())
}

/// Tests lookup of an unknown slug.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_category(db).await?;

    let result = CategoryRepository::new(db).find_by_slug("missing").await?;

    assert!(result.is_none());

    Ok(())
}
