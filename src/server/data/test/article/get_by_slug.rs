use super::*;

/// Tests fetching a published article by slug.
///
/// Expected: Ok(Some) with relations loaded
#[tokio::test]
async fn finds_published_article_by_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;
    let category = factory::create_category(db).await?;
    let article = ArticleFactory::new(db, category.id, author.id)
        .slug("borrow-checker-basics")
        .build()
        .await?;

    let result = ArticleRepository::new(db)
        .get_by_slug("borrow-checker-basics")
        .await?;

    assert!(result.is_some());
    let result = result.unwrap();
    assert_eq!(result.article.id, article.id);
    assert!(result.author.is_some());
    assert!(result.category.is_some());

    Ok(())
}

/// Tests that a draft article is hidden from the published lookups only.
///
/// Expected: Ok(None) from `get_by_slug`/`find_by_slug`, Ok(Some) from `find_any_by_slug`
#[tokio::test]
async fn hides_draft_article() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;
    let category = factory::create_category(db).await?;
    let draft = ArticleFactory::new(db, category.id, author.id)
        .slug("unfinished")
        .draft()
        .build()
        .await?;

    let repo = ArticleRepository::new(db);

    assert!(repo.get_by_slug("unfinished").await?.is_none());
    assert!(repo.find_by_slug("unfinished").await?.is_none());
    assert_eq!(
        repo.find_any_by_slug("unfinished").await?.map(|a| a.id),
        Some(draft.id)
    );

    Ok(())
}

/// Tests lookup of a slug that does not exist.
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

    let result = ArticleRepository::new(db).get_by_slug("missing").await?;

    assert!(result.is_none());

    Ok(())
}
