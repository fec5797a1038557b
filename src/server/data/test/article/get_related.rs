use super::*;

/// Tests that related articles share the category or a tag.
///
/// Creates the source article, one article in the same category, one in another
/// category sharing a tag, one unrelated article and one related draft.
///
/// Expected: Ok with the two related published articles, newest first, source excluded
#[tokio::test]
async fn returns_articles_sharing_category_or_tag() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;
    let home = factory::create_category(db).await?;
    let away = factory::create_category(db).await?;
    let shared = factory::create_tag(db).await?;
    let unshared = factory::create_tag(db).await?;

    let source = ArticleFactory::new(db, home.id, author.id)
        .published_at(minutes_after(0))
        .build()
        .await?;
    factory::attach_tag(db, source.id, shared.id).await?;

    let same_category = ArticleFactory::new(db, home.id, author.id)
        .published_at(minutes_after(5))
        .build()
        .await?;

    let same_tag = ArticleFactory::new(db, away.id, author.id)
        .published_at(minutes_after(10))
        .build()
        .await?;
    factory::attach_tag(db, same_tag.id, shared.id).await?;

    let unrelated = ArticleFactory::new(db, away.id, author.id)
        .published_at(minutes_after(15))
        .build()
        .await?;
    factory::attach_tag(db, unrelated.id, unshared.id).await?;

    ArticleFactory::new(db, home.id, author.id).draft().build().await?;

    let related = ArticleRepository::new(db).get_related(&source, 10).await?;

    let ids: Vec<i32> = related.iter().map(|a| a.article.id).collect();
    assert_eq!(ids, vec![same_tag.id, same_category.id]);

    Ok(())
}

/// Tests that the limit caps the number of related articles.
#[tokio::test]
async fn respects_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;
    let category = factory::create_category(db).await?;
    let source = factory::create_article(db, category.id, author.id).await?;
    for _ in 0..4 {
        factory::create_article(db, category.id, author.id).await?;
    }

    let related = ArticleRepository::new(db).get_related(&source, 3).await?;

    assert_eq!(related.len(), 3);
    assert!(related.iter().all(|a| a.article.id != source.id));

    Ok(())
}
