use super::*;

/// Tests that comments are fetched newest first, replies included.
///
/// Expected: Ok with all three comments of the article ordered by created_at descending
#[tokio::test]
async fn fetches_article_comments_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, article) = factory::helpers::create_article_with_dependencies(db).await?;
    let first = CommentFactory::new(db, article.id)
        .created_at(minutes_after(1))
        .build()
        .await?;
    let reply = CommentFactory::new(db, article.id)
        .parent(first.id)
        .created_at(minutes_after(2))
        .build()
        .await?;
    let latest = CommentFactory::new(db, article.id)
        .created_at(minutes_after(3))
        .build()
        .await?;

    let comments = CommentRepository::new(db)
        .get_by_article_id(article.id)
        .await?;

    let ids: Vec<i32> = comments.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![latest.id, reply.id, first.id]);
    assert_eq!(comments[1].parent_id, Some(first.id));

    Ok(())
}

/// Tests that comments created at the same instant are ordered by descending ID.
#[tokio::test]
async fn breaks_timestamp_ties_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, article) = factory::helpers::create_article_with_dependencies(db).await?;
    let older = factory::create_comment(db, article.id).await?;
    let newer = factory::create_comment(db, article.id).await?;

    let comments = CommentRepository::new(db)
        .get_by_article_id(article.id)
        .await?;

    let ids: Vec<i32> = comments.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    Ok(())
}

/// Tests that only the requested article's comments are returned.
///
/// Expected: Ok with an empty list for an article without comments
#[tokio::test]
async fn excludes_other_articles_comments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, category, commented) =
        factory::helpers::create_article_with_dependencies(db).await?;
    let quiet = factory::create_article(db, category.id, author.id).await?;
    factory::create_comment(db, commented.id).await?;

    let comments = CommentRepository::new(db).get_by_article_id(quiet.id).await?;

    assert!(comments.is_empty());

    Ok(())
}
