use super::*;

/// Tests that the count includes replies at every depth.
///
/// Expected: Ok(3) for a root, its reply and a reply to the reply
#[tokio::test]
async fn counts_replies_at_every_depth() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (author, category, article) =
        factory::helpers::create_article_with_dependencies(db).await?;
    let other = factory::create_article(db, category.id, author.id).await?;

    let root = factory::create_comment(db, article.id).await?;
    let reply = CommentFactory::new(db, article.id)
        .parent(root.id)
        .build()
        .await?;
    CommentFactory::new(db, article.id)
        .parent(reply.id)
        .build()
        .await?;
    factory::create_comment(db, other.id).await?;

    let count = CommentRepository::new(db)
        .count_by_article_id(article.id)
        .await?;

    assert_eq!(count, 3);

    Ok(())
}
