use super::*;

/// Tests that the most viewed articles come first and the limit is applied.
///
/// Expected: Ok with the two most viewed articles in descending view order
#[tokio::test]
async fn returns_most_viewed_up_to_limit() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;
    let category = factory::create_category(db).await?;
    let mut by_views = Vec::new();
    for views in [30, 900, 5, 120] {
        let article = ArticleFactory::new(db, category.id, author.id)
            .views(views)
            .build()
            .await?;
        by_views.push((views, article.id));
    }

    let articles = ArticleRepository::new(db)
        .get_top(&ArticleFilter::default(), ArticleSort::Trending, 2)
        .await?;

    let ids: Vec<i32> = articles.iter().map(|a| a.article.id).collect();
    assert_eq!(ids, vec![by_views[1].1, by_views[3].1]);

    Ok(())
}

/// Tests that relations are loaded for each returned article.
///
/// Expected: Ok with category, author and name-ordered tags attached
#[tokio::test]
async fn loads_category_author_and_sorted_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;
    let category = factory::create_category(db).await?;
    let zeta = TagFactory::new(db).name("Zeta").build().await?;
    let alpha = TagFactory::new(db).name("Alpha").build().await?;
    let article = factory::create_article(db, category.id, author.id).await?;
    factory::attach_tag(db, article.id, zeta.id).await?;
    factory::attach_tag(db, article.id, alpha.id).await?;

    let articles = ArticleRepository::new(db)
        .get_top(&ArticleFilter::default(), ArticleSort::Latest, 5)
        .await?;

    assert_eq!(articles.len(), 1);
    let result = &articles[0];
    assert_eq!(result.category.as_ref().map(|c| c.id), Some(category.id));
    assert_eq!(result.author.as_ref().map(|a| a.id), Some(author.id));
    let tag_names: Vec<&str> = result.tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(tag_names, vec!["Alpha", "Zeta"]);

    Ok(())
}
