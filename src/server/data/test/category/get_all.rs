use super::*;

/// Tests display ordering by sort order, then name.
///
/// Expected: Ok with categories ordered [sort 0 "Alpha", sort 0 "Beta", sort 1 "Aardvark"]
#[tokio::test]
async fn orders_by_sort_order_then_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    CategoryFactory::new(db)
        .name("Aardvark")
        .sort_order(1)
        .build()
        .await?;
    CategoryFactory::new(db).name("Beta").build().await?;
    CategoryFactory::new(db).name("Alpha").build().await?;

    let categories = CategoryRepository::new(db).get_all().await?;

    let names: Vec<&str> = categories
        .iter()
        .map(|c| c.category.name.as_str())
        .collect();
    assert_eq!(names, vec!["Alpha", "Beta", "Aardvark"]);

    Ok(())
}

/// Tests that article counts include only published articles.
///
/// Expected: Ok with counts 2 and 0
#[tokio::test]
async fn counts_published_articles_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;
    let busy = CategoryFactory::new(db).name("Busy").build().await?;
    CategoryFactory::new(db).name("Empty").build().await?;

    factory::create_article(db, busy.id, author.id).await?;
    factory::create_article(db, busy.id, author.id).await?;
    ArticleFactory::new(db, busy.id, author.id)
        .draft()
        .build()
        .await?;

    let categories = CategoryRepository::new(db).get_all().await?;

    let counts: Vec<(&str, u64)> = categories
        .iter()
        .map(|c| (c.category.name.as_str(), c.article_count))
        .collect();
    assert_eq!(counts, vec![("Busy", 2), ("Empty", 0)]);

    Ok(())
}
