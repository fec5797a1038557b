use super::*;

/// Tests that drafts never appear in listings.
///
/// Expected: Ok with only the published article counted and returned
#[tokio::test]
async fn excludes_draft_articles() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;
    let category = factory::create_category(db).await?;
    let published = factory::create_article(db, category.id, author.id).await?;
    ArticleFactory::new(db, category.id, author.id)
        .draft()
        .build()
        .await?;

    let repo = ArticleRepository::new(db);
    let (articles, total) = repo
        .get_paginated(&ArticleFilter::default(), ArticleSort::Latest, 1, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].article.id, published.id);

    Ok(())
}

/// Tests page slicing and total count.
///
/// Creates 5 articles published a minute apart and requests page 2 with limit 2.
///
/// Expected: Ok with the 3rd and 4th newest articles and total 5
#[tokio::test]
async fn returns_requested_page_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;
    let category = factory::create_category(db).await?;
    let mut ids = Vec::new();
    for minute in 0..5 {
        let article = ArticleFactory::new(db, category.id, author.id)
            .published_at(minutes_after(minute))
            .build()
            .await?;
        ids.push(article.id);
    }

    let repo = ArticleRepository::new(db);
    let (articles, total) = repo
        .get_paginated(&ArticleFilter::default(), ArticleSort::Latest, 2, 2)
        .await?;

    assert_eq!(total, 5);
    let returned: Vec<i32> = articles.iter().map(|a| a.article.id).collect();
    assert_eq!(returned, vec![ids[2], ids[1]]);

    Ok(())
}

/// Tests the oldest-first and most-viewed orderings.
#[tokio::test]
async fn applies_sort_order() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;
    let category = factory::create_category(db).await?;
    let early = ArticleFactory::new(db, category.id, author.id)
        .published_at(minutes_after(0))
        .views(10)
        .build()
        .await?;
    let late = ArticleFactory::new(db, category.id, author.id)
        .published_at(minutes_after(30))
        .views(500)
        .build()
        .await?;
    let middle = ArticleFactory::new(db, category.id, author.id)
        .published_at(minutes_after(10))
        .views(10)
        .build()
        .await?;

    let repo = ArticleRepository::new(db);

    let (oldest, _) = repo
        .get_paginated(&ArticleFilter::default(), ArticleSort::Oldest, 1, 10)
        .await?;
    let oldest: Vec<i32> = oldest.iter().map(|a| a.article.id).collect();
    assert_eq!(oldest, vec![early.id, middle.id, late.id]);

    let (popular, _) = repo
        .get_paginated(&ArticleFilter::default(), ArticleSort::Popular, 1, 10)
        .await?;
    let popular: Vec<i32> = popular.iter().map(|a| a.article.id).collect();
    // Equal views fall back to most recently published
    assert_eq!(popular, vec![late.id, middle.id, early.id]);

    Ok(())
}

/// Tests filtering by category, tag and featured flag together.
///
/// Expected: Ok with only the article matching all three restrictions
#[tokio::test]
async fn combines_category_tag_and_featured_filters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;
    let rust = factory::create_category(db).await?;
    let other = factory::create_category(db).await?;
    let tag = factory::create_tag(db).await?;

    let matching = ArticleFactory::new(db, rust.id, author.id)
        .featured(true)
        .build()
        .await?;
    factory::attach_tag(db, matching.id, tag.id).await?;

    let not_featured = factory::create_article(db, rust.id, author.id).await?;
    factory::attach_tag(db, not_featured.id, tag.id).await?;

    let untagged = ArticleFactory::new(db, rust.id, author.id)
        .featured(true)
        .build()
        .await?;

    let wrong_category = ArticleFactory::new(db, other.id, author.id)
        .featured(true)
        .build()
        .await?;
    factory::attach_tag(db, wrong_category.id, tag.id).await?;

    let filter = ArticleFilter {
        category_id: Some(rust.id),
        tag_id: Some(tag.id),
        featured: Some(true),
        ..Default::default()
    };
    let (articles, total) = ArticleRepository::new(db)
        .get_paginated(&filter, ArticleSort::Latest, 1, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(articles[0].article.id, matching.id);
    assert_ne!(articles[0].article.id, untagged.id);

    Ok(())
}

/// Tests case-insensitive substring search across title, excerpt and content.
///
/// Expected: Ok with the three articles mentioning "ownership" in any field
#[tokio::test]
async fn searches_title_excerpt_and_content() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;
    let category = factory::create_category(db).await?;
    let by_title = ArticleFactory::new(db, category.id, author.id)
        .title("Understanding OWNERSHIP")
        .build()
        .await?;
    let by_excerpt = ArticleFactory::new(db, category.id, author.id)
        .excerpt("A tour of ownership and borrowing")
        .build()
        .await?;
    let by_content = ArticleFactory::new(db, category.id, author.id)
        .content("<p>Ownership rules apply here</p>")
        .build()
        .await?;
    factory::create_article(db, category.id, author.id).await?;

    let filter = ArticleFilter {
        search: Some("ownership".to_string()),
        ..Default::default()
    };
    let (articles, total) = ArticleRepository::new(db)
        .get_paginated(&filter, ArticleSort::Latest, 1, 10)
        .await?;

    assert_eq!(total, 3);
    let mut ids: Vec<i32> = articles.iter().map(|a| a.article.id).collect();
    ids.sort();
    assert_eq!(ids, vec![by_title.id, by_excerpt.id, by_content.id]);

    Ok(())
}

/// Tests that LIKE wildcards in the search term match literally.
///
/// Expected: Ok with only the title containing a literal "100%"
#[tokio::test]
async fn search_treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let author = factory::create_author(db).await?;
    let category = factory::create_category(db).await?;
    let literal = ArticleFactory::new(db, category.id, author.id)
        .title("100% safe Rust")
        .build()
        .await?;
    ArticleFactory::new(db, category.id, author.id)
        .title("1000 lines of unsafe")
        .build()
        .await?;

    let filter = ArticleFilter {
        search: Some("100%".to_string()),
        ..Default::default()
    };
    let (articles, total) = ArticleRepository::new(db)
        .get_paginated(&filter, ArticleSort::Latest, 1, 10)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(articles[0].article.id, literal.id);

    Ok(())
}
