use super::*;

/// Tests that tags are listed alphabetically.
#[tokio::test]
async fn lists_tags_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    TagFactory::new(db).name("Tokio").build().await?;
    TagFactory::new(db).name("Async").build().await?;
    TagFactory::new(db).name("Macros").build().await?;

    let tags = TagRepository::new(db).get_all().await?;

    let names: Vec<&str> = tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Async", "Macros", "Tokio"]);

    Ok(())
}

/// Tests that authors are listed alphabetically and found by slug.
#[tokio::test]
async fn lists_authors_by_name_and_finds_by_slug() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_article_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    AuthorFactory::new(db).name("Rin").build().await?;
    let ada = AuthorFactory::new(db)
        .name("Ada")
        .slug("ada")
        .build()
        .await?;

    let repo = AuthorRepository::new(db);
    let authors = repo.get_all().await?;

    let names: Vec<&str> = authors.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Ada", "Rin"]);
    assert_eq!(repo.find_by_slug("ada").await?.map(|a| a.id), Some(ada.id));
    assert!(repo.find_by_slug("nobody").await?.is_none());

    Ok(())
}
