use super::*;

/// Tests that folders are distinct, sorted and exclude unfiled media.
///
/// Expected: Ok(["avatars", "banners"])
#[tokio::test]
async fn lists_distinct_sorted_folders() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    MediaFactory::new(db).folder("banners").build().await?;
    MediaFactory::new(db).folder("avatars").build().await?;
    MediaFactory::new(db).folder("banners").build().await?;
    factory::create_media(db).await?;

    let folders = MediaRepository::new(db).get_folders().await?;

    assert_eq!(folders, vec!["avatars".to_string(), "banners".to_string()]);

    Ok(())
}
