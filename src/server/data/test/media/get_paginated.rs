use super::*;

/// Tests newest-first ordering with a page size smaller than the total.
///
/// Expected: Ok with the two newest items and total 3
#[tokio::test]
async fn returns_newest_media_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let oldest = MediaFactory::new(db)
        .created_at(minutes_after(0))
        .build()
        .await?;
    let newest = MediaFactory::new(db)
        .created_at(minutes_after(20))
        .build()
        .await?;
    let middle = MediaFactory::new(db)
        .created_at(minutes_after(10))
        .build()
        .await?;

    let (media, total) = MediaRepository::new(db).get_paginated(None, 1, 2).await?;

    assert_eq!(total, 3);
    let ids: Vec<i32> = media.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![newest.id, middle.id]);
    assert!(!ids.contains(&oldest.id));

    Ok(())
}

/// Tests restricting the listing to one folder.
#[tokio::test]
async fn filters_by_folder() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let banner = MediaFactory::new(db).folder("banners").build().await?;
    MediaFactory::new(db).folder("avatars").build().await?;
    factory::create_media(db).await?;

    let (media, total) = MediaRepository::new(db)
        .get_paginated(Some("banners"), 1, 20)
        .await?;

    assert_eq!(total, 1);
    assert_eq!(media[0].id, banner.id);

    Ok(())
}
