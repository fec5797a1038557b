use super::*;

/// Tests that private settings are never returned.
///
/// Expected: Ok with public settings ordered by key
#[tokio::test]
async fn excludes_private_settings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_setting(db, "site_name", json!("Inkstand")).await?;
    factory::create_setting(db, "posts_per_page", json!(10)).await?;
    SiteSettingFactory::new(db, "smtp_password", json!("hunter2"))
        .private()
        .build()
        .await?;

    let repo = SettingRepository::new(db);
    let settings = repo.get_public().await?;

    let keys: Vec<&str> = settings.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, vec!["posts_per_page", "site_name"]);
    assert!(repo.find_public_by_key("smtp_password").await?.is_none());

    Ok(())
}

/// Tests restricting public settings to one group.
#[tokio::test]
async fn filters_by_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    SiteSettingFactory::new(db, "meta_title", json!("Inkstand"))
        .group(SettingGroup::Seo)
        .build()
        .await?;
    SiteSettingFactory::new(db, "robots", json!("noindex"))
        .group(SettingGroup::Seo)
        .private()
        .build()
        .await?;
    factory::create_setting(db, "site_name", json!("Inkstand")).await?;

    let settings = SettingRepository::new(db)
        .get_public_by_group(SettingGroup::Seo)
        .await?;

    let keys: Vec<&str> = settings.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, vec!["meta_title"]);

    Ok(())
}
