use super::*;
use entity::sea_orm_active_enums::SettingGroup;
use serde_json::json;
use test_utils::factory::{
    navigation::NavigationItemFactory,
    page::{PageFactory, PageGroupFactory},
    site_setting::SiteSettingFactory,
};

#[tokio::test]
async fn health_reports_running() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = get(db, "/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "API is running");

    Ok(())
}

/// Tests page content decoding and the page group endpoint.
#[tokio::test]
async fn serves_pages_and_groups() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let group = PageGroupFactory::new(db).slug("legal").build().await?;
    PageFactory::new(db)
        .slug("privacy")
        .group(group.id)
        .content(json!([
            { "type": "heading", "data": { "text": "Privacy", "level": 1 } },
            { "type": "divider", "data": {} }
        ]))
        .seo(json!({ "noIndex": true }))
        .build()
        .await?;

    let (status, body) = get(db, "/api/pages/privacy").await;

    assert_eq!(status, StatusCode::OK);
    let data = &body["data"];
    assert_eq!(data["content"][0]["type"], "heading");
    assert_eq!(data["content"][1]["type"], "divider");
    assert_eq!(data["group"]["slug"], "legal");
    assert_eq!(data["seo"]["noIndex"], true);

    let (status, body) = get(db, "/api/page-groups/legal").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["group"]["slug"], "legal");
    assert_eq!(body["data"]["pages"][0]["slug"], "privacy");

    let (status, body) = get(db, "/api/pages/group/unknown").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!([]));

    let (status, body) = get(db, "/api/page-groups/unknown").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Page group not found");

    Ok(())
}

/// Tests media ID validation.
///
/// Expected: 400 for a non-numeric ID, 404 for an unknown numeric ID
#[tokio::test]
async fn validates_media_id() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (status, body) = get(db, "/api/media/abc").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid ID format");

    let (status, body) = get(db, "/api/media/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Media not found");

    Ok(())
}

/// Tests that navigation items are nested by parent and ordered at each level.
#[tokio::test]
async fn serves_navigation_tree() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let menu = factory::create_navigation(db).await?;
    let about = PageFactory::new(db).slug("about").build().await?;
    let docs = NavigationItemFactory::new(db, menu.id)
        .label("Docs")
        .sort_order(1)
        .build()
        .await?;
    let home = NavigationItemFactory::new(db, menu.id)
        .label("Home")
        .sort_order(0)
        .build()
        .await?;
    let guide = NavigationItemFactory::new(db, menu.id)
        .parent(docs.id)
        .sort_order(2)
        .new_window()
        .build()
        .await?;
    let about_item = NavigationItemFactory::new(db, menu.id)
        .parent(docs.id)
        .page(about.id)
        .sort_order(1)
        .build()
        .await?;

    let (status, body) = get(db, &format!("/api/navigation/{}", menu.slug)).await;

    assert_eq!(status, StatusCode::OK);
    let items = &body["data"]["items"];
    assert_eq!(ids(items), vec![home.id as i64, docs.id as i64]);
    assert_eq!(
        ids(&items[1]["children"]),
        vec![about_item.id as i64, guide.id as i64]
    );
    assert_eq!(items[1]["children"][0]["page"]["slug"], "about");
    assert_eq!(items[1]["children"][1]["target"], "_blank");

    let (status, body) = get(db, "/api/navigation/nonexistent").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Navigation not found");

    Ok(())
}

/// Tests the settings object, group filtering and unknown groups.
#[tokio::test]
async fn serves_public_settings() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_content_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_setting(db, "site_name", json!("Inkstand")).await?;
    SiteSettingFactory::new(db, "meta_title", json!("Inkstand Blog"))
        .group(SettingGroup::Seo)
        .build()
        .await?;
    SiteSettingFactory::new(db, "api_key", json!("secret"))
        .private()
        .build()
        .await?;

    let (status, body) = get(db, "/api/settings/object").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"],
        json!({ "meta_title": "Inkstand Blog", "site_name": "Inkstand" })
    );

    let (status, body) = get(db, "/api/settings/group/seo").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"][0]["key"], "meta_title");
    assert_eq!(body["data"][0]["type"], "string");
    assert!(body["data"][0].get("isPublic").is_none());

    let (status, body) = get(db, "/api/settings/group/marketing").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Setting group not found");

    let (status, body) = get(db, "/api/settings/api_key").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Setting not found");

    Ok(())
}
