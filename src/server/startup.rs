use std::sync::Arc;

use axum::{
    extract::OriginalUri,
    http::{HeaderValue, Method},
    Router,
};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::Config,
    error::{config::ConfigError, internal::InternalError, AppError},
    router::router,
    state::AppState,
};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema is up to date before any request is
/// served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the CORS layer allowing read-only requests from the frontend origin.
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let origin = config
        .frontend_url
        .parse::<HeaderValue>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: "FRONTEND_URL".to_string(),
            value: config.frontend_url.clone(),
            reason: e.to_string(),
        })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS]))
}

async fn route_not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::NotFound(format!("Route {} not found", uri.path()))
}

/// Assembles routes, API docs and the middleware stack into the servable application.
///
/// Requests are rate limited per peer IP, so the app must be served with
/// `into_make_service_with_connect_info::<SocketAddr>()`.
pub fn build_app(config: &Config, state: AppState) -> Result<Router, AppError> {
    let (api, openapi) = router();

    // One request replenishes every `window / max` ms, with bursts of up to `max`.
    let period_ms = (config.rate_limit_window_ms / u64::from(config.rate_limit_max)).max(1);
    let governor_config = GovernorConfigBuilder::default()
        .per_millisecond(period_ms)
        .burst_size(config.rate_limit_max)
        .finish()
        .ok_or(InternalError::InvalidRateLimit {
            window_ms: config.rate_limit_window_ms,
            max: config.rate_limit_max,
        })?;

    Ok(api
        .merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi))
        .fallback(route_not_found)
        .with_state(state)
        .layer(GovernorLayer::new(Arc::new(governor_config)))
        .layer(CompressionLayer::new())
        .layer(cors_layer(config)?)
        .layer(TraceLayer::new_for_http()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{StatusCode, Uri},
        response::IntoResponse,
    };
    use http_body_util::BodyExt;
    use test_utils::builder::TestBuilder;

    fn config() -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            host: "127.0.0.1".to_string(),
            port: 3001,
            frontend_url: "http://localhost:5173".to_string(),
            rate_limit_window_ms: 900_000,
            rate_limit_max: 100,
        }
    }

    #[tokio::test]
    async fn unknown_route_names_the_path() {
        let response = route_not_found(OriginalUri(Uri::from_static("/api/nope?x=1")))
            .await
            .into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Route /api/nope not found");
    }

    /// Tests that the migrated schema refuses a negative like count.
    ///
    /// Expected: the insert succeeds, setting `likes` to -1 fails
    #[tokio::test]
    async fn migrated_schema_rejects_negative_likes() {
        use sea_orm::ConnectionTrait;
        use test_utils::factory;

        let db = connect_to_database(&config()).await.unwrap();

        let (_, _, article) = factory::helpers::create_article_with_dependencies(&db)
            .await
            .unwrap();
        let comment = factory::create_comment(&db, article.id).await.unwrap();
        assert_eq!(comment.likes, 0);

        let result = db
            .execute_unprepared(&format!(
                "UPDATE comment SET likes = -1 WHERE id = {}",
                comment.id
            ))
            .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn builds_app_from_default_config() {
        let test = TestBuilder::new().build().await.unwrap();
        let db = test.db.as_ref().unwrap().clone();

        assert!(build_app(&config(), AppState::new(db)).is_ok());
    }

    #[test]
    fn rejects_unusable_frontend_origin() {
        let config = Config {
            frontend_url: "http://bad\norigin".to_string(),
            ..config()
        };

        assert!(matches!(cors_layer(&config), Err(AppError::ConfigErr(_))));
    }
}
