use std::sync::Arc;

use anyhow::Context;
use axum::routing::get;
use axum::Router;
use sqlx::postgres::PgPoolOptions;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use movevan_web::cache::AppCache;
use movevan_web::quoting::{self, QuoteEngine, Tariff};
use movevan_web::{routes, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("movevan_web=info,tower_http=info")),
        )
        .init();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let db = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await
        .context("failed to connect to database")?;

    sqlx::migrate!("./migrations")
        .run(&db)
        .await
        .context("failed to run migrations")?;

    let tariff = load_tariff()?;
    tracing::info!(version = %tariff.version, "tariff loaded");

    let state = AppState {
        db,
        cache: AppCache::new(),
        engine: Arc::new(QuoteEngine::new(tariff)),
    };

    let app = Router::new()
        .merge(quoting::router())
        .route("/health", get(routes::health::health))
        .route("/api/admin/bookings", get(routes::admin::list_bookings))
        .route(
            "/api/admin/bookings/:reference",
            get(routes::admin::get_booking),
        )
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state);

    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

/// Load the tariff: an operations override from `TARIFF_PATH` when set,
/// otherwise the bundled published table.
fn load_tariff() -> anyhow::Result<Tariff> {
    match std::env::var("TARIFF_PATH") {
        Ok(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read tariff file {}", path))?;
            let tariff: Tariff = serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse tariff file {}", path))?;
            Ok(tariff)
        }
        Err(_) => Ok(Tariff::published()),
    }
}
