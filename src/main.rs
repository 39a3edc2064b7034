use eventide::api;
use eventide::config::Config;
use eventide::middleware::request_log_middleware;
use eventide::repositories::{EventStore, InMemoryEventStore, PgEventStore};

use axum::middleware;
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "eventide=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Eventide v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::from_env()?;

    let store: Arc<dyn EventStore> = match &config.database_url {
        Some(database_url) => {
            info!("Connecting to database...");
            let pool = PgPoolOptions::new()
                .max_connections(config.max_connections)
                .connect(database_url)
                .await?;
            info!("Database connected");
            Arc::new(PgEventStore::new(pool))
        }
        None => {
            warn!("DATABASE_URL not set, events are kept in memory only");
            Arc::new(InMemoryEventStore::new())
        }
    };

    let app = api::build_router(store)
        .layer(middleware::from_fn(request_log_middleware))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.addr();
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
