use std::net::SocketAddr;
use std::sync::Arc;

use hrms_api::config::Settings;
use hrms_api::db::create_pool;
use hrms_api::logging;
use hrms_api::routes::{self, AppState};

use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration; a missing variable aborts startup here.
    let settings = Settings::from_env()?;

    logging::init(&settings, None);

    let app_name = settings.app_name.clone();
    tracing::info!("Starting {} ({})", app_name, settings.environment);

    tracing::info!("Connecting to database...");
    let pool = create_pool(&settings.database_url()).await?;
    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database connection established");

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_headers(Any)
        .allow_methods(Any);

    let addr: SocketAddr = settings.server_addr().parse()?;

    let state = AppState {
        settings: Arc::new(settings),
        pool,
    };

    let app = routes::router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down {}", app_name);
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
