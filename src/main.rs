use std::sync::Arc;

use movies_api::{
    api::{create_router, AppState},
    config::{Config, StoreKind},
    db::{create_pool, InMemoryMovieStore, MovieStore, PgMovieStore},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movies_api=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    let store = build_store(&config).await?;
    tracing::info!(store = store.name(), "Movie store ready");

    let app = create_router(AppState::new(store));

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn build_store(config: &Config) -> anyhow::Result<Arc<dyn MovieStore>> {
    match config.movie_store {
        StoreKind::Postgres => {
            let pool = create_pool(&config.database_url, config.database_max_connections).await?;
            let store = PgMovieStore::new(pool);
            store.migrate().await?;
            Ok(Arc::new(store))
        }
        StoreKind::Memory => {
            let store = InMemoryMovieStore::load(&config.movies_data_path).await?;
            Ok(Arc::new(store))
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
