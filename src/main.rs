//! Server binary: env config, tracing, database bootstrap, router, serve.

use axum::Router;
use portfolio_api::{
    api_routes, apply_migrations, common_routes, connect_pool, ensure_database_exists, AppState,
};
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("portfolio_api=info".parse()?),
        )
        .init();

    let database_url = std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "postgres://localhost/portfolio".into());
    ensure_database_exists(&database_url).await?;
    let pool = connect_pool(&database_url).await?;
    apply_migrations(&pool).await?;

    let state = AppState { pool };
    let app = Router::new()
        .merge(common_routes(state.clone()))
        .merge(api_routes(state))
        .layer(RequestBodyLimitLayer::new(2 * 1024 * 1024));

    let port = std::env::var("SERVER_PORT").unwrap_or_else(|_| "2022".into());
    let listener = TcpListener::bind(format!("0.0.0.0:{}", port)).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
