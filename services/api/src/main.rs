use std::sync::Arc;

mod error;
mod routes;
mod store;

use routes::AppState;
use store::MemoryStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_target(false)
        .init();

    let store = Arc::new(MemoryStore::default());
    let app = routes::router(AppState::new(store));

    let addr = std::env::var("BIND_ADDR").unwrap_or("0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
