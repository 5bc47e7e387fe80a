#![recursion_limit = "256"]

mod config;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::inbox::MemoryInbox;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env();
    let inbox = MemoryInbox::new(config.inbox_capacity);
    tracing::info!(capacity = config.inbox_capacity, "contact inbox initialized");

    let state = state::AppState::new(Arc::new(inbox));
    let app = routes::leptos_app(state)?;

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(%addr, "contact site listening");
    axum::serve(listener, app).await?;
    Ok(())
}
