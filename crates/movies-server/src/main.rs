//! Binary entrypoint for the movies HTTP server.
//!
//! Reads configuration from environment variables:
//! - `MOVIES_PORT`: Server listen port (default: "8000")

use movies_server::router::build_router;
use movies_server::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let port = std::env::var("MOVIES_PORT")
        .unwrap_or_else(|_| "8000".to_string());

    let state = AppState::seeded();
    let app = build_router(state);

    let addr = format!("0.0.0.0:{}", port);
    tracing::info!("movies server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
