//! folio-admin entry point.
//!
//! Bootstraps the server:
//! 1. Load configuration from environment
//! 2. Build router with the admin API, static files, session gate and
//!    security headers
//! 3. Start Axum server

use folio_admin::{app::build_app, config::Config};

#[tokio::main]
async fn main() {
    // Initialize tracing with env filter support (RUST_LOG)
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env().expect("Failed to load config");
    let bind_addr = config.bind_addr;
    tracing::info!(
        production = config.production,
        static_dir = %config.static_dir.display(),
        "Starting folio-admin on {}",
        bind_addr
    );

    let app = build_app(config).expect("Failed to build security headers");

    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .expect("Failed to bind");
    tracing::info!("Listening on {}", bind_addr);

    axum::serve(listener, app).await.expect("Server error");
}
