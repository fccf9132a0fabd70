#![recursion_limit = "256"]

mod config;
mod error;
mod routes;

use config::HostConfig;
use error::HostError;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "glasseson host failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), HostError> {
    let config = HostConfig::from_env()?;
    let app = routes::app()?;
    let listener = tokio::net::TcpListener::bind(config.bind_addr())
        .await
        .map_err(HostError::Bind)?;

    tracing::info!(port = config.port, "glasseson listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
