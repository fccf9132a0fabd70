//! Startup and serve failures for the host binary.

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("invalid PORT value {value:?}")]
    InvalidPort { value: String },
    #[error("leptos configuration: {0}")]
    LeptosConfig(String),
    #[error("failed to bind listener: {0}")]
    Bind(#[source] std::io::Error),
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
