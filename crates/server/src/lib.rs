#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod page;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::ServerError;
pub use routes::router;
pub use state::AppState;

/// Bind `config.bind` and serve the quiz until the process stops.
///
/// # Errors
///
/// Returns `ServerError::Io` if the address cannot be bound or the listener fails.
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let state = AppState::from_config(&config);
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    log::info!(
        "quiz server listening on http://{} (questions from {})",
        listener.local_addr()?,
        config.questions_dir.display()
    );
    axum::serve(listener, router(state)).await?;
    Ok(())
}
