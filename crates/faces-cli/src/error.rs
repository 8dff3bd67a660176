//! Error types for faces-cli

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors that can occur in CLI operations
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Error loading the deployment descriptor
    #[error(transparent)]
    Config(#[from] faces_config::Error),

    /// Error resolving the initializer
    #[error(transparent)]
    Init(#[from] faces_init::Error),

    /// JSON output error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
