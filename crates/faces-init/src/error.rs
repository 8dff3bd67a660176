//! Error types for faces-init

/// Error raised by an initializer constructor.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for faces-init operations
pub type Result<T> = std::result::Result<T, Error>;

/// Initializer resolution and startup failures.
///
/// The lookup variants are fatal to application startup. Default
/// selection never produces one.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Could not find initializer type: {name}")]
    NotFound { name: String },

    #[error("Type {name} does not implement FacesInitializer (implements {implements})")]
    WrongCapability { name: String, implements: String },

    #[error("Failed to instantiate initializer {name}: {source}")]
    InstantiationFailed {
        name: String,
        #[source]
        source: BoxError,
    },

    /// Returned by [`FacesInitializer::init_faces`](crate::FacesInitializer::init_faces)
    /// implementations that cannot bring their runtime up.
    #[error("Initializer {name} failed to start: {message}")]
    InitFailed { name: String, message: String },
}

impl Error {
    /// Name of the initializer type the error refers to.
    pub fn type_name(&self) -> &str {
        match self {
            Error::NotFound { name }
            | Error::WrongCapability { name, .. }
            | Error::InstantiationFailed { name, .. }
            | Error::InitFailed { name, .. } => name,
        }
    }
}
