use thiserror::Error;

/// Failures surfaced by the record manager.
///
/// `Network` and `Provider` display their message verbatim so the
/// presentation layer can show it to the user as is.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Configuration incomplete: {0}")]
    ConfigurationInvalid(String),

    /// Transport failure or a body that is not a valid provider envelope.
    #[error("{0}")]
    Network(String),

    /// The provider answered with `success: false`.
    #[error("{0}")]
    Provider(String),

    #[error("{0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<reqwest::Error> for Error {
    fn from(error: reqwest::Error) -> Self {
        Error::Network(error.to_string())
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
