use thiserror::Error;

/// Errors raised while decoding, encoding or configuring songs.
#[derive(Error, Debug)]
pub enum Error {
    /// A required key is absent.
    #[error("Missing required song field `{0}`")]
    MissingField(&'static str),

    /// A key is present but its value is not a JSON string.
    #[error("Song field `{field}` must be a string, found {found}")]
    TypeMismatch {
        /// Offending key.
        field: &'static str,
        /// JSON type that was found instead.
        found: &'static str,
    },

    /// The payload is not an object (or array of objects).
    #[error("Unexpected song payload, expected {0}")]
    UnexpectedShape(&'static str),

    /// A record of a batch failed to decode.
    #[error("Invalid song record at index {index}: {source}")]
    InvalidRecord {
        /// Zero-based position in the array.
        index: usize,
        /// Why the record was rejected.
        #[source]
        source: Box<Error>,
    },

    /// Malformed JSON text, or an encoding failure.
    #[error("Failed to parse song data, error: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Reading input failed.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Invalid configuration from the environment.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

impl From<std::env::VarError> for Error {
    fn from(err: std::env::VarError) -> Self {
        Error::ConfigurationError(err.to_string())
    }
}

/// Result alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
