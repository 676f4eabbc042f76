use std::path::PathBuf;

/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while obtaining or decoding journey content.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No document exists for the requested journey.
    #[error("journey not found: \"{0}\"")]
    JourneyNotFound(String),

    /// The toolkit catalog could not be obtained.
    #[error("toolkit catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// A document was found but could not be decoded.
    #[error("malformed {what}: {source}")]
    Malformed {
        /// Which document failed to decode.
        what: String,
        /// The underlying decode error.
        #[source]
        source: serde_json::Error,
    },

    /// A content file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}
