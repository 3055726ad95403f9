use thiserror::Error;

/// Errors surfaced by pagination detection and its configuration
#[derive(Error, Debug)]
pub enum Error {
    /// The reference URL could not be parsed as an absolute URL
    #[error("Invalid reference URL '{url}': {source}")]
    InvalidReferenceUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Invalid detector configuration: {message}")]
    InvalidConfig { message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
