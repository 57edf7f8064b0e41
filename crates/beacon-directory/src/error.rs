use thiserror::Error;

/// Errors returned while fetching the school directory.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    /// The response body was not a directory document.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid directory URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
}
