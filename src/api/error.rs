use thiserror::Error;

/// Failure classes of the remote calls. None of them are recovered from, they exist so that
/// callers and tests can tell a dead network from a bad payload.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("{url} responded with {status}: {body}")]
    Status {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Malformed response from {url}: {source}")]
    Malformed {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Paste {id} has no files")]
    EmptyPaste { id: String },
}

pub type Result<T> = std::result::Result<T, ApiError>;
