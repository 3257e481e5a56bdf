use reqwest::StatusCode;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the client and mapping layer.
///
/// `Transport`, `Status` and `Decode` are all upstream/transport failures;
/// `InvalidInput` is always raised before any request is sent, and
/// `MissingData` comes from the mapping layer alone.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{0} data is required")]
    MissingData(&'static str),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{operation}: unexpected status {status}: {body}")]
    Status {
        operation: &'static str,
        status: StatusCode,
        body: String,
    },

    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}
