use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong between a fetch call and a normalized
/// record. All variants are flattened into `FetchOutcome::Failure` with
/// their display text at the fetch boundary; nothing here crosses it.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced an HTTP response.
    #[error("network error")]
    Network(#[source] reqwest::Error),

    /// The provider answered with a non-success status. `message` is the
    /// provider's own error message when the body carried one, otherwise a
    /// generic could-not-find line.
    #[error("{message}")]
    HttpStatus { status: StatusCode, message: String },

    /// The body parsed as JSON but a required field was absent or of the
    /// wrong shape.
    #[error("malformed weather payload: {0}")]
    MalformedPayload(String),
}
