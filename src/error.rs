//! Unified SDK error types.

use thiserror::Error;

/// Opaque error raised by an injected collaborator (signer, CAR encoder).
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("CAR encoding failed: {0}")]
    Encoding(#[source] BoxError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// HTTP-layer errors.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("request error: [{status}]: {status_text}")]
    Request { status: u16, status_text: String },

    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

/// Authentication errors.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Signing failed: {0}")]
    Signing(#[source] BoxError),
}
