//! Error type shared by every facade call.

use thiserror::Error;

/// Failure of a REST or GraphQL call.
///
/// The facade never interprets these; callers decide what to show the user.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, DNS, ...).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}: {}", detail.as_deref().unwrap_or("no detail"))]
    Status { status: u16, detail: Option<String> },

    /// The GraphQL response carried an `errors` array.
    #[error("graphql error: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    /// The GraphQL response had no value for the requested field.
    #[error("response is missing `{0}`")]
    MissingData(&'static str),

    /// The response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// HTTP status of a [`ApiError::Status`] failure.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
