//! Error types for the API client.

/// Errors that can occur when talking to the marketplace backend.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request never produced a response (network error, timeout,
    /// or a client construction failure).
    #[error("Request failed")]
    Transport,
    /// A URL could not be constructed from the configured base and path.
    #[error("Invalid request URL")]
    InvalidUrl,
    /// The backend rejected the bearer token (401/403). The session layer
    /// reacts to this by clearing the persisted session.
    #[error("Authentication required")]
    Unauthorized,
    /// A non-success status carrying the backend's human-readable message
    /// when the body parsed as the usual `{ message }` envelope.
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },
    /// The response body was not the expected JSON shape.
    #[error("Failed to decode response body")]
    Decode,
}

impl Error {
    /// The message staff-facing surfaces should show for this error.
    pub fn display_message(&self) -> String {
        match self {
            Error::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
