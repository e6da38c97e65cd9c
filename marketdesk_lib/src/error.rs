//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping upstream API errors and
/// adding validation, bulk-file parsing, and session storage failures.
#[derive(Debug)]
pub enum MarketdeskError {
    /// An error from the underlying API client.
    Api(marketdesk_api::Error),
    /// Client-side form validation failed; the message is shown inline.
    Validation(String),
    /// The bulk upload products file was not valid.
    BulkParse(String),
    /// Reading or writing the persisted session failed.
    Session(String),
}

impl fmt::Display for MarketdeskError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Validation(msg) => write!(f, "{}", msg),
            Self::BulkParse(msg) => write!(f, "{}", msg),
            Self::Session(msg) => write!(f, "Session error: {}", msg),
        }
    }
}

impl std::error::Error for MarketdeskError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<marketdesk_api::Error> for MarketdeskError {
    fn from(e: marketdesk_api::Error) -> Self {
        Self::Api(e)
    }
}
