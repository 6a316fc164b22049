//! Error classification for Recipe API calls.
//!
//! Every outcome the gateway can produce that is not a decoded body ends up
//! as an [`ApiError`]. Classification lives here and is free of I/O; turning
//! an error into operator guidance is done by [`crate::display::errors`].

use thiserror::Error as ThisError;

/// Number of response-body characters kept on a generic API error.
pub const ERROR_BODY_LIMIT: usize = 500;

/// Machine-readable code attached to a 404 classification.
pub const NOT_FOUND_CODE: &str = "NOT_FOUND";

#[derive(Debug, ThisError)]
pub enum ApiError {
    #[error("Missing API key: RECIPE_API_KEY is not set")]
    MissingApiKey,

    #[error("Invalid API key format: keys must start with \"{prefix}\"")]
    InvalidApiKey { prefix: &'static str },

    #[error("Authentication failed (401)")]
    Unauthorized,

    #[error("Access denied (403)")]
    Forbidden,

    #[error("Resource not found ({status} {code})")]
    NotFound { status: u16, code: &'static str },

    #[error("Rate limit exceeded (429)")]
    RateLimited,

    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("Network error: {message}")]
    Network { message: String },

    #[error("Unexpected response format: {message}")]
    Decode { message: String },
}

impl ApiError {
    /// Classifies a non-2xx response.
    ///
    /// The body is only kept for the generic case, cut to
    /// [`ERROR_BODY_LIMIT`] characters.
    pub fn from_status(status: u16, body: &str) -> Self {
        match status {
            401 => ApiError::Unauthorized,
            403 => ApiError::Forbidden,
            404 => ApiError::NotFound {
                status,
                code: NOT_FOUND_CODE,
            },
            429 => ApiError::RateLimited,
            _ => ApiError::Api {
                status,
                body: body.chars().take(ERROR_BODY_LIMIT).collect(),
            },
        }
    }

    /// HTTP status carried by this error, if it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Forbidden => Some(403),
            ApiError::NotFound { status, .. } => Some(*status),
            ApiError::RateLimited => Some(429),
            ApiError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn code(&self) -> Option<&'static str> {
        match self {
            ApiError::NotFound { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Only a missing resource is something a caller may want to present on
    /// its own terms; everything else ends the invocation.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ApiError::NotFound { .. })
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        ApiError::Network {
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        ApiError::Decode {
            message: error.to_string(),
        }
    }
}
