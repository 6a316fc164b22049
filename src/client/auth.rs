//! API key handling for the Recipe API.
//!
//! The catalog authenticates every request with a static key sent in the
//! `X-API-Key` header. Keys are issued from the recipe-api.com dashboard and
//! always carry the `rapi_` prefix, so a key without it is rejected before
//! any request is made.

use std::fmt;

use crate::client::error::ApiError;

/// Prefix every issued key starts with.
pub const API_KEY_PREFIX: &str = "rapi_";

/// Header the key is sent in.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// A validated Recipe API key.
///
/// Construction goes through [`ApiKey::parse`], so holding an `ApiKey` means
/// the credential was present and well-formed.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Validates a raw credential as read from the environment.
    ///
    /// An unset or blank value is [`ApiError::MissingApiKey`]; a value
    /// without [`API_KEY_PREFIX`] is [`ApiError::InvalidApiKey`].
    pub fn parse(raw: Option<&str>) -> Result<Self, ApiError> {
        let key = match raw {
            Some(key) if !key.is_empty() => key,
            _ => {
                tracing::debug!("No API key configured");
                return Err(ApiError::MissingApiKey);
            }
        };

        if !key.starts_with(API_KEY_PREFIX) {
            tracing::debug!("API key does not start with {}", API_KEY_PREFIX);
            return Err(ApiError::InvalidApiKey {
                prefix: API_KEY_PREFIX,
            });
        }

        Ok(Self(key.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// First ten characters of the key, for log lines.
    pub fn preview(&self) -> String {
        let cut: String = self.0.chars().take(10).collect();
        format!("{}...", cut)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&self.preview()).finish()
    }
}
