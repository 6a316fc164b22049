//! Runtime configuration, read from the environment once per invocation.

use std::env;

use crate::client::DEFAULT_BASE_URL;

pub const API_KEY_VAR: &str = "RECIPE_API_KEY";
pub const BASE_URL_VAR: &str = "RECIPE_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    /// Raw credential; validated by the gateway layer, not here.
    pub api_key: Option<String>,
}

impl Config {
    /// Loads `.env` from the working directory if present, then reads
    /// `RECIPE_API_KEY` and `RECIPE_API_BASE_URL`.
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!("Ignoring unreadable .env file: {}", e),
        }

        let base_url = env::var(BASE_URL_VAR).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let api_key = env::var(API_KEY_VAR).ok();

        Self { base_url, api_key }
    }

    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
        }
    }
}
