//! # Recipe API Client
//!
//! The request gateway for the recipe catalog at recipe-api.com: key
//! validation, URL construction, one authenticated GET per call and
//! classification of every failure into an [`ApiError`].
//!
//! ## Modules
//!
//! - [`auth`] - API key validation and the header it travels in
//! - [`client`] - The HTTP gateway and its typed endpoint helpers
//! - [`error`] - Classification of HTTP and transport failures
//! - [`types`] - Response envelopes and payload types
//!
//! ## Quick Start
//!
//! ```no_run
//! use recipe_api_cli::client::{ApiKey, RecipeApiClient, RecipeQuery};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let key = ApiKey::parse(std::env::var("RECIPE_API_KEY").ok().as_deref())?;
//! let client = RecipeApiClient::new("https://recipe-api.com", key);
//!
//! let query = RecipeQuery { q: Some("pasta".to_string()), ..Default::default() };
//! let page = client.recipes(&query).await?;
//! println!("Found {} recipes", page.meta.total);
//! # Ok(())
//! # }
//! ```

pub mod auth;
#[allow(clippy::module_inception)]
pub mod client;
pub mod error;
pub mod types;

pub use auth::ApiKey;
pub use client::{IngredientQuery, QueryParams, RecipeApiClient, RecipeQuery, DEFAULT_BASE_URL};
pub use error::ApiError;
pub use types::*;
