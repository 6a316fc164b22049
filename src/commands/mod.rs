//! One module per subcommand.
//!
//! Every command follows the same shape: print its header, issue a single
//! request through the gateway, render the payload. Failures are returned
//! untouched so `main` can render guidance and pick the exit code; the only
//! failure a command handles itself is a missing recipe in [`recipe`].

pub mod browse;
pub mod categories;
pub mod cuisines;
pub mod filter;
pub mod ingredient_categories;
pub mod ingredients;
pub mod recipe;
pub mod search;
mod listing;

use anyhow::Result;

use crate::cli::Command;
use crate::client::{ApiError, ApiKey, RecipeApiClient};
use crate::config::Config;
use crate::display::Printer;

/// Validates the configured key and builds the gateway.
///
/// Commands call this right before their request, so invocations that only
/// print usage help never require a key.
pub fn connect(config: &Config) -> Result<RecipeApiClient, ApiError> {
    let api_key = ApiKey::parse(config.api_key.as_deref())?;
    tracing::debug!("Using API key {} against {}", api_key.preview(), config.base_url);
    Ok(RecipeApiClient::new(config.base_url.as_str(), api_key))
}

pub async fn run(command: &Command, config: &Config, printer: &mut Printer<'_>) -> Result<()> {
    match command {
        Command::Categories => categories::run(config, printer).await,
        Command::Cuisines => cuisines::run(config, printer).await,
        Command::Browse(args) => browse::run(args, config, printer).await,
        Command::Search(args) => search::run(args, config, printer).await,
        Command::Filter(args) => filter::run(args, config, printer).await,
        Command::Recipe(args) => recipe::run(args, config, printer).await,
        Command::IngredientCategories => ingredient_categories::run(config, printer).await,
        Command::Ingredients(args) => ingredients::run(args, config, printer).await,
    }
}
