//! # Recipe API CLI Library
//!
//! A terminal client for the recipe catalog at recipe-api.com. It consists
//! of two main components:
//!
//! ## Client Module
//!
//! The [`client`] module is the request gateway: API key validation, one
//! authenticated GET per call, and classification of every failure into an
//! [`ApiError`]. It never prints and never exits the process.
//!
//! ## Commands Module
//!
//! The [`commands`] module holds one entry point per query (dietary flags,
//! cuisines, browse, search, filter, full recipe, ingredient categories,
//! ingredients), each rendering its payload through [`display::Printer`].
//!
//! ## Quick Start
//!
//! ```no_run
//! use recipe_api_cli::{cli::Command, display::{Printer, Theme}, Config};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::from_env();
//! let mut stdout = std::io::stdout();
//! let mut printer = Printer::new(&mut stdout, Theme::plain());
//!
//! recipe_api_cli::run(&Command::Cuisines, &config, &mut printer).await?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod client;
pub mod commands;
pub mod config;
pub mod display;

pub use client::{ApiError, RecipeApiClient};
pub use commands::run;
pub use config::Config;
