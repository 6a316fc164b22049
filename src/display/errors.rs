//! Operator guidance for failures that end an invocation.

use std::io;

use crate::client::ApiError;
use crate::display::Printer;

const DASHBOARD_URL: &str = "https://recipe-api.com";

/// Writes the remediation text for a fatal error.
///
/// API errors get tailored guidance; anything else (an unwritable stdout,
/// for instance) is printed as a one-line failure.
pub fn render_error(printer: &mut Printer, error: &anyhow::Error) -> io::Result<()> {
    match error.downcast_ref::<ApiError>() {
        Some(api_error) => render_api_error(printer, api_error),
        None => printer.line(format!("\n[X] {}\n", error)),
    }
}

pub fn render_api_error(printer: &mut Printer, error: &ApiError) -> io::Result<()> {
    match error {
        ApiError::MissingApiKey => {
            printer.line("\n[X] Missing API key!\n")?;
            printer.line("To fix this:")?;
            printer.line("  1. Copy .env.example to .env (or export RECIPE_API_KEY)")?;
            printer.line(format!("  2. Add your API key from {}\n", DASHBOARD_URL))
        }
        ApiError::InvalidApiKey { prefix } => {
            printer.line("\n[X] Invalid API key format!\n")?;
            printer.line(format!("API keys should start with \"{}\"", prefix))?;
            printer.line(format!("Get your key from {}\n", DASHBOARD_URL))
        }
        ApiError::Unauthorized => {
            printer.line("\n[X] Authentication failed!\n")?;
            printer.line("Your API key was rejected. Please check:")?;
            printer.line("  - The key is copied correctly (no extra spaces)")?;
            printer.line("  - The key is active in your dashboard\n")
        }
        ApiError::Forbidden => {
            printer.line("\n[X] Access denied!\n")?;
            printer.line("Your account may not have access to this endpoint.")?;
            printer.line(format!("Check your plan limits at {}\n", DASHBOARD_URL))
        }
        ApiError::NotFound { status, code } => {
            printer.line("\n[X] Resource not found!\n")?;
            printer.line(format!("The API answered {} ({}) for this request.\n", status, code))
        }
        ApiError::RateLimited => {
            printer.line("\n[X] Rate limit exceeded!\n")?;
            printer.line("You have exceeded your API limits.")?;
            printer.line("Check your remaining quota in the dashboard.\n")
        }
        ApiError::Api { status, body } => {
            printer.line(format!("\n[X] API error ({})!\n", status))?;
            printer.line(format!("Response: {}", body))
        }
        ApiError::Network { .. } => {
            printer.line("\n[X] Network error!\n")?;
            printer.line("Could not connect to the API. Please check:")?;
            printer.line("  - Your internet connection")?;
            printer.line(format!("  - The API status at {}\n", DASHBOARD_URL))
        }
        ApiError::Decode { message } => {
            printer.line("\n[X] Unexpected response from the API!\n")?;
            printer.line(format!("Details: {}\n", message))
        }
    }
}
