//! `recipe-api search`: keyword search over recipes.

use anyhow::Result;

use super::{connect, listing::render_recipe_cards};
use crate::cli::SearchArgs;
use crate::client::RecipeQuery;
use crate::config::Config;
use crate::display::Printer;

pub async fn run(args: &SearchArgs, config: &Config, printer: &mut Printer<'_>) -> Result<()> {
    printer.header(&format!("Search: \"{}\"", args.q))?;

    let query = RecipeQuery {
        q: Some(args.q.clone()),
        page: Some(args.pages.page),
        per_page: Some(args.pages.per_page),
        ..Default::default()
    };
    let client = connect(config)?;
    let response = client.recipes(&query).await?;

    if response.data.is_empty() {
        printer.line("No recipes found matching your search.\n")?;
        printer.line("Try:")?;
        printer.list_item("Different keywords", 1)?;
        printer.list_item("Broader terms", 1)?;
        printer.list_item("Check spelling\n", 1)?;
        return Ok(());
    }

    let meta = response.meta;
    printer.line(format!(
        "Page {} of {} ({} matching recipes)\n",
        meta.page,
        meta.total_pages(),
        meta.total
    ))?;
    render_recipe_cards(printer, &response.data)?;
    Ok(())
}
