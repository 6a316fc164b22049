//! `recipe-api browse`: the catalog, one page at a time.

use anyhow::Result;

use super::{connect, listing::render_recipe_cards};
use crate::cli::PageArgs;
use crate::client::RecipeQuery;
use crate::config::Config;
use crate::display::Printer;

pub async fn run(args: &PageArgs, config: &Config, printer: &mut Printer<'_>) -> Result<()> {
    printer.header("Browse Recipes")?;

    let query = RecipeQuery {
        page: Some(args.page),
        per_page: Some(args.per_page),
        ..Default::default()
    };
    let client = connect(config)?;
    let response = client.recipes(&query).await?;
    let meta = response.meta;

    if response.data.is_empty() {
        printer.line(format!(
            "No recipes on page {} ({} total recipes).\n",
            meta.page, meta.total
        ))?;
        printer.line("Try an earlier page: recipe-api browse --page=1\n")?;
        return Ok(());
    }

    printer.line(format!(
        "Page {} of {} ({} total recipes)\n",
        meta.page,
        meta.total_pages(),
        meta.total
    ))?;
    render_recipe_cards(printer, &response.data)?;

    printer.line("\n>> Tips:")?;
    printer.line(format!("   * Browse more: recipe-api browse --page={}", meta.page + 1))?;
    printer.line("   * Search: recipe-api search --q=\"pasta\"")?;
    printer.line("   * Get full recipe: recipe-api recipe --id=<recipe_id>\n")?;
    Ok(())
}
