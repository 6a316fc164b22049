//! `recipe-api ingredients`: browse and search the ingredient catalog.

use anyhow::Result;

use super::connect;
use crate::cli::IngredientArgs;
use crate::config::Config;
use crate::display::{format::group_thousands, Printer};

pub async fn run(args: &IngredientArgs, config: &Config, printer: &mut Printer<'_>) -> Result<()> {
    printer.header("Browse Ingredients")?;

    if let Some(q) = args.search_term() {
        printer.line(format!("Search: \"{}\"", q))?;
    }
    if let Some(category) = args.category() {
        printer.line(format!("Category: {}", category))?;
    }
    printer.blank()?;

    let client = connect(config)?;
    let response = client.ingredients(&args.to_query()).await?;
    let meta = response.meta;

    if response.data.is_empty() {
        printer.line("No ingredients found.\n")?;
    } else {
        printer.line(format!(
            "Found {} ingredients (page {}):\n",
            group_thousands(meta.total),
            meta.page
        ))?;

        for ingredient in &response.data {
            printer.line(format!("  {}", ingredient.name))?;
            printer.line(format!("    ID: {}", ingredient.id))?;
            printer.line(format!("    Category: {}", ingredient.category))?;
            printer.line(format!("    Source: {}", ingredient.source))?;
            printer.blank()?;
        }
    }

    printer.divider()?;

    printer.line("\nUsage examples:")?;
    printer.line("  recipe-api ingredients --q=\"chicken\"")?;
    printer.line("  recipe-api ingredients --category=\"Vegetables\"")?;
    printer.line("  recipe-api ingredients --page=2")?;
    printer.line("\nUse ingredient IDs to filter recipes:")?;
    printer.line("  recipe-api filter --ingredients=\"<id1>,<id2>\"\n")?;
    Ok(())
}
