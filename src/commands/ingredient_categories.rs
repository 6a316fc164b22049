//! `recipe-api ingredient-categories`: ingredient categories ranked by size.

use anyhow::Result;

use super::{connect, listing::render_top_counts};
use crate::config::Config;
use crate::display::{format::group_thousands, Printer};

pub async fn run(config: &Config, printer: &mut Printer<'_>) -> Result<()> {
    printer.header("Ingredient Categories")?;

    let client = connect(config)?;
    let categories = client.ingredient_categories().await?.data;

    printer.line(format!("Found {} ingredient categories:\n", categories.len()))?;
    render_top_counts(printer, categories, |category| {
        format!("{} ({} ingredients)", category.name, group_thousands(category.count))
    })?;

    printer.divider()?;
    printer.line("\n>> Next step: Run `recipe-api ingredients` to browse ingredients\n")?;
    Ok(())
}
