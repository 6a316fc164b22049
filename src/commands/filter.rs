//! `recipe-api filter`: recipes narrowed by several criteria at once.

use anyhow::Result;

use super::{connect, listing::render_recipe_cards};
use crate::cli::FilterArgs;
use crate::config::Config;
use crate::display::Printer;

pub async fn run(args: &FilterArgs, config: &Config, printer: &mut Printer<'_>) -> Result<()> {
    let filters = args.active_filters();
    if filters.is_empty() {
        print_usage(printer)?;
        return Ok(());
    }

    printer.header("Filtered Recipes")?;
    printer.line(format!("Filters: {}\n", filters.join(", ")))?;

    let client = connect(config)?;
    let response = client.recipes(&args.to_query()).await?;

    if response.data.is_empty() {
        printer.line("No recipes match your filters.\n")?;
        printer.line("Try relaxing some criteria.\n")?;
        return Ok(());
    }

    printer.line(format!("Found {} matching recipes\n", response.meta.total))?;
    render_recipe_cards(printer, &response.data)?;

    printer.line("\n>> Get full recipe: recipe-api recipe --id=<recipe_id>\n")?;
    Ok(())
}

fn print_usage(printer: &mut Printer) -> std::io::Result<()> {
    printer.line("\nFilter recipes by multiple criteria\n")?;
    printer.line("Available filters:")?;
    printer.line("  --category     Recipe category (Breakfast, Main, Dessert, etc.)")?;
    printer.line("  --cuisine      Cuisine type (run `recipe-api cuisines` for list)")?;
    printer.line("  --difficulty   Beginner, Intermediate, or Advanced")?;
    printer.line("  --dietary      Vegetarian, Vegan, Gluten-Free, etc. (run `recipe-api categories`)")?;
    printer.line("  --max_calories Maximum calories per serving")?;
    printer.line("  --min_protein  Minimum protein in grams")?;
    printer.line("  --ingredients  Comma-separated ingredient IDs (run `recipe-api ingredients`)\n")?;
    printer.line("Examples:")?;
    printer.line("  recipe-api filter --cuisine=\"Italian\" --difficulty=\"Beginner\"")?;
    printer.line("  recipe-api filter --dietary=\"Vegan\" --max_calories=400")?;
    printer.line("  recipe-api filter --category=\"Dessert\" --cuisine=\"French\"\n")
}
