//! Rendering shared by the listing commands: the recipe card and the
//! capped "largest first" list.

use std::io;

use crate::client::{CountedName, RecipeSummary};
use crate::display::{
    format::{cap, format_duration, sort_by_count_desc, truncate, whole, DISPLAY_CAP},
    Printer,
};

const DESCRIPTION_WIDTH: usize = 80;
const DIETARY_FLAGS_SHOWN: usize = 4;

/// The card shared by browse, search and filter results.
pub(crate) fn render_recipe_card(printer: &mut Printer, recipe: &RecipeSummary) -> io::Result<()> {
    let name = printer.theme().highlight(&recipe.name);
    printer.line(name)?;
    printer.label("ID", &recipe.id)?;
    printer.label("Category", format!("{} | {}", recipe.category, recipe.cuisine))?;
    printer.label("Difficulty", &recipe.difficulty)?;
    printer.label("Time", format_duration(&recipe.meta.total_time))?;

    if !recipe.dietary.flags.is_empty() {
        let shown: Vec<&str> = recipe
            .dietary
            .flags
            .iter()
            .take(DIETARY_FLAGS_SHOWN)
            .map(String::as_str)
            .collect();
        printer.label("Dietary", shown.join(", "))?;
    }

    printer.label(
        "Calories",
        format!("{} kcal", whole(recipe.nutrition_summary.calories)),
    )?;
    printer.line(format!("  {}", truncate(&recipe.description, DESCRIPTION_WIDTH)))?;
    printer.divider()
}

pub(crate) fn render_recipe_cards(
    printer: &mut Printer,
    recipes: &[RecipeSummary],
) -> io::Result<()> {
    for recipe in recipes {
        render_recipe_card(printer, recipe)?;
    }
    Ok(())
}

/// Prints the largest buckets first, capped at [`DISPLAY_CAP`] entries.
///
/// `describe` renders one entry, e.g. `Vegan (12 recipes)`.
pub(crate) fn render_top_counts<F>(
    printer: &mut Printer,
    mut buckets: Vec<CountedName>,
    describe: F,
) -> io::Result<()>
where
    F: Fn(&CountedName) -> String,
{
    sort_by_count_desc(&mut buckets, |bucket| bucket.count);

    let (shown, remaining) = cap(&buckets, DISPLAY_CAP);
    for bucket in shown {
        printer.list_item(describe(bucket), 1)?;
    }
    if remaining > 0 {
        printer.line(format!("  ... and {} more", remaining))?;
    }
    Ok(())
}
