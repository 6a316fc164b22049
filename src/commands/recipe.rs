//! `recipe-api recipe`: one full recipe.
//!
//! This is the metered endpoint (1 credit per call), so the command warns
//! before fetching and echoes the remaining quota afterwards. A 404 is
//! reported as an unknown recipe ID and is not treated as a failure.

use std::io;

use anyhow::Result;

use super::connect;
use crate::cli::RecipeArgs;
use crate::client::{
    ApiError, Equipment, IngredientGroup, Instruction, RecipeDetail, RecipeIngredient, Storage,
    Usage,
};
use crate::config::Config;
use crate::display::{
    format::{format_duration, group_thousands, whole},
    Printer,
};

pub async fn run(args: &RecipeArgs, config: &Config, printer: &mut Printer<'_>) -> Result<()> {
    let Some(id) = args.id() else {
        print_usage(printer)?;
        return Ok(());
    };

    printer.warning("\n!! Fetching full recipe (costs 1 credit) ...\n")?;

    let client = connect(config)?;
    match client.recipe(id).await {
        Ok(response) => {
            render_recipe(printer, &response.data)?;
            if let Some(usage) = response.usage {
                render_usage(printer, &usage)?;
            }
            printer.blank()?;
            Ok(())
        }
        Err(ApiError::NotFound { .. }) => {
            tracing::debug!("Recipe {} not found", id);
            print_not_found(printer, id)?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn print_usage(printer: &mut Printer) -> io::Result<()> {
    printer.line("\nGet full recipe details\n")?;
    printer.warning("!! Note: This endpoint costs 1 credit per request !!\n")?;
    printer.line("Usage: recipe-api recipe --id=<recipe_id>\n")?;
    printer.line("To find recipe IDs:")?;
    printer.line("  1. Run `recipe-api browse` or `recipe-api search --q=\"...\"`")?;
    printer.line("  2. Copy the ID from a recipe you want\n")
}

fn print_not_found(printer: &mut Printer, id: &str) -> io::Result<()> {
    printer.line(format!("\n[X] Recipe not found: {}\n", id))?;
    printer.line("Make sure the ID is correct. Find IDs with:")?;
    printer.line("  recipe-api browse")?;
    printer.line("  recipe-api search --q=\"...\"\n")
}

/// Empty strings count as absent, the way the API fills optional text.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn render_recipe(printer: &mut Printer, recipe: &RecipeDetail) -> io::Result<()> {
    printer.header(&recipe.name)?;
    printer.line(&recipe.description)?;
    printer.blank()?;

    render_overview(printer, recipe)?;
    render_nutrition(printer, recipe)?;

    if !recipe.equipment.is_empty() {
        printer.blank()?;
        printer.subheader("Equipment")?;
        for item in &recipe.equipment {
            printer.list_item(equipment_line(item), 1)?;
        }
    }

    printer.blank()?;
    printer.subheader("Ingredients")?;
    for group in &recipe.ingredients {
        render_ingredient_group(printer, group)?;
    }

    printer.blank()?;
    printer.subheader("Instructions")?;
    for step in &recipe.instructions {
        render_instruction(printer, step)?;
    }

    if !recipe.chef_notes.is_empty() {
        printer.blank()?;
        printer.subheader("Chef Notes")?;
        for note in &recipe.chef_notes {
            printer.list_item(note, 1)?;
        }
    }

    if let Some(context) = present(&recipe.cultural_context) {
        printer.blank()?;
        printer.subheader("About This Dish")?;
        printer.line(format!("  {}", context))?;
    }

    if let Some(storage) = &recipe.storage {
        printer.blank()?;
        printer.subheader("Storage")?;
        render_storage(printer, storage)?;
    }

    Ok(())
}

fn render_overview(printer: &mut Printer, recipe: &RecipeDetail) -> io::Result<()> {
    let meta = &recipe.meta;
    printer.label("Category", format!("{} | {}", recipe.category, recipe.cuisine))?;
    printer.label("Difficulty", &recipe.difficulty)?;
    printer.label("Active time", format_duration(&meta.active_time))?;
    printer.label("Passive time", format_duration(&meta.passive_time))?;
    printer.label("Total time", format_duration(&meta.total_time))?;
    printer.label("Yields", &meta.yields)?;

    if !recipe.dietary.flags.is_empty() {
        printer.label("Dietary", recipe.dietary.flags.join(", "))?;
    }
    if meta.overnight_required {
        printer.warning("  ** Requires overnight preparation **")?;
    }
    Ok(())
}

fn render_nutrition(printer: &mut Printer, recipe: &RecipeDetail) -> io::Result<()> {
    let nutrition = &recipe.nutrition.per_serving;
    printer.blank()?;
    printer.subheader("Nutrition (per serving)")?;
    printer.label("Calories", format!("{} kcal", whole(nutrition.calories)))?;
    printer.label("Protein", format!("{}g", whole(nutrition.protein_g)))?;
    printer.label("Carbs", format!("{}g", whole(nutrition.carbohydrates_g)))?;
    printer.label("Fat", format!("{}g", whole(nutrition.fat_g)))?;
    if let Some(fiber) = nutrition.fiber_g.filter(|f| *f != 0.0) {
        printer.label("Fiber", format!("{}g", whole(fiber)))?;
    }
    Ok(())
}

fn equipment_line(item: &Equipment) -> String {
    let alternative = present(&item.alternative)
        .map(|alt| format!(" (or: {})", alt))
        .unwrap_or_default();
    let optional = if item.required { "" } else { " [optional]" };
    format!("{}{}{}", item.name, alternative, optional)
}

fn render_ingredient_group(printer: &mut Printer, group: &IngredientGroup) -> io::Result<()> {
    if let Some(name) = present(&group.group_name) {
        printer.line(format!("\n  [{}]", name))?;
    }
    for ingredient in &group.items {
        printer.list_item(ingredient_line(ingredient), 1)?;
    }
    Ok(())
}

/// `2 cups flour, sifted (or cake flour)`.
fn ingredient_line(ingredient: &RecipeIngredient) -> String {
    let quantity = ingredient.quantity.as_ref().map(ToString::to_string);
    let amount = match (quantity, present(&ingredient.unit)) {
        (Some(quantity), Some(unit)) => format!("{} {} ", quantity, unit),
        (Some(quantity), None) => format!("{} ", quantity),
        (None, Some(unit)) => format!("{} ", unit),
        (None, None) => String::new(),
    };
    let preparation = present(&ingredient.preparation)
        .map(|prep| format!(", {}", prep))
        .unwrap_or_default();
    let notes = present(&ingredient.notes)
        .map(|notes| format!(" ({})", notes))
        .unwrap_or_default();
    format!("{}{}{}{}", amount, ingredient.name, preparation, notes)
}

fn render_instruction(printer: &mut Printer, step: &Instruction) -> io::Result<()> {
    let duration = step
        .structured
        .as_ref()
        .and_then(|structured| present(&structured.duration))
        .map(|duration| {
            let tag = format!("[{}]", format_duration(duration));
            format!(" {}", printer.theme().highlight(&tag))
        })
        .unwrap_or_default();

    printer.line(format!(
        "\n  {}. [{}] {}{}",
        step.step_number, step.phase, step.text, duration
    ))?;
    for tip in &step.tips {
        printer.line(format!("     >> {}", tip))?;
    }
    Ok(())
}

fn render_storage(printer: &mut Printer, storage: &Storage) -> io::Result<()> {
    if storage.does_not_keep {
        printer.line("  Best eaten immediately.")?;
    }
    if let Some(fridge) = &storage.refrigerator {
        if let Some(text) = present(&fridge.notes).or(present(&fridge.duration)) {
            printer.line(format!("  Refrigerator: {}", text))?;
        }
    }
    if let Some(reheating) = present(&storage.reheating) {
        printer.line(format!("  Reheating: {}", reheating))?;
    }
    Ok(())
}

fn render_usage(printer: &mut Printer, usage: &Usage) -> io::Result<()> {
    printer.line("\n--- API Usage ---")?;
    printer.line(format!(
        "Monthly remaining: {}",
        group_thousands(usage.monthly_remaining)
    ))?;
    printer.line(format!(
        "Daily remaining:   {}",
        group_thousands(usage.daily_remaining)
    ))
}
