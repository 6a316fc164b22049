//! Command-line interface of the `recipe-api` binary.
//!
//! One subcommand per query. Flags keep the catalog's underscore spelling
//! (`--per_page`, `--max_calories`) and accept the kebab-case form as an
//! alias.

use clap::{Args, Parser, Subcommand};

use crate::client::{IngredientQuery, RecipeQuery};

#[derive(Parser, Debug)]
#[command(
    name = "recipe-api",
    version,
    about = "Browse the recipe-api.com catalog from the terminal"
)]
#[command(term_width = 0)]
pub struct Cli {
    /// Disable ANSI colors (also honoured through NO_COLOR).
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// List dietary flags by number of recipes.
    #[command(visible_alias = "dietary-flags")]
    Categories,

    /// List cuisines by number of recipes.
    Cuisines,

    /// Browse recipes page by page.
    Browse(PageArgs),

    /// Search recipes by keyword.
    Search(SearchArgs),

    /// Filter recipes by category, cuisine, diet and nutrition.
    Filter(FilterArgs),

    /// Show one full recipe (costs 1 credit).
    Recipe(RecipeArgs),

    /// List ingredient categories by number of ingredients.
    IngredientCategories,

    /// Browse and search ingredients.
    Ingredients(IngredientArgs),
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct PageArgs {
    /// Page number
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Items per page
    #[arg(long = "per_page", visible_alias = "per-page", default_value_t = 10)]
    pub per_page: u32,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct SearchArgs {
    /// Search query
    #[arg(long)]
    pub q: String,

    #[command(flatten)]
    pub pages: PageArgs,
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct FilterArgs {
    /// Recipe category (Breakfast, Main, Dessert, ...)
    #[arg(long)]
    pub category: Option<String>,

    /// Cuisine type
    #[arg(long)]
    pub cuisine: Option<String>,

    /// Beginner, Intermediate or Advanced
    #[arg(long)]
    pub difficulty: Option<String>,

    /// Dietary preference (Vegetarian, Vegan, Gluten-Free, ...)
    #[arg(long)]
    pub dietary: Option<String>,

    /// Maximum calories per serving
    #[arg(long = "max_calories", visible_alias = "max-calories")]
    pub max_calories: Option<u32>,

    /// Minimum protein in grams
    #[arg(long = "min_protein", visible_alias = "min-protein")]
    pub min_protein: Option<u32>,

    /// Comma-separated ingredient IDs
    #[arg(long)]
    pub ingredients: Option<String>,

    #[command(flatten)]
    pub pages: PageArgs,
}

/// `--flag=` with nothing after it counts as not given.
fn given(value: &Option<String>) -> Option<String> {
    value.as_deref().filter(|v| !v.is_empty()).map(str::to_string)
}

impl FilterArgs {
    /// Filters that were actually given, as `name=value` pairs in flag order.
    pub fn active_filters(&self) -> Vec<String> {
        let text = [
            ("category", given(&self.category)),
            ("cuisine", given(&self.cuisine)),
            ("difficulty", given(&self.difficulty)),
            ("dietary", given(&self.dietary)),
            ("max_calories", self.max_calories.map(|v| v.to_string())),
            ("min_protein", self.min_protein.map(|v| v.to_string())),
            ("ingredients", given(&self.ingredients)),
        ];
        text.into_iter()
            .filter_map(|(name, value)| value.map(|v| format!("{}={}", name, v)))
            .collect()
    }

    pub fn to_query(&self) -> RecipeQuery {
        RecipeQuery {
            category: given(&self.category),
            cuisine: given(&self.cuisine),
            difficulty: given(&self.difficulty),
            dietary: given(&self.dietary),
            max_calories: self.max_calories,
            min_protein: self.min_protein,
            ingredients: given(&self.ingredients),
            page: Some(self.pages.page),
            per_page: Some(self.pages.per_page),
            ..Default::default()
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct RecipeArgs {
    /// Recipe ID (from browse or search)
    #[arg(long)]
    pub id: Option<String>,
}

impl RecipeArgs {
    /// The requested ID, `None` when missing or empty.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref().filter(|id| !id.is_empty())
    }
}

#[derive(Args, Debug, Clone, PartialEq)]
pub struct IngredientArgs {
    /// Search by ingredient name
    #[arg(long)]
    pub q: Option<String>,

    /// Filter by category
    #[arg(long)]
    pub category: Option<String>,

    /// Page number
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Results per page
    #[arg(long = "per_page", visible_alias = "per-page", default_value_t = 20)]
    pub per_page: u32,
}

impl IngredientArgs {
    pub fn search_term(&self) -> Option<&str> {
        self.q.as_deref().filter(|q| !q.is_empty())
    }

    pub fn category(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    pub fn to_query(&self) -> IngredientQuery {
        IngredientQuery {
            q: self.search_term().map(str::to_string),
            category: self.category().map(str::to_string),
            page: Some(self.page),
            per_page: Some(self.per_page),
        }
    }
}
