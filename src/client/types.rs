//! Type definitions for the Recipe API.
//!
//! The API wraps every payload in an envelope: a `data` field holding either
//! a list or a single object, a `meta` block on paginated collections, and a
//! `usage` block on metered endpoints.
//!
//! ## Key Types
//!
//! - [`Envelope`] - `data` plus the optional usage counters
//! - [`Paginated`] - `data` list plus required [`PageMeta`]
//! - [`RecipeSummary`] - one entry of a recipe collection
//! - [`RecipeDetail`] - the full recipe returned by `/recipes/{id}`
//! - [`CountedName`] - dietary flags, cuisines and ingredient categories
//!
//! Fields the renderer always reads are required, so a payload missing them
//! fails to decode instead of rendering half a recipe. Fields that are only
//! shown when present are `Option` or `#[serde(default)]`.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Response wrapper for endpoints returning a single object or a plain list.
#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    /// Remaining quota, only sent by metered endpoints.
    #[serde(default)]
    pub usage: Option<Usage>,
}

/// Response wrapper for paginated collections.
#[derive(Debug, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub meta: PageMeta,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Total number of matching items across all pages
    pub total: u64,
    /// Current page, 1-based
    pub page: u64,
    /// Page size used by the server
    pub per_page: u64,
}

impl PageMeta {
    pub fn total_pages(&self) -> u64 {
        crate::display::format::total_pages(self.total, self.per_page)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub monthly_remaining: u64,
    pub daily_remaining: u64,
}

/// A JSON scalar the API is loose about.
///
/// Identifiers, yields and ingredient quantities arrive as strings on some
/// records and numbers on others; this keeps whichever was sent and prints
/// it back unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Integer(value) => write!(f, "{}", value),
            Scalar::Float(value) => write!(f, "{}", value),
            Scalar::Text(value) => f.write_str(value),
        }
    }
}

/// Lists the API may send as `null` instead of `[]`.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A named bucket with a count: dietary flag, cuisine or ingredient category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountedName {
    pub name: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dietary {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub flags: Vec<String>,
}

/// Timing block of a collection entry.
///
/// Durations are ISO-8601 strings such as `PT1H30M`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeTimes {
    pub total_time: String,
}

/// Timing and yield block of a full recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDetailTimes {
    pub active_time: String,
    pub passive_time: String,
    pub total_time: String,
    pub yields: Scalar,
    pub overnight_required: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionSummary {
    pub calories: f64,
}

/// One entry of `/api/v1/recipes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeSummary {
    pub id: Scalar,
    pub name: String,
    pub description: String,
    pub category: String,
    pub cuisine: String,
    pub difficulty: String,
    pub meta: RecipeTimes,
    pub dietary: Dietary,
    pub nutrition_summary: NutritionSummary,
}

/// The full recipe returned by `/api/v1/recipes/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeDetail {
    pub id: Scalar,
    pub name: String,
    pub description: String,
    pub category: String,
    pub cuisine: String,
    pub difficulty: String,
    pub meta: RecipeDetailTimes,
    pub dietary: Dietary,
    pub nutrition: Nutrition,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub equipment: Vec<Equipment>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ingredients: Vec<IngredientGroup>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub instructions: Vec<Instruction>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub chef_notes: Vec<String>,
    #[serde(default)]
    pub cultural_context: Option<String>,
    #[serde(default)]
    pub storage: Option<Storage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub per_serving: NutritionFacts,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    pub calories: f64,
    pub protein_g: f64,
    pub carbohydrates_g: f64,
    pub fat_g: f64,
    #[serde(default)]
    pub fiber_g: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub name: String,
    #[serde(default)]
    pub alternative: Option<String>,
    pub required: bool,
}

/// Ingredients listed under an optional sub-heading ("For the sauce").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientGroup {
    #[serde(default)]
    pub group_name: Option<String>,
    pub items: Vec<RecipeIngredient>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub name: String,
    #[serde(default)]
    pub quantity: Option<Scalar>,
    #[serde(default)]
    pub unit: Option<String>,
    #[serde(default)]
    pub preparation: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instruction {
    pub step_number: u32,
    pub phase: String,
    pub text: String,
    #[serde(default)]
    pub structured: Option<StructuredStep>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tips: Vec<String>,
}

/// Machine-readable details extracted from an instruction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredStep {
    #[serde(default)]
    pub duration: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Storage {
    #[serde(default)]
    pub does_not_keep: bool,
    #[serde(default)]
    pub refrigerator: Option<StorageWindow>,
    #[serde(default)]
    pub reheating: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageWindow {
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// One entry of `/api/v1/ingredients`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: Scalar,
    pub name: String,
    pub category: String,
    pub source: String,
}
