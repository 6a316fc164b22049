use reqwest::{header::ACCEPT, Client};
use serde::de::DeserializeOwned;

use crate::client::{
    auth::{ApiKey, API_KEY_HEADER},
    error::ApiError,
    types::*,
};

/// Production host of the recipe catalog.
pub const DEFAULT_BASE_URL: &str = "https://recipe-api.com";

const API_PREFIX: &str = "/api/v1";

/// Query string parameters for a single request.
///
/// Only parameters that were actually supplied are pushed, so an absent
/// filter never reaches the server as an empty value.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &'static str, value: impl ToString) -> &mut Self {
        self.0.push((key, value.to_string()));
        self
    }

    pub fn push_opt<V: ToString>(&mut self, key: &'static str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.push(key, value);
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.0.iter().map(|(key, value)| (*key, value.as_str()))
    }

    /// Percent-encoded `k=v&k=v` form, empty when no parameter was pushed.
    pub fn to_query_string(&self) -> String {
        self.0
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Recipe-collection query shared by browse, search and filter.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RecipeQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub cuisine: Option<String>,
    pub difficulty: Option<String>,
    pub dietary: Option<String>,
    pub max_calories: Option<u32>,
    pub min_protein: Option<u32>,
    pub ingredients: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl RecipeQuery {
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push_opt("q", self.q.as_deref())
            .push_opt("category", self.category.as_deref())
            .push_opt("cuisine", self.cuisine.as_deref())
            .push_opt("difficulty", self.difficulty.as_deref())
            .push_opt("dietary", self.dietary.as_deref())
            .push_opt("max_calories", self.max_calories)
            .push_opt("min_protein", self.min_protein)
            .push_opt("ingredients", self.ingredients.as_deref())
            .push_opt("page", self.page)
            .push_opt("per_page", self.per_page);
        params
    }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct IngredientQuery {
    pub q: Option<String>,
    pub category: Option<String>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl IngredientQuery {
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        params
            .push_opt("page", self.page)
            .push_opt("per_page", self.per_page)
            .push_opt("q", self.q.as_deref())
            .push_opt("category", self.category.as_deref());
        params
    }
}

/// Gateway to the Recipe API.
///
/// Each call issues exactly one authenticated GET and returns either the
/// decoded envelope or a classified [`ApiError`]. Nothing is printed here and
/// the process is never terminated; callers decide how to present failures.
pub struct RecipeApiClient {
    base_url: String,
    client: Client,
    api_key: ApiKey,
}

impl RecipeApiClient {
    pub fn new(base_url: impl Into<String>, api_key: ApiKey) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
            api_key,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, endpoint: &str, params: &QueryParams) -> String {
        let mut url = format!("{}{}", self.base_url, endpoint);
        if !params.is_empty() {
            url.push('?');
            url.push_str(&params.to_query_string());
        }
        url
    }

    /// Performs one GET against `endpoint` (a path such as
    /// `/api/v1/cuisines`) and decodes the body on success.
    pub async fn get<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &QueryParams,
    ) -> Result<T, ApiError> {
        let url = self.url_for(endpoint, params);
        tracing::debug!("GET {} with key {}", url, self.api_key.preview());

        let response = self
            .client
            .get(&url)
            .header(API_KEY_HEADER, self.api_key.as_str())
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::debug!("Network error requesting {}: {}", url, e);
                ApiError::from(e)
            })?;

        let status = response.status();
        tracing::debug!("Response status for {}: {}", endpoint, status);

        let body = response.text().await.map_err(|e| {
            tracing::debug!("Failed to read response body from {}: {}", url, e);
            ApiError::from(e)
        })?;

        if !status.is_success() {
            tracing::debug!("Request to {} failed with status {}", endpoint, status);
            return Err(ApiError::from_status(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!("Failed to parse response from {}: {}", endpoint, e);
            ApiError::from(e)
        })
    }

    pub async fn dietary_flags(&self) -> Result<Envelope<Vec<CountedName>>, ApiError> {
        self.get(&format!("{}/dietary-flags", API_PREFIX), &QueryParams::new())
            .await
    }

    pub async fn cuisines(&self) -> Result<Envelope<Vec<CountedName>>, ApiError> {
        self.get(&format!("{}/cuisines", API_PREFIX), &QueryParams::new())
            .await
    }

    pub async fn recipes(&self, query: &RecipeQuery) -> Result<Paginated<RecipeSummary>, ApiError> {
        self.get(&format!("{}/recipes", API_PREFIX), &query.to_params())
            .await
    }

    /// Fetches one full recipe. This endpoint is metered and answers with the
    /// remaining quota in [`Envelope::usage`].
    pub async fn recipe(&self, id: &str) -> Result<Envelope<RecipeDetail>, ApiError> {
        let endpoint = format!("{}/recipes/{}", API_PREFIX, urlencoding::encode(id));
        self.get(&endpoint, &QueryParams::new()).await
    }

    pub async fn ingredient_categories(&self) -> Result<Envelope<Vec<CountedName>>, ApiError> {
        self.get(
            &format!("{}/ingredient-categories", API_PREFIX),
            &QueryParams::new(),
        )
        .await
    }

    pub async fn ingredients(
        &self,
        query: &IngredientQuery,
    ) -> Result<Paginated<Ingredient>, ApiError> {
        self.get(&format!("{}/ingredients", API_PREFIX), &query.to_params())
            .await
    }
}
