#![allow(dead_code)]

use anyhow::Result;
use recipe_api_cli::{
    cli::Command,
    client::{ApiKey, RecipeApiClient},
    display::{Printer, Theme},
    Config,
};
use serde_json::{json, Value};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "rapi_test_0123456789abcdef";

/// A mock catalog plus the configuration pointing at it.
pub struct TestEnvironment {
    pub server: MockServer,
    pub config: Config,
}

impl TestEnvironment {
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let config = Config::new(server.uri(), Some(TEST_API_KEY.to_string()));
        Self { server, config }
    }

    pub fn with_api_key(mut self, api_key: Option<&str>) -> Self {
        self.config.api_key = api_key.map(str::to_string);
        self
    }

    pub fn client(&self) -> RecipeApiClient {
        let key = ApiKey::parse(Some(TEST_API_KEY)).expect("test key is valid");
        RecipeApiClient::new(self.server.uri(), key)
    }

    /// Runs a command with plain output and returns what it printed.
    pub async fn run(&self, command: &Command) -> (Result<()>, String) {
        let mut buffer = Vec::new();
        let result = {
            let mut printer = Printer::new(&mut buffer, Theme::plain());
            recipe_api_cli::run(command, &self.config, &mut printer).await
        };
        (result, String::from_utf8(buffer).expect("output is UTF-8"))
    }

    pub async fn request_count(&self) -> usize {
        self.server
            .received_requests()
            .await
            .map(|requests| requests.len())
            .unwrap_or(0)
    }
}

pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("recipe_api_cli=debug")
        .with_test_writer()
        .try_init();
}

pub fn page(data: Value, total: u64, page: u64, per_page: u64) -> Value {
    json!({
        "data": data,
        "meta": { "total": total, "page": page, "per_page": per_page }
    })
}

pub fn recipe_summary(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "description": "A weeknight classic with a crisp top and a soft, cheesy middle that everyone at the table will ask for again.",
        "category": "Main",
        "cuisine": "Italian",
        "difficulty": "Beginner",
        "meta": { "total_time": "PT1H15M" },
        "dietary": { "flags": ["Vegetarian", "Nut-Free", "Egg-Free", "Soy-Free", "Halal"] },
        "nutrition_summary": { "calories": 512.6 }
    })
}

pub fn recipe_detail() -> Value {
    json!({
        "data": {
            "id": "rcp_carbonara",
            "name": "Spaghetti Carbonara",
            "description": "Silky Roman pasta with egg, pecorino and guanciale.",
            "category": "Main",
            "cuisine": "Italian",
            "difficulty": "Intermediate",
            "meta": {
                "active_time": "PT20M",
                "passive_time": "PT10M",
                "total_time": "PT30M",
                "yields": "4 servings",
                "overnight_required": false
            },
            "dietary": { "flags": ["Nut-Free"] },
            "nutrition": { "per_serving": {
                "calories": 689.4, "protein_g": 31.2, "carbohydrates_g": 78.9,
                "fat_g": 26.5, "fiber_g": 3.4
            }},
            "equipment": [
                { "name": "Large pot", "alternative": null, "required": true },
                { "name": "Microplane", "alternative": "box grater", "required": false }
            ],
            "ingredients": [
                { "group_name": null, "items": [
                    { "name": "spaghetti", "quantity": 400, "unit": "g", "preparation": null, "notes": null }
                ]},
                { "group_name": "Sauce", "items": [
                    { "name": "egg yolks", "quantity": 4, "unit": null, "preparation": null, "notes": "room temperature" },
                    { "name": "pecorino romano", "quantity": 60, "unit": "g", "preparation": "finely grated", "notes": null }
                ]}
            ],
            "instructions": [
                { "step_number": 1, "phase": "prep", "text": "Whisk the yolks with the cheese.",
                  "structured": null, "tips": [] },
                { "step_number": 2, "phase": "cook", "text": "Boil the pasta.",
                  "structured": { "duration": "PT10M" }, "tips": ["Salt the water generously."] }
            ],
            "chef_notes": ["Never add cream."],
            "cultural_context": "A post-war Roman staple.",
            "storage": {
                "does_not_keep": true,
                "refrigerator": null,
                "reheating": null
            }
        },
        "usage": { "monthly_remaining": 12345, "daily_remaining": 99 }
    })
}
