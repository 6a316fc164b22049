mod common;

use common::{page, recipe_detail, recipe_summary, TestEnvironment, TEST_API_KEY};
use pretty_assertions::assert_eq;
use recipe_api_cli::{
    cli::{Command, FilterArgs, PageArgs, RecipeArgs, SearchArgs},
    ApiError,
};
use serde_json::json;
use serial_test::serial;
use tokio::process::Command as Process;
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, ResponseTemplate};

fn pages(page: u32, per_page: u32) -> PageArgs {
    PageArgs { page, per_page }
}

#[tokio::test]
#[serial]
async fn test_browse_renders_cards_and_page_count() {
    common::init_test_logging();
    let env = TestEnvironment::new().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/recipes"))
        .and(query_param("page", "2"))
        .and(query_param("per_page", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            json!([recipe_summary("rcp_1", "Baked Ziti"), recipe_summary("rcp_2", "Risotto")]),
            95,
            2,
            10,
        )))
        .expect(1)
        .mount(&env.server)
        .await;

    let (result, output) = env.run(&Command::Browse(pages(2, 10))).await;
    result.expect("browse should succeed");

    assert!(output.contains("=== Browse Recipes ==="));
    assert!(output.contains("Page 2 of 10 (95 total recipes)"));
    assert!(output.contains("Baked Ziti\n  ID: rcp_1\n  Category: Main | Italian\n"));
    assert!(output.contains("  Difficulty: Beginner\n  Time: 1h 15m\n"));
    assert!(output.contains("  Dietary: Vegetarian, Nut-Free, Egg-Free, Soy-Free\n"));
    assert!(!output.contains("Halal"), "only four dietary flags are shown");
    assert!(output.contains("  Calories: 513 kcal\n"));
    assert!(output.contains(
        "  A weeknight classic with a crisp top and a soft, cheesy middle that everyone ...\n"
    ));
    assert!(output.contains("Browse more: recipe-api browse --page=3"));
}

#[tokio::test]
#[serial]
async fn test_search_passes_query_and_handles_no_results() {
    common::init_test_logging();
    let env = TestEnvironment::new().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/recipes"))
        .and(query_param("q", "unicorn stew"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(json!([]), 0, 1, 10)))
        .expect(1)
        .mount(&env.server)
        .await;

    let command = Command::Search(SearchArgs {
        q: "unicorn stew".to_string(),
        pages: pages(1, 10),
    });
    let (result, output) = env.run(&command).await;
    result.expect("no results is not an error");

    assert!(output.contains("=== Search: \"unicorn stew\" ==="));
    assert!(output.contains("No recipes found matching your search."));
    assert!(output.contains("  * Broader terms\n"));
    assert!(!output.contains("Page "));
}

#[tokio::test]
#[serial]
async fn test_search_results() {
    common::init_test_logging();
    let env = TestEnvironment::new().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/recipes"))
        .and(query_param("q", "pasta"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            json!([recipe_summary("rcp_9", "Pasta e Fagioli")]),
            21,
            1,
            10,
        )))
        .mount(&env.server)
        .await;

    let command = Command::Search(SearchArgs {
        q: "pasta".to_string(),
        pages: pages(1, 10),
    });
    let (result, output) = env.run(&command).await;
    result.expect("search should succeed");

    assert!(output.contains("Page 1 of 3 (21 matching recipes)"));
    assert!(output.contains("Pasta e Fagioli"));
}

#[tokio::test]
#[serial]
async fn test_filter_sends_only_given_filters() {
    common::init_test_logging();
    let env = TestEnvironment::new().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/recipes"))
        .and(query_param("dietary", "Vegan"))
        .and(query_param("max_calories", "400"))
        .and(query_param_is_missing("cuisine"))
        .and(query_param_is_missing("min_protein"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(
            json!([recipe_summary("rcp_3", "Chickpea Curry")]),
            1,
            1,
            10,
        )))
        .expect(1)
        .mount(&env.server)
        .await;

    let command = Command::Filter(FilterArgs {
        category: None,
        cuisine: None,
        difficulty: None,
        dietary: Some("Vegan".to_string()),
        max_calories: Some(400),
        min_protein: None,
        ingredients: None,
        pages: pages(1, 10),
    });
    let (result, output) = env.run(&command).await;
    result.expect("filter should succeed");

    assert!(output.contains("Filters: dietary=Vegan, max_calories=400\n"));
    assert!(output.contains("Found 1 matching recipes"));
    assert!(output.contains("Chickpea Curry"));
}

#[tokio::test]
#[serial]
async fn test_filter_with_no_matches() {
    common::init_test_logging();
    let env = TestEnvironment::new().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/recipes"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(json!([]), 0, 1, 10)))
        .mount(&env.server)
        .await;

    let command = Command::Filter(FilterArgs {
        category: Some("Dessert".to_string()),
        cuisine: Some("Martian".to_string()),
        difficulty: None,
        dietary: None,
        max_calories: None,
        min_protein: None,
        ingredients: None,
        pages: pages(1, 10),
    });
    let (result, output) = env.run(&command).await;
    result.expect("no matches is not an error");
    assert!(output.contains("No recipes match your filters."));
}

#[tokio::test]
#[serial]
async fn test_full_recipe_rendering() {
    common::init_test_logging();
    let env = TestEnvironment::new().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/recipes/rcp_carbonara"))
        .respond_with(ResponseTemplate::new(200).set_body_json(recipe_detail()))
        .expect(1)
        .mount(&env.server)
        .await;

    let command = Command::Recipe(RecipeArgs {
        id: Some("rcp_carbonara".to_string()),
    });
    let (result, output) = env.run(&command).await;
    result.expect("recipe should render");

    assert!(output.contains("!! Fetching full recipe (costs 1 credit) ..."));
    assert!(output.contains("=== Spaghetti Carbonara ==="));
    assert!(output.contains("  Active time: 20 min\n  Passive time: 10 min\n  Total time: 30 min\n"));
    assert!(output.contains("  Yields: 4 servings\n"));
    assert!(output.contains("  Calories: 689 kcal\n  Protein: 31g\n  Carbs: 79g\n  Fat: 26g\n  Fiber: 3g\n"));
    assert!(output.contains("  * Large pot\n  * Microplane (or: box grater) [optional]\n"));
    assert!(output.contains("  * 400 g spaghetti\n"));
    assert!(output.contains("\n  [Sauce]\n  * 4 egg yolks (room temperature)\n  * 60 g pecorino romano, finely grated\n"));
    assert!(output.contains("\n  1. [prep] Whisk the yolks with the cheese.\n"));
    assert!(output.contains("\n  2. [cook] Boil the pasta. [10 min]\n     >> Salt the water generously.\n"));
    assert!(output.contains("Chef Notes\n  * Never add cream.\n"));
    assert!(output.contains("About This Dish\n  A post-war Roman staple.\n"));
    assert!(output.contains("Storage\n  Best eaten immediately.\n"));
    assert!(output.contains("Monthly remaining: 12,345\nDaily remaining:   99\n"));
    assert!(!output.contains("overnight"));
}

#[tokio::test]
#[serial]
async fn test_empty_recipe_id_prints_usage() {
    common::init_test_logging();
    let env = TestEnvironment::new().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(0)
        .mount(&env.server)
        .await;

    let command = Command::Recipe(RecipeArgs {
        id: Some(String::new()),
    });
    let (result, output) = env.run(&command).await;

    assert!(result.is_ok());
    assert!(output.contains("Usage: recipe-api recipe --id=<recipe_id>"));
    assert!(!output.contains("Fetching full recipe"));
    assert_eq!(env.request_count().await, 0);
}

#[tokio::test]
#[serial]
async fn test_empty_filter_values_are_not_sent() {
    common::init_test_logging();
    let env = TestEnvironment::new().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/recipes"))
        .and(query_param("cuisine", "Thai"))
        .and(query_param_is_missing("category"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(json!([]), 0, 1, 10)))
        .expect(1)
        .mount(&env.server)
        .await;

    let command = Command::Filter(FilterArgs {
        category: Some(String::new()),
        cuisine: Some("Thai".to_string()),
        difficulty: None,
        dietary: None,
        max_calories: None,
        min_protein: None,
        ingredients: None,
        pages: pages(1, 10),
    });
    let (result, output) = env.run(&command).await;
    result.expect("filter should succeed");
    assert!(output.contains("Filters: cuisine=Thai\n"));

    let only_empty = Command::Filter(FilterArgs {
        category: Some(String::new()),
        cuisine: None,
        difficulty: None,
        dietary: None,
        max_calories: None,
        min_protein: None,
        ingredients: None,
        pages: pages(1, 10),
    });
    let (result, output) = env.run(&only_empty).await;
    result.expect("usage is not an error");
    assert!(output.contains("Filter recipes by multiple criteria"));
}

#[tokio::test]
#[serial]
async fn test_unknown_recipe_is_reported_not_raised() {
    common::init_test_logging();
    let env = TestEnvironment::new().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/recipes/rcp_missing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": { "code": "NOT_FOUND", "message": "Recipe not found" }
        })))
        .expect(1)
        .mount(&env.server)
        .await;

    let command = Command::Recipe(RecipeArgs {
        id: Some("rcp_missing".to_string()),
    });
    let (result, output) = env.run(&command).await;

    assert!(result.is_ok(), "a missing recipe is handled by the command");
    assert!(output.contains("[X] Recipe not found: rcp_missing"));
    assert!(output.contains("Make sure the ID is correct."));
}

#[tokio::test]
#[serial]
async fn test_recipe_server_error_still_propagates() {
    common::init_test_logging();
    let env = TestEnvironment::new().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&env.server)
        .await;

    let command = Command::Recipe(RecipeArgs {
        id: Some("rcp_any".to_string()),
    });
    let (result, _) = env.run(&command).await;

    let err = result.expect_err("500 is fatal");
    assert!(matches!(
        err.downcast_ref::<ApiError>(),
        Some(ApiError::Api { status: 500, .. })
    ));
}

#[tokio::test]
#[serial]
async fn test_collection_404_is_fatal() {
    common::init_test_logging();
    let env = TestEnvironment::new().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&env.server)
        .await;

    let (result, _) = env.run(&Command::Browse(pages(1, 10))).await;
    let err = result.expect_err("404 on a collection propagates");
    assert!(matches!(
        err.downcast_ref::<ApiError>(),
        Some(ApiError::NotFound { status: 404, code: "NOT_FOUND" })
    ));
}

async fn exit_code_for(env: &TestEnvironment, args: &[&str]) -> (i32, String) {
    let output = Process::new(env!("CARGO_BIN_EXE_recipe-api"))
        .args(args)
        .arg("--no-color")
        .env("RECIPE_API_KEY", TEST_API_KEY)
        .env("RECIPE_API_BASE_URL", env.server.uri())
        .output()
        .await
        .expect("binary should start");
    (
        output.status.code().expect("process exited normally"),
        String::from_utf8_lossy(&output.stdout).into_owned(),
    )
}

#[tokio::test]
#[serial]
async fn test_exit_codes_for_404() {
    common::init_test_logging();
    let env = TestEnvironment::new().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&env.server)
        .await;

    let (code, stdout) = exit_code_for(&env, &["recipe", "--id=rcp_gone"]).await;
    assert_eq!(code, 0);
    assert!(stdout.contains("Recipe not found: rcp_gone"));

    let (code, stdout) = exit_code_for(&env, &["search", "--q=soup"]).await;
    assert_eq!(code, 1);
    assert!(stdout.contains("[X] Resource not found!"));
}
