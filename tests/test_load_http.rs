use recipe_browser::{load_recipes, load_recipes_with_timeout, LoadError, RecipeBrowser};
use std::time::Duration;

const RECIPES_JSON: &str = r#"[
    {
        "title": "Pasta",
        "desc": "Quick weeknight pasta",
        "image": "images/pasta.jpg",
        "time": 20,
        "cuisine": "Italian",
        "meal": "dinner",
        "ingredients": ["Spaghetti", "Tomatoes", "Garlic"],
        "instructions": ["Boil water", "Cook pasta", "Toss with sauce"]
    },
    {
        "title": "Apple Pie",
        "desc": "Classic dessert",
        "image": "images/pie.jpg",
        "time": 60,
        "cuisine": "American",
        "meal": "dessert",
        "ingredients": ["Apples", "Flour", "Butter"],
        "instructions": ["Make crust", "Fill", "Bake"]
    }
]"#;

#[tokio::test]
async fn test_load_recipes_over_http() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/api/recipes.json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(RECIPES_JSON)
        .create_async()
        .await;

    let url = format!("{}/api/recipes.json", server.url());
    let recipes = load_recipes(&url).await.unwrap();

    assert_eq!(recipes.len(), 2);
    assert_eq!(recipes[0].title, "Pasta");
    assert_eq!(recipes[0].description, "Quick weeknight pasta");
    assert_eq!(recipes[1].instructions, vec!["Make crust", "Fill", "Bake"]);
}

#[tokio::test]
async fn test_http_error_status_is_load_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/api/recipes.json")
        .with_status(404)
        .create_async()
        .await;

    let url = format!("{}/api/recipes.json", server.url());
    let err = load_recipes_with_timeout(&url, Duration::from_secs(5))
        .await
        .unwrap_err();

    match err {
        LoadError::StatusError {
            status,
            url: failed,
        } => {
            assert_eq!(status, 404);
            assert_eq!(failed, url);
        }
        other => panic!("Expected StatusError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unparseable_document_is_load_error() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/api/recipes.json")
        .with_status(200)
        .with_body("<html>not json</html>")
        .create_async()
        .await;

    let url = format!("{}/api/recipes.json", server.url());
    assert!(matches!(
        load_recipes(&url).await,
        Err(LoadError::ParseError(_))
    ));
}

#[tokio::test]
async fn test_browser_starts_from_http_source() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/api/recipes.json")
        .with_status(200)
        .with_body(RECIPES_JSON)
        .create_async()
        .await;

    let browser = RecipeBrowser::builder()
        .source(format!("{}/api/recipes.json", server.url()))
        .timeout(Duration::from_secs(5))
        .build()
        .await;

    assert!(browser.is_loaded());
    assert_eq!(browser.surface().results_count(), 2);
    assert!(!browser.surface().is_empty_state_visible());
}

#[tokio::test]
async fn test_browser_degrades_when_server_fails() {
    let mut server = mockito::Server::new_async().await;
    let _m = server
        .mock("GET", "/api/recipes.json")
        .with_status(500)
        .create_async()
        .await;

    let browser = RecipeBrowser::builder()
        .source(format!("{}/api/recipes.json", server.url()))
        .build()
        .await;

    assert!(!browser.is_loaded());
    assert!(browser.store().is_empty());
    assert!(browser.surface().is_empty_state_visible());
    assert_eq!(browser.surface().results_count(), 0);
}
