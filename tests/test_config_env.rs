use recipe_browser::config::load_config;
use std::env;
use std::io::Write;

// Environment variables are process-wide, so everything that sets them lives
// in this one test.
#[test]
fn test_environment_overrides_file_and_parses_lists() {
    let keys_to_clear: Vec<String> = env::vars()
        .filter(|(k, _)| k.starts_with("RECIPE_BROWSER__"))
        .map(|(k, _)| k)
        .collect();
    for key in keys_to_clear {
        env::remove_var(&key);
    }

    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(
        file,
        r#"
source = "https://example.com/recipes.json"
timeout = 5
meals = ["dinner"]
"#
    )
    .unwrap();

    env::set_var("RECIPE_BROWSER__CUISINES", "Italian,Thai");
    env::set_var("RECIPE_BROWSER__TIMEOUT", "7");
    env::set_var("RECIPE_BROWSER__HTML_OUTPUT", "page.html");

    let config = load_config(Some(file.path())).unwrap();
    assert_eq!(config.cuisines, vec!["Italian", "Thai"]);
    assert_eq!(config.timeout, 7);
    assert_eq!(config.html_output.as_deref(), Some("page.html"));
    assert_eq!(config.source, "https://example.com/recipes.json");
    assert_eq!(config.meals, vec!["dinner"]);

    env::set_var("RECIPE_BROWSER__MEALS", "breakfast,dessert");
    let config = load_config(Some(file.path())).unwrap();
    assert_eq!(config.meals, vec!["breakfast", "dessert"]);

    for key in [
        "RECIPE_BROWSER__CUISINES",
        "RECIPE_BROWSER__TIMEOUT",
        "RECIPE_BROWSER__HTML_OUTPUT",
        "RECIPE_BROWSER__MEALS",
    ] {
        env::remove_var(key);
    }
}
