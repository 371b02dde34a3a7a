use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Settings for the recipe browser
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BrowserConfig {
    /// Location of the recipe document: an http(s) URL or a file path
    #[serde(default = "default_source")]
    pub source: String,
    /// Request timeout in seconds for http(s) sources
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// Cuisine checkbox options. Derived from the loaded recipes when empty.
    #[serde(default)]
    pub cuisines: Vec<String>,
    /// Meal checkbox options. Derived from the loaded recipes when empty.
    #[serde(default)]
    pub meals: Vec<String>,
    /// Mirror the display into this HTML file after every event
    #[serde(default)]
    pub html_output: Option<String>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            source: default_source(),
            timeout: default_timeout(),
            cuisines: Vec::new(),
            meals: Vec::new(),
            html_output: None,
        }
    }
}

// Default value functions
fn default_source() -> String {
    "./api/recipes.json".to_string()
}

fn default_timeout() -> u64 {
    30
}

impl BrowserConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_BROWSER__ prefix
    /// 2. recipe-browser.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_BROWSER__TIMEOUT
    pub fn load() -> Result<Self, ConfigError> {
        load_config(None)
    }
}

/// Load configuration, reading `path` instead of `recipe-browser.toml` when given.
///
/// An explicit path must exist; the default file is optional.
pub fn load_config(path: Option<&Path>) -> Result<BrowserConfig, ConfigError> {
    let file = match path {
        Some(path) => File::from(path).required(true),
        None => File::with_name("recipe-browser").required(false),
    };

    let settings = Config::builder()
        .add_source(file)
        // Use double underscore for nested: RECIPE_BROWSER__HTML_OUTPUT
        .add_source(
            Environment::with_prefix("RECIPE_BROWSER")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("cuisines")
                .with_list_parse_key("meals"),
        )
        .build()?;

    settings.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_values() {
        assert_eq!(default_source(), "./api/recipes.json");
        assert_eq!(default_timeout(), 30);
    }

    #[test]
    fn test_browser_config_default() {
        let config = BrowserConfig::default();
        assert_eq!(config.source, "./api/recipes.json");
        assert_eq!(config.timeout, 30);
        assert!(config.cuisines.is_empty());
        assert!(config.meals.is_empty());
        assert!(config.html_output.is_none());
    }

    #[test]
    fn test_load_config_from_explicit_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            r#"
source = "https://example.com/recipes.json"
timeout = 5
cuisines = ["Italian", "Thai"]
"#
        )
        .unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.source, "https://example.com/recipes.json");
        assert_eq!(config.timeout, 5);
        assert_eq!(config.cuisines, vec!["Italian", "Thai"]);
        assert!(config.meals.is_empty());
    }

    #[test]
    fn test_load_config_requires_explicit_file() {
        let result = load_config(Some(Path::new("/definitely/not/here/browser.toml")));
        assert!(result.is_err());
    }
}
