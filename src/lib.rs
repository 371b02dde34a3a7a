pub mod builder;
pub mod command;
pub mod config;
pub mod controller;
pub mod error;
pub mod model;
pub mod query;
pub mod render;
pub mod store;

use std::time::Duration;

// Re-export main types
pub use builder::{RecipeBrowser, RecipeBrowserBuilder};
pub use command::{parse_command, Command};
pub use config::BrowserConfig;
pub use controller::{Controller, Event, Key, Overlay};
pub use error::{BrowserError, CommandError, LoadError, UnknownSortMode};
pub use model::{FilterCriteria, Recipe, RecipeId, SortMode};
pub use query::query;
pub use render::{HtmlPainter, Painter, Surface, TerminalPainter};
pub use store::RecipeStore;

/// Load the recipe document at `location` (an http(s) URL or a file path)
///
/// # Example
/// ```no_run
/// # use recipe_browser::load_recipes;
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let recipes = load_recipes("./api/recipes.json").await?;
/// println!("{} recipes", recipes.len());
/// # Ok(())
/// # }
/// ```
pub async fn load_recipes(location: &str) -> Result<Vec<Recipe>, LoadError> {
    store::load(location, None).await
}

/// Load the recipe document, giving up on HTTP requests after `timeout`
pub async fn load_recipes_with_timeout(
    location: &str,
    timeout: Duration,
) -> Result<Vec<Recipe>, LoadError> {
    store::load(location, Some(timeout)).await
}
