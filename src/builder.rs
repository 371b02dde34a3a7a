use std::time::Duration;

use crate::config::BrowserConfig;
use crate::controller::Controller;
use crate::error::LoadError;
use crate::store;

/// Builder for configuring and starting a recipe browser
#[derive(Debug, Clone, Default)]
pub struct RecipeBrowserBuilder {
    source: Option<String>,
    timeout: Option<Duration>,
    cuisines: Vec<String>,
    meals: Vec<String>,
}

impl RecipeBrowserBuilder {
    /// Set the location of the recipe document
    ///
    /// `http://` and `https://` locations are fetched, anything else is read
    /// as a file path.
    ///
    /// # Example
    /// ```
    /// use recipe_browser::RecipeBrowser;
    ///
    /// let builder = RecipeBrowser::builder()
    ///     .source("https://example.com/api/recipes.json");
    /// ```
    pub fn source(mut self, location: impl Into<String>) -> Self {
        self.source = Some(location.into());
        self
    }

    /// Set a timeout for HTTP requests
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Offer these cuisine checkboxes instead of the ones found in the recipes
    ///
    /// # Example
    /// ```
    /// use recipe_browser::RecipeBrowser;
    ///
    /// let builder = RecipeBrowser::builder()
    ///     .source("recipes.json")
    ///     .cuisines(["Italian", "Thai"]);
    /// ```
    pub fn cuisines<I, S>(mut self, cuisines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cuisines = cuisines.into_iter().map(Into::into).collect();
        self
    }

    /// Offer these meal checkboxes instead of the ones found in the recipes
    pub fn meals<I, S>(mut self, meals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.meals = meals.into_iter().map(Into::into).collect();
        self
    }

    /// Location that will be loaded
    pub fn location(&self) -> String {
        self.source
            .clone()
            .unwrap_or_else(|| BrowserConfig::default().source)
    }

    /// A controller that has not loaded anything yet, for callers that run the
    /// load themselves (see [`RecipeBrowserBuilder::load`])
    pub fn pending(&self) -> Controller {
        Controller::new(self.cuisines.clone(), self.meals.clone())
    }

    /// Fetch and parse the configured recipe document
    pub async fn load(&self) -> Result<Vec<crate::Recipe>, LoadError> {
        store::load(&self.location(), self.timeout).await
    }

    /// Load the recipes and return a controller with the initial list rendered
    ///
    /// A failed load is logged and leaves the browser empty, it is not an error.
    ///
    /// # Example
    /// ```no_run
    /// # use recipe_browser::RecipeBrowser;
    /// # #[tokio::main]
    /// # async fn main() {
    /// let browser = RecipeBrowser::builder()
    ///     .source("./api/recipes.json")
    ///     .build()
    ///     .await;
    /// println!("{} recipes", browser.surface().results_count());
    /// # }
    /// ```
    pub async fn build(self) -> Controller {
        let mut controller = self.pending();
        controller.finish_load(self.load().await);
        controller
    }

    /// Like [`RecipeBrowserBuilder::build`] but a failed load is returned as an error
    pub async fn try_build(self) -> Result<Controller, LoadError> {
        let recipes = self.load().await?;
        let mut controller = self.pending();
        controller.finish_load(Ok(recipes));
        Ok(controller)
    }
}

impl From<&BrowserConfig> for RecipeBrowserBuilder {
    fn from(config: &BrowserConfig) -> Self {
        RecipeBrowser::builder()
            .source(config.source.clone())
            .timeout(Duration::from_secs(config.timeout))
            .cuisines(config.cuisines.clone())
            .meals(config.meals.clone())
    }
}

/// Main entry point for the builder API
pub struct RecipeBrowser;

impl RecipeBrowser {
    /// Creates a new builder for the recipe browser
    ///
    /// # Example
    /// ```
    /// use recipe_browser::RecipeBrowser;
    ///
    /// let builder = RecipeBrowser::builder();
    /// ```
    pub fn builder() -> RecipeBrowserBuilder {
        RecipeBrowserBuilder::default()
    }
}
