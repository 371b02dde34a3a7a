use thiserror::Error;

/// The startup recipe document could not be retrieved or parsed
#[derive(Error, Debug)]
pub enum LoadError {
    /// Failed to fetch the document over HTTP
    #[error("Failed to fetch recipes: {0}")]
    FetchError(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("Failed to fetch recipes from {url}: HTTP {status}")]
    StatusError { url: String, status: u16 },

    /// Failed to read the document from disk
    #[error("Failed to read recipes from {path}: {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The document is not a JSON array of recipes
    #[error("Failed to parse recipes: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Errors surfaced by the browser shell around the recipe core
#[derive(Error, Debug)]
pub enum BrowserError {
    #[error(transparent)]
    Load(#[from] LoadError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    /// Failed to write the rendered surface
    #[error("Display error: {0}")]
    DisplayError(#[from] std::io::Error),

    /// A named recipe does not exist in the store
    #[error("No recipe titled '{0}'")]
    RecipeNotFound(String),
}

/// A sort mode name that is not one of the known modes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown sort mode '{0}' (expected relevance, time-asc, time-desc or alpha)")]
pub struct UnknownSortMode(pub String);

/// A line typed at the prompt that does not map to any UI event
#[derive(Error, Debug, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}' (type 'help' for a list)")]
    UnknownCommand(String),

    #[error("'{command}' needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error(transparent)]
    InvalidSort(#[from] UnknownSortMode),

    #[error("'{0}' is not a card number (cards are numbered from 1)")]
    InvalidCardNumber(String),
}
