mod file;
mod request;

pub use file::FileFetcher;
pub use request::RequestFetcher;

use async_trait::async_trait;
use std::time::Duration;

use crate::error::LoadError;

/// Retrieves the raw startup document from one kind of location
#[async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, location: &str) -> Result<String, LoadError>;
}

/// True for locations served over HTTP(S); everything else is a file path.
pub fn is_remote(location: &str) -> bool {
    let lower = location.trim_start().to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Pick the fetcher that understands `location`.
pub fn fetcher_for(
    location: &str,
    timeout: Option<Duration>,
) -> Result<Box<dyn Fetcher>, LoadError> {
    if is_remote(location) {
        Ok(Box::new(RequestFetcher::new(timeout)?))
    } else {
        Ok(Box::new(FileFetcher))
    }
}
