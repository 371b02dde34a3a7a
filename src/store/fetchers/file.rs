use async_trait::async_trait;
use log::debug;

use super::Fetcher;
use crate::error::LoadError;

/// Reads the recipe document from the local filesystem.
pub struct FileFetcher;

#[async_trait]
impl Fetcher for FileFetcher {
    async fn fetch(&self, location: &str) -> Result<String, LoadError> {
        debug!("Reading {}", location);
        tokio::fs::read_to_string(location)
            .await
            .map_err(|source| LoadError::IoError {
                path: location.to_string(),
                source,
            })
    }
}
