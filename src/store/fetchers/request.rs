use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::time::Duration;

use super::Fetcher;
use crate::error::LoadError;

/// Fetches the recipe document over HTTP(S).
pub struct RequestFetcher {
    client: Client,
}

impl RequestFetcher {
    pub fn new(timeout: Option<Duration>) -> Result<Self, LoadError> {
        let timeout = timeout.unwrap_or(Duration::from_secs(30));
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("recipe-browser/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetcher for RequestFetcher {
    async fn fetch(&self, location: &str) -> Result<String, LoadError> {
        debug!("GET {}", location);
        let response = self.client.get(location).send().await?;

        if !response.status().is_success() {
            return Err(LoadError::StatusError {
                url: location.to_string(),
                status: response.status().as_u16(),
            });
        }

        Ok(response.text().await?)
    }
}
