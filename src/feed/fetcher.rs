use reqwest::Client;

use crate::config::HttpConfig;
use crate::error::{AppError, Result};
use crate::models::ComicItem;

pub struct ComicFetcher {
    client: Client,
}

impl ComicFetcher {
    pub fn new(http: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(http.timeout)
            .connect_timeout(http.connect_timeout)
            .user_agent(http.user_agent.as_str())
            .build()?;

        Ok(Self { client })
    }

    /// Fetch the comic listing and decode it, keeping the upstream order.
    pub async fn fetch_items(&self, url: &str) -> Result<Vec<ComicItem>> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Status {
                status,
                url: url.to_string(),
            });
        }

        let bytes = response.bytes().await?;
        tracing::debug!("Fetched {} bytes from {}", bytes.len(), url);

        let items = decode_items(&bytes)?;
        tracing::debug!("Decoded {} comic items", items.len());

        Ok(items)
    }
}

pub fn decode_items(body: &[u8]) -> Result<Vec<ComicItem>> {
    Ok(serde_json::from_slice(body)?)
}
