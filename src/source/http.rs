use crate::model::{SourceError, StoreData};
use crate::source::traits::ProductSource;
use reqwest::Client;
use tracing::info;

/// Fetches `response.json` over HTTP.
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    pub fn new(client: Client, url: String) -> Self {
        Self { client, url }
    }
}

#[async_trait::async_trait]
impl ProductSource for HttpSource {
    fn describe(&self) -> String {
        format!("http {}", self.url)
    }

    async fn fetch(&self) -> Result<Vec<StoreData>, SourceError> {
        info!("GET {}", self.url);
        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(SourceError::Status(response.status()));
        }

        let body = response.text().await?;
        let data = serde_json::from_str(&body)?;
        Ok(data)
    }
}
