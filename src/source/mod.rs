pub mod file;
pub mod generated;
pub mod http;
pub mod traits;

pub use file::FileSource;
pub use generated::GeneratedSource;
pub use http::HttpSource;
pub use traits::ProductSource;

use crate::config::SourceConfig;
use reqwest::Client;
use std::time::Duration;

pub fn http_client() -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent("Mozilla/5.0 (X11; Linux x86_64) RabatjaegerBot/0.1")
        .timeout(Duration::from_secs(10))
        .build()
}

/// Instantiates the configured sources, sharing one HTTP client.
pub fn build_sources(configs: &[SourceConfig], client: &Client) -> Vec<Box<dyn ProductSource>> {
    configs
        .iter()
        .map(|cfg| -> Box<dyn ProductSource> {
            match cfg {
                SourceConfig::Generated { count } => Box::new(GeneratedSource::new(*count)),
                SourceConfig::File { path } => Box::new(FileSource::new(path.clone())),
                SourceConfig::Http { url } => Box::new(HttpSource::new(client.clone(), url.clone())),
            }
        })
        .collect()
}
