use crate::model::{SourceError, StoreData};
use crate::source::traits::ProductSource;
use std::path::PathBuf;

/// Reads a `response.json` asset from disk.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

#[async_trait::async_trait]
impl ProductSource for FileSource {
    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }

    async fn fetch(&self) -> Result<Vec<StoreData>, SourceError> {
        let content = tokio::fs::read_to_string(&self.path).await?;
        let data = serde_json::from_str(&content)?;
        Ok(data)
    }
}
