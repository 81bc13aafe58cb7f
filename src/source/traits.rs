use crate::model::{SourceError, StoreData};

#[async_trait::async_trait]
pub trait ProductSource: Send + Sync {
    /// Human readable origin, used in logs.
    fn describe(&self) -> String;

    async fn fetch(&self) -> Result<Vec<StoreData>, SourceError>;
}
