use crate::domain::model::{
    Component, ComponentTarget, ExportOutcome, Extraction, Subscriber, SubscriberRecord,
};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Read access to the status page directory (components and subscribers).
#[async_trait]
pub trait DirectoryClient: Send + Sync {
    async fn list_components(&self) -> Result<Vec<Component>>;
    /// One zero-based page of subscribers. An empty page ends the listing.
    async fn list_subscribers(&self, page: u32) -> Result<Vec<Subscriber>>;
    /// Most subscriber pages to fetch before the listing is treated as runaway.
    fn max_pages(&self) -> u32;
}

pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &Path,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    fn target(&self) -> &ComponentTarget;
    async fn extract(&self) -> Result<Extraction>;
    async fn transform(&self, extraction: Extraction) -> Result<Vec<SubscriberRecord>>;
    async fn load(&self, component_id: &str, records: &[SubscriberRecord]) -> Vec<ExportOutcome>;
}
