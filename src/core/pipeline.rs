use crate::core::collector::collect_all;
use crate::core::export::render;
use crate::core::filter::filter_by_component;
use crate::core::resolver::resolve_component_id;
use crate::domain::model::{
    ComponentTarget, ExportOutcome, ExportTargets, Extraction, SubscriberRecord,
};
use crate::domain::ports::{DirectoryClient, Pipeline, Storage};
use crate::utils::error::Result;

/// Resolve, collect, filter and export the subscribers of one component.
pub struct SubscriberPipeline<D: DirectoryClient, S: Storage> {
    client: D,
    storage: S,
    target: ComponentTarget,
    exports: ExportTargets,
}

impl<D: DirectoryClient, S: Storage> SubscriberPipeline<D, S> {
    pub fn new(
        client: D,
        storage: S,
        target: ComponentTarget,
        exports: ExportTargets,
    ) -> Self {
        Self {
            client,
            storage,
            target,
            exports,
        }
    }
}

#[async_trait::async_trait]
impl<D: DirectoryClient, S: Storage> Pipeline for SubscriberPipeline<D, S> {
    fn target(&self) -> &ComponentTarget {
        &self.target
    }

    async fn extract(&self) -> Result<Extraction> {
        let component_id = match &self.target {
            ComponentTarget::Id(id) => id.clone(),
            ComponentTarget::Name(name) => resolve_component_id(&self.client, name).await?,
        };

        tracing::info!(
            function = "extract",
            component_id = %component_id,
            "Collecting subscribers"
        );
        let subscribers = collect_all(&self.client, self.client.max_pages()).await?;

        Ok(Extraction {
            component_id,
            subscribers,
        })
    }

    async fn transform(&self, extraction: Extraction) -> Result<Vec<SubscriberRecord>> {
        let records = filter_by_component(&extraction.subscribers, &extraction.component_id);
        tracing::info!(
            function = "transform",
            component_id = %extraction.component_id,
            total_subscribers = extraction.subscribers.len(),
            component_subscribers_count = records.len(),
            "Filtered subscribers by component"
        );
        Ok(records)
    }

    async fn load(&self, component_id: &str, records: &[SubscriberRecord]) -> Vec<ExportOutcome> {
        let mut outcomes = Vec::new();

        // 每個輸出格式各自獨立，一個失敗不影響另一個
        for (format, path) in self.exports.requested() {
            let result = match render(format, records) {
                Ok(bytes) => self.storage.write_file(&path, &bytes).await,
                Err(e) => Err(e),
            };

            match &result {
                Ok(()) => tracing::info!(
                    function = "load",
                    component_name = self.target.name(),
                    component_id,
                    format = %format,
                    path = %path.display(),
                    "Subscribers saved to file"
                ),
                Err(e) => tracing::error!(
                    function = "load",
                    component_name = self.target.name(),
                    component_id,
                    format = %format,
                    path = %path.display(),
                    error = %e,
                    "Failed to save subscribers"
                ),
            }

            outcomes.push(ExportOutcome {
                format,
                path,
                result,
            });
        }

        outcomes
    }
}
