use crate::domain::model::{ExportOutcome, SubscriberRecord};
use crate::domain::ports::Pipeline;
use crate::utils::error::{Result, SubscriberError};

/// How a run ended. Failures are captured here instead of being returned.
#[derive(Debug)]
pub enum RunReport {
    /// The component exists but nobody subscribes to it; nothing was exported.
    NoSubscribers { component_id: String },
    Completed {
        component_id: String,
        records: Vec<SubscriberRecord>,
        exports: Vec<ExportOutcome>,
    },
    Failed(SubscriberError),
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        match self {
            RunReport::NoSubscribers { .. } => true,
            RunReport::Completed { exports, .. } => exports.iter().all(ExportOutcome::is_written),
            RunReport::Failed(_) => false,
        }
    }

    /// Zero for clean runs (including zero matches), otherwise the highest
    /// severity among the failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunReport::NoSubscribers { .. } => 0,
            RunReport::Completed { exports, .. } => exports
                .iter()
                .filter_map(|outcome| outcome.result.as_ref().err())
                .map(SubscriberError::severity)
                .max()
                .map_or(0, |severity| severity.exit_code()),
            RunReport::Failed(e) => e.severity().exit_code(),
        }
    }
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> RunReport {
        let target = self.pipeline.target();
        tracing::info!(
            function = "run",
            component_name = target.name(),
            component_id = target.id(),
            "Starting subscriber export"
        );

        match self.execute().await {
            Ok(report) => report,
            Err(e) => {
                tracing::error!(
                    function = "run",
                    component_name = target.name(),
                    component_id = target.id(),
                    error = %e,
                    category = ?e.category(),
                    severity = ?e.severity(),
                    "Subscriber export failed"
                );
                RunReport::Failed(e)
            }
        }
    }

    async fn execute(&self) -> Result<RunReport> {
        let target = self.pipeline.target();

        // Extract
        let extraction = self.pipeline.extract().await?;
        let component_id = extraction.component_id.clone();

        // Transform
        let records = self.pipeline.transform(extraction).await?;

        if records.is_empty() {
            tracing::info!(
                function = "run",
                component_name = target.name(),
                component_id = %component_id,
                "No subscribers found for the specified component"
            );
            return Ok(RunReport::NoSubscribers { component_id });
        }

        // Load
        let exports = self.pipeline.load(&component_id, &records).await;

        tracing::info!(
            function = "run",
            component_name = target.name(),
            component_id = %component_id,
            subscribers_count = records.len(),
            "Subscribers found"
        );
        for record in &records {
            tracing::info!(subscriber = %record, "Subscriber");
        }

        Ok(RunReport::Completed {
            component_id,
            records,
            exports,
        })
    }
}
