pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{http::StatuspageClient, storage::LocalStorage};
pub use config::StatuspageConfig;
pub use core::{
    engine::{EtlEngine, RunReport},
    pipeline::SubscriberPipeline,
};
pub use domain::model::{ComponentTarget, ExportFormat, ExportTargets, SubscriberRecord};
pub use utils::error::{Result, SubscriberError};
