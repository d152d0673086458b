pub mod env;

pub use env::StatuspageConfig;

#[cfg(feature = "cli")]
use crate::domain::model::{ComponentTarget, ExportTargets};
#[cfg(feature = "cli")]
use crate::utils::error::{Result, SubscriberError};
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::{ArgGroup, Parser};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "statuspage-subscribers")]
#[command(about = "Get subscribers for a specific component (by either component ID or component name) from Atlassian Statuspage")]
#[command(group(
    ArgGroup::new("component")
        .required(true)
        .multiple(true)
        .args(["component_name", "component_id"])
))]
pub struct CliConfig {
    /// Name of the component to retrieve subscribers for
    #[arg(long)]
    pub component_name: Option<String>,

    /// ID of the component to retrieve subscribers for (skips the name lookup)
    #[arg(long)]
    pub component_id: Option<String>,

    /// Output CSV file to save the subscribers
    #[arg(long)]
    pub out_csv: Option<PathBuf>,

    /// Output JSON file to save the subscribers
    #[arg(long)]
    pub out_json: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn target(&self) -> Result<ComponentTarget> {
        ComponentTarget::from_options(self.component_name.clone(), self.component_id.clone())
            .ok_or_else(|| SubscriberError::MissingConfig {
                field: "--component-name or --component-id".to_string(),
            })
    }

    pub fn export_targets(&self) -> ExportTargets {
        ExportTargets {
            csv: self.out_csv.clone(),
            json: self.out_json.clone(),
        }
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match self.target()? {
            ComponentTarget::Id(id) => validate_non_empty_string("component_id", &id)?,
            ComponentTarget::Name(name) => validate_non_empty_string("component_name", &name)?,
        }

        if let Some(path) = &self.out_csv {
            validate_path("out_csv", &path.to_string_lossy())?;
        }
        if let Some(path) = &self.out_json {
            validate_path("out_json", &path.to_string_lossy())?;
        }

        Ok(())
    }
}
