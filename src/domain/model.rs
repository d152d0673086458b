use crate::utils::error::SubscriberError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::path::PathBuf;

/// A status page component. Fields other than `id` and `name` are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub id: String,
    pub name: String,
}

/// A subscriber as returned by the subscriber listing.
///
/// The exported fields are kept as raw JSON so a value of an unexpected
/// type on any subscriber never fails the page decode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Subscriber {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub email: Option<Value>,
    #[serde(default)]
    pub created_at: Option<Value>,
    #[serde(default)]
    pub mode: Option<Value>,
    #[serde(default)]
    pub phone_number: Option<Value>,
    /// Component ids this subscriber follows; `null` or missing means none.
    #[serde(default)]
    pub components: Option<Vec<String>>,
}

impl Subscriber {
    pub fn is_subscribed_to(&self, component_id: &str) -> bool {
        self.components
            .as_deref()
            .is_some_and(|ids| ids.iter().any(|id| id == component_id))
    }
}

/// The exported projection of a [`Subscriber`]. Field order is the column
/// order of the CSV export and the key order of the JSON export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriberRecord {
    pub id: Option<Value>,
    pub email: Option<Value>,
    pub created_at: Option<Value>,
    pub mode: Option<Value>,
    pub phone_number: Option<Value>,
}

impl SubscriberRecord {
    pub const FIELDS: [&'static str; 5] = ["id", "email", "created_at", "mode", "phone_number"];

    /// One CSV cell per field: empty for absent or `null`, the bare text for
    /// strings, JSON text for anything else.
    pub fn csv_row(&self) -> [String; 5] {
        [
            csv_cell(&self.id),
            csv_cell(&self.email),
            csv_cell(&self.created_at),
            csv_cell(&self.mode),
            csv_cell(&self.phone_number),
        ]
    }
}

fn csv_cell(value: &Option<Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}

// 日誌中以單行 JSON 顯示
impl fmt::Display for SubscriberRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl From<&Subscriber> for SubscriberRecord {
    fn from(subscriber: &Subscriber) -> Self {
        Self {
            id: subscriber.id.clone(),
            email: subscriber.email.clone(),
            created_at: subscriber.created_at.clone(),
            mode: subscriber.mode.clone(),
            phone_number: subscriber.phone_number.clone(),
        }
    }
}

/// How the caller identified the component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentTarget {
    Id(String),
    Name(String),
}

impl ComponentTarget {
    /// An explicit id always wins over a name; `None` when neither is given.
    pub fn from_options(name: Option<String>, id: Option<String>) -> Option<Self> {
        match (id, name) {
            (Some(id), _) => Some(ComponentTarget::Id(id)),
            (None, Some(name)) => Some(ComponentTarget::Name(name)),
            (None, None) => None,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            ComponentTarget::Name(name) => Some(name),
            ComponentTarget::Id(_) => None,
        }
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            ComponentTarget::Id(id) => Some(id),
            ComponentTarget::Name(_) => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExportFormat::Csv => write!(f, "csv"),
            ExportFormat::Json => write!(f, "json"),
        }
    }
}

/// Requested output destinations. Either may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportTargets {
    pub csv: Option<PathBuf>,
    pub json: Option<PathBuf>,
}

impl ExportTargets {
    /// CSV first, then JSON.
    pub fn requested(&self) -> Vec<(ExportFormat, PathBuf)> {
        let mut targets = Vec::new();
        if let Some(path) = &self.csv {
            targets.push((ExportFormat::Csv, path.clone()));
        }
        if let Some(path) = &self.json {
            targets.push((ExportFormat::Json, path.clone()));
        }
        targets
    }
}

/// Result of one exporter run. Exporters are independent, so a run may
/// hold a failed CSV outcome next to a written JSON file.
#[derive(Debug)]
pub struct ExportOutcome {
    pub format: ExportFormat,
    pub path: PathBuf,
    pub result: Result<(), SubscriberError>,
}

impl ExportOutcome {
    pub fn is_written(&self) -> bool {
        self.result.is_ok()
    }
}

/// Output of the extract step: the resolved component id and every
/// subscriber on the page.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub component_id: String,
    pub subscribers: Vec<Subscriber>,
}
