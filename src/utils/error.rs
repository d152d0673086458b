use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubscriberError {
    #[error("Upstream request for '{resource}' failed: {status} - {body}")]
    UpstreamRequest {
        resource: String,
        status: u16,
        body: String,
    },

    #[error("Component '{name}' not found")]
    ComponentNotFound { name: String },

    #[error("Pagination did not terminate within {max_pages} pages")]
    PaginationLimitExceeded { max_pages: u32 },

    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("CSV processing error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfig { field: String },

    #[error("Invalid value for {field} ('{value}'): {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Upstream,
    Lookup,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// 根據錯誤嚴重程度決定退出碼；2 保留給 clap 的參數錯誤
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 4,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl SubscriberError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SubscriberError::UpstreamRequest { .. } | SubscriberError::Http(_) => {
                ErrorCategory::Upstream
            }
            SubscriberError::ComponentNotFound { .. }
            | SubscriberError::PaginationLimitExceeded { .. } => ErrorCategory::Lookup,
            SubscriberError::Csv(_) | SubscriberError::Io(_) | SubscriberError::Serialization(_) => {
                ErrorCategory::Output
            }
            SubscriberError::InvalidUrl(_)
            | SubscriberError::Config { .. }
            | SubscriberError::MissingConfig { .. }
            | SubscriberError::InvalidConfigValue { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Upstream => ErrorSeverity::Medium,
            ErrorCategory::Lookup | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SubscriberError::UpstreamRequest {
                resource, status, ..
            } => format!("Statuspage rejected the {} request (HTTP {})", resource, status),
            SubscriberError::ComponentNotFound { name } => {
                format!("No component named '{}' exists on this page", name)
            }
            SubscriberError::PaginationLimitExceeded { max_pages } => format!(
                "Subscriber listing still returned data after {} pages",
                max_pages
            ),
            SubscriberError::Http(e) if e.is_timeout() => {
                "Statuspage did not answer before the request timed out".to_string()
            }
            SubscriberError::Http(_) => "Could not reach the Statuspage API".to_string(),
            SubscriberError::Csv(_) | SubscriberError::Io(_) | SubscriberError::Serialization(_) => {
                format!("Could not write output: {}", self)
            }
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SubscriberError::UpstreamRequest { status: 401, .. }
            | SubscriberError::UpstreamRequest { status: 403, .. } => {
                "Check that STATUSPAGE_TOKEN is valid and has access to this page"
            }
            SubscriberError::UpstreamRequest { status: 404, .. } => {
                "Check that STATUSPAGE_PAGE_ID names an existing page"
            }
            SubscriberError::UpstreamRequest { .. } | SubscriberError::Http(_) => {
                "Retry later or raise STATUSPAGE_TIMEOUT_SECONDS"
            }
            SubscriberError::ComponentNotFound { .. } => {
                "Check the component name spelling or pass --component-id instead"
            }
            SubscriberError::PaginationLimitExceeded { .. } => {
                "Raise STATUSPAGE_MAX_PAGES if the page really has that many subscribers"
            }
            SubscriberError::Csv(_) | SubscriberError::Io(_) | SubscriberError::Serialization(_) => {
                "Check that the output location is writable"
            }
            SubscriberError::InvalidUrl(_)
            | SubscriberError::Config { .. }
            | SubscriberError::MissingConfig { .. }
            | SubscriberError::InvalidConfigValue { .. } => {
                "Fix the environment configuration and run again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, SubscriberError>;
