use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid TTL override: {0}")]
    InvalidTtlOverride(String),

    #[error("Invalid source label: {0}")]
    InvalidSourceLabel(String),

    #[error("Invalid domain: {0}")]
    InvalidDomain(String),

    #[error("No zone domain configured (use --domain or --hostname)")]
    MissingDomain,

    #[error("Configuration parse error: {0}")]
    ParseError(String),

    #[error("Failed to read configuration file: {0}")]
    Io(String),
}

#[derive(Error, Debug, Clone)]
pub enum ExportError {
    #[error("No DNS records found in source")]
    NoRecordsFound,

    #[error("Failed to extract DNS records: {0}")]
    ExtractionFailed(String),

    #[error("Failed to save zone file: {0}")]
    SaveFailed(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl ExportError {
    /// Short message shown to the user in place of the export status
    pub fn status_message(&self) -> &'static str {
        match self {
            Self::NoRecordsFound => "No DNS records found to export",
            Self::ExtractionFailed(_) | Self::SaveFailed(_) => "Failed to export DNS records",
            Self::Config(_) => "Invalid export configuration",
        }
    }
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::ExtractionFailed(err.to_string())
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::ExtractionFailed(err.to_string())
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::ExtractionFailed(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
