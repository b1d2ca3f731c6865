use crate::error::ConfigError;
use crate::zone::TtlOverride;
use crate::zone::constants::NO_TTL_OVERRIDE;
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    /// TTL override; "0" keeps each record's own TTL
    pub ttl_override: String,

    /// Console name written on the provenance line
    pub source_label: String,

    /// Directory exported zone files are saved into
    pub output_dir: PathBuf,

    /// Zone domain for the banner (None = must come from the command line)
    pub domain: Option<String>,

    /// Whether CSV/TSV sources start with a header row
    pub has_headers: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            ttl_override: NO_TTL_OVERRIDE.to_string(),
            source_label: "Cloudflare".to_string(),
            output_dir: PathBuf::from("."),
            domain: None,
            has_headers: true,
        }
    }
}

/// File-based settings; every key is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    ttl: Option<TtlValue>,
    source: Option<String>,
    output_dir: Option<PathBuf>,
    domain: Option<String>,
    has_headers: Option<bool>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TtlValue {
    Number(u64),
    Text(String),
}

impl ExportConfig {
    /// Create an ExportConfig from environment variables
    /// Returns Err if an override is present but invalid
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Apply `ZONE_EXPORT_*` environment overrides on top of this config.
    /// Values are not validated here; later layers may still replace them.
    pub fn apply_env(&mut self) {
        if let Ok(ttl) = std::env::var("ZONE_EXPORT_TTL") {
            self.ttl_override = ttl.trim().to_string();
        }

        if let Ok(source) = std::env::var("ZONE_EXPORT_SOURCE") {
            self.source_label = source;
        }

        if let Ok(output_dir) = std::env::var("ZONE_EXPORT_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(output_dir);
        }

        if let Ok(domain) = std::env::var("ZONE_EXPORT_DOMAIN") {
            self.domain = Some(domain.trim().to_string());
        }

        if let Ok(has_headers) = std::env::var("ZONE_EXPORT_HAS_HEADERS") {
            self.has_headers = parse_bool(&has_headers, true);
        }
    }

    /// Parse configuration from TOML content, starting from defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        let mut config = Self::default();
        if let Some(ttl) = file.ttl {
            config.ttl_override = match ttl {
                TtlValue::Number(ttl) => ttl.to_string(),
                TtlValue::Text(ttl) => ttl.trim().to_string(),
            };
        }
        if let Some(source) = file.source {
            config.source_label = source;
        }
        if let Some(output_dir) = file.output_dir {
            config.output_dir = output_dir;
        }
        if let Some(domain) = file.domain {
            config.domain = Some(domain.trim().to_string());
        }
        if let Some(has_headers) = file.has_headers {
            config.has_headers = has_headers;
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_ttl_override(&self.ttl_override)?;

        if self.source_label.trim().is_empty() {
            return Err(ConfigError::InvalidSourceLabel(
                "Source label must not be empty".to_string(),
            ));
        }

        if let Some(domain) = &self.domain {
            validate_domain(domain)?;
        }

        Ok(())
    }

    pub fn ttl(&self) -> TtlOverride {
        TtlOverride::from(self.ttl_override.as_str())
    }
}

/// The override must be the "0" sentinel or a positive decimal TTL
pub fn validate_ttl_override(value: &str) -> Result<(), ConfigError> {
    if value == NO_TTL_OVERRIDE {
        return Ok(());
    }
    match value.parse::<u32>() {
        Ok(ttl) if ttl > 0 && value.bytes().all(|b| b.is_ascii_digit()) => Ok(()),
        _ => Err(ConfigError::InvalidTtlOverride(value.to_string())),
    }
}

/// A banner domain must name more than the root label
pub fn validate_domain(domain: &str) -> Result<(), ConfigError> {
    if domain.trim().trim_end_matches('.').is_empty() {
        return Err(ConfigError::InvalidDomain(format!(
            "{:?} names no zone",
            domain
        )));
    }
    Ok(())
}

fn parse_bool(value: &str, default: bool) -> bool {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => true,
        "0" | "false" | "no" | "off" => false,
        _ => default,
    }
}
