use crate::config::validate_domain;
use crate::error::{ExportError, Result};
use crate::zone::assembler::GroupStats;
use crate::zone::{RawRecordRow, RecordGroups, TtlOverride, ZoneAssembler};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// MIME type of the exported file
pub const ZONE_MIME_TYPE: &str = "text/plain";

/// Domain used in the filename when the document names none
pub const FALLBACK_DOMAIN: &str = "zone";

static DOMAIN_LINE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"Domain:\s+([^\n]+)").unwrap());

/// Options for a single export request
#[derive(Debug, Clone)]
pub struct ExportOptions {
    pub ttl_override: TtlOverride,
    /// Zone domain printed in the banner
    pub domain: String,
    /// Console name for the provenance line
    pub source_label: String,
}

/// A finished zone file, ready to hand to a sink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub filename: String,
    pub mime_type: &'static str,
    pub content: String,
}

/// Result of a successful export
#[derive(Debug, Clone)]
pub struct ExportOutcome {
    pub artifact: ExportArtifact,
    pub stats: GroupStats,
}

/// Domain named by the document's `Domain:` banner line, without its trailing dot
pub fn domain_from_document(document: &str) -> String {
    DOMAIN_LINE_REGEX
        .captures(document)
        .and_then(|caps| caps.get(1))
        .map(|m| {
            let domain = m.as_str();
            domain.strip_suffix('.').unwrap_or(domain).to_string()
        })
        .unwrap_or_else(|| FALLBACK_DOMAIN.to_string())
}

/// `<domain>_zone_<YYYY-MM-DD>.txt`
pub fn export_filename(document: &str, date: DateTime<Utc>) -> String {
    format!(
        "{}_zone_{}.txt",
        domain_from_document(document),
        date.format("%Y-%m-%d")
    )
}

/// One-line comment naming where the records came from
pub fn provenance_line(source_label: &str) -> String {
    format!("; Zone file exported for {}\n", source_label)
}

/// Turn source rows into a zone file artifact.
///
/// Fails when there are no rows at all or the domain names no zone;
/// malformed rows are dropped.
pub fn export_zone(
    rows: &[RawRecordRow],
    options: &ExportOptions,
    now: DateTime<Utc>,
) -> Result<ExportOutcome> {
    validate_domain(&options.domain)?;
    if rows.is_empty() {
        return Err(ExportError::NoRecordsFound);
    }

    let groups = RecordGroups::from_rows(rows, &options.ttl_override);
    let stats = groups.stats();
    debug!("Record counts: {:?}", stats.per_type);

    let document = ZoneAssembler::new(&options.domain, now).assemble(&groups);
    let filename = export_filename(&document, now);

    info!(
        "Exported {} records for {} ({} rows dropped)",
        stats.total_records, options.domain, stats.dropped_rows
    );

    Ok(ExportOutcome {
        artifact: ExportArtifact {
            filename,
            mime_type: ZONE_MIME_TYPE,
            content: provenance_line(&options.source_label) + &document,
        },
        stats,
    })
}

/// Destination for finished zone files
#[async_trait]
pub trait ZoneSink: Send + Sync {
    /// Save the artifact, returning where it ended up
    async fn save(&self, artifact: &ExportArtifact) -> Result<String>;
}

/// Saves zone files into a directory
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl ZoneSink for FileSink {
    async fn save(&self, artifact: &ExportArtifact) -> Result<String> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| ExportError::SaveFailed(format!("{}: {}", self.dir.display(), e)))?;

        let path = self.dir.join(&artifact.filename);
        tokio::fs::write(&path, artifact.content.as_bytes())
            .await
            .map_err(|e| ExportError::SaveFailed(format!("{}: {}", path.display(), e)))?;

        info!("Saved zone file to {}", path.display());
        Ok(path.display().to_string())
    }
}
