use super::formatter::format_row;
use super::record::{FormattedRecord, RawRecordRow, RecordType};
use super::ttl::TtlOverride;
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;
use tracing::debug;

/// Timestamp layout used in the banner's "Exported" line
pub const BANNER_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const DISCLAIMER: &str = ";;
;; This file is intended for use for informational and archival
;; purposes ONLY and MUST be edited before use on a production
;; DNS server.  In particular, you must:
;;   -- update the SOA record with the correct authoritative name server
;;   -- update the SOA record with the contact e-mail address information
;;   -- update the NS record(s) with the authoritative name servers for this domain.
;;
;; For further information, please consult the BIND documentation
;; located on the following website:
;;
;; http://www.isc.org/
;;
;; And RFC 1035:
;;
;; http://www.ietf.org/rfc/rfc1035.txt
;;
;; Please note that we do NOT offer technical support for any use
;; of this zone data, the BIND name server, or any other third-party
;; DNS software.
;;
;; Use at your own risk.
";

/// Formatted records grouped by type, each group in row order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordGroups {
    groups: [Vec<FormattedRecord>; 7],
    dropped: usize,
}

/// Record counts for an export
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupStats {
    pub total_records: usize,
    pub dropped_rows: usize,
    pub per_type: BTreeMap<RecordType, usize>,
}

impl RecordGroups {
    /// Create empty groups for every supported type
    pub fn new() -> Self {
        Self::default()
    }

    /// Format every row and group the results
    pub fn from_rows<'a, I>(rows: I, ttl_override: &TtlOverride) -> Self
    where
        I: IntoIterator<Item = &'a RawRecordRow>,
    {
        let mut groups = Self::new();
        for row in rows {
            match format_row(row, ttl_override) {
                Some(record) => groups.push(record),
                None => groups.dropped += 1,
            }
        }
        groups
    }

    /// Append a record to its type's group
    pub fn push(&mut self, record: FormattedRecord) {
        self.groups[record.rtype.index()].push(record);
    }

    /// Records of one type, in insertion order
    pub fn get(&self, rtype: RecordType) -> &[FormattedRecord] {
        &self.groups[rtype.index()]
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(Vec::is_empty)
    }

    pub fn stats(&self) -> GroupStats {
        let per_type: BTreeMap<_, _> = RecordType::ALL
            .iter()
            .map(|rtype| (*rtype, self.get(*rtype).len()))
            .collect();

        GroupStats {
            total_records: per_type.values().sum(),
            dropped_rows: self.dropped,
            per_type,
        }
    }
}

/// Builds the zone document: banner first, then one section per type
#[derive(Debug, Clone)]
pub struct ZoneAssembler {
    domain: String,
    exported_at: DateTime<Utc>,
}

impl ZoneAssembler {
    pub fn new(domain: impl Into<String>, exported_at: DateTime<Utc>) -> Self {
        Self {
            domain: domain.into(),
            exported_at,
        }
    }

    /// The disclaimer banner for this domain and timestamp
    pub fn banner(&self) -> String {
        format!(
            ";;\n;; Domain:     {}\n;; Exported:   {}\n{}",
            self.domain,
            self.exported_at.format(BANNER_TIME_FORMAT),
            DISCLAIMER
        )
    }

    /// Assemble the full zone document
    pub fn assemble(&self, groups: &RecordGroups) -> String {
        let sections: Vec<String> = RecordType::ALL
            .iter()
            .map(|rtype| section(*rtype, groups.get(*rtype)))
            .filter(|section| !section.ends_with("Records\n"))
            .collect();

        debug!(
            "Assembled zone {} with {} non-empty sections",
            self.domain,
            sections.len()
        );

        let mut document = self.banner();
        for section in sections {
            document.push('\n');
            document.push_str(&section);
            document.push('\n');
        }
        document
    }
}

fn section(rtype: RecordType, records: &[FormattedRecord]) -> String {
    let body = records
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");
    format!(";; {} Records\n{}", rtype, body)
}

/// Zone domain from a console hostname: everything after the first label.
///
/// Returns `None` when nothing but the root label would remain.
pub fn domain_from_hostname(hostname: &str) -> Option<&str> {
    let domain = hostname
        .split_once('.')
        .map_or(hostname, |(_, rest)| rest);
    if domain.trim_end_matches('.').is_empty() {
        None
    } else {
        Some(domain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_from_hostname() {
        assert_eq!(domain_from_hostname("dash.example.com"), Some("example.com"));
        assert_eq!(domain_from_hostname("localhost"), Some("localhost"));
        assert_eq!(domain_from_hostname("example."), None);
        assert_eq!(domain_from_hostname("example.."), None);
        assert_eq!(domain_from_hostname(""), None);
    }

    #[test]
    fn test_empty_sections_filtered() {
        let assembler = ZoneAssembler::new("example.com", DateTime::<Utc>::UNIX_EPOCH);
        let document = assembler.assemble(&RecordGroups::new());
        assert_eq!(document, assembler.banner());
        assert!(!document.contains("Records"));
    }
}
