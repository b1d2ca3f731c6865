//! Shared fixtures for zone export tests

#![allow(dead_code)] // Not every test file uses every helper

use chrono::{DateTime, TimeZone, Utc};
use zone_export::export::ExportOptions;
use zone_export::zone::{RawRecordRow, TtlOverride};

/// Fixed export time so documents are reproducible
pub fn export_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 12, 30, 45).unwrap()
}

pub fn row(name: &str, ttl: &str, rtype: &str, data: &str) -> RawRecordRow {
    RawRecordRow::new(name, ttl, rtype, data)
}

/// A representative console listing covering every formatted type
pub fn sample_rows() -> Vec<RawRecordRow> {
    vec![
        row("example.com", "", "NS", "ns1.example.net"),
        row("example.com", "300", "A", "192.0.2.1"),
        row("www.example.com", "Auto", "CNAME", "example.com"),
        row(
            "example.com",
            "3600",
            "MX",
            "Priority: 10\nDestination: mail.example.com",
        ),
        row(
            "_sip._tcp.example.com",
            "",
            "SRV",
            "Priority: 10\nWeight: 5\nPort: 5060\nTarget: sip.example.com",
        ),
        row("example.com", "", "TXT", "\"v=spf1 include:_spf.example.net ~all\""),
        row("example.com", "", "AAAA", "2001:db8::1"),
    ]
}

pub fn options(ttl: &str) -> ExportOptions {
    ExportOptions {
        ttl_override: TtlOverride::from(ttl),
        domain: "example.com".to_string(),
        source_label: "Cloudflare".to_string(),
    }
}

/// A DKIM public key of exactly `len` characters
pub fn dkim_key(len: usize) -> String {
    let prefix = "v=DKIM1; k=rsa; p=";
    let body: String = "MIIBIjANBgkqhkiG9w0BAQEFAAOCAQ8AMIIBCgKCAQEA"
        .chars()
        .cycle()
        .take(len - prefix.len())
        .collect();
    format!("{}{}", prefix, body)
}
