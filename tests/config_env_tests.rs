//! Environment overrides for ExportConfig.
//!
//! Everything lives in a single test: the process environment is shared
//! between test threads, so the steps must run in order.

use std::path::PathBuf;
use zone_export::config::ExportConfig;
use zone_export::error::ConfigError;
use zone_export::zone::TtlOverride;

const VARS: [&str; 5] = [
    "ZONE_EXPORT_TTL",
    "ZONE_EXPORT_SOURCE",
    "ZONE_EXPORT_OUTPUT_DIR",
    "ZONE_EXPORT_DOMAIN",
    "ZONE_EXPORT_HAS_HEADERS",
];

fn set(key: &str, value: &str) {
    // SAFETY: no other thread in this test binary reads the environment
    unsafe { std::env::set_var(key, value) };
}

fn clear_all() {
    for key in VARS {
        // SAFETY: as above
        unsafe { std::env::remove_var(key) };
    }
}

#[test]
fn test_environment_overrides() {
    clear_all();
    assert_eq!(ExportConfig::from_env().unwrap(), ExportConfig::default());

    // Every variable is picked up
    set("ZONE_EXPORT_TTL", " 600 ");
    set("ZONE_EXPORT_SOURCE", "Example DNS");
    set("ZONE_EXPORT_OUTPUT_DIR", "/tmp/zones");
    set("ZONE_EXPORT_DOMAIN", "example.com");
    set("ZONE_EXPORT_HAS_HEADERS", "false");

    let config = ExportConfig::from_env().unwrap();
    assert_eq!(config.ttl(), TtlOverride::Force("600".to_string()));
    assert_eq!(config.source_label, "Example DNS");
    assert_eq!(config.output_dir, PathBuf::from("/tmp/zones"));
    assert_eq!(config.domain.as_deref(), Some("example.com"));
    assert!(!config.has_headers);

    // Environment wins over the config file
    let mut config = ExportConfig::from_toml_str("ttl = 120\nhas_headers = true\n").unwrap();
    config.apply_env();
    assert_eq!(config.ttl_override, "600");
    assert!(!config.has_headers);

    // An invalid TTL is rejected once validated
    set("ZONE_EXPORT_TTL", "1h");
    assert_eq!(
        ExportConfig::from_env(),
        Err(ConfigError::InvalidTtlOverride("1h".to_string()))
    );

    // ...but applying it alone does not fail, so a later layer can replace it
    let mut config = ExportConfig::default();
    config.apply_env();
    assert_eq!(config.ttl_override, "1h");
    config.ttl_override = "300".to_string();
    assert!(config.validate().is_ok());

    set("ZONE_EXPORT_TTL", "0");
    set("ZONE_EXPORT_DOMAIN", ".");
    assert!(matches!(
        ExportConfig::from_env(),
        Err(ConfigError::InvalidDomain(_))
    ));

    clear_all();
}
