use std::path::PathBuf;
use zone_export::config::ExportConfig;
use zone_export::error::ConfigError;
use zone_export::zone::TtlOverride;

#[test]
fn test_default_config() {
    let config = ExportConfig::default();
    assert_eq!(config.ttl_override, "0");
    assert_eq!(config.ttl(), TtlOverride::Inherit);
    assert_eq!(config.source_label, "Cloudflare");
    assert_eq!(config.output_dir, PathBuf::from("."));
    assert_eq!(config.domain, None);
    assert!(config.has_headers);
    assert!(config.validate().is_ok());
}

#[test]
fn test_toml_config() {
    let config = ExportConfig::from_toml_str(
        r#"
ttl = 300
source = "Example DNS"
output_dir = "/tmp/zones"
domain = "example.com"
has_headers = false
"#,
    )
    .unwrap();

    assert_eq!(config.ttl(), TtlOverride::Force("300".to_string()));
    assert_eq!(config.source_label, "Example DNS");
    assert_eq!(config.output_dir, PathBuf::from("/tmp/zones"));
    assert_eq!(config.domain.as_deref(), Some("example.com"));
    assert!(!config.has_headers);
}

#[test]
fn test_toml_ttl_as_string() {
    let config = ExportConfig::from_toml_str(r#"ttl = "0""#).unwrap();
    assert_eq!(config.ttl(), TtlOverride::Inherit);
}

#[test]
fn test_invalid_ttl_rejected() {
    assert_eq!(
        ExportConfig::from_toml_str(r#"ttl = "one hour""#),
        Err(ConfigError::InvalidTtlOverride("one hour".to_string()))
    );
    assert_eq!(
        ExportConfig::from_toml_str(r#"ttl = """#),
        Err(ConfigError::InvalidTtlOverride(String::new()))
    );
}

#[test]
fn test_empty_domain_rejected() {
    assert!(matches!(
        ExportConfig::from_toml_str(r#"domain = "  ""#),
        Err(ConfigError::InvalidDomain(_))
    ));
}

#[test]
fn test_unknown_keys_rejected() {
    assert!(matches!(
        ExportConfig::from_toml_str("bind_addr = \"127.0.0.1:53\""),
        Err(ConfigError::ParseError(_))
    ));
}

#[test]
fn test_missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        ExportConfig::from_file(dir.path().join("zone-export.toml")),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("zone-export.toml");
    std::fs::write(&path, "ttl = 120\nsource = \"Console\"\n").unwrap();

    let config = ExportConfig::from_file(&path).unwrap();
    assert_eq!(config.ttl_override, "120");
    assert_eq!(config.source_label, "Console");
}
