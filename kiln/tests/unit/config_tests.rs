use glaze::EngineKind;
use kiln::config::{DEFAULT_MAX_BODY_BYTES, ServiceConfig};
use std::path::PathBuf;

#[test]
fn test_default_config() {
    let config = ServiceConfig::default();
    assert_eq!(config.addr.port(), 8080);
    assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    assert_eq!(config.engine, EngineKind::Builtin);
    assert!(config.tailwind_bin.is_none());
}

#[test]
fn test_parse_values() {
    let config = ServiceConfig::from_values(
        "127.0.0.1:9000",
        "4096",
        "tailwind",
        Some("/usr/local/bin/tailwindcss"),
    )
    .unwrap();
    assert_eq!(config.addr.port(), 9000);
    assert_eq!(config.max_body_bytes, 4096);
    assert_eq!(config.engine, EngineKind::Tailwind);
    assert_eq!(
        config.tailwind_bin,
        Some(PathBuf::from("/usr/local/bin/tailwindcss"))
    );
}

#[test]
fn test_bad_body_limit_falls_back() {
    let config = ServiceConfig::from_values("0.0.0.0:8080", "lots", "builtin", Some("")).unwrap();
    assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
    assert!(config.tailwind_bin.is_none());
}

#[test]
fn test_invalid_values_fail() {
    assert!(ServiceConfig::from_values("localhost", "1", "builtin", None).is_err());
    assert!(ServiceConfig::from_values("0.0.0.0:8080", "1", "postcss", None).is_err());
}
