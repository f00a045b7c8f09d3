//! Config and dictionary loading tests.
//!
//! Config files written for older versions must keep loading: every missing
//! field falls back to its default instead of failing deserialization.

use registry_core::config::{LookupConfig, ResolutionConfig};
use registry_core::dictionary::StaticDictionary;
use registry_core::traits::{CodeDictionary, CodeTable};
use registry_core::{RegistryConfig, RegistryError};

// ═══════════════════════════════════════════════════════════════════════════
// RegistryConfig: TOML loading
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn empty_toml_yields_defaults() {
    let config = RegistryConfig::from_toml("").unwrap();
    assert!(config.resolution.log_malformed_records);
    assert!(config.resolution.log_continuity_anomalies);
    assert_eq!(config.lookup.cache_capacity, 10_000);
    assert_eq!(config.lookup.cache_ttl_seconds, 300);
    assert_eq!(config.observability.log_level, "info");
    assert!(!config.observability.json);
}

#[test]
fn partial_section_keeps_other_defaults() {
    let toml = r#"
        [lookup]
        cache_capacity = 0

        [observability]
        json = true
    "#;
    let config = RegistryConfig::from_toml(toml).unwrap();
    assert_eq!(config.lookup.cache_capacity, 0);
    assert_eq!(config.lookup.cache_ttl_seconds, 300);
    assert!(config.observability.json);
    assert_eq!(config.observability.log_level, "info");
}

#[test]
fn malformed_toml_is_config_error() {
    let err = RegistryConfig::from_toml("[lookup\ncache_capacity = ").unwrap_err();
    assert!(matches!(err, RegistryError::ConfigError(_)));
}

#[test]
fn wrong_type_is_config_error() {
    let err = RegistryConfig::from_toml("[lookup]\ncache_capacity = \"many\"").unwrap_err();
    assert!(matches!(err, RegistryError::ConfigError(_)));
}

// ═══════════════════════════════════════════════════════════════════════════
// Subsystem configs: JSON resilience
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn resolution_config_missing_fields_default_to_logging_on() {
    let json = r#"{ "log_malformed_records": false }"#;
    let config: ResolutionConfig = serde_json::from_str(json).unwrap();
    assert!(!config.log_malformed_records);
    assert!(config.log_continuity_anomalies);
}

#[test]
fn lookup_config_zero_ttl_is_valid() {
    let json = r#"{ "cache_ttl_seconds": 0 }"#;
    let config: LookupConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.cache_ttl_seconds, 0);
    assert_eq!(config.cache_capacity, 10_000);
}

// ═══════════════════════════════════════════════════════════════════════════
// StaticDictionary
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn dictionary_resolves_labels_per_table() {
    let toml = r#"
        [country]
        "5100" = "Danmark"
        "5110" = "Norge"

        [status]
        "01" = "Aktiv"
    "#;
    let dict = StaticDictionary::from_toml(toml).unwrap();
    assert_eq!(dict.label(CodeTable::Country, "5100"), Some("Danmark"));
    assert_eq!(dict.label(CodeTable::Status, "01"), Some("Aktiv"));
    // Codes are table-scoped.
    assert_eq!(dict.label(CodeTable::Status, "5100"), None);
}

#[test]
fn dictionary_missing_table_is_empty() {
    let dict = StaticDictionary::from_toml("[status]\n\"90\" = \"Doed\"").unwrap();
    assert_eq!(dict.label(CodeTable::Country, "5100"), None);
    assert_eq!(dict.label(CodeTable::Status, "90"), Some("Doed"));
}

// ═══════════════════════════════════════════════════════════════════════════
// Tracing installation
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn tracing_install_is_idempotent() {
    let config = registry_core::config::ObservabilityConfig::default();
    let _ = registry_core::observability::init_tracing(&config);
    // A subscriber is now installed; a second attempt reports false instead
    // of panicking.
    assert!(!registry_core::observability::init_tracing(&config));
}
