//! Tests for config functionality.

use crate::config::types::default_exclude_rules;
use crate::config::{Config, ReportFormat};
use crate::constraints::DeclarationSite;
use std::path::Path;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.corpus, "patterns.yaml");
    assert_eq!(config.schema, "schema.yaml");
    assert_eq!(config.exclude_rules, default_exclude_rules());
    assert_eq!(config.report_format, ReportFormat::Text);
    assert!(config.events_log.is_none());
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();

    assert_eq!(config.corpus, "patterns.yaml");
    assert_eq!(config.exclude_rules, vec!["matches_xs_*"]);
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
corpus: data/corpus.yaml
schema: data/meta_model.yaml
exclude_rules:
  - "matches_xs_*"
  - "is_bcp_47_*"
report_format: json
events_log: .patcov/events.ndjson
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.corpus, "data/corpus.yaml");
    assert_eq!(config.schema, "data/meta_model.yaml");
    assert_eq!(config.exclude_rules, vec!["matches_xs_*", "is_bcp_47_*"]);
    assert_eq!(config.report_format, ReportFormat::Json);
    assert_eq!(config.events_log.as_deref(), Some(".patcov/events.ndjson"));
}

#[test]
fn test_unknown_fields_are_ignored() {
    let yaml = r#"
corpus: c.yaml
future_option: 42
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.corpus, "c.yaml");
}

#[test]
fn test_empty_exclude_rules_disables_exclusions() {
    let config = Config::from_yaml("exclude_rules: []").unwrap();
    let exclusions = config.rule_exclusions().unwrap();
    assert!(!exclusions.is_excluded(&DeclarationSite::rule("matches_xs_date")));
}

#[test]
fn test_default_exclusions_skip_xs_rules() {
    let exclusions = Config::default().rule_exclusions().unwrap();
    assert!(exclusions.is_excluded(&DeclarationSite::rule("matches_xs_date_time")));
    assert!(!exclusions.is_excluded(&DeclarationSite::rule("matches_id_short")));
}

#[test]
fn test_validate_empty_corpus_fails() {
    let err = Config::from_yaml("corpus: \"\"").unwrap_err();
    assert!(err.to_string().contains("corpus must not be empty"));
}

#[test]
fn test_validate_empty_schema_fails() {
    let err = Config::from_yaml("schema: \"  \"").unwrap_err();
    assert!(err.to_string().contains("schema must not be empty"));
}

#[test]
fn test_validate_empty_exclude_entry_fails() {
    let err = Config::from_yaml("exclude_rules: [\"\"]").unwrap_err();
    assert!(err.to_string().contains("exclude_rules entries must be non-empty"));
}

#[test]
fn test_validate_invalid_exclude_glob_fails() {
    let err = Config::from_yaml("exclude_rules: [\"matches_[\"]").unwrap_err();
    assert!(err.to_string().contains("invalid glob pattern in exclude_rules"));
}

#[test]
fn test_validate_empty_events_log_fails() {
    let err = Config::from_yaml("events_log: \"\"").unwrap_err();
    assert!(err.to_string().contains("events_log must not be empty"));
}

#[test]
fn test_invalid_report_format_fails() {
    let err = Config::from_yaml("report_format: xml").unwrap_err();
    assert!(err.to_string().contains("failed to parse config YAML"));
}

#[test]
fn test_resolve_paths_relative_to_base() {
    let config = Config {
        corpus: "corpus.yaml".to_string(),
        schema: "/abs/schema.yaml".to_string(),
        events_log: Some("events.ndjson".to_string()),
        ..Default::default()
    }
    .resolve_paths(Path::new("/work/project"));

    assert_eq!(config.corpus_path(), Path::new("/work/project/corpus.yaml"));
    assert_eq!(config.schema_path(), Path::new("/abs/schema.yaml"));
    assert_eq!(
        config.events_log_path().unwrap(),
        Path::new("/work/project/events.ndjson")
    );
}
