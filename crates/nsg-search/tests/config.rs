use std::io::Write;

use nsg_search::{SearchConfig, DEFAULT_CANDIDATE_BOUND_FACTOR};

#[test]
fn defaults_match_the_documented_values() {
    let config = SearchConfig::default();
    assert_eq!(config.apery_bound_factor, 2);
    assert_eq!(config.candidate_bound_factor, DEFAULT_CANDIDATE_BOUND_FACTOR);
    assert!(config.include_extremal);
    assert_eq!(config.invariant_options().apery_bound_factor, 2);
}

#[test]
fn missing_fields_take_defaults() {
    let config = SearchConfig::from_yaml_str("candidate_bound_factor: 6\n").unwrap();
    assert_eq!(config.candidate_bound_factor, 6);
    assert_eq!(config.apery_bound_factor, 2);
    assert!(config.include_extremal);
}

#[test]
fn unknown_fields_are_rejected() {
    let err = SearchConfig::from_yaml_str("cache_size: 10\n").unwrap_err();
    assert_eq!(err.code(), "config-parse");
}

#[test]
fn zero_factors_are_rejected() {
    let err = SearchConfig::from_yaml_str("apery_bound_factor: 0\n").unwrap_err();
    assert_eq!(err.code(), "invalid-factor");
    let config = SearchConfig {
        candidate_bound_factor: 0,
        ..SearchConfig::default()
    };
    assert_eq!(config.validate().unwrap_err().code(), "invalid-factor");
}

#[test]
fn loads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "apery_bound_factor: 3").unwrap();
    writeln!(file, "include_extremal: false").unwrap();
    let config = SearchConfig::load(file.path()).unwrap();
    assert_eq!(config.apery_bound_factor, 3);
    assert!(!config.include_extremal);

    let dir = tempfile::tempdir().unwrap();
    let err = SearchConfig::load(&dir.path().join("absent.yaml")).unwrap_err();
    assert_eq!(err.code(), "config-read");
    assert!(err.info().context.contains_key("path"));
}
