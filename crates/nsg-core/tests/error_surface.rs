use nsg_core::errors::{ErrorInfo, NsgError};

fn sample_info(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
        .with_context("key", "3,5,7")
        .with_context("reason", "example")
}

#[test]
fn input_error_surface() {
    let err = NsgError::Input(sample_info("not-a-number", "expected digits"));
    assert_eq!(err.code(), "not-a-number");
    assert!(err.info().context.contains_key("key"));
}

#[test]
fn generator_error_surface() {
    let err = NsgError::Generators(sample_info("zero-generator", "generators must be positive"));
    assert_eq!(err.info().code, "zero-generator");
    assert!(err.info().context.contains_key("reason"));
}

#[test]
fn invariant_error_surface() {
    let err = NsgError::Invariant(sample_info("apery-bound-exceeded", "bound too small"));
    assert_eq!(err.code(), "apery-bound-exceeded");
}

#[test]
fn search_error_surface() {
    let err = NsgError::Search(sample_info("invalid-parameters", "genus too small"));
    assert_eq!(err.code(), "invalid-parameters");
}

#[test]
fn config_error_surface() {
    let err = NsgError::Config(sample_info("config-parse", "bad yaml"));
    assert_eq!(err.code(), "config-parse");
}

#[test]
fn display_includes_context_and_hint() {
    let err = NsgError::Serde(ErrorInfo::new("S001", "schema mismatch").with_hint("upgrade"));
    let rendered = err.to_string();
    assert!(rendered.starts_with("serde error: schema mismatch (code: S001)"));
    assert!(rendered.ends_with("| hint: upgrade"));
}
