// crates/pam-config-codec/tests/options.rs
// ============================================================================
// Module: Marshal Options Tests
// Description: Defaults, builders, and embedding in host configuration.
// Purpose: Keep option defaults at "no effect" and parsing strict.
// ============================================================================

//! Tests for `MarshalOptions`.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use pam_config_codec::MarshalOptions;
use serde::Deserialize;
use time::macros::datetime;

type TestResult = Result<(), String>;

/// Host configuration embedding codec options.
#[derive(Debug, Deserialize)]
struct HostConfig {
    /// Options section.
    #[serde(default)]
    codec: MarshalOptions,
}

#[test]
fn defaults_have_no_effect() {
    let options = MarshalOptions::default();
    assert!(!options.skip_validation);
    assert_eq!(options.id, 0);
    assert_eq!(options.id_override(), None);
    assert_eq!(options.expires, None);
    assert_eq!(options, MarshalOptions::new());
}

#[test]
fn builders_set_each_field() {
    let expires = datetime!(2030-01-01 00:00 UTC);
    let options =
        MarshalOptions::new().with_skip_validation(true).with_id(42).with_expires(expires);
    assert!(options.skip_validation);
    assert_eq!(options.id_override(), Some(42));
    assert_eq!(options.expires, Some(expires));
    assert_eq!(options.with_id(0).id_override(), None);
}

#[test]
fn options_parse_from_toml() -> TestResult {
    let config: HostConfig = toml::from_str(
        r#"
        [codec]
        skip_validation = true
        id = 42
        expires = "2030-01-01T00:00:00Z"
        "#,
    )
    .map_err(|err| err.to_string())?;
    assert!(config.codec.skip_validation);
    assert_eq!(config.codec.id, 42);
    assert_eq!(config.codec.expires, Some(datetime!(2030-01-01 00:00 UTC)));
    Ok(())
}

#[test]
fn missing_options_section_uses_defaults() -> TestResult {
    let config: HostConfig = toml::from_str("").map_err(|err| err.to_string())?;
    assert_eq!(config.codec, MarshalOptions::default());
    Ok(())
}

#[test]
fn unknown_option_keys_are_rejected() -> TestResult {
    let result: Result<HostConfig, _> = toml::from_str(
        r"
        [codec]
        preserve_id = true
        ",
    );
    if result.is_ok() {
        return Err("unknown option key should be rejected".to_string());
    }
    Ok(())
}
