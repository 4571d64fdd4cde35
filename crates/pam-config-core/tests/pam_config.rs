// crates/pam-config-core/tests/pam_config.rs
// ============================================================================
// Module: PAM Config Resource Tests
// Description: Construction, defaulting, and accessor behavior.
// Purpose: Pin the service-name invariant and the resource identity surface.
// ============================================================================

//! Resource model tests for `PamConfig`.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use std::collections::BTreeMap;

use pam_config_core::DEFAULT_NAMESPACE;
use pam_config_core::KIND_PAM_CONFIG;
use pam_config_core::META_NAME_PAM_CONFIG;
use pam_config_core::PamConfig;
use pam_config_core::PamConfigSpec;
use pam_config_core::Resource;
use pam_config_core::V1;
use time::Duration;
use time::OffsetDateTime;
use time::macros::datetime;

type TestResult = Result<(), String>;

fn sshd_spec() -> PamConfigSpec {
    PamConfigSpec {
        enabled: true,
        service_name: "sshd".to_string(),
        use_pam_auth: false,
        environment: BTreeMap::from([("FOO".to_string(), "bar".to_string())]),
    }
}

// ============================================================================
// SECTION: Construction
// ============================================================================

#[test]
fn new_fixes_kind_version_and_metadata() -> TestResult {
    let config = PamConfig::new(sshd_spec()).map_err(|err| err.to_string())?;
    assert_eq!(config.kind(), KIND_PAM_CONFIG);
    assert_eq!(config.version(), V1);
    assert_eq!(config.name(), META_NAME_PAM_CONFIG);
    assert_eq!(config.metadata().namespace, DEFAULT_NAMESPACE);
    assert_eq!(config.sub_kind(), "");
    assert_eq!(config.resource_id(), 0);
    assert_eq!(config.expiry(), None);
    assert_eq!(config.service_name(), "sshd");
    assert!(config.enabled());
    assert!(!config.use_pam_auth());
    assert_eq!(config.environment().get("FOO").map(String::as_str), Some("bar"));
    Ok(())
}

#[test]
fn new_rejects_empty_service_name() -> TestResult {
    let spec = PamConfigSpec {
        enabled: true,
        ..PamConfigSpec::default()
    };
    let Err(err) = PamConfig::new(spec) else {
        return Err("empty service name should be rejected".to_string());
    };
    if !err.is_bad_parameter() {
        return Err(format!("unexpected error class: {err}"));
    }
    if !err.message().contains("service name") {
        return Err(format!("unexpected message: {err}"));
    }
    Ok(())
}

#[test]
fn default_config_uses_sshd_and_disabled_flags() -> TestResult {
    let config = PamConfig::default_config().map_err(|err| err.to_string())?;
    assert_eq!(config.service_name(), "sshd");
    assert!(!config.enabled());
    assert!(!config.use_pam_auth());
    assert!(config.environment().is_empty());
    Ok(())
}

// ============================================================================
// SECTION: Defaulting
// ============================================================================

#[test]
fn check_and_set_defaults_is_idempotent() -> TestResult {
    let mut config = PamConfig::new(sshd_spec()).map_err(|err| err.to_string())?;
    let once = config.clone();
    config.check_and_set_defaults().map_err(|err| err.to_string())?;
    assert_eq!(config, once);
    config.check_and_set_defaults().map_err(|err| err.to_string())?;
    assert_eq!(config, once);
    Ok(())
}

#[test]
fn check_and_set_defaults_propagates_metadata_failure() -> TestResult {
    let mut config = PamConfig::new(sshd_spec()).map_err(|err| err.to_string())?;
    config.set_name(String::new());
    let Err(err) = config.check_and_set_defaults() else {
        return Err("missing name should be rejected".to_string());
    };
    if !err.is_bad_parameter() || !err.message().contains("name") {
        return Err(format!("unexpected error: {err}"));
    }

    let mut config = PamConfig::new(sshd_spec()).map_err(|err| err.to_string())?;
    config.metadata_mut().namespace = "bad namespace".to_string();
    if config.check_and_set_defaults().is_ok() {
        return Err("malformed namespace should be rejected".to_string());
    }
    Ok(())
}

#[test]
fn check_and_set_defaults_restores_empty_namespace() -> TestResult {
    let mut config = PamConfig::new(sshd_spec()).map_err(|err| err.to_string())?;
    config.metadata_mut().namespace.clear();
    config.check_and_set_defaults().map_err(|err| err.to_string())?;
    assert_eq!(config.metadata().namespace, DEFAULT_NAMESPACE);
    Ok(())
}

#[test]
fn check_and_set_defaults_normalizes_expiry_to_utc() -> TestResult {
    let mut config = PamConfig::new(sshd_spec()).map_err(|err| err.to_string())?;
    config.set_expiry(datetime!(2030-01-01 12:00 +02:00));
    config.check_and_set_defaults().map_err(|err| err.to_string())?;
    let expiry = config.expiry().ok_or("expiry should be set")?;
    assert!(expiry.offset().is_utc());
    assert_eq!(expiry, datetime!(2030-01-01 10:00 UTC));
    Ok(())
}

// ============================================================================
// SECTION: Setters
// ============================================================================

#[test]
fn setters_do_not_revalidate() -> TestResult {
    let mut config = PamConfig::new(sshd_spec()).map_err(|err| err.to_string())?;
    config.set_service_name("");
    config.set_enabled(false);
    config.set_use_pam_auth(true);
    config.set_environment(BTreeMap::new());
    assert_eq!(config.service_name(), "");
    assert!(!config.enabled());
    assert!(config.use_pam_auth());
    assert!(config.environment().is_empty());
    if config.check_and_set_defaults().is_ok() {
        return Err("cleared service name should fail the next check".to_string());
    }
    Ok(())
}

#[test]
fn identity_setters_update_metadata() -> TestResult {
    let mut config = PamConfig::new(sshd_spec()).map_err(|err| err.to_string())?;
    let expires = datetime!(2031-06-01 00:00 UTC);
    config.set_name("custom".to_string());
    config.set_sub_kind("node".to_string());
    config.set_resource_id(42);
    config.set_expiry(expires);
    assert_eq!(config.name(), "custom");
    assert_eq!(config.sub_kind(), "node");
    assert_eq!(config.resource_id(), 42);
    assert_eq!(config.metadata().id, 42);
    assert_eq!(config.expiry(), Some(expires));
    Ok(())
}

#[test]
fn description_and_label_setters_update_metadata() -> TestResult {
    let mut config = PamConfig::new(sshd_spec()).map_err(|err| err.to_string())?;
    assert_eq!(config.metadata().description(), "");
    assert!(config.metadata().labels().is_empty());

    config.metadata_mut().set_description("cluster pam settings");
    config
        .metadata_mut()
        .set_labels(BTreeMap::from([("env".to_string(), "prod".to_string())]));
    assert_eq!(config.metadata().description(), "cluster pam settings");
    assert_eq!(config.metadata().labels().get("env").map(String::as_str), Some("prod"));
    config.check_and_set_defaults().map_err(|err| err.to_string())?;

    config.metadata_mut().set_labels(BTreeMap::from([("bad key".to_string(), String::new())]));
    if config.check_and_set_defaults().is_ok() {
        return Err("malformed label key should be rejected".to_string());
    }
    Ok(())
}

#[test]
fn set_ttl_is_relative_to_caller_time() -> TestResult {
    let mut config = PamConfig::new(sshd_spec()).map_err(|err| err.to_string())?;
    let now = datetime!(2030-01-01 00:00 UTC);
    config.set_ttl(now, Duration::hours(1)).map_err(|err| err.to_string())?;
    assert_eq!(config.expiry(), Some(datetime!(2030-01-01 01:00 UTC)));

    let result = config.set_ttl(OffsetDateTime::now_utc(), Duration::MAX);
    if result.is_ok() {
        return Err("overflowing ttl should be rejected".to_string());
    }
    Ok(())
}
