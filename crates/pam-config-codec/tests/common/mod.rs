// crates/pam-config-codec/tests/common/mod.rs
// =============================================================================
// Module: Codec Test Helpers
// Description: Shared fixtures for codec integration tests.
// Purpose: Reduce duplication across codec test suites.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::collections::BTreeMap;
use std::sync::Mutex;

use pam_config_codec::CodecAuditEvent;
use pam_config_codec::CodecAuditSink;
use pam_config_core::PamConfig;
use pam_config_core::PamConfigSpec;

/// Returns the reference spec: enabled, `sshd`, one environment entry.
pub fn sshd_spec() -> PamConfigSpec {
    PamConfigSpec {
        enabled: true,
        service_name: "sshd".to_string(),
        use_pam_auth: false,
        environment: BTreeMap::from([("FOO".to_string(), "bar".to_string())]),
    }
}

/// Builds a validated resource from [`sshd_spec`].
pub fn sshd_config() -> Result<PamConfig, String> {
    PamConfig::new(sshd_spec()).map_err(|err| err.to_string())
}

/// Audit sink that keeps every event in memory.
#[derive(Default)]
pub struct RecordingSink {
    /// Recorded events in call order.
    events: Mutex<Vec<CodecAuditEvent>>,
}

impl RecordingSink {
    /// Returns a snapshot of the recorded events.
    pub fn events(&self) -> Vec<CodecAuditEvent> {
        self.events.lock().map(|events| events.clone()).unwrap_or_default()
    }
}

impl CodecAuditSink for RecordingSink {
    fn record(&self, event: &CodecAuditEvent) {
        if let Ok(mut events) = self.events.lock() {
            events.push(event.clone());
        }
    }
}
