// crates/pam-config-codec/src/audit.rs
// ============================================================================
// Module: Codec Audit Logging
// Description: Structured audit events for resource encode and decode.
// Purpose: Emit JSON-line audit records without a logging framework dependency.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Every codec call produces one [`CodecAuditEvent`] handed to a
//! [`CodecAuditSink`]. Events never carry spec contents; they record the
//! operation, outcome, resource identity, encoded size, and whether the
//! resource has an empty service name.
//! Decoding does not enforce that invariant, so the flag is how hosts spot
//! such resources.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use pam_config_core::PamConfig;
use pam_config_core::Resource;
use pam_config_core::ResourceError;
use serde::Serialize;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Codec operation classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CodecOperation {
    /// Resource encoded to bytes.
    Marshal,
    /// Bytes decoded to a resource.
    Unmarshal,
}

/// Codec call outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CodecOutcome {
    /// The call succeeded.
    Ok,
    /// The call failed.
    Error,
}

/// Codec audit event payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodecAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Operation performed.
    pub operation: CodecOperation,
    /// Call outcome.
    pub outcome: CodecOutcome,
    /// Resource kind when a resource was available.
    pub resource_kind: Option<String>,
    /// Resource name when a resource was available.
    pub resource_name: Option<String>,
    /// Whether schema validation ran.
    pub validated: bool,
    /// Encoded size in bytes (input for decode, output for encode).
    pub byte_len: usize,
    /// Whether the resource carries an empty service name.
    pub empty_service_name: bool,
    /// Error message on failure.
    pub error: Option<String>,
}

impl CodecAuditEvent {
    /// Builds the event for a marshal call.
    #[must_use]
    pub fn marshal(config: &PamConfig, result: &Result<Vec<u8>, ResourceError>) -> Self {
        let (outcome, byte_len, error) = match result {
            Ok(bytes) => (CodecOutcome::Ok, bytes.len(), None),
            Err(err) => (CodecOutcome::Error, 0, Some(err.to_string())),
        };
        Self {
            event: "pam_config_codec",
            timestamp_ms: now_millis(),
            operation: CodecOperation::Marshal,
            outcome,
            resource_kind: Some(config.kind().to_string()),
            resource_name: Some(config.name().to_string()),
            validated: false,
            byte_len,
            empty_service_name: config.service_name().is_empty(),
            error,
        }
    }

    /// Builds the event for an unmarshal call.
    #[must_use]
    pub fn unmarshal(
        byte_len: usize,
        validated: bool,
        result: &Result<PamConfig, ResourceError>,
    ) -> Self {
        let (outcome, resource_kind, resource_name, empty_service_name, error) = match result {
            Ok(config) => (
                CodecOutcome::Ok,
                Some(config.kind().to_string()),
                Some(config.name().to_string()),
                config.service_name().is_empty(),
                None,
            ),
            Err(err) => (CodecOutcome::Error, None, None, false, Some(err.to_string())),
        };
        Self {
            event: "pam_config_codec",
            timestamp_ms: now_millis(),
            operation: CodecOperation::Unmarshal,
            outcome,
            resource_kind,
            resource_name,
            validated,
            byte_len,
            empty_service_name,
            error,
        }
    }
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Audit sink for codec events.
pub trait CodecAuditSink: Send + Sync {
    /// Record an audit event.
    fn record(&self, event: &CodecAuditEvent);
}

/// Audit sink that logs JSON lines to stderr.
pub struct CodecStderrAuditSink;

impl CodecAuditSink for CodecStderrAuditSink {
    fn record(&self, event: &CodecAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that logs JSON lines to a file.
pub struct CodecFileAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl CodecFileAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

impl CodecAuditSink for CodecFileAuditSink {
    fn record(&self, event: &CodecAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

/// No-op audit sink.
pub struct CodecNoopAuditSink;

impl CodecAuditSink for CodecNoopAuditSink {
    fn record(&self, _event: &CodecAuditEvent) {}
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Milliseconds since the Unix epoch, or 0 if the clock is before it.
fn now_millis() -> u128 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis()
}
