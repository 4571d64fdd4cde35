// crates/pam-config-codec/src/codec.rs
// ============================================================================
// Module: PAM Config Codec
// Description: JSON encode and schema-validated decode for PAM configuration.
// Purpose: Persist and transmit the resource with fail-closed decoding.
// Dependencies: jsonschema, serde_json, pam-config-core
// ============================================================================

//! ## Overview
//! Encoding never validates: any in-memory resource, including one with an
//! empty service name, can be written. Decoding rejects empty input, then
//! either validates against [`pam_config_schema`] before materializing the
//! resource or, with `skip_validation`, decodes structurally and ignores
//! unknown fields. ID and expiry overrides from [`MarshalOptions`] are applied
//! last.
//!
//! Decoding does not run [`PamConfig::check_and_set_defaults`]. A decoded
//! resource may violate the non-empty service name invariant; callers that
//! need it must run the check themselves.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::sync::OnceLock;

use jsonschema::Draft;
use jsonschema::Validator;
use pam_config_core::PamConfig;
use pam_config_core::Resource;
use pam_config_core::ResourceError;
use serde_json::Value;

use crate::audit::CodecAuditEvent;
use crate::audit::CodecAuditSink;
use crate::audit::CodecNoopAuditSink;
use crate::options::MarshalOptions;
use crate::schema::pam_config_schema;

// ============================================================================
// SECTION: Schema Cache
// ============================================================================

/// Process-wide compiled resource schema.
static PAM_CONFIG_VALIDATOR: OnceLock<Result<Validator, String>> = OnceLock::new();

/// Returns the compiled resource schema, compiling it on first use.
fn pam_config_validator() -> Result<&'static Validator, ResourceError> {
    PAM_CONFIG_VALIDATOR
        .get_or_init(|| compile_schema(&pam_config_schema()))
        .as_ref()
        .map_err(|err| ResourceError::bad_parameter(err.clone()))
}

/// Compiles a JSON schema for validation.
fn compile_schema(schema: &Value) -> Result<Validator, String> {
    jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(schema)
        .map_err(|err| format!("invalid schema: {err}"))
}

// ============================================================================
// SECTION: Codec
// ============================================================================

/// PAM configuration codec with an attached audit sink.
#[derive(Clone)]
pub struct PamConfigCodec {
    /// Destination for per-call audit events.
    audit: Arc<dyn CodecAuditSink>,
}

impl Default for PamConfigCodec {
    fn default() -> Self {
        Self::new(Arc::new(CodecNoopAuditSink))
    }
}

impl PamConfigCodec {
    /// Creates a codec that records every call to `audit`.
    #[must_use]
    pub fn new(audit: Arc<dyn CodecAuditSink>) -> Self {
        Self {
            audit,
        }
    }

    /// Encodes a resource to its canonical JSON bytes.
    ///
    /// The resource is not validated. `options` has no effect on encoding.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::BadParameter`] if serialization fails.
    pub fn marshal(
        &self,
        config: &PamConfig,
        _options: &MarshalOptions,
    ) -> Result<Vec<u8>, ResourceError> {
        let result =
            serde_json::to_vec(config).map_err(|err| ResourceError::bad_parameter(err.to_string()));
        self.audit.record(&CodecAuditEvent::marshal(config, &result));
        result
    }

    /// Decodes a resource from JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::BadParameter`] when `bytes` is empty, is not
    /// valid JSON, violates the schema (unless skipped), or does not match
    /// the resource shape.
    pub fn unmarshal(
        &self,
        bytes: &[u8],
        options: &MarshalOptions,
    ) -> Result<PamConfig, ResourceError> {
        let result = decode(bytes, options);
        self.audit.record(&CodecAuditEvent::unmarshal(
            bytes.len(),
            !options.skip_validation,
            &result,
        ));
        result
    }
}

// ============================================================================
// SECTION: Convenience Functions
// ============================================================================

/// Encodes a resource without audit logging.
///
/// # Errors
///
/// See [`PamConfigCodec::marshal`].
pub fn marshal_pam_config(
    config: &PamConfig,
    options: &MarshalOptions,
) -> Result<Vec<u8>, ResourceError> {
    PamConfigCodec::default().marshal(config, options)
}

/// Decodes a resource without audit logging.
///
/// # Errors
///
/// See [`PamConfigCodec::unmarshal`].
pub fn unmarshal_pam_config(
    bytes: &[u8],
    options: &MarshalOptions,
) -> Result<PamConfig, ResourceError> {
    PamConfigCodec::default().unmarshal(bytes, options)
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Decodes, optionally validates, and applies overrides.
fn decode(bytes: &[u8], options: &MarshalOptions) -> Result<PamConfig, ResourceError> {
    if bytes.is_empty() {
        return Err(ResourceError::bad_parameter("missing resource data"));
    }
    let mut config: PamConfig = if options.skip_validation {
        serde_json::from_slice(bytes).map_err(|err| ResourceError::bad_parameter(err.to_string()))?
    } else {
        let value: Value = serde_json::from_slice(bytes)
            .map_err(|err| ResourceError::bad_parameter(err.to_string()))?;
        validate_against_schema(&value)?;
        serde_json::from_value(value).map_err(|err| ResourceError::bad_parameter(err.to_string()))?
    };
    if let Some(id) = options.id_override() {
        config.set_resource_id(id);
    }
    if let Some(expires) = options.expires {
        config.set_expiry(expires);
    }
    Ok(config)
}

/// Validates a decoded JSON document against the resource schema.
fn validate_against_schema(value: &Value) -> Result<(), ResourceError> {
    let validator = pam_config_validator()?;
    let messages: Vec<String> = validator.iter_errors(value).map(|err| err.to_string()).collect();
    if messages.is_empty() {
        Ok(())
    } else {
        Err(ResourceError::bad_parameter(messages.join("; ")))
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
