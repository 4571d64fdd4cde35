// crates/pam-config-codec/src/lib.rs
// ============================================================================
// Module: PAM Config Codec Library
// Description: Wire codec for the PAM configuration resource.
// Purpose: Encode resources to JSON and decode them with schema validation.
// Dependencies: jsonschema, serde, serde_json, pam-config-core
// ============================================================================

//! ## Overview
//! `pam-config-codec` converts [`pam_config_core::PamConfig`] to and from its
//! JSON wire form. Decoding validates against a strict JSON schema unless the
//! caller opts out through [`MarshalOptions`], and every call can be audited
//! through a [`CodecAuditSink`].
//!
//! Security posture: encoded resources are untrusted input; decoding fails
//! closed on any schema or structural violation.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod codec;
pub mod options;
pub mod schema;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::CodecAuditEvent;
pub use audit::CodecAuditSink;
pub use audit::CodecFileAuditSink;
pub use audit::CodecNoopAuditSink;
pub use audit::CodecOperation;
pub use audit::CodecOutcome;
pub use audit::CodecStderrAuditSink;
pub use codec::PamConfigCodec;
pub use codec::marshal_pam_config;
pub use codec::unmarshal_pam_config;
pub use options::MarshalOptions;
pub use schema::PAM_CONFIG_SCHEMA_ID;
pub use schema::pam_config_schema;
pub use schema::pam_config_spec_schema;
