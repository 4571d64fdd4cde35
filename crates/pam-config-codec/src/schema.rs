// crates/pam-config-codec/src/schema.rs
// ============================================================================
// Module: PAM Config Schemas
// Description: JSON schema builders for the PAM configuration resource.
// Purpose: Provide the canonical validation schema for encoded resources.
// Dependencies: serde_json
// ============================================================================

//! ## Overview
//! This module defines the JSON Schema for the PAM configuration resource.
//! [`pam_config_spec_schema`] covers the `spec` payload; [`pam_config_schema`]
//! wraps it in the resource envelope (`kind`, `sub_kind`, `version`,
//! `metadata`, `spec`) that the codec validates on decode. Every object level
//! forbids additional properties.

use serde_json::Value;
use serde_json::json;

/// Schema identifier for the PAM configuration resource.
pub const PAM_CONFIG_SCHEMA_ID: &str = "pam-config://schemas/pam_config.schema.json";

/// Returns the JSON schema for an encoded PAM configuration resource.
#[must_use]
pub fn pam_config_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "$id": PAM_CONFIG_SCHEMA_ID,
        "title": "PAM Configuration",
        "description": "Versioned resource describing PAM integration settings.",
        "type": "object",
        "required": ["kind", "version", "spec"],
        "properties": {
            "kind": { "type": "string" },
            "sub_kind": { "type": "string" },
            "version": { "type": "string" },
            "metadata": metadata_schema(),
            "spec": pam_config_spec_schema()
        },
        "additionalProperties": false
    })
}

/// Returns the JSON schema for the PAM configuration `spec` payload.
#[must_use]
pub fn pam_config_spec_schema() -> Value {
    json!({
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "enabled": {
                "type": "boolean"
            },
            "service_name": {
                "type": "string"
            },
            "use_pam_auth": {
                "type": "boolean"
            },
            "environment": {
                "type": "object"
            }
        }
    })
}

// ============================================================================
// SECTION: Metadata
// ============================================================================

/// Schema for the resource metadata block.
fn metadata_schema() -> Value {
    json!({
        "type": "object",
        "required": ["name"],
        "properties": {
            "name": { "type": "string" },
            "namespace": { "type": "string" },
            "description": { "type": "string" },
            "labels": {
                "type": "object",
                "additionalProperties": { "type": "string" }
            },
            "expires": {
                "type": "string",
                "format": "date-time"
            },
            "id": { "type": "integer" }
        },
        "additionalProperties": false
    })
}
