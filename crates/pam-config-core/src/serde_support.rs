// crates/pam-config-core/src/serde_support.rs
// ============================================================================
// Module: Resource Serde Support
// Description: Field-level deserialization helpers for resource types.
// Purpose: Decode explicit JSON `null` the same way as an absent field.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Resource fields are defaulted when absent. These helpers extend the same
//! treatment to fields that are present but `null`, so a decode that skips
//! schema validation accepts documents a lenient producer emits for empty
//! strings and maps. Schema validation still rejects `null` for typed fields.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Deserializer;

use crate::metadata::DEFAULT_NAMESPACE;

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Deserializes a field, mapping `null` to `T::default()`.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Deserializes a namespace, mapping `null` to [`DEFAULT_NAMESPACE`].
pub fn null_as_default_namespace<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer)
        .map(|namespace| namespace.unwrap_or_else(|| DEFAULT_NAMESPACE.to_string()))
}

// ============================================================================
// SECTION: Tests
// ============================================================================
