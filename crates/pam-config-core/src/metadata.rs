// crates/pam-config-core/src/metadata.rs
// ============================================================================
// Module: Resource Metadata
// Description: Generic identity metadata attached to every resource.
// Purpose: Provide name, namespace, labels, expiry, and ID with defaulting.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! [`Metadata`] is the identity block shared by all resources. It carries the
//! resource name and namespace, optional description and labels, an optional
//! expiry, and the store-assigned resource ID. Defaulting and validation live
//! in [`Metadata::check_and_set_defaults`]. The library never reads the wall
//! clock; TTL-based expiry takes the current time from the caller.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;
use time::Duration;
use time::OffsetDateTime;
use time::UtcOffset;

use crate::error::ResourceError;
use crate::serde_support::null_as_default;
use crate::serde_support::null_as_default_namespace;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Namespace applied when none is provided.
pub const DEFAULT_NAMESPACE: &str = "default";

// ============================================================================
// SECTION: Metadata
// ============================================================================

/// Resource identity metadata.
///
/// # Invariants
/// - After [`Metadata::check_and_set_defaults`] succeeds, `name` and
///   `namespace` are non-empty, `namespace` and label keys use the allowed
///   character sets, and `expires` (when set) is in UTC.
/// - `id == 0` means "not assigned by a store".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Resource name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Namespace the resource lives in.
    #[serde(default = "default_namespace", deserialize_with = "null_as_default_namespace")]
    pub namespace: String,
    /// Free-form description.
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub description: String,
    /// Arbitrary key/value labels.
    #[serde(
        default,
        skip_serializing_if = "BTreeMap::is_empty",
        deserialize_with = "null_as_default"
    )]
    pub labels: BTreeMap<String, String>,
    /// Absolute expiry time, if any.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "time::serde::rfc3339::option"
    )]
    pub expires: Option<OffsetDateTime>,
    /// Store-assigned resource identifier (0 when unassigned).
    #[serde(default, skip_serializing_if = "is_zero", deserialize_with = "null_as_default")]
    pub id: i64,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            name: String::new(),
            namespace: default_namespace(),
            description: String::new(),
            labels: BTreeMap::new(),
            expires: None,
            id: 0,
        }
    }
}

impl Metadata {
    /// Creates metadata with the given name in the default namespace.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Applies defaults and validates the metadata in place.
    ///
    /// Calling this on already-valid metadata changes nothing.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::BadParameter`] when the name is missing, the
    /// namespace is malformed, or a label key is malformed.
    pub fn check_and_set_defaults(&mut self) -> Result<(), ResourceError> {
        if self.name.is_empty() {
            return Err(ResourceError::bad_parameter("missing parameter name"));
        }
        if self.namespace.is_empty() {
            self.namespace = default_namespace();
        }
        if !is_valid_namespace(&self.namespace) {
            return Err(ResourceError::bad_parameter(format!(
                "invalid namespace: {:?}",
                self.namespace
            )));
        }
        if let Some(key) = self.labels.keys().find(|key| !is_valid_label_key(key)) {
            return Err(ResourceError::bad_parameter(format!("invalid label key: {key:?}")));
        }
        if let Some(expires) = self.expires {
            self.expires = Some(expires.to_offset(UtcOffset::UTC));
        }
        Ok(())
    }

    /// Returns the free-form description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Sets the free-form description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Returns the labels.
    #[must_use]
    pub const fn labels(&self) -> &BTreeMap<String, String> {
        &self.labels
    }

    /// Replaces the labels. Keys are checked by
    /// [`Metadata::check_and_set_defaults`].
    pub fn set_labels(&mut self, labels: BTreeMap<String, String>) {
        self.labels = labels;
    }

    /// Returns the expiry time, if one is set.
    #[must_use]
    pub const fn expiry(&self) -> Option<OffsetDateTime> {
        self.expires
    }

    /// Sets an absolute expiry time.
    pub const fn set_expiry(&mut self, expires: OffsetDateTime) {
        self.expires = Some(expires);
    }

    /// Sets the expiry to `now + ttl`.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::BadParameter`] when the result is not a
    /// representable timestamp.
    pub fn set_ttl(&mut self, now: OffsetDateTime, ttl: Duration) -> Result<(), ResourceError> {
        let expires = now
            .checked_add(ttl)
            .ok_or_else(|| ResourceError::bad_parameter("ttl overflows expiry timestamp"))?;
        self.expires = Some(expires);
        Ok(())
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Serde default for the namespace field.
pub(crate) fn default_namespace() -> String {
    DEFAULT_NAMESPACE.to_string()
}

/// Serde predicate for omitting unassigned IDs.
#[allow(clippy::trivially_copy_pass_by_ref, reason = "Signature is fixed by serde.")]
const fn is_zero(value: &i64) -> bool {
    *value == 0
}

/// Returns true for namespaces made of ASCII alphanumerics, `-`, or `_`.
fn is_valid_namespace(namespace: &str) -> bool {
    !namespace.is_empty()
        && namespace.chars().all(|ch| ch.is_ascii_alphanumeric() || ch == '-' || ch == '_')
}

/// Returns true for label keys made of ASCII alphanumerics or `/ . _ * -`.
fn is_valid_label_key(key: &str) -> bool {
    !key.is_empty()
        && key.chars().all(|ch| ch.is_ascii_alphanumeric() || matches!(ch, '/' | '.' | '_' | '*' | '-'))
}

// ============================================================================
// SECTION: Tests
// ============================================================================
