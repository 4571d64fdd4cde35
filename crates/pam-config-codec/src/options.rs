// crates/pam-config-codec/src/options.rs
// ============================================================================
// Module: Marshal Options
// Description: Caller-supplied options for encoding and decoding resources.
// Purpose: Replace variadic option lists with one explicit struct.
// Dependencies: serde, time
// ============================================================================

//! ## Overview
//! [`MarshalOptions`] controls decode behavior: whether schema validation is
//! skipped and whether the decoded resource ID or expiry is overridden. Every
//! field defaults to "no effect". The struct deserializes with unknown fields
//! denied so hosts can embed it in their own configuration files.

use serde::Deserialize;
use serde::Serialize;
use time::OffsetDateTime;

/// Options accepted by the codec.
///
/// # Invariants
/// - `id == 0` means "do not override the resource ID".
/// - `expires == None` means "do not override the expiry".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MarshalOptions {
    /// Skip schema validation and trust the structural decode only.
    pub skip_validation: bool,
    /// Resource ID forced onto decoded resources when non-zero.
    pub id: i64,
    /// Expiry forced onto decoded resources when set.
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub expires: Option<OffsetDateTime>,
}

impl MarshalOptions {
    /// Returns options with every field at its default.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether schema validation is skipped on decode.
    #[must_use]
    pub const fn with_skip_validation(mut self, skip_validation: bool) -> Self {
        self.skip_validation = skip_validation;
        self
    }

    /// Sets the resource ID override (0 clears it).
    #[must_use]
    pub const fn with_id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Sets the expiry override.
    #[must_use]
    pub const fn with_expires(mut self, expires: OffsetDateTime) -> Self {
        self.expires = Some(expires);
        self
    }

    /// Returns the resource ID override, if any.
    #[must_use]
    pub const fn id_override(&self) -> Option<i64> {
        if self.id == 0 { None } else { Some(self.id) }
    }
}
