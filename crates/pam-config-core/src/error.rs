// crates/pam-config-core/src/error.rs
// ============================================================================
// Module: Resource Errors
// Description: Error type shared by the resource model and its codec.
// Purpose: Surface every validation and decode failure as one error class.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Resource operations are pure and deterministic, so every failure is a
//! property of the input. All of them are reported as
//! [`ResourceError::BadParameter`]; callers fix the input or abort.

use thiserror::Error;

/// Errors raised while defaulting, validating, or decoding a resource.
///
/// # Invariants
/// - The message is human-readable and never empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    /// Input was rejected (empty bytes, schema violation, decode failure,
    /// or a failed invariant check).
    #[error("bad parameter: {0}")]
    BadParameter(String),
}

impl ResourceError {
    /// Builds a [`ResourceError::BadParameter`] from any displayable message.
    #[must_use]
    pub fn bad_parameter(message: impl Into<String>) -> Self {
        Self::BadParameter(message.into())
    }

    /// Returns true when the error is a bad-parameter failure.
    #[must_use]
    pub const fn is_bad_parameter(&self) -> bool {
        matches!(self, Self::BadParameter(_))
    }

    /// Returns the underlying message without the class prefix.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::BadParameter(message) => message,
        }
    }
}
