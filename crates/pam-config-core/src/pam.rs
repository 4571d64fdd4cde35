// crates/pam-config-core/src/pam.rs
// ============================================================================
// Module: PAM Configuration Resource
// Description: Versioned resource describing the PAM integration settings.
// Purpose: Hold the PAM spec with defaulting and the non-empty service invariant.
// Dependencies: serde, crate::{metadata, resource}
// ============================================================================

//! ## Overview
//! [`PamConfig`] describes whether PAM integration is enabled, which PAM
//! service it targets, whether PAM authentication is used, and which
//! environment variables are handed to PAM modules.
//!
//! Construction through [`PamConfig::new`] always runs
//! [`PamConfig::check_and_set_defaults`]. Setters never re-validate, and the
//! codec does not run the check on decode, so a resource obtained any other
//! way must be checked before it is trusted.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use serde::Deserialize;
use serde::Serialize;

use crate::error::ResourceError;
use crate::metadata::DEFAULT_NAMESPACE;
use crate::metadata::Metadata;
use crate::resource::Resource;
use crate::serde_support::null_as_default;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Resource kind for PAM configuration.
pub const KIND_PAM_CONFIG: &str = "pam_config";
/// First API version of the resource layout.
pub const V1: &str = "v1";
/// Well-known name of the singleton PAM configuration.
pub const META_NAME_PAM_CONFIG: &str = "cluster-pam-config";
/// Service name used by [`PamConfig::default_config`].
pub const DEFAULT_PAM_SERVICE_NAME: &str = "sshd";

// ============================================================================
// SECTION: Spec
// ============================================================================

/// PAM integration settings.
///
/// `Default` yields an empty service name; see [`PamConfig::default_config`]
/// for a spec that passes validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PamConfigSpec {
    /// Whether PAM integration is enabled.
    #[serde(default, deserialize_with = "null_as_default")]
    pub enabled: bool,
    /// PAM service name (must be non-empty once checked).
    #[serde(default, deserialize_with = "null_as_default")]
    pub service_name: String,
    /// Whether PAM authentication is used in addition to account/session.
    #[serde(default, deserialize_with = "null_as_default")]
    pub use_pam_auth: bool,
    /// Environment variables exported to PAM modules.
    #[serde(default, deserialize_with = "null_as_default")]
    pub environment: BTreeMap<String, String>,
}

// ============================================================================
// SECTION: Resource
// ============================================================================

/// PAM configuration resource, version 1 layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PamConfig {
    /// Resource kind.
    #[serde(default, deserialize_with = "null_as_default")]
    kind: String,
    /// Optional sub-classification.
    #[serde(
        default,
        skip_serializing_if = "String::is_empty",
        deserialize_with = "null_as_default"
    )]
    sub_kind: String,
    /// Resource layout version.
    #[serde(default, deserialize_with = "null_as_default")]
    version: String,
    /// Identity metadata.
    #[serde(default, deserialize_with = "null_as_default")]
    metadata: Metadata,
    /// PAM settings.
    #[serde(default, deserialize_with = "null_as_default")]
    spec: PamConfigSpec,
}

impl PamConfig {
    /// Builds a PAM configuration from a spec and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::BadParameter`] when metadata defaulting fails
    /// or the service name is empty.
    pub fn new(spec: PamConfigSpec) -> Result<Self, ResourceError> {
        let mut config = Self {
            kind: KIND_PAM_CONFIG.to_string(),
            sub_kind: String::new(),
            version: V1.to_string(),
            metadata: Metadata {
                name: META_NAME_PAM_CONFIG.to_string(),
                namespace: DEFAULT_NAMESPACE.to_string(),
                ..Metadata::default()
            },
            spec,
        };
        config.check_and_set_defaults()?;
        Ok(config)
    }

    /// Builds the default PAM configuration: disabled, no PAM auth, and the
    /// `sshd` service.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::BadParameter`] if validation fails.
    pub fn default_config() -> Result<Self, ResourceError> {
        Self::new(PamConfigSpec {
            service_name: DEFAULT_PAM_SERVICE_NAME.to_string(),
            ..PamConfigSpec::default()
        })
    }

    /// Applies metadata defaults and validates the resource invariants.
    ///
    /// Idempotent on a valid resource.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::BadParameter`] when metadata defaulting fails
    /// or the service name is empty.
    pub fn check_and_set_defaults(&mut self) -> Result<(), ResourceError> {
        self.metadata.check_and_set_defaults()?;
        if self.spec.service_name.is_empty() {
            return Err(ResourceError::bad_parameter("service name cannot be empty"));
        }
        Ok(())
    }

    /// Returns the PAM settings.
    #[must_use]
    pub const fn spec(&self) -> &PamConfigSpec {
        &self.spec
    }

    /// Returns whether PAM integration is enabled.
    #[must_use]
    pub const fn enabled(&self) -> bool {
        self.spec.enabled
    }

    /// Sets whether PAM integration is enabled.
    pub const fn set_enabled(&mut self, enabled: bool) {
        self.spec.enabled = enabled;
    }

    /// Returns the PAM service name.
    #[must_use]
    pub fn service_name(&self) -> &str {
        &self.spec.service_name
    }

    /// Sets the PAM service name. Not re-validated.
    pub fn set_service_name(&mut self, service_name: impl Into<String>) {
        self.spec.service_name = service_name.into();
    }

    /// Returns whether PAM authentication is used.
    #[must_use]
    pub const fn use_pam_auth(&self) -> bool {
        self.spec.use_pam_auth
    }

    /// Sets whether PAM authentication is used.
    pub const fn set_use_pam_auth(&mut self, use_pam_auth: bool) {
        self.spec.use_pam_auth = use_pam_auth;
    }

    /// Returns the environment mappings for PAM modules.
    #[must_use]
    pub const fn environment(&self) -> &BTreeMap<String, String> {
        &self.spec.environment
    }

    /// Replaces the environment mappings for PAM modules.
    pub fn set_environment(&mut self, environment: BTreeMap<String, String>) {
        self.spec.environment = environment;
    }
}

impl Resource for PamConfig {
    fn kind(&self) -> &str {
        &self.kind
    }

    fn sub_kind(&self) -> &str {
        &self.sub_kind
    }

    fn set_sub_kind(&mut self, sub_kind: String) {
        self.sub_kind = sub_kind;
    }

    fn version(&self) -> &str {
        &self.version
    }

    fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut Metadata {
        &mut self.metadata
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
