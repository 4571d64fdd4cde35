// crates/pam-config-core/src/lib.rs
// ============================================================================
// Module: PAM Config Core Library
// Description: Public API surface for the PAM configuration resource model.
// Purpose: Expose metadata, the resource capability, and the PAM resource.
// Dependencies: crate::{error, metadata, pam, resource, serde_support}
// ============================================================================

//! ## Overview
//! `pam-config-core` defines the PAM configuration resource: a named,
//! versioned record stating whether PAM integration is enabled, which PAM
//! service it targets, whether PAM authentication is used, and which
//! environment variables PAM modules receive. Resource identity (name,
//! namespace, expiry, ID) is shared through [`Metadata`] and the
//! [`Resource`] trait. Wire encoding lives in `pam-config-codec`.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod error;
pub mod metadata;
pub mod pam;
pub mod resource;
mod serde_support;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use error::ResourceError;
pub use metadata::DEFAULT_NAMESPACE;
pub use metadata::Metadata;
pub use pam::DEFAULT_PAM_SERVICE_NAME;
pub use pam::KIND_PAM_CONFIG;
pub use pam::META_NAME_PAM_CONFIG;
pub use pam::PamConfig;
pub use pam::PamConfigSpec;
pub use pam::V1;
pub use resource::Resource;
