// crates/pam-config-core/src/resource.rs
// ============================================================================
// Module: Resource Capability
// Description: Identity operations every managed resource exposes.
// Purpose: Let a generic registry handle resources without knowing their kind.
// Dependencies: crate::metadata, time
// ============================================================================

//! ## Overview
//! [`Resource`] is the identity surface a resource store relies on: kind,
//! sub-kind, version, and the metadata-backed name, expiry, and ID. A new
//! resource type implements the required accessors; everything that only
//! touches metadata comes from the provided methods.

use time::Duration;
use time::OffsetDateTime;

use crate::error::ResourceError;
use crate::metadata::Metadata;

/// Generic identity capability shared by resource types.
pub trait Resource {
    /// Returns the resource kind.
    fn kind(&self) -> &str;

    /// Returns the resource sub-kind (empty when unset).
    fn sub_kind(&self) -> &str;

    /// Sets the resource sub-kind. No validation is applied.
    fn set_sub_kind(&mut self, sub_kind: String);

    /// Returns the resource API version.
    fn version(&self) -> &str;

    /// Returns the resource metadata.
    fn metadata(&self) -> &Metadata;

    /// Returns the resource metadata for mutation.
    fn metadata_mut(&mut self) -> &mut Metadata;

    /// Returns the resource name.
    fn name(&self) -> &str {
        &self.metadata().name
    }

    /// Sets the resource name.
    fn set_name(&mut self, name: String) {
        self.metadata_mut().name = name;
    }

    /// Returns the expiry time, if one is set.
    fn expiry(&self) -> Option<OffsetDateTime> {
        self.metadata().expiry()
    }

    /// Sets an absolute expiry time.
    fn set_expiry(&mut self, expires: OffsetDateTime) {
        self.metadata_mut().set_expiry(expires);
    }

    /// Sets the expiry relative to a caller-supplied current time.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::BadParameter`] when `now + ttl` overflows.
    fn set_ttl(&mut self, now: OffsetDateTime, ttl: Duration) -> Result<(), ResourceError> {
        self.metadata_mut().set_ttl(now, ttl)
    }

    /// Returns the store-assigned resource ID (0 when unassigned).
    fn resource_id(&self) -> i64 {
        self.metadata().id
    }

    /// Sets the store-assigned resource ID.
    fn set_resource_id(&mut self, id: i64) {
        self.metadata_mut().id = id;
    }
}
