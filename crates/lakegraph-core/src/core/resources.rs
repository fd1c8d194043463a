// crates/lakegraph-core/src/core/resources.rs
// ============================================================================
// Module: Lakegraph Resource Specifications
// Description: Declarative descriptions of bucket, role, group, and crawler resources.
// Purpose: Provide stable, serializable resource specs for the composition graph.
// Dependencies: crate::core::{identifiers, lifecycle, policy}, serde
// ============================================================================

//! ## Overview
//! Resource specifications are descriptions, not live calls. The external
//! provisioning engine turns them into real infrastructure; this layer only
//! guarantees that the descriptions are internally consistent and
//! deterministic across repeated compositions.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::BucketId;
use crate::core::identifiers::CrawlerName;
use crate::core::identifiers::DatabaseName;
use crate::core::identifiers::GroupName;
use crate::core::identifiers::RoleName;
use crate::core::identifiers::TablePath;
use crate::core::lifecycle::DataRetention;
use crate::core::policy::ManagedPolicy;

// ============================================================================
// SECTION: Bucket
// ============================================================================

/// Managed object-storage bucket specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketSpec {
    /// Logical bucket identifier.
    pub bucket_id: BucketId,
    /// Resolved lifecycle settings.
    pub retention: DataRetention,
}

impl BucketSpec {
    /// Returns the storage URI for a logical path inside this bucket.
    #[must_use]
    pub fn storage_uri(&self, path: &TablePath) -> String {
        format!("s3://{}{}", self.bucket_id, path)
    }
}

// ============================================================================
// SECTION: Ingestion Binding
// ============================================================================

/// One-time data-copy binding from an external source into the bucket.
///
/// Read-only after creation; its target path feeds crawler provisioning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestionBinding {
    /// External source bucket name.
    pub source_bucket_name: String,
    /// Path within the source bucket.
    pub source_path: TablePath,
    /// Managed target bucket.
    pub target_bucket: BucketId,
    /// Path within the target bucket where copied data lands.
    pub target_path: TablePath,
}

// ============================================================================
// SECTION: Role
// ============================================================================

/// Service principal allowed to assume a role.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServicePrincipal(String);

impl ServicePrincipal {
    /// Creates a new service principal.
    #[must_use]
    pub fn new(principal: impl Into<String>) -> Self {
        Self(principal.into())
    }

    /// Returns the principal as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ServicePrincipal {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Shared service role assumed by all discovery jobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleSpec {
    /// Role name.
    pub role_name: RoleName,
    /// Principal trusted to assume the role.
    pub trusted_principal: ServicePrincipal,
    /// Managed policies attached to the role.
    pub managed_policies: Vec<ManagedPolicy>,
}

// ============================================================================
// SECTION: Group
// ============================================================================

/// Organizational group sourced from the identity collaborator.
///
/// Composition mutates only the policy set; membership is owned externally.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSpec {
    /// Group name.
    pub group_name: GroupName,
    /// Managed policies attached to the group.
    pub managed_policies: Vec<ManagedPolicy>,
}

// ============================================================================
// SECTION: Crawler
// ============================================================================

/// Discovery crawler over one or more storage prefixes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrawlerSpec {
    /// Derived crawler name.
    pub crawler_name: CrawlerName,
    /// Owning role reference.
    pub role: RoleName,
    /// Target catalog database.
    pub database: DatabaseName,
    /// Ordered storage-path targets (`s3://` URIs).
    pub targets: Vec<String>,
}
