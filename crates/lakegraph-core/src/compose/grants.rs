// crates/lakegraph-core/src/compose/grants.rs
// ============================================================================
// Module: Lakegraph Access Grant Binding
// Description: Derivation of permission grant edges between stack resources.
// Purpose: Wire the service role and debugging group to the bucket and logs.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Access grants are graph edges, not imperative calls. Binding always
//! yields the same three edges for the same inputs: the discovery role gets
//! read-write on the bucket (jobs read objects and write their own logs and
//! metadata), the debugging group gets read-only on the bucket, and the
//! debugging group gets the platform log-read policy attached directly.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::AccessMode;
use crate::core::BucketId;
use crate::core::GrantEdge;
use crate::core::GrantTarget;
use crate::core::GroupName;
use crate::core::ManagedPolicy;
use crate::core::ResourceRef;
use crate::core::RoleName;

// ============================================================================
// SECTION: Grant Binding
// ============================================================================

/// Derives the grant edge set for the stack.
///
/// Idempotent by construction: the returned edges are a pure function of
/// the three inputs.
#[must_use]
pub fn bind_access_grants(
    bucket: &BucketId,
    role: &RoleName,
    debugging_group: &GroupName,
) -> Vec<GrantEdge> {
    let bucket_ref = ResourceRef::Bucket {
        bucket_id: bucket.clone(),
    };
    vec![
        GrantEdge {
            grantee: ResourceRef::Role {
                role_name: role.clone(),
            },
            target: GrantTarget::Resource {
                resource: bucket_ref.clone(),
            },
            access: AccessMode::ReadWrite,
        },
        GrantEdge {
            grantee: ResourceRef::Group {
                group_name: debugging_group.clone(),
            },
            target: GrantTarget::Resource {
                resource: bucket_ref,
            },
            access: AccessMode::Read,
        },
        GrantEdge {
            grantee: ResourceRef::Group {
                group_name: debugging_group.clone(),
            },
            target: GrantTarget::Policy {
                policy: ManagedPolicy::CloudWatchReadOnly,
            },
            access: AccessMode::Attach,
        },
    ]
}
