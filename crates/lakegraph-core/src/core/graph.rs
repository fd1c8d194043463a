// crates/lakegraph-core/src/core/graph.rs
// ============================================================================
// Module: Lakegraph Resource Graph
// Description: Declarative resource graph with explicit grant and dependency edges.
// Purpose: Give the apply engine a topologically sortable description of the stack.
// Dependencies: crate::core::{hashing, identifiers, policy, resources}, serde, thiserror
// ============================================================================

//! ## Overview
//! The resource graph is the composition output: every resource the stack
//! needs, the permission grants between them, and explicit dependency edges.
//! Ordering is never implied by declaration order; the apply engine derives
//! a valid order from the dependency edges alone. Graphs are value types
//! with a canonical digest so idempotence is directly testable.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::hashing::DEFAULT_HASH_ALGORITHM;
use crate::core::hashing::HashDigest;
use crate::core::hashing::HashError;
use crate::core::hashing::hash_canonical_json;
use crate::core::identifiers::BucketId;
use crate::core::identifiers::CrawlerName;
use crate::core::identifiers::GroupName;
use crate::core::identifiers::RoleName;
use crate::core::identifiers::TablePath;
use crate::core::policy::ManagedPolicy;
use crate::core::resources::BucketSpec;
use crate::core::resources::CrawlerSpec;
use crate::core::resources::GroupSpec;
use crate::core::resources::IngestionBinding;
use crate::core::resources::RoleSpec;

// ============================================================================
// SECTION: Resource References
// ============================================================================

/// Reference to a resource node in the graph.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResourceRef {
    /// The managed bucket.
    Bucket {
        /// Bucket identifier.
        bucket_id: BucketId,
    },
    /// The shared discovery-job role.
    Role {
        /// Role name.
        role_name: RoleName,
    },
    /// An organizational group.
    Group {
        /// Group name.
        group_name: GroupName,
    },
    /// A discovery crawler.
    Crawler {
        /// Crawler name.
        crawler_name: CrawlerName,
    },
    /// The ingestion binding into the bucket.
    Ingestion {
        /// Target bucket identifier.
        target_bucket: BucketId,
        /// Target path within the bucket.
        target_path: TablePath,
    },
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bucket {
                bucket_id,
            } => write!(f, "bucket/{bucket_id}"),
            Self::Role {
                role_name,
            } => write!(f, "role/{role_name}"),
            Self::Group {
                group_name,
            } => write!(f, "group/{group_name}"),
            Self::Crawler {
                crawler_name,
            } => write!(f, "crawler/{crawler_name}"),
            Self::Ingestion {
                target_bucket,
                target_path,
            } => write!(f, "ingestion/{target_bucket}{target_path}"),
        }
    }
}

// ============================================================================
// SECTION: Grant Edges
// ============================================================================

/// Access level conveyed by a grant edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessMode {
    /// Read-only access to a resource.
    Read,
    /// Read and write access to a resource.
    ReadWrite,
    /// Direct attachment of a managed policy.
    Attach,
}

/// Target of a grant edge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GrantTarget {
    /// Grant over a resource node in the graph.
    Resource {
        /// Referenced resource.
        resource: ResourceRef,
    },
    /// Attachment of an externally defined managed policy.
    Policy {
        /// Referenced managed policy.
        policy: ManagedPolicy,
    },
}

/// Permission grant between a grantee and a target.
///
/// Grants are graph edges, not imperative calls; binding the same inputs
/// twice yields the same edge set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GrantEdge {
    /// Identity receiving the grant.
    pub grantee: ResourceRef,
    /// Resource or policy being granted.
    pub target: GrantTarget,
    /// Access level conveyed.
    pub access: AccessMode,
}

// ============================================================================
// SECTION: Dependency Edges
// ============================================================================

/// Directed dependency edge: `resource` must be applied after `depends_on`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DependencyEdge {
    /// Dependent resource.
    pub resource: ResourceRef,
    /// Resource that must exist first.
    pub depends_on: ResourceRef,
}

// ============================================================================
// SECTION: Resource Graph
// ============================================================================

/// Complete declarative resource graph produced by one composition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceGraph {
    /// The managed bucket.
    pub bucket: BucketSpec,
    /// The one-time ingestion binding.
    pub ingestion: IngestionBinding,
    /// The shared discovery-job role.
    pub role: RoleSpec,
    /// Groups whose policy sets were touched by composition.
    pub groups: Vec<GroupSpec>,
    /// Discovery crawlers, one per table path.
    pub crawlers: Vec<CrawlerSpec>,
    /// Permission grant edges.
    pub grants: Vec<GrantEdge>,
    /// Explicit dependency edges.
    pub dependencies: Vec<DependencyEdge>,
}

impl ResourceGraph {
    /// Returns every resource node in declaration order.
    #[must_use]
    pub fn nodes(&self) -> Vec<ResourceRef> {
        let mut nodes = vec![
            ResourceRef::Bucket {
                bucket_id: self.bucket.bucket_id.clone(),
            },
            ResourceRef::Ingestion {
                target_bucket: self.ingestion.target_bucket.clone(),
                target_path: self.ingestion.target_path.clone(),
            },
            ResourceRef::Role {
                role_name: self.role.role_name.clone(),
            },
        ];
        for group in &self.groups {
            nodes.push(ResourceRef::Group {
                group_name: group.group_name.clone(),
            });
        }
        for crawler in &self.crawlers {
            nodes.push(ResourceRef::Crawler {
                crawler_name: crawler.crawler_name.clone(),
            });
        }
        nodes
    }

    /// Derives a valid apply order from the dependency edges.
    ///
    /// Kahn's algorithm with a stable tie-break on declaration order, so the
    /// result is deterministic for a given graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DependencyCycle`] when the dependency edges
    /// contain a cycle, and [`GraphError::UnknownResource`] when an edge
    /// references a resource that is not a node of the graph.
    pub fn apply_order(&self) -> Result<Vec<ResourceRef>, GraphError> {
        let nodes = self.nodes();
        for edge in &self.dependencies {
            if !nodes.contains(&edge.resource) {
                return Err(GraphError::UnknownResource(edge.resource.to_string()));
            }
            if !nodes.contains(&edge.depends_on) {
                return Err(GraphError::UnknownResource(edge.depends_on.to_string()));
            }
        }

        let mut ordered = Vec::with_capacity(nodes.len());
        let mut remaining = nodes;
        while !remaining.is_empty() {
            let ready = remaining.iter().position(|candidate| {
                self.dependencies.iter().all(|edge| {
                    edge.resource != *candidate || !remaining.contains(&edge.depends_on)
                })
            });
            match ready {
                Some(index) => ordered.push(remaining.remove(index)),
                None => {
                    return Err(GraphError::DependencyCycle(
                        remaining.iter().map(ResourceRef::to_string).collect::<Vec<_>>().join(", "),
                    ));
                }
            }
        }
        Ok(ordered)
    }

    /// Computes the canonical digest of the graph.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::Canonicalization`] when serialization fails.
    pub fn canonical_hash(&self) -> Result<HashDigest, HashError> {
        hash_canonical_json(DEFAULT_HASH_ALGORITHM, self)
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Resource graph errors.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Dependency edges form a cycle.
    #[error("dependency cycle among resources: {0}")]
    DependencyCycle(String),
    /// A dependency edge references a resource that is not in the graph.
    #[error("dependency edge references unknown resource: {0}")]
    UnknownResource(String),
}
