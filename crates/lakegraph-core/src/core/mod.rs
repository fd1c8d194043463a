// crates/lakegraph-core/src/core/mod.rs
// ============================================================================
// Module: Lakegraph Core Types
// Description: Canonical resource, naming, and lifecycle structures.
// Purpose: Provide stable, serializable types for lake stack composition.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Core types define the declarative data model of the lake stack: typed
//! identifiers, lifecycle settings, managed-policy references, resource
//! specifications, and the composed resource graph. These types are the
//! canonical source of truth for anything the provisioning engine consumes.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod graph;
pub mod hashing;
pub mod identifiers;
pub mod lifecycle;
pub mod naming;
pub mod policy;
pub mod resources;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use graph::AccessMode;
pub use graph::DependencyEdge;
pub use graph::GrantEdge;
pub use graph::GrantTarget;
pub use graph::GraphError;
pub use graph::ResourceGraph;
pub use graph::ResourceRef;
pub use hashing::DEFAULT_HASH_ALGORITHM;
pub use hashing::HashAlgorithm;
pub use hashing::HashDigest;
pub use identifiers::BucketId;
pub use identifiers::CrawlerName;
pub use identifiers::DatabaseName;
pub use identifiers::GroupName;
pub use identifiers::RoleName;
pub use identifiers::TablePath;
pub use lifecycle::DataRetention;
pub use lifecycle::LifecycleError;
pub use lifecycle::RemovalPolicy;
pub use naming::CRAWLER_NAME_PREFIX;
pub use naming::NamingError;
pub use naming::crawler_name;
pub use naming::ensure_catalog_safe;
pub use naming::is_catalog_safe;
pub use naming::table_slug;
pub use policy::ManagedPolicy;
pub use resources::BucketSpec;
pub use resources::CrawlerSpec;
pub use resources::GroupSpec;
pub use resources::IngestionBinding;
pub use resources::RoleSpec;
pub use resources::ServicePrincipal;
