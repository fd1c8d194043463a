// crates/lakegraph-core/src/compose/stack.rs
// ============================================================================
// Module: Lakegraph Stack Composer
// Description: Top-level composition of the lake storage and discovery stack.
// Purpose: Turn settings and collaborators into one complete resource graph.
// Dependencies: crate::{compose, core, interfaces}
// ============================================================================

//! ## Overview
//! Stack composition is a pure function over its settings and collaborator
//! seams. It resolves bucket retention, requests the ingestion binding,
//! provisions one crawler per resulting table path, and wires the access
//! grants, producing an isolated [`ResourceGraph`] plus the handles other
//! components may depend on. Composition either completes fully or fails
//! with a construction error; there is no partial graph.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::compose::crawlers::provision_crawlers;
use crate::compose::grants::bind_access_grants;
use crate::core::BucketId;
use crate::core::BucketSpec;
use crate::core::CrawlerSpec;
use crate::core::DataRetention;
use crate::core::DatabaseName;
use crate::core::DependencyEdge;
use crate::core::GroupName;
use crate::core::IngestionBinding;
use crate::core::LifecycleError;
use crate::core::ManagedPolicy;
use crate::core::NamingError;
use crate::core::ResourceGraph;
use crate::core::ResourceRef;
use crate::core::RoleName;
use crate::core::RoleSpec;
use crate::core::ServicePrincipal;
use crate::core::TablePath;
use crate::core::naming::ensure_catalog_safe;
use crate::interfaces::GroupDirectory;
use crate::interfaces::IdentityDirectory;
use crate::interfaces::IdentityError;
use crate::interfaces::IngestionError;
use crate::interfaces::IngestionRequest;
use crate::interfaces::IngestionSource;

// ============================================================================
// SECTION: Settings
// ============================================================================

/// Fixed configuration for one stack composition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackSettings {
    /// Whether data resources survive deconstruction of the graph.
    pub keep_data_resources_on_destroy: bool,
    /// Logical identifier of the raw-data bucket.
    pub bucket_id: BucketId,
    /// External bucket holding the example source data.
    pub source_bucket_name: String,
    /// Path within the source bucket.
    pub source_path: TablePath,
    /// Target path in the raw bucket for the ingested data.
    pub target_path: TablePath,
    /// Debugging group granted read access to data and logs.
    pub debugging_group: GroupName,
    /// Shared role assumed by all discovery jobs.
    pub role_name: RoleName,
    /// Catalog database the crawlers register tables into.
    pub database_name: DatabaseName,
    /// Service principal trusted to assume the discovery role.
    pub trusted_principal: ServicePrincipal,
}

// ============================================================================
// SECTION: Composition Output
// ============================================================================

/// Handles exposed by a completed composition.
///
/// These are the only outputs other components may depend on; a future
/// parquet-conversion step consumes the bucket and binding handles.
#[derive(Debug, Clone, PartialEq)]
pub struct StackComposition {
    /// The complete declarative resource graph.
    pub graph: ResourceGraph,
    /// Handle to the managed bucket.
    pub bucket: BucketId,
    /// Handle to the ingestion binding, including its target path.
    pub ingestion: IngestionBinding,
    /// Handle to the organizational group collection.
    pub groups: GroupDirectory,
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Stack composition errors.
#[derive(Debug, Error)]
pub enum ComposeError {
    /// Ingestion collaborator failed to bind the data copy.
    #[error(transparent)]
    Ingestion(#[from] IngestionError),
    /// Identity collaborator failed to provide groups.
    #[error(transparent)]
    Identity(#[from] IdentityError),
    /// A table path is unsafe for downstream catalog identifiers.
    #[error(transparent)]
    UnsafeTablePath(#[from] NamingError),
    /// Lifecycle settings were invalid.
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
}

// ============================================================================
// SECTION: Stack Composition
// ============================================================================

/// Composes the complete lake stack resource graph.
///
/// Single-threaded and synchronous; no I/O, no suspension points. Repeated
/// composition with identical settings yields a graph with an identical
/// canonical hash.
///
/// # Errors
///
/// Returns [`ComposeError`] when a collaborator rejects its request or a
/// table path fails the catalog-safety check. No partial graph is produced.
pub fn compose_stack(
    settings: &StackSettings,
    ingestion_source: &dyn IngestionSource,
    identity: &dyn IdentityDirectory,
) -> Result<StackComposition, ComposeError> {
    let retention = DataRetention::resolve(settings.keep_data_resources_on_destroy);
    let bucket = BucketSpec {
        bucket_id: settings.bucket_id.clone(),
        retention,
    };

    let ingestion = ingestion_source.bind(&IngestionRequest {
        source_bucket_name: settings.source_bucket_name.clone(),
        source_path: settings.source_path.clone(),
        target_bucket: bucket.bucket_id.clone(),
        target_path: settings.target_path.clone(),
    })?;

    let mut groups = identity.create_org_groups()?;

    // One table per ingestion binding today; the crawler provisioner accepts
    // any number of paths for future sources.
    let table_paths = vec![ingestion.target_path.clone()];
    for path in &table_paths {
        ensure_catalog_safe(path)?;
    }

    let role = RoleSpec {
        role_name: settings.role_name.clone(),
        trusted_principal: settings.trusted_principal.clone(),
        managed_policies: vec![ManagedPolicy::GlueServiceRole],
    };

    let crawlers = provision_crawlers(&table_paths, &bucket, &role.role_name, &settings.database_name);

    let debugging_group = groups.get_group_mut(&settings.debugging_group)?;
    if !debugging_group.managed_policies.contains(&ManagedPolicy::CloudWatchReadOnly) {
        debugging_group.managed_policies.push(ManagedPolicy::CloudWatchReadOnly);
    }

    let grants = bind_access_grants(&bucket.bucket_id, &role.role_name, &settings.debugging_group);

    let dependencies = dependency_edges(&bucket, &ingestion, &role, &crawlers);

    let graph = ResourceGraph {
        bucket: bucket.clone(),
        ingestion: ingestion.clone(),
        role,
        groups: groups.groups().to_vec(),
        crawlers,
        grants,
        dependencies,
    };

    Ok(StackComposition {
        bucket: bucket.bucket_id,
        ingestion,
        groups,
        graph,
    })
}

/// Records the explicit apply-order constraints of the stack.
fn dependency_edges(
    bucket: &BucketSpec,
    ingestion: &IngestionBinding,
    role: &RoleSpec,
    crawlers: &[CrawlerSpec],
) -> Vec<DependencyEdge> {
    let bucket_ref = ResourceRef::Bucket {
        bucket_id: bucket.bucket_id.clone(),
    };
    let role_ref = ResourceRef::Role {
        role_name: role.role_name.clone(),
    };

    let mut edges = vec![DependencyEdge {
        resource: ResourceRef::Ingestion {
            target_bucket: ingestion.target_bucket.clone(),
            target_path: ingestion.target_path.clone(),
        },
        depends_on: bucket_ref.clone(),
    }];
    for crawler in crawlers {
        let crawler_ref = ResourceRef::Crawler {
            crawler_name: crawler.crawler_name.clone(),
        };
        edges.push(DependencyEdge {
            resource: crawler_ref.clone(),
            depends_on: bucket_ref.clone(),
        });
        edges.push(DependencyEdge {
            resource: crawler_ref,
            depends_on: role_ref.clone(),
        });
    }
    edges
}
