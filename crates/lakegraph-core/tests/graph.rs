// crates/lakegraph-core/tests/graph.rs
// ============================================================================
// Module: Resource Graph Tests
// Description: Tests for apply ordering and graph error paths.
// Purpose: Ensure topological sorting is deterministic and cycles are caught.
// Dependencies: lakegraph-core
// ============================================================================
//! ## Overview
//! Validates apply-order derivation over hand-built graphs, including cycle
//! detection and rejection of edges referencing unknown resources.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

use lakegraph_core::BucketId;
use lakegraph_core::BucketSpec;
use lakegraph_core::CrawlerName;
use lakegraph_core::CrawlerSpec;
use lakegraph_core::DataRetention;
use lakegraph_core::DatabaseName;
use lakegraph_core::DependencyEdge;
use lakegraph_core::GraphError;
use lakegraph_core::IngestionBinding;
use lakegraph_core::ManagedPolicy;
use lakegraph_core::ResourceGraph;
use lakegraph_core::ResourceRef;
use lakegraph_core::RoleName;
use lakegraph_core::RoleSpec;
use lakegraph_core::ServicePrincipal;
use lakegraph_core::TablePath;

/// Builds a minimal graph with one crawler and no grants.
fn minimal_graph() -> ResourceGraph {
    let bucket_id = BucketId::new("xw-batch-bucket-raw");
    ResourceGraph {
        bucket: BucketSpec {
            bucket_id: bucket_id.clone(),
            retention: DataRetention::resolve(true),
        },
        ingestion: IngestionBinding {
            source_bucket_name: "xw-d13g-scoofy-data-inputs".to_string(),
            source_path: TablePath::new("/data/journeys"),
            target_bucket: bucket_id,
            target_path: TablePath::new("/raw/scoofy/journeys/"),
        },
        role: RoleSpec {
            role_name: RoleName::new("s3-raw-access-glue"),
            trusted_principal: ServicePrincipal::new("glue.amazonaws.com"),
            managed_policies: vec![ManagedPolicy::GlueServiceRole],
        },
        groups: Vec::new(),
        crawlers: vec![CrawlerSpec {
            crawler_name: CrawlerName::new("rawcrawler--raw-scoofy-journeys-"),
            role: RoleName::new("s3-raw-access-glue"),
            database: DatabaseName::new("data_lake_raw"),
            targets: vec!["s3://xw-batch-bucket-raw/raw/scoofy/journeys/".to_string()],
        }],
        grants: Vec::new(),
        dependencies: Vec::new(),
    }
}

/// Returns the references used by dependency tests.
fn refs() -> (ResourceRef, ResourceRef, ResourceRef) {
    (
        ResourceRef::Bucket {
            bucket_id: BucketId::new("xw-batch-bucket-raw"),
        },
        ResourceRef::Role {
            role_name: RoleName::new("s3-raw-access-glue"),
        },
        ResourceRef::Crawler {
            crawler_name: CrawlerName::new("rawcrawler--raw-scoofy-journeys-"),
        },
    )
}

/// Without edges the apply order follows declaration order.
#[test]
fn apply_order_without_edges_is_declaration_order() {
    let graph = minimal_graph();
    let order = graph.apply_order().expect("acyclic graph");
    assert_eq!(order, graph.nodes());
}

/// Dependency edges push dependents after their prerequisites.
#[test]
fn apply_order_respects_dependency_edges() {
    let mut graph = minimal_graph();
    let (bucket, role, crawler) = refs();
    graph.dependencies = vec![
        DependencyEdge {
            resource: crawler.clone(),
            depends_on: bucket.clone(),
        },
        DependencyEdge {
            resource: crawler.clone(),
            depends_on: role.clone(),
        },
    ];

    let order = graph.apply_order().expect("acyclic graph");
    let position = |target: &ResourceRef| {
        order.iter().position(|node| node == target).expect("node present")
    };
    assert!(position(&bucket) < position(&crawler));
    assert!(position(&role) < position(&crawler));
}

/// Apply ordering is deterministic for a fixed graph.
#[test]
fn apply_order_is_deterministic() {
    let mut graph = minimal_graph();
    let (bucket, role, crawler) = refs();
    graph.dependencies = vec![
        DependencyEdge {
            resource: crawler.clone(),
            depends_on: role,
        },
        DependencyEdge {
            resource: crawler,
            depends_on: bucket,
        },
    ];

    let first = graph.apply_order().expect("first order");
    let second = graph.apply_order().expect("second order");
    assert_eq!(first, second);
}

/// Cyclic dependency edges are reported as an error.
#[test]
fn apply_order_detects_cycles() {
    let mut graph = minimal_graph();
    let (bucket, role, _) = refs();
    graph.dependencies = vec![
        DependencyEdge {
            resource: bucket.clone(),
            depends_on: role.clone(),
        },
        DependencyEdge {
            resource: role,
            depends_on: bucket,
        },
    ];

    let err = graph.apply_order().expect_err("cycle must be detected");
    assert!(matches!(err, GraphError::DependencyCycle(_)));
}

/// Edges referencing resources outside the graph are rejected.
#[test]
fn apply_order_rejects_unknown_resources() {
    let mut graph = minimal_graph();
    let (bucket, _, _) = refs();
    graph.dependencies = vec![DependencyEdge {
        resource: ResourceRef::Crawler {
            crawler_name: CrawlerName::new("rawcrawler-unknown"),
        },
        depends_on: bucket,
    }];

    let err = graph.apply_order().expect_err("unknown resource must be rejected");
    assert!(matches!(err, GraphError::UnknownResource(_)));
}

/// Canonical hashing is stable across clones of the same graph.
#[test]
fn canonical_hash_is_stable() {
    let graph = minimal_graph();
    let clone = graph.clone();
    assert_eq!(
        graph.canonical_hash().expect("hash graph"),
        clone.canonical_hash().expect("hash clone")
    );
}
