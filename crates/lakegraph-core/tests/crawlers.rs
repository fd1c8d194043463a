// crates/lakegraph-core/tests/crawlers.rs
// ============================================================================
// Module: Crawler Provisioning Tests
// Description: Tests for table-path expansion into crawler specifications.
// Purpose: Ensure one deterministic crawler is produced per input path.
// Dependencies: lakegraph-core
// ============================================================================
//! ## Overview
//! Validates crawler naming, storage targets, duplicate handling, and
//! determinism of the provisioner.

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
use lakegraph_core::DataRetention;
use lakegraph_core::DatabaseName;
use lakegraph_core::RoleName;
use lakegraph_core::TablePath;
use lakegraph_core::provision_crawlers;

/// Builds the bucket used across crawler tests.
fn raw_bucket() -> BucketSpec {
    BucketSpec {
        bucket_id: BucketId::new("xw-batch-bucket-raw"),
        retention: DataRetention::resolve(true),
    }
}

/// One path yields exactly one crawler with the derived name and target.
#[test]
fn single_path_yields_single_crawler() {
    let paths = vec![TablePath::new("/raw/scoofy/journeys/")];
    let role = RoleName::new("s3-raw-access-glue");
    let database = DatabaseName::new("data_lake_raw");

    let crawlers = provision_crawlers(&paths, &raw_bucket(), &role, &database);

    assert_eq!(crawlers.len(), 1);
    let crawler = &crawlers[0];
    assert_eq!(crawler.crawler_name.as_str(), "rawcrawler--raw-scoofy-journeys-");
    assert_eq!(crawler.role, role);
    assert_eq!(crawler.database, database);
    assert_eq!(crawler.targets, vec!["s3://xw-batch-bucket-raw/raw/scoofy/journeys/".to_string()]);
}

/// Each input path produces its own crawler, in input order.
#[test]
fn multiple_paths_yield_one_crawler_each() {
    let paths = vec![
        TablePath::new("/raw/scoofy/journeys/"),
        TablePath::new("/raw/scoofy/stations/"),
    ];
    let crawlers = provision_crawlers(
        &paths,
        &raw_bucket(),
        &RoleName::new("s3-raw-access-glue"),
        &DatabaseName::new("data_lake_raw"),
    );

    assert_eq!(crawlers.len(), 2);
    assert_eq!(crawlers[0].crawler_name.as_str(), "rawcrawler--raw-scoofy-journeys-");
    assert_eq!(crawlers[1].crawler_name.as_str(), "rawcrawler--raw-scoofy-stations-");
}

/// Duplicated paths are not deduplicated and collide on name.
#[test]
fn duplicate_paths_produce_colliding_names() {
    let paths = vec![
        TablePath::new("/raw/scoofy/journeys/"),
        TablePath::new("/raw/scoofy/journeys/"),
    ];
    let crawlers = provision_crawlers(
        &paths,
        &raw_bucket(),
        &RoleName::new("s3-raw-access-glue"),
        &DatabaseName::new("data_lake_raw"),
    );

    assert_eq!(crawlers.len(), 2);
    assert_eq!(crawlers[0].crawler_name, crawlers[1].crawler_name);
}

/// Provisioning twice with unchanged inputs yields identical definitions.
#[test]
fn provisioning_is_deterministic() {
    let paths = vec![TablePath::new("/raw/scoofy/journeys/")];
    let role = RoleName::new("s3-raw-access-glue");
    let database = DatabaseName::new("data_lake_raw");

    let first = provision_crawlers(&paths, &raw_bucket(), &role, &database);
    let second = provision_crawlers(&paths, &raw_bucket(), &role, &database);
    assert_eq!(first, second);
}
