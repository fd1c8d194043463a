// crates/lakegraph-core/src/compose/crawlers.rs
// ============================================================================
// Module: Lakegraph Crawler Provisioning
// Description: Expansion of logical table paths into discovery crawler specs.
// Purpose: Produce one deterministic crawler per raw-data table path.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Each logical table path yields exactly one crawler targeting the matching
//! storage prefix. Paths are not deduplicated: duplicated inputs produce
//! crawlers with colliding names, which the provisioning engine rejects at
//! apply time. Provisioning twice with an unchanged path list yields
//! identical crawler definitions.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::BucketSpec;
use crate::core::CrawlerSpec;
use crate::core::DatabaseName;
use crate::core::RoleName;
use crate::core::TablePath;
use crate::core::naming::crawler_name;

// ============================================================================
// SECTION: Crawler Provisioning
// ============================================================================

/// Expands table paths into one crawler specification per path.
///
/// Crawlers share one role and one target database. The data model permits
/// multiple targets per crawler; the current composition assigns one.
#[must_use]
pub fn provision_crawlers(
    paths: &[TablePath],
    bucket: &BucketSpec,
    role: &RoleName,
    database: &DatabaseName,
) -> Vec<CrawlerSpec> {
    paths
        .iter()
        .map(|path| CrawlerSpec {
            crawler_name: crawler_name(path),
            role: role.clone(),
            database: database.clone(),
            targets: vec![bucket.storage_uri(path)],
        })
        .collect()
}
