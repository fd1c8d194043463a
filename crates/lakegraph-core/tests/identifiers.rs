// crates/lakegraph-core/tests/identifiers.rs
// ============================================================================
// Module: Identifier Tests
// Description: Tests for Lakegraph identifier wrappers.
// Purpose: Ensure IDs round-trip through serde and display correctly.
// Dependencies: lakegraph-core, serde_json
// ============================================================================
//! ## Overview
//! Validates that identifier wrappers preserve their underlying string values.

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
use lakegraph_core::CrawlerName;
use lakegraph_core::DatabaseName;
use lakegraph_core::GroupName;
use lakegraph_core::RoleName;
use lakegraph_core::TablePath;

macro_rules! assert_id_roundtrip {
    ($ty:ty, $value:expr) => {{
        let id = <$ty>::new($value);
        assert_eq!(id.as_str(), $value);
        assert_eq!(id.to_string(), $value);

        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, format!("\"{}\"", $value));

        let decoded: $ty = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded.as_str(), $value);
    }};
}

/// Verifies identifier wrappers expose stable string values and serde.
#[test]
fn identifiers_roundtrip_with_serde_and_display() {
    assert_id_roundtrip!(BucketId, "xw-batch-bucket-raw");
    assert_id_roundtrip!(RoleName, "s3-raw-access-glue");
    assert_id_roundtrip!(GroupName, "data_lake_debugging");
    assert_id_roundtrip!(DatabaseName, "data_lake_raw");
    assert_id_roundtrip!(CrawlerName, "rawcrawler--raw-scoofy-journeys-");
    assert_id_roundtrip!(TablePath, "/raw/scoofy/journeys/");
}
