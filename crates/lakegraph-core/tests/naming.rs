// crates/lakegraph-core/tests/naming.rs
// ============================================================================
// Module: Naming Tests
// Description: Tests for slug derivation and catalog-safety validation.
// Purpose: Ensure names are deterministic and unsafe paths are detected.
// Dependencies: lakegraph-core
// ============================================================================
//! ## Overview
//! Validates slug determinism, the crawler name prefix, and the
//! catalog-safety check over table path segments.

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

use lakegraph_core::NamingError;
use lakegraph_core::TablePath;
use lakegraph_core::crawler_name;
use lakegraph_core::ensure_catalog_safe;
use lakegraph_core::is_catalog_safe;
use lakegraph_core::table_slug;

/// Slugs replace every separator with a hyphen and nothing else.
#[test]
fn slug_replaces_separators_with_hyphens() {
    let path = TablePath::new("/raw/scoofy/journeys/");
    assert_eq!(table_slug(&path), "-raw-scoofy-journeys-");

    let flat = TablePath::new("journeys");
    assert_eq!(table_slug(&flat), "journeys");
}

/// Slug derivation is deterministic.
#[test]
fn slug_is_deterministic() {
    let path = TablePath::new("/raw/scoofy/journeys/");
    assert_eq!(table_slug(&path), table_slug(&path));
}

/// Crawler names carry the raw-crawler prefix plus the slug.
#[test]
fn crawler_name_applies_prefix() {
    let path = TablePath::new("/raw/scoofy/journeys/");
    let name = crawler_name(&path);
    assert_eq!(name.as_str(), "rawcrawler--raw-scoofy-journeys-");
    assert_eq!(crawler_name(&path), name);
}

/// Lowercase, digits, and underscore segments are catalog-safe.
#[test]
fn catalog_safe_accepts_valid_segments() {
    assert!(is_catalog_safe("journeys"));
    assert!(is_catalog_safe("raw_2024"));
    assert!(is_catalog_safe("a"));
    ensure_catalog_safe(&TablePath::new("/raw/scoofy/journeys/")).expect("valid path");
}

/// Uppercase, punctuation, and empty segments are rejected.
#[test]
fn catalog_safe_rejects_invalid_segments() {
    assert!(!is_catalog_safe("Journeys"));
    assert!(!is_catalog_safe("jour-neys"));
    assert!(!is_catalog_safe("jour.neys"));
    assert!(!is_catalog_safe(""));
}

/// Unsafe paths fail with the offending segment reported.
#[test]
fn ensure_catalog_safe_names_offending_segment() {
    let path = TablePath::new("/raw/Scoofy/journeys/");
    let err = ensure_catalog_safe(&path).expect_err("uppercase segment must be rejected");
    match err {
        NamingError::UnsafeSegment {
            segment, ..
        } => assert_eq!(segment, "Scoofy"),
    }
}

/// Empty segments from doubled or edge separators are ignored.
#[test]
fn ensure_catalog_safe_ignores_empty_segments() {
    ensure_catalog_safe(&TablePath::new("//raw//journeys//")).expect("empty segments skipped");
}
