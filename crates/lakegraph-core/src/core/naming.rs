// crates/lakegraph-core/src/core/naming.rs
// ============================================================================
// Module: Lakegraph Resource Naming
// Description: Deterministic slug and crawler name derivation from table paths.
// Purpose: Turn logical `/`-separated paths into stable resource-name suffixes.
// Dependencies: crate::core::identifiers, thiserror
// ============================================================================

//! ## Overview
//! Resource names are derived deterministically from logical table paths by
//! replacing every path separator with a hyphen. Slug derivation performs no
//! deduplication and no character-set validation; catalog-safety is a
//! separate check applied by the composer before crawlers are provisioned,
//! since downstream catalogs only accept `[a-z0-9_]` identifiers.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::identifiers::CrawlerName;
use crate::core::identifiers::TablePath;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Prefix applied to every raw-data crawler name.
pub const CRAWLER_NAME_PREFIX: &str = "rawcrawler-";
/// Maximum length of a single catalog path segment.
const MAX_SEGMENT_LENGTH: usize = 255;

// ============================================================================
// SECTION: Slug Derivation
// ============================================================================

/// Derives a resource-name slug from a logical table path.
///
/// Deterministic: the same path always yields the same slug. Separators are
/// replaced with hyphens; no other characters are touched.
#[must_use]
pub fn table_slug(path: &TablePath) -> String {
    path.as_str().replace('/', "-")
}

/// Derives the crawler name for a logical table path.
#[must_use]
pub fn crawler_name(path: &TablePath) -> CrawlerName {
    CrawlerName::new(format!("{CRAWLER_NAME_PREFIX}{}", table_slug(path)))
}

// ============================================================================
// SECTION: Catalog Safety
// ============================================================================

/// Returns whether a single path segment is safe for catalog identifiers.
#[must_use]
pub fn is_catalog_safe(segment: &str) -> bool {
    !segment.is_empty()
        && segment.len() <= MAX_SEGMENT_LENGTH
        && segment.bytes().all(|byte| byte.is_ascii_lowercase() || byte.is_ascii_digit() || byte == b'_')
}

/// Ensures every segment of a table path is safe for catalog identifiers.
///
/// Empty segments produced by leading, trailing, or doubled separators are
/// ignored; only named segments are checked.
///
/// # Errors
///
/// Returns [`NamingError::UnsafeSegment`] for the first offending segment.
pub fn ensure_catalog_safe(path: &TablePath) -> Result<(), NamingError> {
    for segment in path.as_str().split('/').filter(|segment| !segment.is_empty()) {
        if !is_catalog_safe(segment) {
            return Err(NamingError::UnsafeSegment {
                path: path.to_string(),
                segment: segment.to_string(),
            });
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Naming validation errors.
#[derive(Debug, Error)]
pub enum NamingError {
    /// A path segment contains characters the downstream catalog rejects.
    #[error("table path {path} has catalog-unsafe segment {segment}: only [a-z0-9_]{{1,255}} is accepted")]
    UnsafeSegment {
        /// Full offending table path.
        path: String,
        /// First offending segment.
        segment: String,
    },
}
