// crates/lakegraph-config/src/lib.rs
// ============================================================================
// Module: Lakegraph Config Library
// Description: Canonical config model and validation for stack composition.
// Purpose: Single source of truth for lakegraph.toml semantics.
// Dependencies: lakegraph-core, serde, toml
// ============================================================================

//! ## Overview
//! `lakegraph-config` defines the canonical configuration model for lake
//! stack composition. It provides strict, fail-closed validation and the
//! conversion into composer settings. Configuration identifies the fixed
//! deployment constants (bucket, ingestion source, role, database, group);
//! the only runtime flag is keep-on-destroy.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
