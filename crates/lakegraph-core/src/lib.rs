// crates/lakegraph-core/src/lib.rs
// ============================================================================
// Module: Lakegraph Core Library
// Description: Public API surface for the Lakegraph core.
// Purpose: Expose core types, interfaces, and composition helpers.
// Dependencies: crate::{compose, core, interfaces}
// ============================================================================

//! ## Overview
//! Lakegraph core composes the storage and discovery layer of a small data
//! lake into a declarative resource graph: one bucket, a one-time ingestion
//! binding, per-table discovery crawlers, and the access grants that let
//! operators and jobs read the data safely. It is engine-agnostic and
//! integrates through explicit interfaces rather than extending any
//! provisioning-framework base class.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod compose;
pub mod core;
pub mod interfaces;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use self::core::*;

pub use compose::ComposeError;
pub use compose::StackComposition;
pub use compose::StackSettings;
pub use compose::bind_access_grants;
pub use compose::compose_stack;
pub use compose::provision_crawlers;
pub use interfaces::GraphRegistrar;
pub use interfaces::GroupDirectory;
pub use interfaces::IdentityDirectory;
pub use interfaces::IdentityError;
pub use interfaces::IngestionError;
pub use interfaces::IngestionRequest;
pub use interfaces::IngestionSource;
pub use interfaces::RegistrarError;
pub use interfaces::StaticIdentityDirectory;
pub use interfaces::StaticIngestionSource;
