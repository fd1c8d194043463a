// crates/lakegraph-core/src/compose/mod.rs
// ============================================================================
// Module: Lakegraph Composition
// Description: Crawler provisioning, grant binding, and stack composition.
// Purpose: Turn settings and collaborators into a declarative resource graph.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! Composition modules hold the only decision logic of the system: the
//! rules that expand a short list of logical data-source paths and one
//! boolean flag into a fully wired storage, identity, and discovery graph.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod crawlers;
pub mod grants;
pub mod stack;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use crawlers::provision_crawlers;
pub use grants::bind_access_grants;
pub use stack::ComposeError;
pub use stack::StackComposition;
pub use stack::StackSettings;
pub use stack::compose_stack;
