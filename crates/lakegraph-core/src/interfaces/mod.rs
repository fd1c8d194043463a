// crates/lakegraph-core/src/interfaces/mod.rs
// ============================================================================
// Module: Lakegraph Interfaces
// Description: Backend-agnostic interfaces for ingestion, identity, and apply.
// Purpose: Define the collaborator surfaces used by stack composition.
// Dependencies: crate::core
// ============================================================================

//! ## Overview
//! Interfaces define how composition integrates with external systems
//! without embedding backend-specific details. The data-copy job, the
//! organizational identity subsystem, and the provisioning engine all sit
//! behind these seams; composition itself performs no I/O.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::core::BucketId;
use crate::core::GroupName;
use crate::core::GroupSpec;
use crate::core::IngestionBinding;
use crate::core::ResourceGraph;
use crate::core::TablePath;

// ============================================================================
// SECTION: Ingestion Source
// ============================================================================

/// Request for a one-time data-copy binding into the managed bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IngestionRequest {
    /// External source bucket name.
    pub source_bucket_name: String,
    /// Path within the source bucket.
    pub source_path: TablePath,
    /// Managed target bucket.
    pub target_bucket: BucketId,
    /// Path within the target bucket where copied data lands.
    pub target_path: TablePath,
}

/// Ingestion collaborator errors.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// Ingestion collaborator rejected the binding request.
    #[error("ingestion binding rejected: {0}")]
    BindingRejected(String),
}

/// Collaborator that creates data-copy bindings into the bucket.
pub trait IngestionSource {
    /// Binds a source location to a target location in the managed bucket.
    ///
    /// # Errors
    ///
    /// Returns [`IngestionError`] when the binding cannot be created.
    fn bind(&self, request: &IngestionRequest) -> Result<IngestionBinding, IngestionError>;
}

/// Ingestion source that declares the binding without side effects.
///
/// The physical copy is executed later by the external data-copy job; this
/// implementation only records the requested locations.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticIngestionSource;

impl IngestionSource for StaticIngestionSource {
    fn bind(&self, request: &IngestionRequest) -> Result<IngestionBinding, IngestionError> {
        Ok(IngestionBinding {
            source_bucket_name: request.source_bucket_name.clone(),
            source_path: request.source_path.clone(),
            target_bucket: request.target_bucket.clone(),
            target_path: request.target_path.clone(),
        })
    }
}

// ============================================================================
// SECTION: Identity Directory
// ============================================================================

/// Identity collaborator errors.
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Identity collaborator failed to create the organizational groups.
    #[error("group creation failed: {0}")]
    GroupCreation(String),
    /// Requested group is not part of the directory.
    #[error("unknown group: {0}")]
    UnknownGroup(String),
}

/// Collection of organizational groups created by the identity collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupDirectory {
    /// Groups keyed by declaration order.
    groups: Vec<GroupSpec>,
}

impl GroupDirectory {
    /// Creates a directory from a list of groups.
    #[must_use]
    pub fn new(groups: Vec<GroupSpec>) -> Self {
        Self {
            groups,
        }
    }

    /// Returns the group with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::UnknownGroup`] when no such group exists.
    pub fn get_group(&self, name: &GroupName) -> Result<&GroupSpec, IdentityError> {
        self.groups
            .iter()
            .find(|group| group.group_name == *name)
            .ok_or_else(|| IdentityError::UnknownGroup(name.to_string()))
    }

    /// Returns a mutable reference to the group with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError::UnknownGroup`] when no such group exists.
    pub fn get_group_mut(&mut self, name: &GroupName) -> Result<&mut GroupSpec, IdentityError> {
        self.groups
            .iter_mut()
            .find(|group| group.group_name == *name)
            .ok_or_else(|| IdentityError::UnknownGroup(name.to_string()))
    }

    /// Returns all groups in declaration order.
    #[must_use]
    pub fn groups(&self) -> &[GroupSpec] {
        &self.groups
    }
}

/// Collaborator that creates and exposes organizational groups.
pub trait IdentityDirectory {
    /// Creates the organizational groups for this stack.
    ///
    /// # Errors
    ///
    /// Returns [`IdentityError`] when group creation fails.
    fn create_org_groups(&self) -> Result<GroupDirectory, IdentityError>;
}

/// Identity directory backed by a fixed group list.
#[derive(Debug, Clone)]
pub struct StaticIdentityDirectory {
    /// Group names declared for the organization.
    group_names: Vec<GroupName>,
}

impl StaticIdentityDirectory {
    /// Creates a directory declaring the given group names.
    #[must_use]
    pub fn new(group_names: Vec<GroupName>) -> Self {
        Self {
            group_names,
        }
    }
}

impl IdentityDirectory for StaticIdentityDirectory {
    fn create_org_groups(&self) -> Result<GroupDirectory, IdentityError> {
        let groups = self
            .group_names
            .iter()
            .map(|name| GroupSpec {
                group_name: name.clone(),
                managed_policies: Vec::new(),
            })
            .collect();
        Ok(GroupDirectory::new(groups))
    }
}

// ============================================================================
// SECTION: Graph Registrar
// ============================================================================

/// Registrar errors.
#[derive(Debug, Error)]
pub enum RegistrarError {
    /// Provisioning engine rejected the graph.
    #[error("graph registration failed: {0}")]
    RegistrationFailed(String),
}

/// Thin adapter that hands a composed graph to a provisioning engine.
///
/// Keeps composition decoupled from any framework class hierarchy; the
/// engine derives its own apply order from the graph's dependency edges.
pub trait GraphRegistrar {
    /// Registers a composed resource graph for application.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrarError`] when the engine rejects the graph.
    fn register(&mut self, graph: &ResourceGraph) -> Result<(), RegistrarError>;
}
