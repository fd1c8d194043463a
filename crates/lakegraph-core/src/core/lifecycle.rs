// crates/lakegraph-core/src/core/lifecycle.rs
// ============================================================================
// Module: Lakegraph Lifecycle Policy
// Description: Removal policy and auto-delete resolution for data resources.
// Purpose: Derive valid retention settings from the keep-on-destroy flag.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Data resources carry a lifecycle policy deciding whether their contents
//! survive deconstruction of the graph. The auto-delete flag may only be set
//! when the policy destroys data; the invalid pairing of `Retain` with
//! auto-delete is unrepresentable through [`DataRetention::resolve`] and
//! rejected by [`DataRetention::new`].

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Removal Policy
// ============================================================================

/// Lifecycle policy applied to a data resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalPolicy {
    /// Underlying data survives deconstruction of the graph.
    Retain,
    /// Underlying data is destroyed with the graph.
    Destroy,
}

// ============================================================================
// SECTION: Data Retention
// ============================================================================

/// Resolved retention settings for the managed bucket.
///
/// # Invariants
/// - `auto_delete_objects` is set only when `policy` is [`RemovalPolicy::Destroy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataRetention {
    /// Lifecycle policy for the resource.
    policy: RemovalPolicy,
    /// Whether objects are deleted automatically on destroy (unset or true).
    #[serde(skip_serializing_if = "Option::is_none")]
    auto_delete_objects: Option<bool>,
}

impl DataRetention {
    /// Resolves retention settings from the keep-on-destroy flag.
    ///
    /// Total over its boolean domain; the result never pairs
    /// [`RemovalPolicy::Retain`] with a set auto-delete flag.
    #[must_use]
    pub const fn resolve(keep_on_destroy: bool) -> Self {
        if keep_on_destroy {
            Self {
                policy: RemovalPolicy::Retain,
                auto_delete_objects: None,
            }
        } else {
            Self {
                policy: RemovalPolicy::Destroy,
                auto_delete_objects: Some(true),
            }
        }
    }

    /// Constructs retention settings from explicit parts.
    ///
    /// # Errors
    ///
    /// Returns [`LifecycleError::RetainWithAutoDelete`] when `Retain` is
    /// paired with a set auto-delete flag.
    pub const fn new(
        policy: RemovalPolicy,
        auto_delete_objects: Option<bool>,
    ) -> Result<Self, LifecycleError> {
        if matches!(policy, RemovalPolicy::Retain) && auto_delete_objects.is_some() {
            return Err(LifecycleError::RetainWithAutoDelete);
        }
        Ok(Self {
            policy,
            auto_delete_objects,
        })
    }

    /// Returns the lifecycle policy.
    #[must_use]
    pub const fn policy(&self) -> RemovalPolicy {
        self.policy
    }

    /// Returns the auto-delete flag (unset unless the policy destroys data).
    #[must_use]
    pub const fn auto_delete_objects(&self) -> Option<bool> {
        self.auto_delete_objects
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Lifecycle configuration errors.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// Auto-delete requested for a retained resource.
    #[error("auto-delete may only be set when the removal policy destroys data")]
    RetainWithAutoDelete,
}
