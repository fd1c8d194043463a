// crates/lakegraph-core/src/core/policy.rs
// ============================================================================
// Module: Lakegraph Managed Policies
// Description: Catalog of known managed-policy references.
// Purpose: Replace stringly-typed policy lookup with an enumerated catalog.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Managed policies are defined outside this system and referenced by name.
//! The known platform policies form a closed catalog; provider-defined
//! policies not known at compile time pass through the [`ManagedPolicy::Custom`]
//! escape hatch and are not validated locally.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;

// ============================================================================
// SECTION: Policy Names
// ============================================================================

/// Canonical name of the platform discovery-job service-role policy.
const GLUE_SERVICE_ROLE_POLICY: &str = "service-role/AWSGlueServiceRole";
/// Canonical name of the platform log-read policy.
const CLOUDWATCH_READ_ONLY_POLICY: &str = "CloudWatchReadOnlyAccess";

// ============================================================================
// SECTION: Managed Policy
// ============================================================================

/// Reference to a managed policy defined outside this system.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ManagedPolicy {
    /// Platform service-role policy for discovery jobs.
    GlueServiceRole,
    /// Platform read-only policy over log streams.
    CloudWatchReadOnly,
    /// Provider-defined policy name, passed through unvalidated.
    Custom(String),
}

impl ManagedPolicy {
    /// Returns the canonical policy name used by the provisioning engine.
    #[must_use]
    pub fn policy_name(&self) -> &str {
        match self {
            Self::GlueServiceRole => GLUE_SERVICE_ROLE_POLICY,
            Self::CloudWatchReadOnly => CLOUDWATCH_READ_ONLY_POLICY,
            Self::Custom(name) => name,
        }
    }

    /// Resolves a policy name against the known catalog.
    #[must_use]
    pub fn from_policy_name(name: &str) -> Self {
        match name {
            GLUE_SERVICE_ROLE_POLICY => Self::GlueServiceRole,
            CLOUDWATCH_READ_ONLY_POLICY => Self::CloudWatchReadOnly,
            other => Self::Custom(other.to_string()),
        }
    }
}

impl fmt::Display for ManagedPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.policy_name().fmt(f)
    }
}

impl Serialize for ManagedPolicy {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.policy_name())
    }
}

impl<'de> Deserialize<'de> for ManagedPolicy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_policy_name(&name))
    }
}
