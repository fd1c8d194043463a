// crates/lakegraph-config/src/config.rs
// ============================================================================
// Module: Lakegraph Configuration
// Description: Configuration loading and validation for stack composition.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: lakegraph-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size limits. Missing
//! or invalid configuration fails closed: composition never runs against a
//! partially valid config. All sections default to the reference deployment
//! so an empty file composes the example stack.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use lakegraph_core::BucketId;
use lakegraph_core::DatabaseName;
use lakegraph_core::GroupName;
use lakegraph_core::RoleName;
use lakegraph_core::ServicePrincipal;
use lakegraph_core::StackSettings;
use lakegraph_core::TablePath;
use lakegraph_core::is_catalog_safe;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "lakegraph.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "LAKEGRAPH_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum total path length for the config file location.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Minimum bucket identifier length (S3 naming rules).
const MIN_BUCKET_ID_LENGTH: usize = 3;
/// Maximum bucket identifier length (S3 naming rules).
const MAX_BUCKET_ID_LENGTH: usize = 63;

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Lakegraph composition configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LakeConfig {
    /// Stack-level settings.
    #[serde(default)]
    pub stack: StackConfig,
    /// Ingestion binding settings.
    #[serde(default)]
    pub ingestion: IngestionConfig,
    /// Discovery crawler settings.
    #[serde(default)]
    pub discovery: DiscoveryConfig,
    /// Identity and group settings.
    #[serde(default)]
    pub identity: IdentityConfig,
}

/// Stack-level settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StackConfig {
    /// Whether data resources survive deconstruction of the graph.
    #[serde(default = "default_keep_on_destroy")]
    pub keep_data_resources_on_destroy: bool,
    /// Logical identifier of the raw-data bucket.
    #[serde(default = "default_bucket_id")]
    pub bucket_id: String,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            keep_data_resources_on_destroy: default_keep_on_destroy(),
            bucket_id: default_bucket_id(),
        }
    }
}

/// Ingestion binding settings for the example data source.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IngestionConfig {
    /// External bucket holding the source data.
    #[serde(default = "default_source_bucket_name")]
    pub source_bucket_name: String,
    /// Path within the source bucket.
    #[serde(default = "default_source_path")]
    pub source_path: String,
    /// Target path in the raw bucket for the ingested data.
    #[serde(default = "default_target_path")]
    pub target_path: String,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            source_bucket_name: default_source_bucket_name(),
            source_path: default_source_path(),
            target_path: default_target_path(),
        }
    }
}

/// Discovery crawler settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DiscoveryConfig {
    /// Catalog database the crawlers register tables into.
    #[serde(default = "default_database_name")]
    pub database_name: String,
    /// Shared role assumed by all discovery jobs.
    #[serde(default = "default_role_name")]
    pub role_name: String,
    /// Service principal trusted to assume the discovery role.
    #[serde(default = "default_trust_principal")]
    pub trust_principal: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            database_name: default_database_name(),
            role_name: default_role_name(),
            trust_principal: default_trust_principal(),
        }
    }
}

/// Identity and group settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IdentityConfig {
    /// Debugging group granted read access to data and logs.
    #[serde(default = "default_debugging_group")]
    pub debugging_group: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            debugging_group: default_debugging_group(),
        }
    }
}

// ============================================================================
// SECTION: Defaults
// ============================================================================

/// Default keep-on-destroy flag (data survives graph deconstruction).
const fn default_keep_on_destroy() -> bool {
    true
}

/// Default raw bucket identifier.
fn default_bucket_id() -> String {
    "xw-batch-bucket-raw".to_string()
}

/// Default example source bucket.
fn default_source_bucket_name() -> String {
    "xw-d13g-scoofy-data-inputs".to_string()
}

/// Default example source path.
fn default_source_path() -> String {
    "/data/journeys".to_string()
}

/// Default ingestion target path.
fn default_target_path() -> String {
    "/raw/scoofy/journeys/".to_string()
}

/// Default catalog database name.
fn default_database_name() -> String {
    "data_lake_raw".to_string()
}

/// Default discovery role name.
fn default_role_name() -> String {
    "s3-raw-access-glue".to_string()
}

/// Default trusted service principal.
fn default_trust_principal() -> String {
    "glue.amazonaws.com".to_string()
}

/// Default debugging group name.
fn default_debugging_group() -> String {
    "data_lake_debugging".to_string()
}

// ============================================================================
// SECTION: Loading and Validation
// ============================================================================

impl LakeConfig {
    /// Loads configuration from the given path, the environment override, or
    /// the default filename in the working directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the file cannot be read, parsed, or
    /// validated.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_bucket_id(&self.stack.bucket_id)?;
        validate_bucket_name("ingestion.source_bucket_name", &self.ingestion.source_bucket_name)?;
        validate_absolute_path("ingestion.source_path", &self.ingestion.source_path)?;
        validate_absolute_path("ingestion.target_path", &self.ingestion.target_path)?;
        validate_catalog_identifier("discovery.database_name", &self.discovery.database_name)?;
        validate_non_empty("discovery.role_name", &self.discovery.role_name)?;
        validate_non_empty("discovery.trust_principal", &self.discovery.trust_principal)?;
        validate_catalog_identifier("identity.debugging_group", &self.identity.debugging_group)?;
        Ok(())
    }

    /// Converts the configuration into composer settings.
    #[must_use]
    pub fn to_stack_settings(&self) -> StackSettings {
        StackSettings {
            keep_data_resources_on_destroy: self.stack.keep_data_resources_on_destroy,
            bucket_id: BucketId::new(self.stack.bucket_id.as_str()),
            source_bucket_name: self.ingestion.source_bucket_name.clone(),
            source_path: TablePath::new(self.ingestion.source_path.as_str()),
            target_path: TablePath::new(self.ingestion.target_path.as_str()),
            debugging_group: GroupName::new(self.identity.debugging_group.as_str()),
            role_name: RoleName::new(self.discovery.role_name.as_str()),
            database_name: DatabaseName::new(self.discovery.database_name.as_str()),
            trusted_principal: ServicePrincipal::new(self.discovery.trust_principal.as_str()),
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading or validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the managed bucket identifier against S3 naming rules.
fn validate_bucket_id(bucket_id: &str) -> Result<(), ConfigError> {
    if bucket_id.len() < MIN_BUCKET_ID_LENGTH || bucket_id.len() > MAX_BUCKET_ID_LENGTH {
        return Err(ConfigError::Invalid(format!(
            "stack.bucket_id must be {MIN_BUCKET_ID_LENGTH}-{MAX_BUCKET_ID_LENGTH} characters"
        )));
    }
    validate_bucket_name("stack.bucket_id", bucket_id)
}

/// Validates a bucket name charset: lowercase, digits, and hyphens.
fn validate_bucket_name(field: &str, name: &str) -> Result<(), ConfigError> {
    if name.trim().is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be set")));
    }
    let valid_charset = name
        .bytes()
        .all(|byte| byte.is_ascii_lowercase() || byte.is_ascii_digit() || byte == b'-');
    if !valid_charset || name.starts_with('-') || name.ends_with('-') {
        return Err(ConfigError::Invalid(format!(
            "{field} must use lowercase letters, digits, and interior hyphens"
        )));
    }
    Ok(())
}

/// Validates a logical path: absolute and non-empty.
fn validate_absolute_path(field: &str, path: &str) -> Result<(), ConfigError> {
    if path.trim().is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be set")));
    }
    if !path.starts_with('/') {
        return Err(ConfigError::Invalid(format!("{field} must start with '/'")));
    }
    Ok(())
}

/// Validates an identifier against the downstream catalog charset.
fn validate_catalog_identifier(field: &str, value: &str) -> Result<(), ConfigError> {
    if !is_catalog_safe(value) {
        return Err(ConfigError::Invalid(format!(
            "{field} must match [a-z0-9_]{{1,255}}"
        )));
    }
    Ok(())
}

/// Validates that a string field is non-empty.
fn validate_non_empty(field: &str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be set")));
    }
    Ok(())
}
