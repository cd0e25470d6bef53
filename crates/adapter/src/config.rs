//! Adapter configuration via `txbridge.toml`
//!
//! The host's configuration names the resource and, optionally, the naming
//! properties the transaction manager needs. Constructing an adapter from a
//! config performs no registration; installing the naming properties is a
//! separate, explicit step ([`AdapterConfig::install_naming`]).

use serde::{Deserialize, Serialize};
use std::path::Path;
use txbridge_core::{AdapterError, AdapterResult, ResourceName, DEFAULT_LOOKUP_PREFIX};
use txbridge_naming::{install_host_environment, NamingEnvironment, NamingResult};

/// Conventional config file name.
pub const CONFIG_FILE_NAME: &str = "txbridge.toml";

/// Which execution context the manager's connect call runs under
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContextStrategy {
    /// Substitute the caller's parent context (the host's shared context)
    #[default]
    Parent,
    /// Keep the caller's context, for hosts whose naming is not context-sensitive
    Inherit,
}

/// Adapter configuration loaded from `txbridge.toml`.
///
/// # Example
///
/// ```toml
/// resource_name = "jdbc/MyXADS"
/// # lookup_prefix = "jdbc:arjuna:"
/// # context_strategy = "parent"
///
/// [naming]
/// "naming.factory.initial" = "host.naming.ContextFactory"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdapterConfig {
    /// Global name of the wrapped XA resource; blank names fail to parse
    pub resource_name: ResourceName,
    /// Manager prefix placed before the resource name
    #[serde(default = "default_lookup_prefix")]
    pub lookup_prefix: String,
    /// Context used for the manager's connect call
    #[serde(default)]
    pub context_strategy: ContextStrategy,
    /// Naming properties handed to the transaction manager
    #[serde(default, skip_serializing_if = "NamingEnvironment::is_empty")]
    pub naming: NamingEnvironment,
}

fn default_lookup_prefix() -> String {
    DEFAULT_LOOKUP_PREFIX.to_string()
}

impl AdapterConfig {
    /// Config for `resource_name` with every other field defaulted
    pub fn new(resource_name: ResourceName) -> Self {
        Self {
            resource_name,
            lookup_prefix: default_lookup_prefix(),
            context_strategy: ContextStrategy::default(),
            naming: NamingEnvironment::new(),
        }
    }

    /// Validate and return the resource name
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup prefix is empty. The resource name is
    /// already checked when the config is built or parsed.
    pub fn validate(&self) -> AdapterResult<ResourceName> {
        if self.lookup_prefix.is_empty() {
            return Err(AdapterError::InvalidConfig(
                "lookup_prefix must not be empty".to_string(),
            ));
        }
        Ok(self.resource_name.clone())
    }

    /// Returns a commented config file template.
    pub fn default_toml() -> &'static str {
        r#"# txbridge adapter configuration
#
# Global name of the XA resource in the host naming service.
resource_name = "jdbc/MyXADS"

# Prefix the transaction manager's driver expects before the name.
# lookup_prefix = "jdbc:arjuna:"

# Context for the manager's connect call:
#   "parent"  = host's shared context (default)
#   "inherit" = caller's own context
# context_strategy = "parent"

# Naming properties copied into the transaction manager's configuration.
# [naming]
# "naming.factory.initial" = "host.naming.ContextFactory"
"#
    }

    /// Parse and validate config from TOML text.
    pub fn from_toml_str(content: &str) -> AdapterResult<Self> {
        let config: AdapterConfig = toml::from_str(content).map_err(|e| {
            AdapterError::InvalidConfig(format!("Failed to parse adapter config: {}", e))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: &Path) -> AdapterResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AdapterError::InvalidConfig(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_toml_str(&content)
    }

    /// Serialize this config to TOML
    pub fn to_toml_string(&self) -> AdapterResult<String> {
        toml::to_string_pretty(self)
            .map_err(|e| AdapterError::InvalidConfig(format!("Failed to serialize config: {}", e)))
    }

    /// Install the `[naming]` table as the host naming environment
    ///
    /// Call before any connection request and before starting recovery.
    pub fn install_naming(&self) -> NamingResult<()> {
        install_host_environment(self.naming.clone())
    }
}
