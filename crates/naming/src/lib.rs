//! Naming configuration for the transaction manager
//!
//! The transaction manager does not use the host's default naming context;
//! it builds its own from a property set held in its global configuration.
//! That property set is read both by the connect path and by the background
//! recovery subsystem, so it has to be in place process-wide before either
//! resolves a name.
//!
//! This crate provides:
//! - [`NamingEnvironment`]: the naming properties of the host
//! - [`ManagerNamingConfig`]: the manager-side store, applied once
//! - [`install_host_environment`] / [`ensure_naming_properties`]: the
//!   process-wide entry points used by host orchestration and the adapter

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod environment;
pub mod error;
pub mod global;

pub use config::ManagerNamingConfig;
pub use environment::{NamingEnvironment, INITIAL_CONTEXT_FACTORY, PROVIDER_URL};
pub use error::{NamingError, NamingResult};
pub use global::{ensure_naming_properties, global_config, install_host_environment, is_applied};
