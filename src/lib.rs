//! # txbridge
//!
//! Transactional connection adapter for hosts that pool connections.
//!
//! A host's connection pool only knows "a data source with a name". The
//! transaction manager only hands out enlisted connections through its own
//! driver, addressed by a prefixed lookup key and resolved through the
//! naming service. [`TransactionalConnectionAdapter`] bridges the two.
//!
//! ## Quick Start
//!
//! ```ignore
//! use txbridge::prelude::*;
//!
//! let config = AdapterConfig::from_file(Path::new("txbridge.toml"))?;
//! config.install_naming()?;
//! ensure_naming_properties(); // before starting recovery
//!
//! let adapter: TransactionalConnectionAdapter<MyXaSource, ManagerDriver> =
//!     TransactionalConnectionAdapter::from_config(&config, Arc::new(xa_source))?;
//! let conn = adapter.acquire(&Credentials::user_password("alice", "s3cr3t"))?;
//! ```
//!
//! ## Crates
//!
//! - [`types`] - request types, provider traits, errors
//! - [`context`] - thread-scoped execution contexts
//! - [`naming`] - process-wide naming configuration
//! - [`adapter`] - the adapter and its configuration

#![warn(missing_docs)]

pub mod prelude;

pub use txbridge_adapter as adapter;
pub use txbridge_context as context;
pub use txbridge_core as types;
pub use txbridge_naming as naming;

// Re-export main entry points
pub use txbridge_adapter::{AdapterConfig, ContextStrategy, TransactionalConnectionAdapter};
pub use txbridge_core::{AdapterError, AdapterResult};
