//! Transactional connection adapter
//!
//! [`TransactionalConnectionAdapter`] lets a connection pool obtain
//! connections enlisted in the ambient distributed transaction without knowing
//! the transaction manager's lookup-key scheme. It wraps the real XA resource
//! and a logical resource name; on each request it builds the lookup key,
//! makes sure the manager's naming configuration is applied, and calls the
//! manager's connect entry point under the host's shared execution context.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapter;
pub mod config;

pub use adapter::TransactionalConnectionAdapter;
pub use config::{AdapterConfig, ContextStrategy, CONFIG_FILE_NAME};
