//! Core types for txbridge
//!
//! This crate defines the vocabulary shared by the adapter and its collaborators:
//! - [`ResourceName`], [`Credentials`], [`ConnectionProperties`], [`LookupKey`]
//! - [`Capability`]: the closed set of views an adapter can present
//! - Provider traits: [`CommonDataSource`], [`XaDataSource`], [`TransactionalDriver`]
//! - [`LogWriter`]: shared diagnostic sink handed to providers
//! - [`AdapterError`]: the adapter's error taxonomy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod capability;
pub mod error;
pub mod log_writer;
pub mod traits;
pub mod types;

pub use capability::Capability;
pub use error::{AdapterError, AdapterResult, ProviderError, ProviderResult};
pub use log_writer::LogWriter;
pub use traits::{CommonDataSource, TransactionalDriver, XaDataSource};
pub use types::{
    ConnectionProperties, Credentials, LookupKey, ResourceName, DEFAULT_LOOKUP_PREFIX,
    PASSWORD_PROPERTY, USER_PROPERTY,
};
