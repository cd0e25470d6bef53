//! Provider and driver traits
//!
//! These are the seams the adapter delegates through:
//! - [`XaDataSource`]: the real transactional resource, owned by the host
//! - [`TransactionalDriver`]: the transaction manager's connect entry point,
//!   which looks a [`LookupKey`] up in the naming service and returns a
//!   connection enlisted in the ambient transaction

use crate::error::ProviderResult;
use crate::log_writer::LogWriter;
use crate::types::{ConnectionProperties, Credentials, LookupKey};

/// Settings every data source exposes
pub trait CommonDataSource: Send + Sync {
    /// Current log writer, if any
    fn log_writer(&self) -> ProviderResult<Option<LogWriter>>;

    /// Replace the log writer; `None` disables logging
    fn set_log_writer(&self, writer: Option<LogWriter>) -> ProviderResult<()>;

    /// Login timeout in seconds; 0 means no limit
    fn login_timeout(&self) -> ProviderResult<u32>;

    /// Set the login timeout in seconds
    fn set_login_timeout(&self, seconds: u32) -> ProviderResult<()>;
}

/// Native XA connection factory
pub trait XaDataSource: CommonDataSource {
    /// Connection type able to take part in two-phase commit
    type XaConnection;

    /// Open an XA connection, optionally authenticating
    fn xa_connection(&self, credentials: &Credentials) -> ProviderResult<Self::XaConnection>;
}

/// Transaction manager's connect entry point
pub trait TransactionalDriver: Send + Sync {
    /// Connection type returned to callers
    type Connection;

    /// Resolve `key` and open a connection enlisted in the ambient transaction
    fn connect(
        &self,
        key: &LookupKey,
        properties: &ConnectionProperties,
    ) -> ProviderResult<Self::Connection>;
}
