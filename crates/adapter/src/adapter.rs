//! The transactional connection adapter
//!
//! ## Connection request sequence
//!
//! ```text
//! 1. key = lookup prefix + resource name
//! 2. properties = {user?, password?}  (only the halves supplied)
//! 3. ensure_naming_properties()        (process-wide, once)
//! 4. substitute the caller's parent context on this thread
//! 5. driver.connect(key, properties)
//! 6. restore the caller's context      (always, also on error or panic)
//! ```
//!
//! Failures from step 5 are returned untouched as
//! [`AdapterError::ConnectFailed`]; there is no retry.

use crate::config::{AdapterConfig, ContextStrategy};
use std::convert::Infallible;
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use txbridge_context::run_in_parent;
use txbridge_core::{
    AdapterError, AdapterResult, Capability, ConnectionProperties, Credentials, LogWriter,
    LookupKey, ResourceName, TransactionalDriver, XaDataSource, DEFAULT_LOOKUP_PREFIX,
};
use txbridge_naming::ensure_naming_properties;

/// Connection factory backed by the transaction manager
///
/// Holds the resource name, the wrapped XA provider (owned by the host, shared
/// read-only) and the manager's driver (owned by the adapter, created once).
/// All fields are fixed at construction; the adapter can be shared freely
/// between pool threads.
///
/// # Example
///
/// ```ignore
/// let adapter: TransactionalConnectionAdapter<MyXaSource, ManagerDriver> =
///     TransactionalConnectionAdapter::new(ResourceName::new("jdbc/MyXADS")?, provider);
/// let conn = adapter.acquire(&Credentials::user_password("alice", "s3cr3t"))?;
/// ```
pub struct TransactionalConnectionAdapter<P, D> {
    resource_name: ResourceName,
    lookup_key: LookupKey,
    provider: Arc<P>,
    driver: D,
    strategy: ContextStrategy,
}

impl<P, D> TransactionalConnectionAdapter<P, D>
where
    P: XaDataSource,
    D: TransactionalDriver,
{
    /// Capability the wrapped provider natively presents
    pub const NATIVE_CAPABILITY: Capability = Capability::XaDataSource;

    /// Wrap `provider`, registered globally under `resource_name`
    ///
    /// The driver is created here, once, and kept for the adapter's lifetime.
    pub fn new(resource_name: ResourceName, provider: Arc<P>) -> Self
    where
        D: Default,
    {
        Self::with_driver(resource_name, provider, D::default())
    }

    /// Wrap `provider` using an explicitly constructed driver
    pub fn with_driver(resource_name: ResourceName, provider: Arc<P>, driver: D) -> Self {
        let lookup_key = LookupKey::new(DEFAULT_LOOKUP_PREFIX, &resource_name);
        Self {
            resource_name,
            lookup_key,
            provider,
            driver,
            strategy: ContextStrategy::default(),
        }
    }

    /// Build from a validated [`AdapterConfig`]
    pub fn from_config(config: &AdapterConfig, provider: Arc<P>) -> AdapterResult<Self>
    where
        D: Default,
    {
        let resource_name = config.validate()?;
        Ok(Self::new(resource_name, provider)
            .with_lookup_prefix(&config.lookup_prefix)
            .with_context_strategy(config.context_strategy))
    }

    /// Use a manager prefix other than [`DEFAULT_LOOKUP_PREFIX`]
    pub fn with_lookup_prefix(mut self, prefix: &str) -> Self {
        self.lookup_key = LookupKey::new(prefix, &self.resource_name);
        self
    }

    /// Choose the context the connect call runs under
    pub fn with_context_strategy(mut self, strategy: ContextStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Open a connection enlisted in the ambient transaction, if any
    ///
    /// Blocks for the duration of the manager's lookup and connect; no
    /// timeout is imposed here. The calling thread's execution context is the
    /// same on return as on entry, whatever the outcome.
    ///
    /// # Errors
    ///
    /// [`AdapterError::ConnectFailed`] carrying the manager's error as is.
    pub fn acquire(&self, credentials: &Credentials) -> AdapterResult<D::Connection> {
        let properties = ConnectionProperties::from_credentials(credentials);
        debug!(
            resource = %self.resource_name,
            key = %self.lookup_key,
            user = credentials.user.as_deref(),
            "acquiring transactional connection"
        );

        ensure_naming_properties();

        let connect = || self.driver.connect(&self.lookup_key, &properties);
        let result = match self.strategy {
            ContextStrategy::Parent => run_in_parent(connect),
            ContextStrategy::Inherit => connect(),
        };
        result.map_err(AdapterError::ConnectFailed)
    }

    /// [`acquire`](Self::acquire) without principal or credential
    pub fn connection(&self) -> AdapterResult<D::Connection> {
        self.acquire(&Credentials::none())
    }

    /// Open a native XA connection straight from the wrapped provider
    ///
    /// No lookup key, no naming configuration, no context substitution.
    pub fn acquire_xa(&self, credentials: &Credentials) -> AdapterResult<P::XaConnection> {
        self.provider
            .xa_connection(credentials)
            .map_err(AdapterError::Provider)
    }

    /// [`acquire_xa`](Self::acquire_xa) without principal or credential
    pub fn xa_connection(&self) -> AdapterResult<P::XaConnection> {
        self.acquire_xa(&Credentials::none())
    }

    /// Provider's log writer
    pub fn log_writer(&self) -> AdapterResult<Option<LogWriter>> {
        self.provider.log_writer().map_err(AdapterError::Provider)
    }

    /// Set the provider's log writer
    pub fn set_log_writer(&self, writer: Option<LogWriter>) -> AdapterResult<()> {
        self.provider
            .set_log_writer(writer)
            .map_err(AdapterError::Provider)
    }

    /// Provider's login timeout in seconds
    pub fn login_timeout(&self) -> AdapterResult<u32> {
        self.provider.login_timeout().map_err(AdapterError::Provider)
    }

    /// Set the provider's login timeout in seconds
    pub fn set_login_timeout(&self, seconds: u32) -> AdapterResult<()> {
        self.provider
            .set_login_timeout(seconds)
            .map_err(AdapterError::Provider)
    }

    /// True if the adapter can be viewed as `capability`
    ///
    /// Only the provider's native XA capability (and what it is assignable
    /// to) is reported, even if the provider could present more.
    pub fn is_capable_of(&self, capability: Capability) -> bool {
        capability.is_assignable_from(Self::NATIVE_CAPABILITY)
    }

    /// The wrapped provider, viewed as `capability`
    ///
    /// # Errors
    ///
    /// [`AdapterError::NotAWrapperFor`] naming `capability` when
    /// [`is_capable_of`](Self::is_capable_of) is false.
    pub fn unwrap_as(&self, capability: Capability) -> AdapterResult<&Arc<P>> {
        if self.is_capable_of(capability) {
            Ok(&self.provider)
        } else {
            Err(AdapterError::NotAWrapperFor(capability))
        }
    }

    /// Structured parent logger; the manager exposes none
    pub fn parent_logger(&self) -> AdapterResult<Infallible> {
        Err(AdapterError::Unsupported("parent_logger"))
    }

    /// Resource name
    pub fn resource_name(&self) -> &ResourceName {
        &self.resource_name
    }

    /// Key handed to the manager on every request
    pub fn lookup_key(&self) -> &LookupKey {
        &self.lookup_key
    }

    /// Context strategy in use
    pub fn context_strategy(&self) -> ContextStrategy {
        self.strategy
    }

    /// Wrapped provider
    pub fn provider(&self) -> &Arc<P> {
        &self.provider
    }
}

impl<P, D> fmt::Debug for TransactionalConnectionAdapter<P, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransactionalConnectionAdapter")
            .field("resource_name", &self.resource_name)
            .field("lookup_key", &self.lookup_key)
            .field("strategy", &self.strategy)
            .finish_non_exhaustive()
    }
}
