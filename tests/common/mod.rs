//! Shared fixtures for integration tests
//!
//! - [`RecordingXa`]: XA provider that logs every delegated call
//! - [`Directory`]: per-context name bindings, resolved against the thread's
//!   current context only (no fallback to ancestors)
//! - [`DirectoryDriver`]: manager driver resolving lookup keys in a [`Directory`]

#![allow(dead_code)]

use parking_lot::Mutex;
use std::collections::HashMap;
use std::io;
use std::sync::Arc;
use txbridge::prelude::*;
use txbridge::types::DEFAULT_LOOKUP_PREFIX;

// ============================================================================
// XA provider
// ============================================================================

/// One delegated call seen by [`RecordingXa`]
#[derive(Debug, Clone, PartialEq)]
pub enum XaCall {
    XaConnection(Credentials),
    LogWriter,
    SetLogWriter(bool),
    LoginTimeout,
    SetLoginTimeout(u32),
}

/// XA connection handed out by [`RecordingXa`]
#[derive(Debug, Clone, PartialEq)]
pub struct XaHandle {
    pub user: Option<String>,
}

#[derive(Default)]
pub struct RecordingXa {
    pub calls: Mutex<Vec<XaCall>>,
    pub fail_with: Mutex<Option<String>>,
    timeout: Mutex<u32>,
    writer: Mutex<Option<LogWriter>>,
}

impl RecordingXa {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Make every subsequent call fail with `message`
    pub fn fail(&self, message: &str) {
        *self.fail_with.lock() = Some(message.to_string());
    }

    pub fn calls(&self) -> Vec<XaCall> {
        self.calls.lock().clone()
    }

    fn record(&self, call: XaCall) -> ProviderResult<()> {
        self.calls.lock().push(call);
        match &*self.fail_with.lock() {
            Some(message) => Err(Box::new(io::Error::new(
                io::ErrorKind::Other,
                message.clone(),
            ))),
            None => Ok(()),
        }
    }
}

impl CommonDataSource for RecordingXa {
    fn log_writer(&self) -> ProviderResult<Option<LogWriter>> {
        self.record(XaCall::LogWriter)?;
        Ok(self.writer.lock().clone())
    }

    fn set_log_writer(&self, writer: Option<LogWriter>) -> ProviderResult<()> {
        self.record(XaCall::SetLogWriter(writer.is_some()))?;
        *self.writer.lock() = writer;
        Ok(())
    }

    fn login_timeout(&self) -> ProviderResult<u32> {
        self.record(XaCall::LoginTimeout)?;
        Ok(*self.timeout.lock())
    }

    fn set_login_timeout(&self, seconds: u32) -> ProviderResult<()> {
        self.record(XaCall::SetLoginTimeout(seconds))?;
        *self.timeout.lock() = seconds;
        Ok(())
    }
}

impl XaDataSource for RecordingXa {
    type XaConnection = XaHandle;

    fn xa_connection(&self, credentials: &Credentials) -> ProviderResult<XaHandle> {
        self.record(XaCall::XaConnection(credentials.clone()))?;
        Ok(XaHandle {
            user: credentials.user.clone(),
        })
    }
}

// ============================================================================
// Naming directory and manager driver
// ============================================================================

/// Name bindings per execution context
#[derive(Default)]
pub struct Directory {
    bindings: Mutex<HashMap<ContextKey, HashMap<String, String>>>,
}

type ContextKey = Option<txbridge::context::ContextId>;

impl Directory {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Bind `name` to `resource` in `ctx` (`None` = no context)
    pub fn bind(&self, ctx: Option<&ExecutionContext>, name: &str, resource: &str) {
        self.bindings
            .lock()
            .entry(ctx.map(ExecutionContext::id))
            .or_default()
            .insert(name.to_string(), resource.to_string());
    }

    /// Resolve `name` in the calling thread's current context
    pub fn resolve(&self, name: &str) -> Option<String> {
        let ctx = current();
        self.bindings
            .lock()
            .get(&ctx.as_ref().map(ExecutionContext::id))
            .and_then(|names| names.get(name).cloned())
    }
}

/// Connection returned by [`DirectoryDriver`]
#[derive(Debug, Clone, PartialEq)]
pub struct EnlistedConnection {
    pub resource: String,
    pub user: Option<String>,
    pub password: Option<String>,
    pub context: Option<ExecutionContext>,
}

/// Manager driver that resolves the key's resource name in a [`Directory`]
pub struct DirectoryDriver {
    directory: Arc<Directory>,
    prefix: String,
    panic_on: Option<String>,
}

impl DirectoryDriver {
    pub fn new(directory: Arc<Directory>) -> Self {
        Self {
            directory,
            prefix: DEFAULT_LOOKUP_PREFIX.to_string(),
            panic_on: None,
        }
    }

    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = prefix.to_string();
        self
    }

    /// Panic instead of connecting when the resource name equals `name`
    pub fn panicking_on(mut self, name: &str) -> Self {
        self.panic_on = Some(name.to_string());
        self
    }
}

impl TransactionalDriver for DirectoryDriver {
    type Connection = EnlistedConnection;

    fn connect(
        &self,
        key: &LookupKey,
        properties: &ConnectionProperties,
    ) -> ProviderResult<EnlistedConnection> {
        let name = key.resource_name(&self.prefix).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("not a transactional url: {}", key),
            )
        })?;
        if self.panic_on.as_deref() == Some(name) {
            panic!("driver failure while resolving {}", name);
        }
        let resource = self.directory.resolve(name).ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("name not bound: {}", name))
        })?;
        Ok(EnlistedConnection {
            resource,
            user: properties.get("user").map(str::to_string),
            password: properties.get("password").map(str::to_string),
            context: current(),
        })
    }
}

pub type Adapter = TransactionalConnectionAdapter<RecordingXa, DirectoryDriver>;

/// Host context, an application context under it, and a directory where the
/// resource is bound only in the host context
pub struct Host {
    pub host: ExecutionContext,
    pub app: ExecutionContext,
    pub directory: Arc<Directory>,
    pub provider: Arc<RecordingXa>,
}

impl Host {
    pub fn new(resource_name: &str) -> Self {
        let host = ExecutionContext::root("host");
        let app = ExecutionContext::child_of(&host, "app");
        let directory = Directory::new();
        directory.bind(Some(&host), resource_name, &format!("xa:{}", resource_name));
        Self {
            host,
            app,
            directory,
            provider: RecordingXa::new(),
        }
    }

    pub fn adapter(&self, resource_name: &str) -> Adapter {
        Adapter::with_driver(
            ResourceName::new(resource_name).unwrap(),
            Arc::clone(&self.provider),
            DirectoryDriver::new(Arc::clone(&self.directory)),
        )
    }
}
