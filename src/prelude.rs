//! Convenient imports for txbridge.
//!
//! ```ignore
//! use txbridge::prelude::*;
//! ```

// Main entry point
pub use txbridge_adapter::{AdapterConfig, ContextStrategy, TransactionalConnectionAdapter};

// Error handling
pub use txbridge_core::{AdapterError, AdapterResult, ProviderError, ProviderResult};

// Request types and provider traits
pub use txbridge_core::{
    Capability, CommonDataSource, ConnectionProperties, Credentials, LogWriter, LookupKey,
    ResourceName, TransactionalDriver, XaDataSource,
};

// Contexts
pub use txbridge_context::{current, run_in, run_in_parent, ContextGuard, ExecutionContext};

// Naming configuration
pub use txbridge_naming::{ensure_naming_properties, install_host_environment, NamingEnvironment};
