//! Error types for the adapter
//!
//! Failures coming from the wrapped provider or the transaction manager are
//! carried through untouched: `Display` and `source()` are those of the
//! underlying error, and [`AdapterError::into_source`] hands it back.

use crate::capability::Capability;
use thiserror::Error;

/// Error produced by a provider, driver or naming service
pub type ProviderError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Result type for provider and driver calls
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

/// Errors returned by adapter operations
#[derive(Debug, Error)]
pub enum AdapterError {
    /// Lookup or connect through the transaction manager failed
    #[error(transparent)]
    ConnectFailed(ProviderError),

    /// A delegated provider call failed
    #[error(transparent)]
    Provider(ProviderError),

    /// The adapter cannot present itself as the requested capability
    #[error("not a wrapper for {0}")]
    NotAWrapperFor(Capability),

    /// Operation the adapter never supports
    #[error("unsupported operation: {0}")]
    Unsupported(&'static str),

    /// Adapter configuration is invalid
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for adapter operations
pub type AdapterResult<T> = std::result::Result<T, AdapterError>;

impl AdapterError {
    /// Check if this error came from the lookup/connect path
    pub fn is_connect_failure(&self) -> bool {
        matches!(self, AdapterError::ConnectFailed(_))
    }

    /// Check if this is an unsupported-operation error
    pub fn is_unsupported(&self) -> bool {
        matches!(self, AdapterError::Unsupported(_))
    }

    /// Recover the underlying provider error, if this error wraps one
    pub fn into_source(self) -> Option<ProviderError> {
        match self {
            AdapterError::ConnectFailed(e) | AdapterError::Provider(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_connect_failure_is_transparent() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "name not bound: jdbc/Missing");
        let err = AdapterError::ConnectFailed(Box::new(io_err));
        assert!(err.is_connect_failure());
        assert_eq!(err.to_string(), "name not bound: jdbc/Missing");

        let source = err.into_source().unwrap();
        let io_err = source.downcast::<io::Error>().unwrap();
        assert_eq!(io_err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_not_a_wrapper_names_capability() {
        let err = AdapterError::NotAWrapperFor(Capability::DataSource);
        assert_eq!(err.to_string(), "not a wrapper for DataSource");
        assert!(err.into_source().is_none());
    }

    #[test]
    fn test_unsupported() {
        let err = AdapterError::Unsupported("parent_logger");
        assert!(err.is_unsupported());
        assert_eq!(err.to_string(), "unsupported operation: parent_logger");
    }
}
