//! Error types for naming configuration

use thiserror::Error;

/// Naming configuration errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NamingError {
    /// The manager configuration was already applied; a new host
    /// environment would never be seen
    #[error("naming properties already applied to the transaction manager")]
    AlreadyApplied,
}

/// Result type for naming configuration
pub type NamingResult<T> = std::result::Result<T, NamingError>;
