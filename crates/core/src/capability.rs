//! Capability queries
//!
//! Instead of runtime type reflection, the adapter answers "can you be viewed
//! as X?" against a closed set of capabilities. The hierarchy is:
//!
//! ```text
//! CommonDataSource
//!   ├── XaDataSource   (the wrapped provider's native type)
//!   └── DataSource     (plain connection factory)
//! ```

use std::fmt;

/// A view an object may be able to present
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Log writer and login timeout management
    CommonDataSource,
    /// Native XA connection factory
    XaDataSource,
    /// Plain connection factory
    DataSource,
}

impl Capability {
    /// Every capability, in declaration order
    pub const ALL: [Capability; 3] = [
        Capability::CommonDataSource,
        Capability::XaDataSource,
        Capability::DataSource,
    ];

    /// True if a value of type `other` can be viewed as `self`
    pub fn is_assignable_from(self, other: Capability) -> bool {
        self == other || self == Capability::CommonDataSource
    }

    /// Canonical name used in error messages
    pub fn name(self) -> &'static str {
        match self {
            Capability::CommonDataSource => "CommonDataSource",
            Capability::XaDataSource => "XADataSource",
            Capability::DataSource => "DataSource",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
