//! Host naming properties

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Factory used to build the initial naming context
pub const INITIAL_CONTEXT_FACTORY: &str = "naming.factory.initial";

/// Location of the naming service
pub const PROVIDER_URL: &str = "naming.provider.url";

/// Ordered set of naming properties
///
/// Deserialises from a flat string table, e.g. a `[naming]` section in TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamingEnvironment(BTreeMap<String, String>);

impl NamingEnvironment {
    /// Empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Insert or replace a property
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Look up a property
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Number of properties
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no property is set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate properties in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for NamingEnvironment {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        NamingEnvironment(iter.into_iter().collect())
    }
}

impl Extend<(String, String)> for NamingEnvironment {
    fn extend<I: IntoIterator<Item = (String, String)>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}
