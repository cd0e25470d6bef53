//! Connection request types
//!
//! A connection request travels through the adapter as:
//! - [`Credentials`]: optional principal and optional credential
//! - [`ConnectionProperties`]: the property set handed to the transaction manager
//! - [`LookupKey`]: manager prefix followed directly by the [`ResourceName`]

use crate::error::{AdapterError, AdapterResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Prefix the transaction manager's driver recognises as "look this name up".
pub const DEFAULT_LOOKUP_PREFIX: &str = "jdbc:arjuna:";

/// Property carrying the principal.
pub const USER_PROPERTY: &str = "user";

/// Property carrying the credential.
pub const PASSWORD_PROPERTY: &str = "password";

/// Name under which the real transactional resource is registered
///
/// This should be the resource's name in the host's global naming service,
/// not a name private to one application unit.
///
/// # Examples
///
/// ```
/// use txbridge_core::ResourceName;
///
/// let name = ResourceName::new("jdbc/MyXADS").unwrap();
/// assert_eq!(name.as_str(), "jdbc/MyXADS");
/// assert!(ResourceName::new("").is_err());
/// ```
///
/// Deserialising goes through [`ResourceName::new`], so a blank name in a
/// config file is rejected at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ResourceName(String);

impl ResourceName {
    /// Create a resource name, rejecting empty or blank input
    pub fn new(name: impl Into<String>) -> AdapterResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AdapterError::InvalidConfig(
                "resource name must not be empty".to_string(),
            ));
        }
        Ok(ResourceName(name))
    }

    /// Borrow the name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ResourceName {
    type Error = AdapterError;

    fn try_from(name: String) -> AdapterResult<Self> {
        ResourceName::new(name)
    }
}

impl From<ResourceName> for String {
    fn from(name: ResourceName) -> Self {
        name.0
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Optional principal and credential for a connection request
///
/// Both halves are independently optional. The password is never printed
/// by `Debug`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Principal (user name)
    pub user: Option<String>,
    /// Credential (password)
    pub password: Option<String>,
}

impl Credentials {
    /// Request without principal or credential
    pub fn none() -> Self {
        Self::default()
    }

    /// Request with the given, possibly absent, principal and credential
    pub fn new(user: Option<String>, password: Option<String>) -> Self {
        Self { user, password }
    }

    /// Request with both principal and credential present
    pub fn user_password(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: Some(user.into()),
            password: Some(password.into()),
        }
    }

    /// True when neither half is present
    pub fn is_empty(&self) -> bool {
        self.user.is_none() && self.password.is_none()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("user", &self.user)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .finish()
    }
}

/// Property set passed to the transaction manager's connect entry point
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionProperties(BTreeMap<String, String>);

impl ConnectionProperties {
    /// Empty property set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the property set for a request
    ///
    /// `user` and `password` are inserted only for the halves that are present.
    pub fn from_credentials(credentials: &Credentials) -> Self {
        let mut props = Self::new();
        if let Some(user) = &credentials.user {
            props.set(USER_PROPERTY, user.clone());
        }
        if let Some(password) = &credentials.password {
            props.set(PASSWORD_PROPERTY, password.clone());
        }
        props
    }

    /// Set a property, replacing any previous value
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

/// Key the transaction manager resolves through the naming service
///
/// The key is the manager prefix concatenated directly with the resource
/// name; no separator is inserted.
///
/// # Examples
///
/// ```
/// use txbridge_core::{LookupKey, ResourceName, DEFAULT_LOOKUP_PREFIX};
///
/// let name = ResourceName::new("jdbc/MyXADS").unwrap();
/// let key = LookupKey::new(DEFAULT_LOOKUP_PREFIX, &name);
/// assert_eq!(key.as_str(), "jdbc:arjuna:jdbc/MyXADS");
/// assert_eq!(key.resource_name(DEFAULT_LOOKUP_PREFIX), Some("jdbc/MyXADS"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LookupKey(String);

impl LookupKey {
    /// Concatenate prefix and resource name
    pub fn new(prefix: &str, name: &ResourceName) -> Self {
        let mut key = String::with_capacity(prefix.len() + name.as_str().len());
        key.push_str(prefix);
        key.push_str(name.as_str());
        LookupKey(key)
    }

    /// Borrow the full key
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resource name part, if the key starts with `prefix`
    pub fn resource_name(&self, prefix: &str) -> Option<&str> {
        self.0.strip_prefix(prefix)
    }
}

impl fmt::Display for LookupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
