//! Manager-side naming configuration

use crate::environment::NamingEnvironment;
use once_cell::sync::OnceCell;
use parking_lot::RwLock;

/// Naming properties as seen by the transaction manager
///
/// Both the connect path and the recovery subsystem build their naming
/// context from [`snapshot`](ManagerNamingConfig::snapshot). The store is
/// written once, through [`apply_once`](ManagerNamingConfig::apply_once)
/// or [`apply_once_with`](ManagerNamingConfig::apply_once_with); any later
/// application is a no-op.
#[derive(Debug, Default)]
pub struct ManagerNamingConfig {
    properties: RwLock<NamingEnvironment>,
    applied: OnceCell<()>,
}

impl ManagerNamingConfig {
    /// Empty, unapplied configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `env` unless the configuration was already applied
    ///
    /// Returns `true` for the single call that performed the application.
    pub fn apply_once(&self, env: &NamingEnvironment) -> bool {
        self.apply_once_with(|| env.clone())
    }

    /// Apply the environment produced by `source` unless already applied
    ///
    /// `source` runs at most once per configuration, even under concurrent
    /// callers; every caller returns only after the application is visible.
    pub fn apply_once_with(&self, source: impl FnOnce() -> NamingEnvironment) -> bool {
        let mut applied_here = false;
        self.applied.get_or_init(|| {
            let env = source();
            self.properties
                .write()
                .extend(env.iter().map(|(k, v)| (k.to_string(), v.to_string())));
            applied_here = true;
        });
        applied_here
    }

    /// True once an application has completed
    pub fn is_applied(&self) -> bool {
        self.applied.get().is_some()
    }

    /// Current properties
    ///
    /// Before application this is whatever the manager defaults to (empty).
    pub fn snapshot(&self) -> NamingEnvironment {
        self.properties.read().clone()
    }

    /// Look up one property
    pub fn get(&self, key: &str) -> Option<String> {
        self.properties.read().get(key).map(str::to_string)
    }
}
