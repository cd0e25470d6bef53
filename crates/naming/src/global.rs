//! Process-wide naming configuration
//!
//! # Startup ordering
//!
//! The adapter calls [`ensure_naming_properties`] on every connection
//! request, so the manager configuration is guaranteed to be applied before
//! the first connect. The recovery subsystem is not covered by that: if it
//! starts before the first request and before anyone else has called
//! [`ensure_naming_properties`], it reads the manager defaults. Hosts that
//! run recovery must call [`ensure_naming_properties`] themselves, after
//! [`install_host_environment`] and before starting recovery.

use crate::config::ManagerNamingConfig;
use crate::environment::NamingEnvironment;
use crate::error::{NamingError, NamingResult};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use tracing::{info, warn};

/// Host environment plus the manager configuration it feeds
///
/// Lock order: `host` first, then the configuration's one-shot gate.
/// [`install`](NamingRegistry::install) only peeks at the gate, so the two
/// operations cannot deadlock.
#[derive(Debug, Default)]
struct NamingRegistry {
    host: Mutex<NamingEnvironment>,
    config: ManagerNamingConfig,
}

impl NamingRegistry {
    fn install(&self, env: NamingEnvironment) -> NamingResult<()> {
        let mut host = self.host.lock();
        if self.config.is_applied() {
            warn!(
                properties = env.len(),
                "host naming environment installed after the manager configuration was applied"
            );
            return Err(NamingError::AlreadyApplied);
        }
        *host = env;
        Ok(())
    }

    fn ensure(&self) -> bool {
        // Held until the gate is set, so no install lands between the copy
        // and the application.
        let host = self.host.lock();
        let applied = self.config.apply_once_with(|| host.clone());
        if applied {
            info!(
                properties = host.len(),
                "applied naming properties to transaction manager"
            );
        }
        applied
    }
}

static REGISTRY: Lazy<NamingRegistry> = Lazy::new(NamingRegistry::default);

/// The manager's process-wide naming configuration
pub fn global_config() -> &'static ManagerNamingConfig {
    &REGISTRY.config
}

/// Record the host's naming environment
///
/// Must happen before the configuration is applied; afterwards the manager
/// would never see it, so this fails with [`NamingError::AlreadyApplied`].
pub fn install_host_environment(env: NamingEnvironment) -> NamingResult<()> {
    REGISTRY.install(env)
}

/// Apply the host naming environment to the manager configuration
///
/// Idempotent and safe to call from any number of threads: the first call
/// applies, every call returns only once the configuration is in place.
/// Applies an empty environment if none was installed.
pub fn ensure_naming_properties() {
    REGISTRY.ensure();
}

/// True once the process-wide configuration has been applied
pub fn is_applied() -> bool {
    REGISTRY.config.is_applied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::{INITIAL_CONTEXT_FACTORY, PROVIDER_URL};
    use std::sync::{Arc, Barrier};
    use std::thread;

    // The only test in this crate touching the process-wide state.
    #[test]
    fn test_install_then_ensure() {
        let env = NamingEnvironment::new().with(INITIAL_CONTEXT_FACTORY, "host.ContextFactory");
        install_host_environment(env.clone()).unwrap();
        assert!(!is_applied());

        ensure_naming_properties();
        ensure_naming_properties();
        assert!(is_applied());
        assert_eq!(global_config().snapshot(), env);

        assert_eq!(
            install_host_environment(NamingEnvironment::new()),
            Err(NamingError::AlreadyApplied)
        );
        assert_eq!(global_config().snapshot(), env);
    }

    #[test]
    fn test_registry_install_after_ensure_fails() {
        let registry = NamingRegistry::default();
        let env = NamingEnvironment::new().with(PROVIDER_URL, "naming://host");
        registry.install(env.clone()).unwrap();

        assert!(registry.ensure());
        assert!(!registry.ensure());
        assert_eq!(registry.config.snapshot(), env);
        assert_eq!(
            registry.install(NamingEnvironment::new()),
            Err(NamingError::AlreadyApplied)
        );
    }

    // Installs racing the first ensure either land before the application or
    // fail; an install that returns Ok is never dropped.
    #[test]
    fn test_successful_install_is_never_lost() {
        for _ in 0..200 {
            let registry = Arc::new(NamingRegistry::default());
            let barrier = Arc::new(Barrier::new(5));

            let installers: Vec<_> = (0..4)
                .map(|i| {
                    let registry = Arc::clone(&registry);
                    let barrier = Arc::clone(&barrier);
                    thread::spawn(move || {
                        let env = NamingEnvironment::new()
                            .with(PROVIDER_URL, format!("naming://host-{}", i));
                        barrier.wait();
                        registry.install(env).is_ok()
                    })
                })
                .collect();

            barrier.wait();
            registry.ensure();

            let installed = installers
                .into_iter()
                .map(|h| h.join().unwrap())
                .filter(|ok| *ok)
                .count();
            let applied = registry.config.get(PROVIDER_URL);
            if installed > 0 {
                assert!(applied.is_some(), "an accepted install was not applied");
            } else {
                assert_eq!(applied, None);
            }
        }
    }
}
