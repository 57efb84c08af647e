//! Config shared between a client and its service handles.

use std::sync::Arc;

use parking_lot::RwLock;

use super::Config;

/// Immutable connection settings plus the mutable default account.
///
/// Service clients read the account id on every call that leaves it empty,
/// so [`SharedConfig::set_account_id`] takes effect for handles created
/// earlier.
#[derive(Debug, Clone)]
pub struct SharedConfig {
    config: Arc<Config>,
    account_id: Arc<RwLock<String>>,
}

impl SharedConfig {
    /// Wrap a config. Defaults are not applied here.
    #[must_use]
    pub fn new(config: Config) -> Self {
        let account_id = Arc::new(RwLock::new(config.account_id.clone()));
        Self {
            config: Arc::new(config),
            account_id,
        }
    }

    /// Settings as given at construction.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Current default account id (may be empty).
    #[must_use]
    pub fn account_id(&self) -> String {
        self.account_id.read().clone()
    }

    /// Replace the default account id.
    pub fn set_account_id(&self, account_id: impl Into<String>) {
        *self.account_id.write() = account_id.into();
    }

    /// `explicit` unless empty, else the default account id.
    #[must_use]
    pub fn resolve_account_id(&self, explicit: &str) -> String {
        if explicit.is_empty() {
            self.account_id()
        } else {
            explicit.to_string()
        }
    }

    /// Snapshot of the settings with the current account id.
    #[must_use]
    pub fn snapshot(&self) -> Config {
        Config {
            account_id: self.account_id(),
            ..(*self.config).clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_id_update_is_visible_to_clones() {
        let shared = SharedConfig::new(Config::new("t-token"));
        let handle = shared.clone();
        assert_eq!(handle.account_id(), "");

        shared.set_account_id("2000000001");
        assert_eq!(handle.account_id(), "2000000001");
        assert_eq!(handle.snapshot().account_id, "2000000001");
    }

    #[test]
    fn explicit_account_wins() {
        let shared = SharedConfig::new(Config::new("t-token").with_account_id("default"));
        assert_eq!(shared.resolve_account_id(""), "default");
        assert_eq!(shared.resolve_account_id("other"), "other");
    }
}
