//! Application state
//!
//! Bundles the loaded configuration and the immutable project catalog behind
//! cheap clones for axum's `State` extractor.

use crate::{catalog::Catalog, config::SiteConfig};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Site configuration
    config: Arc<SiteConfig>,

    /// The project catalog, read-only after load
    catalog: Arc<Catalog>,
}

impl AppState {
    /// Create state with default configuration and the builtin catalog.
    pub fn new() -> anyhow::Result<Self> {
        Self::with_config(SiteConfig::default())
    }

    /// Create state with a loaded configuration and the builtin catalog.
    pub fn with_config(config: SiteConfig) -> anyhow::Result<Self> {
        let catalog = Catalog::builtin()?;
        Ok(Self::from_parts(config, catalog))
    }

    /// Create state from already-constructed parts.
    ///
    /// Integration tests use this to swap in a synthetic catalog.
    #[must_use]
    pub fn from_parts(config: SiteConfig, catalog: Catalog) -> Self {
        Self {
            config: Arc::new(config),
            catalog: Arc::new(catalog),
        }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Get the project catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_loads_the_builtin_catalog() {
        let state = AppState::new().expect("failed to create state");
        assert!(!state.catalog().is_empty());
        assert_eq!(state.config().server.port, 3000);
    }

    #[test]
    fn clone_shares_the_same_catalog() {
        let state = AppState::new().expect("failed to create state");
        let cloned = state.clone();

        assert!(Arc::ptr_eq(&state.catalog, &cloned.catalog));
        assert!(Arc::ptr_eq(&state.config, &cloned.config));
    }
}
