//! Site configuration
//!
//! Loaded with figment from layered sources, highest priority first:
//!
//! 1. Environment variables (`ATRIUM_` prefix, `__` as the table separator,
//!    e.g. `ATRIUM_SERVER__PORT=8080`)
//! 2. `./config.toml`
//! 3. Hardcoded defaults
//!
//! # Example Configuration
//!
//! ```toml
//! # config.toml
//! [server]
//! host = "127.0.0.1"
//! port = 3000
//!
//! [site]
//! title = "Atrium Facade Systems"
//!
//! [logging]
//! level = "atrium_web=debug,tower_http=debug"
//! ```

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

/// Bind address settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
        }
    }
}

/// Site copy used by the templates.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteSettings {
    /// Company name shown in the hero and page titles
    pub title: String,
    /// Hero tagline
    pub tagline: String,
    /// Address behind the contact call-to-action
    pub contact_email: String,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            title: "Atrium Facade Systems".to_string(),
            tagline: "Architectural glazing and facade systems, engineered and installed."
                .to_string(),
            contact_email: "projects@atriumfacades.com".to_string(),
        }
    }
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Complete site configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Bind address
    pub server: ServerSettings,
    /// Site copy
    pub site: SiteSettings,
    /// Logging
    pub logging: LoggingSettings,
}

impl SiteConfig {
    /// Load configuration from defaults, `./config.toml` and the environment.
    pub fn load() -> anyhow::Result<Self> {
        let config = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("ATRIUM_").split("__"))
            .extract()?;
        Ok(config)
    }
}
