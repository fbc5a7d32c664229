//! Observability (logging, tracing)
//!
//! Structured logging with environment-based filtering: pretty formatting in
//! development, JSON in release builds.

use crate::config::LoggingSettings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging stack.
///
/// `RUST_LOG` wins when set; otherwise the configured filter directive from
/// `[logging]` applies.
///
/// # Example
///
/// ```rust,no_run
/// use atrium_web::{config::SiteConfig, observability};
///
/// # fn main() -> anyhow::Result<()> {
/// let config = SiteConfig::load()?;
/// observability::init(&config.logging)?;
/// tracing::info!("site starting");
/// # Ok(())
/// # }
/// ```
pub fn init(logging: &LoggingSettings) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    #[cfg(debug_assertions)]
    {
        // Pretty formatting for development
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }

    #[cfg(not(debug_assertions))]
    {
        // JSON formatting for production
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    }

    Ok(())
}
