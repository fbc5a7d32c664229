//! atrium-web: marketing and portfolio site for Atrium Facade Systems
//!
//! A server-rendered website built on axum, askama and HTMX:
//!
//! - `/` - homepage with the featured-projects section and category filter
//! - `/projects` - the full portfolio with category filtering and pagination
//! - `/projects/{slug}` - per-project detail page with stats and gallery
//!
//! The project catalog is a static, pre-defined dataset embedded at compile
//! time (`data/projects.toml`) and shared read-only through [`state::AppState`].
//! Category buttons and pagination links are plain anchors progressively
//! enhanced with HTMX: an `HX-Request` gets back only the grid fragment, a
//! normal request gets the full page.

#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod config;
pub mod error;
pub mod gallery;
pub mod handlers;
pub mod health;
pub mod listing;
pub mod observability;
pub mod state;

pub mod prelude {
    //! Convenience re-exports for common types
    //!
    //! # Examples
    //!
    //! ```rust
    //! use atrium_web::prelude::*;
    //! ```

    // Catalog types and lookups
    pub use crate::catalog::{Catalog, ProjectRecord, ProjectStats, ALL_CATEGORIES};

    // Filter + pagination core
    pub use crate::listing::{filter_by_category, page_links, paginate, PageLink, PageWindow, PAGE_SIZE};

    // Gallery selection
    pub use crate::gallery::{GalleryDisplay, GALLERY_DISPLAY_CAP};

    // Error types
    pub use crate::error::{SiteError, SiteResult};

    // Application state and router
    pub use crate::handlers::router;
    pub use crate::state::AppState;

    // Configuration
    pub use crate::config::SiteConfig;
}
