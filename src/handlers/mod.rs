//! HTTP request handlers and the router
//!
//! Every page is served two ways: a normal request gets the full document, a
//! request carrying `HX-Request` gets only the fragment the click targets
//! (the featured grid on the homepage, the project browser on the listing
//! page). Category and pagination controls are plain anchors with `hx-get`
//! attributes, so the site degrades to full page loads without JavaScript.

use crate::{
    catalog::{ProjectRecord, ALL_CATEGORIES},
    config::SiteSettings,
    error::{self, SiteError, SiteResult},
    gallery::{self, GalleryDisplay},
    health,
    listing::{self, PageLink, PageWindow},
    state::AppState,
};
use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use axum_htmx::{AutoVaryLayer, HxRequest};
use serde::Deserialize;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer, services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer,
};

/// Build the application router.
#[must_use]
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/projects", get(projects_index))
        .route("/projects/{slug}", get(project_detail))
        .route("/health", get(health::health_check))
        .nest_service("/static", ServeDir::new("static"))
        .fallback(not_found)
        .layer(AutoVaryLayer)
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(10)))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// =============================================================================
// View models
// =============================================================================

/// A category filter button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryLink {
    /// Category value, also the button label
    pub name: String,
    /// Target URL (no `page` parameter: switching category resets to page 1)
    pub href: String,
    /// Whether this category is currently selected
    pub active: bool,
}

/// One rendered entry of the page-number control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageItem {
    /// Display label
    pub label: String,
    /// Target URL; empty for an ellipsis
    pub href: String,
    /// Whether this is the current page
    pub active: bool,
    /// Whether this entry is a collapsed-gap marker
    pub ellipsis: bool,
}

fn browse_href(category: &str, page: usize) -> String {
    match (category == ALL_CATEGORIES, page <= 1) {
        (true, true) => "/projects".to_string(),
        (true, false) => format!("/projects?page={page}"),
        (false, true) => format!("/projects?category={category}"),
        (false, false) => format!("/projects?category={category}&page={page}"),
    }
}

fn category_links(categories: &[&str], selected: &str, base_path: &str) -> Vec<CategoryLink> {
    categories
        .iter()
        .map(|&name| CategoryLink {
            name: name.to_string(),
            href: if name == ALL_CATEGORIES {
                base_path.to_string()
            } else {
                format!("{base_path}?category={name}")
            },
            active: name == selected,
        })
        .collect()
}

fn page_items(links: &[PageLink], category: &str, current: usize) -> Vec<PageItem> {
    links
        .iter()
        .map(|link| match *link {
            PageLink::Page(page) => PageItem {
                label: page.to_string(),
                href: browse_href(category, page),
                active: page == current,
                ellipsis: false,
            },
            PageLink::Ellipsis => PageItem {
                label: "\u{2026}".to_string(),
                href: String::new(),
                active: false,
                ellipsis: true,
            },
        })
        .collect()
}

fn render<T: Template>(template: &T) -> SiteResult<Html<String>> {
    Ok(Html(template.render()?))
}

// =============================================================================
// Homepage
// =============================================================================

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate<'a> {
    site: &'a SiteSettings,
    categories: Vec<CategoryLink>,
    projects: Vec<&'a ProjectRecord>,
}

#[derive(Template)]
#[template(path = "_featured_section.html")]
struct FeaturedSectionTemplate<'a> {
    categories: Vec<CategoryLink>,
    projects: Vec<&'a ProjectRecord>,
}

/// Query parameters for the homepage featured section.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct FeaturedParams {
    /// Selected category, `"All"` by default
    pub category: String,
}

impl Default for FeaturedParams {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

/// `GET /` - homepage with the featured-projects section.
pub async fn home(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    Query(params): Query<FeaturedParams>,
) -> SiteResult<Response> {
    let catalog = state.catalog();
    let projects = listing::filter_by_category(catalog.featured(), &params.category);
    let categories = category_links(&catalog.categories(), &params.category, "/");

    tracing::debug!(
        category = %params.category,
        shown = projects.len(),
        is_htmx,
        "rendering featured section"
    );

    if is_htmx {
        let fragment = FeaturedSectionTemplate {
            categories,
            projects,
        };
        Ok(render(&fragment)?.into_response())
    } else {
        let page = HomeTemplate {
            site: &state.config().site,
            categories,
            projects,
        };
        Ok(render(&page)?.into_response())
    }
}

// =============================================================================
// Listing page
// =============================================================================

#[derive(Template)]
#[template(path = "projects.html")]
struct ProjectsTemplate<'a> {
    categories: Vec<CategoryLink>,
    window: PageWindow<'a>,
    pages: Vec<PageItem>,
    prev_href: Option<String>,
    next_href: Option<String>,
}

#[derive(Template)]
#[template(path = "_project_browser.html")]
struct ProjectBrowserTemplate<'a> {
    categories: Vec<CategoryLink>,
    window: PageWindow<'a>,
    pages: Vec<PageItem>,
    prev_href: Option<String>,
    next_href: Option<String>,
}

/// Query parameters for the listing page.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct BrowseParams {
    /// Selected category, `"All"` by default
    pub category: String,
    /// 1-based page number, clamped server-side
    pub page: usize,
}

impl Default for BrowseParams {
    fn default() -> Self {
        Self {
            category: ALL_CATEGORIES.to_string(),
            page: 1,
        }
    }
}

/// `GET /projects` - the full portfolio with filter and pagination controls.
pub async fn projects_index(
    State(state): State<AppState>,
    HxRequest(is_htmx): HxRequest,
    Query(params): Query<BrowseParams>,
) -> SiteResult<Response> {
    let catalog = state.catalog();
    let filtered = listing::filter_by_category(catalog.all(), &params.category);
    let window = listing::paginate(filtered, params.page);

    let categories = category_links(&catalog.categories(), &params.category, "/projects");
    let links = listing::page_links(window.page, window.total_pages);
    let pages = page_items(&links, &params.category, window.page);
    let prev_href = (window.page > 1).then(|| browse_href(&params.category, window.page - 1));
    let next_href = (window.page < window.total_pages)
        .then(|| browse_href(&params.category, window.page + 1));

    tracing::debug!(
        category = %params.category,
        page = window.page,
        total_pages = window.total_pages,
        shown = window.items.len(),
        is_htmx,
        "rendering project listing"
    );

    if is_htmx {
        let fragment = ProjectBrowserTemplate {
            categories,
            window,
            pages,
            prev_href,
            next_href,
        };
        Ok(render(&fragment)?.into_response())
    } else {
        let page = ProjectsTemplate {
            categories,
            window,
            pages,
            prev_href,
            next_href,
        };
        Ok(render(&page)?.into_response())
    }
}

// =============================================================================
// Detail page
// =============================================================================

#[derive(Template)]
#[template(path = "project_detail.html")]
struct ProjectDetailTemplate<'a> {
    site: &'a SiteSettings,
    project: &'a ProjectRecord,
    gallery_single: Option<&'a str>,
    gallery_items: &'a [String],
    gallery_note: Option<String>,
}

const NO_IMAGES: &[String] = &[];

/// `GET /projects/{slug}` - project detail page.
///
/// An unknown slug is the one real error of the site and surfaces as a full
/// 404 page.
pub async fn project_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> SiteResult<Response> {
    let project = state
        .catalog()
        .by_slug(&slug)
        .ok_or_else(|| SiteError::NotFound(format!("project `{slug}`")))?;

    let (gallery_single, gallery_items, gallery_note) = match gallery::plan(&project.gallery) {
        GalleryDisplay::Hidden => (None, NO_IMAGES, None),
        GalleryDisplay::Single(image) => (Some(image), NO_IMAGES, None),
        GalleryDisplay::Carousel {
            images,
            overflow_note,
        } => (None, images, overflow_note),
    };

    tracing::debug!(%slug, gallery = project.gallery.len(), "rendering project detail");

    let page = ProjectDetailTemplate {
        site: &state.config().site,
        project,
        gallery_single,
        gallery_items,
        gallery_note,
    };
    Ok(render(&page)?.into_response())
}

/// Router fallback: the complete 404 page.
async fn not_found() -> Response {
    error::not_found_response()
}
