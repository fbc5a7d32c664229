//! The project catalog
//!
//! An ordered, immutable collection of project records. The data ships with
//! the binary (`data/projects.toml`, embedded at compile time) and is parsed
//! and validated once at startup; no view ever mutates it.
//!
//! Lookup operations:
//!
//! - [`Catalog::all`] - every record, insertion order
//! - [`Catalog::by_slug`] - resolve a routing slug to its record
//! - [`Catalog::featured`] - the homepage subset
//! - [`Catalog::categories`] - `"All"` plus each distinct category value

use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use thiserror::Error;

/// Sentinel category matching every record.
pub const ALL_CATEGORIES: &str = "All";

/// Status value for delivered projects; anything else is an in-progress label.
pub const STATUS_COMPLETED: &str = "Completed";

/// Headline figures shown on cards and the detail page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectStats {
    /// Display string, e.g. `"48,000 m²"`
    pub area: String,
    /// Display string, e.g. `"30 months"`
    pub duration: String,
}

/// A single project's structured metadata.
///
/// `slug` is the permanent routing key: unique across the catalog and never
/// changed once published.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectRecord {
    /// Unique stable identifier
    pub id: u32,
    /// Unique human-readable routing key
    pub slug: String,
    /// Project name
    pub title: String,
    /// Long-form description for the detail page
    pub description: String,
    /// Category tag; must match one of [`Catalog::categories`]
    pub category: String,
    /// `"Completed"` or an in-progress label
    pub status: String,
    /// Display location, e.g. `"Toronto, ON"`
    pub location: String,
    /// Display year
    pub year: String,
    /// Primary image reference
    pub image: String,
    /// Ordered gallery image references (may be empty)
    #[serde(default)]
    pub gallery: Vec<String>,
    /// Optional video reference
    #[serde(default)]
    pub video_url: Option<String>,
    /// Headline figures
    pub stats: ProjectStats,
    /// Included in the homepage featured subset
    #[serde(default)]
    pub featured: bool,
}

impl ProjectRecord {
    /// Whether the project has been delivered.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == STATUS_COMPLETED
    }
}

/// Errors raised while loading or validating catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The embedded TOML failed to parse
    #[error("failed to parse project data: {0}")]
    Parse(#[from] toml::de::Error),

    /// Two records share a slug
    #[error("duplicate project slug `{0}`")]
    DuplicateSlug(String),

    /// Two records share an id
    #[error("duplicate project id {0}")]
    DuplicateId(u32),

    /// A record has an empty slug
    #[error("project `{0}` has an empty slug")]
    EmptySlug(String),
}

#[derive(Debug, Deserialize)]
struct CatalogFile {
    projects: Vec<ProjectRecord>,
}

/// The complete immutable ordered set of project records.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<ProjectRecord>,
    by_slug: HashMap<String, usize>,
}

const BUILTIN_DATA: &str = include_str!("../../data/projects.toml");

impl Catalog {
    /// Load the catalog that ships with the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml(BUILTIN_DATA)
    }

    /// Parse a catalog from TOML source.
    pub fn from_toml(raw: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(raw)?;
        Self::from_records(file.projects)
    }

    /// Build a catalog from records, enforcing the uniqueness invariants.
    pub fn from_records(records: Vec<ProjectRecord>) -> Result<Self, CatalogError> {
        let mut by_slug = HashMap::with_capacity(records.len());
        let mut ids = HashSet::with_capacity(records.len());

        for (index, record) in records.iter().enumerate() {
            if record.slug.is_empty() {
                return Err(CatalogError::EmptySlug(record.title.clone()));
            }
            if by_slug.insert(record.slug.clone(), index).is_some() {
                return Err(CatalogError::DuplicateSlug(record.slug.clone()));
            }
            if !ids.insert(record.id) {
                return Err(CatalogError::DuplicateId(record.id));
            }
        }

        Ok(Self { records, by_slug })
    }

    /// Every record, in insertion order.
    #[must_use]
    pub fn all(&self) -> &[ProjectRecord] {
        &self.records
    }

    /// Resolve a slug to its record.
    #[must_use]
    pub fn by_slug(&self, slug: &str) -> Option<&ProjectRecord> {
        self.by_slug.get(slug).map(|&index| &self.records[index])
    }

    /// Records flagged for the homepage, in insertion order.
    #[must_use]
    pub fn featured(&self) -> Vec<&ProjectRecord> {
        self.records.iter().filter(|r| r.featured).collect()
    }

    /// `"All"` followed by each distinct category in first-appearance order.
    ///
    /// Filter controls render exactly these values, so any category used for
    /// filtering matches one of them.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut categories = vec![ALL_CATEGORIES];
        for record in &self.records {
            if !categories.contains(&record.category.as_str()) {
                categories.push(record.category.as_str());
            }
        }
        categories
    }

    /// Number of records in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the catalog holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, slug: &str, category: &str, featured: bool) -> ProjectRecord {
        ProjectRecord {
            id,
            slug: slug.to_string(),
            title: format!("Project {id}"),
            description: String::new(),
            category: category.to_string(),
            status: STATUS_COMPLETED.to_string(),
            location: "Toronto, ON".to_string(),
            year: "2024".to_string(),
            image: format!("/static/images/projects/{slug}/cover.svg"),
            gallery: Vec::new(),
            video_url: None,
            stats: ProjectStats {
                area: "1,000 m²".to_string(),
                duration: "6 months".to_string(),
            },
            featured,
        }
    }

    #[test]
    fn builtin_catalog_parses_and_validates() {
        let catalog = Catalog::builtin().expect("builtin catalog must be valid");
        assert!(!catalog.is_empty());
    }

    #[test]
    fn by_slug_finds_existing_record() {
        let catalog = Catalog::from_records(vec![
            record(1, "one", "Commercial", false),
            record(2, "two", "Residential", true),
        ])
        .unwrap();

        assert_eq!(catalog.by_slug("two").unwrap().id, 2);
    }

    #[test]
    fn by_slug_misses_unknown_slug() {
        let catalog = Catalog::from_records(vec![record(1, "one", "Commercial", false)]).unwrap();
        assert!(catalog.by_slug("missing").is_none());
    }

    #[test]
    fn duplicate_slug_is_rejected() {
        let result = Catalog::from_records(vec![
            record(1, "same", "Commercial", false),
            record(2, "same", "Retail", false),
        ]);

        assert!(matches!(result, Err(CatalogError::DuplicateSlug(slug)) if slug == "same"));
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let result = Catalog::from_records(vec![
            record(7, "a", "Commercial", false),
            record(7, "b", "Retail", false),
        ]);

        assert!(matches!(result, Err(CatalogError::DuplicateId(7))));
    }

    #[test]
    fn empty_slug_is_rejected() {
        let result = Catalog::from_records(vec![record(1, "", "Commercial", false)]);
        assert!(matches!(result, Err(CatalogError::EmptySlug(_))));
    }

    #[test]
    fn featured_preserves_insertion_order() {
        let catalog = Catalog::from_records(vec![
            record(1, "a", "Commercial", true),
            record(2, "b", "Retail", false),
            record(3, "c", "Residential", true),
        ])
        .unwrap();

        let featured: Vec<u32> = catalog.featured().iter().map(|r| r.id).collect();
        assert_eq!(featured, vec![1, 3]);
    }

    #[test]
    fn categories_are_distinct_with_all_first() {
        let catalog = Catalog::from_records(vec![
            record(1, "a", "Commercial", false),
            record(2, "b", "Retail", false),
            record(3, "c", "Commercial", false),
            record(4, "d", "Residential", false),
        ])
        .unwrap();

        assert_eq!(
            catalog.categories(),
            vec![ALL_CATEGORIES, "Commercial", "Retail", "Residential"]
        );
    }

    #[test]
    fn is_completed_checks_status_label() {
        let mut done = record(1, "a", "Commercial", false);
        assert!(done.is_completed());

        done.status = "In Progress".to_string();
        assert!(!done.is_completed());
    }
}
