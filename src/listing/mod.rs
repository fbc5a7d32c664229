//! Category filter and pagination
//!
//! The one shared pure computation behind both the `/projects` listing and the
//! homepage featured section: filter an ordered record sequence by category,
//! then cut a fixed-size page window out of it. The same
//! [`filter_by_category`] feeds both views so their semantics cannot diverge.
//!
//! Page numbers are 1-based. A requested page outside `[1, total_pages]` is
//! clamped rather than rendered empty; an empty filtered set is a valid state
//! with zero pages, not an error.

use crate::catalog::{ProjectRecord, ALL_CATEGORIES};

/// Fixed page size for the listing view.
pub const PAGE_SIZE: usize = 12;

/// Records matching a category, in source order.
///
/// The `"All"` sentinel matches everything; any other value is an exact match
/// against [`ProjectRecord::category`].
pub fn filter_by_category<'a, I>(records: I, category: &str) -> Vec<&'a ProjectRecord>
where
    I: IntoIterator<Item = &'a ProjectRecord>,
{
    let records = records.into_iter();
    if category == ALL_CATEGORIES {
        records.collect()
    } else {
        records.filter(|r| r.category == category).collect()
    }
}

/// The slice of filtered records shown for one page.
#[derive(Debug)]
pub struct PageWindow<'a> {
    /// Records on this page, at most [`PAGE_SIZE`]
    pub items: Vec<&'a ProjectRecord>,
    /// The effective (clamped) 1-based page number
    pub page: usize,
    /// `ceil(total_items / PAGE_SIZE)`; zero for an empty filtered set
    pub total_pages: usize,
    /// Size of the filtered set across all pages
    pub total_items: usize,
}

/// Cut the page window for a 1-based page number.
///
/// The requested page is clamped into `[1, max(total_pages, 1)]`, so a stale
/// page number (say, after switching to a category with fewer results) lands
/// on the nearest valid page instead of an empty one.
#[must_use]
pub fn paginate(filtered: Vec<&ProjectRecord>, requested_page: usize) -> PageWindow<'_> {
    let total_items = filtered.len();
    let total_pages = total_items.div_ceil(PAGE_SIZE);
    let page = requested_page.clamp(1, total_pages.max(1));
    let start = (page - 1) * PAGE_SIZE;

    let items = filtered.into_iter().skip(start).take(PAGE_SIZE).collect();

    PageWindow {
        items,
        page,
        total_pages,
        total_items,
    }
}

/// One entry in the page-number control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    /// A numbered page link
    Page(usize),
    /// A collapsed run of pages
    Ellipsis,
}

/// The page-number control for the current page.
///
/// Display policy: always show page 1 and the last page; show the current page
/// and its immediate neighbours; a page exactly two away from the current one
/// collapses into a single ellipsis marker; everything further out is omitted.
#[must_use]
pub fn page_links(current: usize, total_pages: usize) -> Vec<PageLink> {
    let mut links = Vec::new();
    for page in 1..=total_pages {
        if page == 1 || page == total_pages || (page + 1 >= current && page <= current + 1) {
            links.push(PageLink::Page(page));
        } else if page + 2 == current || page == current + 2 {
            links.push(PageLink::Ellipsis);
        }
    }
    links
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ProjectStats, STATUS_COMPLETED};

    fn record(id: u32, category: &str) -> ProjectRecord {
        ProjectRecord {
            id,
            slug: format!("project-{id}"),
            title: format!("Project {id}"),
            description: String::new(),
            category: category.to_string(),
            status: STATUS_COMPLETED.to_string(),
            location: "Calgary, AB".to_string(),
            year: "2024".to_string(),
            image: String::new(),
            gallery: Vec::new(),
            video_url: None,
            stats: ProjectStats {
                area: "1,000 m²".to_string(),
                duration: "6 months".to_string(),
            },
            featured: false,
        }
    }

    /// The worked example: 14 records, 5 Retail and 9 Residential.
    fn mixed_catalog() -> Vec<ProjectRecord> {
        let mut records = Vec::new();
        for id in 0..14 {
            let category = if id < 5 { "Retail" } else { "Residential" };
            records.push(record(id, category));
        }
        records
    }

    #[test]
    fn all_sentinel_keeps_every_record_in_order() {
        let records = mixed_catalog();
        let filtered = filter_by_category(&records, ALL_CATEGORIES);

        assert_eq!(filtered.len(), 14);
        let ids: Vec<u32> = filtered.iter().map(|r| r.id).collect();
        assert_eq!(ids, (0..14).collect::<Vec<_>>());
    }

    #[test]
    fn exact_category_filter_preserves_order() {
        let records = mixed_catalog();
        let filtered = filter_by_category(&records, "Residential");

        assert_eq!(filtered.len(), 9);
        assert!(filtered.iter().all(|r| r.category == "Residential"));
        let ids: Vec<u32> = filtered.iter().map(|r| r.id).collect();
        assert_eq!(ids, (5..14).collect::<Vec<_>>());
    }

    #[test]
    fn unknown_category_yields_empty_set() {
        let records = mixed_catalog();
        assert!(filter_by_category(&records, "Industrial").is_empty());
    }

    #[test]
    fn retail_fits_on_a_single_page() {
        let records = mixed_catalog();
        let window = paginate(filter_by_category(&records, "Retail"), 1);

        assert_eq!(window.items.len(), 5);
        assert_eq!(window.total_pages, 1);
        assert_eq!(window.total_items, 5);
    }

    #[test]
    fn all_splits_fourteen_records_across_two_pages() {
        let records = mixed_catalog();

        let first = paginate(filter_by_category(&records, ALL_CATEGORIES), 1);
        assert_eq!(first.items.len(), 12);
        assert_eq!(first.total_pages, 2);

        let second = paginate(filter_by_category(&records, ALL_CATEGORIES), 2);
        assert_eq!(second.items.len(), 2);
        assert_eq!(second.page, 2);
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let records = mixed_catalog();

        let past_end = paginate(filter_by_category(&records, ALL_CATEGORIES), 99);
        assert_eq!(past_end.page, 2);
        assert_eq!(past_end.items.len(), 2);

        let zero = paginate(filter_by_category(&records, ALL_CATEGORIES), 0);
        assert_eq!(zero.page, 1);
        assert_eq!(zero.items.len(), 12);
    }

    #[test]
    fn empty_filter_is_a_valid_zero_page_state() {
        let window = paginate(Vec::new(), 1);

        assert_eq!(window.total_pages, 0);
        assert_eq!(window.total_items, 0);
        assert!(window.items.is_empty());
        assert_eq!(window.page, 1);
    }

    #[test]
    fn page_links_show_everything_when_total_is_small() {
        assert_eq!(
            page_links(2, 3),
            vec![PageLink::Page(1), PageLink::Page(2), PageLink::Page(3)]
        );
    }

    #[test]
    fn page_links_collapse_both_gaps_around_the_middle() {
        assert_eq!(
            page_links(5, 10),
            vec![
                PageLink::Page(1),
                PageLink::Ellipsis,
                PageLink::Page(4),
                PageLink::Page(5),
                PageLink::Page(6),
                PageLink::Ellipsis,
                PageLink::Page(10),
            ]
        );
    }

    #[test]
    fn page_links_collapse_only_the_trailing_gap_at_the_start() {
        assert_eq!(
            page_links(1, 10),
            vec![
                PageLink::Page(1),
                PageLink::Page(2),
                PageLink::Ellipsis,
                PageLink::Page(10),
            ]
        );
    }

    #[test]
    fn page_links_collapse_only_the_leading_gap_at_the_end() {
        assert_eq!(
            page_links(10, 10),
            vec![
                PageLink::Page(1),
                PageLink::Ellipsis,
                PageLink::Page(9),
                PageLink::Page(10),
            ]
        );
    }

    #[test]
    fn page_links_are_empty_without_pages() {
        assert!(page_links(1, 0).is_empty());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        const CATEGORIES: [&str; 4] = ["Commercial", "Residential", "Retail", "Hospitality"];

        fn arbitrary_records() -> impl Strategy<Value = Vec<ProjectRecord>> {
            prop::collection::vec(0..CATEGORIES.len(), 0..60).prop_map(|picks| {
                picks
                    .into_iter()
                    .enumerate()
                    .map(|(id, pick)| record(u32::try_from(id).unwrap(), CATEGORIES[pick]))
                    .collect()
            })
        }

        proptest! {
            #[test]
            fn window_never_exceeds_page_size(
                records in arbitrary_records(),
                category in prop::sample::select(&CATEGORIES[..]),
                page in 0usize..10,
            ) {
                let window = paginate(filter_by_category(&records, category), page);
                prop_assert!(window.items.len() <= PAGE_SIZE);
            }

            #[test]
            fn pages_partition_the_filtered_set(
                records in arbitrary_records(),
                category in prop::sample::select(&CATEGORIES[..]),
            ) {
                let filtered = filter_by_category(&records, category);
                let expected: Vec<u32> = filtered.iter().map(|r| r.id).collect();
                let total_pages = paginate(filtered.clone(), 1).total_pages;

                let mut seen = Vec::new();
                for page in 1..=total_pages {
                    let window = paginate(filter_by_category(&records, category), page);
                    seen.extend(window.items.iter().map(|r| r.id));
                }

                // No duplicates, no omissions, order preserved.
                prop_assert_eq!(seen, expected);
            }

            #[test]
            fn total_pages_matches_the_ceiling_formula(
                records in arbitrary_records(),
                category in prop::sample::select(&CATEGORIES[..]),
            ) {
                let filtered = filter_by_category(&records, category);
                let count = filtered.len();
                let window = paginate(filtered, 1);

                prop_assert_eq!(window.total_pages, count.div_ceil(PAGE_SIZE));
                if count == 0 {
                    prop_assert_eq!(window.total_pages, 0);
                }
            }

            #[test]
            fn page_link_policy_always_anchors_first_and_last(
                current in 1usize..30,
                total in 1usize..30,
            ) {
                let links = page_links(current.min(total), total);

                prop_assert_eq!(links.first(), Some(&PageLink::Page(1)));
                prop_assert_eq!(links.last(), Some(&PageLink::Page(total)));
                // At most one ellipsis on either side of the current page.
                let ellipses = links.iter().filter(|l| **l == PageLink::Ellipsis).count();
                prop_assert!(ellipses <= 2);
            }
        }
    }
}
