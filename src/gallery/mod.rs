//! Gallery selection for the project detail page
//!
//! A record's gallery renders one of three ways: not at all, as a single
//! static image, or as a carousel over a capped slice of the images with a
//! note when anything was cut off.

/// Maximum number of gallery images shown, regardless of actual length.
pub const GALLERY_DISPLAY_CAP: usize = 6;

/// How a gallery sequence should be presented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GalleryDisplay<'a> {
    /// Empty gallery: no section rendered
    Hidden,
    /// Exactly one image: static display, no carousel controls
    Single(&'a str),
    /// Two or more images: carousel over at most [`GALLERY_DISPLAY_CAP`] items
    Carousel {
        /// The capped slice of images to show
        images: &'a [String],
        /// `"Showing 6 of N images"` when the gallery was cut off
        overflow_note: Option<String>,
    },
}

/// Decide how to present a gallery sequence.
#[must_use]
pub fn plan(gallery: &[String]) -> GalleryDisplay<'_> {
    match gallery {
        [] => GalleryDisplay::Hidden,
        [only] => GalleryDisplay::Single(only),
        _ => {
            let shown = gallery.len().min(GALLERY_DISPLAY_CAP);
            GalleryDisplay::Carousel {
                images: &gallery[..shown],
                overflow_note: (gallery.len() > GALLERY_DISPLAY_CAP)
                    .then(|| format!("Showing {GALLERY_DISPLAY_CAP} of {} images", gallery.len())),
            }
        }
    }
}
