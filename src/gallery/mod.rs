//! Shaping of fetched captures into what the gallery shows: entries with
//! derived image URLs, and pagination bounds.

mod entry;
mod pagination;

pub use entry::{
    build_entries, full_size_url, select_thumbnail, GalleryEntry, FULL_SIZE_SUFFIX,
    THUMBNAIL_SUFFIX, TIMESTAMP_FORMAT,
};
pub use pagination::{PageLink, PageLinkKind, Pagination};

use crate::bramon::{ApiError, PageResult};
use crate::query::QueryParams;

/// Everything the gallery template needs for one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturePage {
    pub entries: Vec<GalleryEntry>,
    pub pagination: Pagination,
    /// Set when the captures could not be fetched.
    pub unavailable: bool,
}

impl CapturePage {
    /// Build the page from a fetch outcome. A failed fetch degrades to an
    /// empty first page flagged as unavailable.
    pub fn from_result(result: Result<PageResult, ApiError>, query: &QueryParams) -> Self {
        let (page, unavailable) = match result {
            Ok(page) => (page, false),
            Err(e) => {
                log::warn!("Failed to fetch captures: {}", e);
                (PageResult::empty(), true)
            }
        };

        CapturePage {
            entries: build_entries(&page.items),
            pagination: Pagination::new(page.current_page, page.last_page, query),
            unavailable,
        }
    }
}
