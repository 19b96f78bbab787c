//! Listing query engine: filter, then sort, then paginate
//!
//! Every call is a pure function of its inputs. Callers that keep browse
//! state between calls use [`BrowseState`], which resets to the first page
//! whenever the criteria or the sort spec change.

pub mod criteria;
pub mod page;
pub mod sort;
pub mod state;

pub use criteria::{filter_listings, FilterCriteria};
pub use page::{paginate, visible_pages, PageLink, PageMeta, DEFAULT_PAGE_SIZE};
pub use sort::{sort_listings, SortDirection, SortKey, SortSpec};
pub use state::BrowseState;

use crate::models::Listing;
use serde::Serialize;
use tracing::debug;

/// One page of query results plus pagination metadata
#[derive(Debug, Clone, Serialize)]
pub struct QueryResult<'a> {
    pub items: Vec<&'a Listing>,
    pub meta: PageMeta,
}

impl QueryResult<'_> {
    pub fn total_items(&self) -> usize {
        self.meta.total_items
    }

    pub fn total_pages(&self) -> usize {
        self.meta.total_pages
    }
}

/// Run the full pipeline over `listings` and return page `page` (1-based)
pub fn query<'a>(
    listings: &'a [Listing],
    criteria: &FilterCriteria,
    sort: SortSpec,
    page: usize,
    page_size: usize,
) -> QueryResult<'a> {
    let filtered = filter_listings(listings, criteria);
    let sorted = sort_listings(&filtered, sort);
    let meta = PageMeta::new(page, page_size, sorted.len());
    let items = paginate(&sorted, page, meta.page_size).to_vec();

    debug!(
        total = meta.total_items,
        page,
        returned = items.len(),
        "Listing query evaluated"
    );

    QueryResult { items, meta }
}
