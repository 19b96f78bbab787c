use super::{query, FilterCriteria, QueryResult, SortKey, SortSpec};
use crate::models::Listing;

/// Caller-side browse state: criteria, sort spec and current page
///
/// Changing the criteria or the sort spec always returns to page 1.
#[derive(Debug, Clone, PartialEq)]
pub struct BrowseState {
    criteria: FilterCriteria,
    sort: SortSpec,
    page: usize,
    page_size: usize,
}

impl BrowseState {
    pub fn new(criteria: FilterCriteria, page_size: usize) -> Self {
        Self {
            criteria,
            sort: SortSpec::default(),
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Replace the criteria wholesale
    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
        self.page = 1;
    }

    /// Apply an in-place edit to the criteria
    pub fn update_criteria(&mut self, edit: impl FnOnce(&mut FilterCriteria)) {
        edit(&mut self.criteria);
        self.page = 1;
    }

    /// Select a sort key, toggling direction when it is already selected
    pub fn select_sort(&mut self, key: SortKey) {
        self.sort = self.sort.select(key);
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Evaluate the current page against `listings`
    pub fn current<'a>(&self, listings: &'a [Listing]) -> QueryResult<'a> {
        query(listings, &self.criteria, self.sort, self.page, self.page_size)
    }
}
