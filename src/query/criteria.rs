use crate::models::{Listing, PropertyType};
use serde::{Deserialize, Serialize};

/// Filter criteria for the listing query
///
/// Every field is independently optional: an empty string or `None`
/// leaves that dimension unconstrained. The price range is always applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Inclusive (min, max) monthly price
    pub price_range: (u32, u32),
    /// Exact location label; empty means any
    pub location: String,
    /// Available now / coming soon / either
    pub available: Option<bool>,
    /// Exact bedroom count (0 = studio)
    pub bedrooms: Option<u8>,
    pub property_type: Option<PropertyType>,
    /// Case-insensitive text matched against title, description and location
    pub search_term: String,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            price_range: (0, u32::MAX),
            location: String::new(),
            available: None,
            bedrooms: None,
            property_type: None,
            search_term: String::new(),
        }
    }
}

impl FilterCriteria {
    /// Whether `listing` passes every criterion
    ///
    /// The structured checks reject in order; only once all of them pass
    /// does a non-empty search term decide inclusion on its own.
    pub fn matches(&self, listing: &Listing) -> bool {
        let (min, max) = self.price_range;
        if listing.price < min || listing.price > max {
            return false;
        }

        if !self.location.is_empty() && listing.location != self.location {
            return false;
        }

        if self.available.is_some_and(|a| listing.available != a) {
            return false;
        }

        if self.bedrooms.is_some_and(|b| listing.bedrooms != b) {
            return false;
        }

        if self.property_type.is_some_and(|t| listing.property_type != t) {
            return false;
        }

        if !self.search_term.is_empty() {
            let needle = self.search_term.to_lowercase();
            return listing.title.to_lowercase().contains(&needle)
                || listing.description.to_lowercase().contains(&needle)
                || listing.location.to_lowercase().contains(&needle);
        }

        true
    }
}

/// Filter stage: keeps matching listings in their original order
pub fn filter_listings<'a>(listings: &'a [Listing], criteria: &FilterCriteria) -> Vec<&'a Listing> {
    listings.iter().filter(|l| criteria.matches(l)).collect()
}
