use crate::models::{Listing, PropertyType};
use crate::query::FilterCriteria;
use std::collections::BTreeSet;

/// Read-only listing collection and the facets derived from it
#[derive(Debug, Clone)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    /// Listing by id, for the detail view
    pub fn get(&self, id: &str) -> Option<&Listing> {
        self.listings.iter().find(|l| l.id == id)
    }

    /// Distinct location labels, sorted
    pub fn locations(&self) -> Vec<&str> {
        self.listings
            .iter()
            .map(|l| l.location.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn property_types(&self) -> &'static [PropertyType] {
        &PropertyType::ALL
    }

    /// Lowest and highest monthly price, `(0, 0)` for an empty catalog
    pub fn price_bounds(&self) -> (u32, u32) {
        let min = self.listings.iter().map(|l| l.price).min();
        let max = self.listings.iter().map(|l| l.price).max();
        (min.unwrap_or(0), max.unwrap_or(0))
    }

    /// Starting (and reset) criteria: full price range, nothing else constrained
    pub fn default_criteria(&self) -> FilterCriteria {
        FilterCriteria {
            price_range: self.price_bounds(),
            ..FilterCriteria::default()
        }
    }

    pub fn featured(&self) -> impl Iterator<Item = &Listing> {
        self.listings.iter().filter(|l| l.featured)
    }
}
