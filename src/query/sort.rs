use crate::models::Listing;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Price,
    Availability,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Sort key and direction. Defaults to price, low to high.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            key: SortKey::Price,
            direction: SortDirection::Asc,
        }
    }
}

impl SortSpec {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    /// Reselecting the current key flips the direction; a new key starts ascending
    pub fn select(self, key: SortKey) -> Self {
        if self.key == key {
            Self::new(key, self.direction.toggled())
        } else {
            Self::new(key, SortDirection::Asc)
        }
    }

    /// Ordering of two listings under this spec. Equal keys compare `Equal`.
    pub fn compare(&self, a: &Listing, b: &Listing) -> Ordering {
        let ord = match self.key {
            SortKey::Price => a.price.cmp(&b.price),
            // available-now first when ascending
            SortKey::Availability => b.available.cmp(&a.available),
        };
        match self.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

/// Sort stage: returns a new, stably sorted sequence
pub fn sort_listings<'a>(listings: &[&'a Listing], spec: SortSpec) -> Vec<&'a Listing> {
    let mut sorted = listings.to_vec();
    sorted.sort_by(|a, b| spec.compare(a, b));
    sorted
}
