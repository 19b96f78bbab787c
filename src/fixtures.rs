//! Versioned seed data for listings and mock accounts
//!
//! Both fixtures are embedded into the binary as defaults and can be
//! replaced by files on disk (see `AppConfig`).

use crate::error::FixtureError;
use crate::models::{Account, Listing};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

pub const FIXTURE_VERSION: u32 = 1;

const DEFAULT_LISTINGS: &str = include_str!("../fixtures/listings.json");
const DEFAULT_USERS: &str = include_str!("../fixtures/users.json");

#[derive(Debug, Deserialize)]
struct ListingsFixture {
    version: u32,
    listings: Vec<Listing>,
}

#[derive(Debug, Deserialize)]
struct UsersFixture {
    version: u32,
    users: Vec<Account>,
}

trait Versioned {
    fn version(&self) -> u32;
}

impl Versioned for ListingsFixture {
    fn version(&self) -> u32 {
        self.version
    }
}

impl Versioned for UsersFixture {
    fn version(&self) -> u32 {
        self.version
    }
}

fn parse<T: DeserializeOwned + Versioned>(json: &str) -> Result<T, FixtureError> {
    let fixture: T = serde_json::from_str(json)?;
    if fixture.version() != FIXTURE_VERSION {
        return Err(FixtureError::UnsupportedVersion {
            found: fixture.version(),
            expected: FIXTURE_VERSION,
        });
    }
    Ok(fixture)
}

fn read(path: &Path) -> Result<String, FixtureError> {
    std::fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.display().to_string(),
        source,
    })
}

pub fn listings_from_str(json: &str) -> Result<Vec<Listing>, FixtureError> {
    Ok(parse::<ListingsFixture>(json)?.listings)
}

pub fn users_from_str(json: &str) -> Result<Vec<Account>, FixtureError> {
    Ok(parse::<UsersFixture>(json)?.users)
}

/// Load listings from `path`, or the embedded seed when `None`
pub fn load_listings(path: Option<&Path>) -> Result<Vec<Listing>, FixtureError> {
    let listings = match path {
        Some(path) => listings_from_str(&read(path)?)?,
        None => listings_from_str(DEFAULT_LISTINGS)?,
    };
    info!("Loaded {} listings", listings.len());
    Ok(listings)
}

/// Load mock accounts from `path`, or the embedded seed when `None`
pub fn load_users(path: Option<&Path>) -> Result<Vec<Account>, FixtureError> {
    let users = match path {
        Some(path) => users_from_str(&read(path)?)?,
        None => users_from_str(DEFAULT_USERS)?,
    };
    info!("Loaded {} mock accounts", users.len());
    Ok(users)
}
