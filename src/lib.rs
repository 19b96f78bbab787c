//! Rental listing browser: a query engine over a static catalog of rental
//! listings plus a mock authentication service with a persisted session.

pub mod auth;
pub mod catalog;
pub mod config;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod query;

pub use catalog::Catalog;
pub use config::AppConfig;
pub use error::{AuthError, FixtureError, SessionError};
pub use models::{Account, Listing, PropertyType, User};
