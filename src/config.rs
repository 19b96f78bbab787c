//! Application configuration loaded from the environment

use crate::auth::DEFAULT_AUTH_DELAY;
use crate::query::DEFAULT_PAGE_SIZE;
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Listings fixture; the embedded seed when `None`
    pub listings_fixture: Option<PathBuf>,
    /// Mock accounts fixture; the embedded seed when `None`
    pub users_fixture: Option<PathBuf>,
    /// File holding the persisted session
    pub session_file: PathBuf,
    pub auth_delay: Duration,
    pub page_size: usize,
    /// Credentials the demo binary signs in with when no session is restored
    pub demo_login: Option<(String, String)>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listings_fixture: None,
            users_fixture: None,
            session_file: PathBuf::from("session.json"),
            auth_delay: DEFAULT_AUTH_DELAY,
            page_size: DEFAULT_PAGE_SIZE,
            demo_login: None,
        }
    }
}

impl AppConfig {
    /// Load from process environment (after `.env`, if present)
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load from an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(path) = lookup("LISTINGS_FIXTURE") {
            config.listings_fixture = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup("USERS_FIXTURE") {
            config.users_fixture = Some(PathBuf::from(path));
        }
        if let Some(path) = lookup("SESSION_FILE") {
            config.session_file = PathBuf::from(path);
        }
        if let Some(ms) = lookup("AUTH_DELAY_MS") {
            let ms: u64 = ms
                .trim()
                .parse()
                .with_context(|| format!("AUTH_DELAY_MS must be a number, got {:?}", ms))?;
            config.auth_delay = Duration::from_millis(ms);
        }
        if let Some(size) = lookup("PAGE_SIZE") {
            let size: usize = size
                .trim()
                .parse()
                .with_context(|| format!("PAGE_SIZE must be a number, got {:?}", size))?;
            anyhow::ensure!(size >= 1, "PAGE_SIZE must be at least 1");
            config.page_size = size;
        }

        if let (Some(email), Some(password)) = (lookup("DEMO_EMAIL"), lookup("DEMO_PASSWORD")) {
            config.demo_login = Some((email, password));
        }

        Ok(config)
    }
}
