use anyhow::{Context, Result};
use rental_browser::auth::{AuthProvider, FileBackend, MockAuthService, SessionStore};
use rental_browser::query::{BrowseState, PageLink, SortKey};
use rental_browser::{fixtures, AppConfig, Catalog};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::from_env()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("rental_browser=info")),
        )
        .init();

    info!("🏠 Rental Browser");
    info!("==========================================");

    let listings = fixtures::load_listings(config.listings_fixture.as_deref())
        .context("Failed to load listings fixture")?;
    let accounts = fixtures::load_users(config.users_fixture.as_deref())
        .context("Failed to load users fixture")?;
    let catalog = Catalog::new(listings);

    let backend = Arc::new(FileBackend::new(&config.session_file));
    let session = SessionStore::load(backend)
        .await
        .context("Failed to restore session")?;
    let auth = MockAuthService::with_delay(accounts, Arc::new(session), config.auth_delay);

    match (auth.current_user().await, &config.demo_login) {
        (Some(user), _) => info!("Signed in as {} <{}>", user.name, user.email),
        (None, Some((email, password))) => {
            let user = auth.login(email, password).await?;
            info!("Signed in as {} <{}>", user.name, user.email);
        }
        (None, None) => info!("Browsing as guest"),
    }

    let mut state = BrowseState::new(catalog.default_criteria(), config.page_size);
    state.select_sort(SortKey::Availability);

    let result = state.current(catalog.listings());
    info!(
        "Showing {} properties (page {} of {})",
        result.total_items(),
        result.meta.page,
        result.total_pages()
    );
    println!();

    for (i, listing) in result.items.iter().enumerate() {
        let status = if listing.available { "Available now" } else { "Coming soon" };
        println!(
            "{}. {} ({}/month)",
            i + 1,
            listing.title,
            listing.formatted_price()
        );
        println!(
            "   {} · {} · {} bd, {} ba, {} sqft",
            listing.location,
            listing.property_type.label(),
            listing.bedrooms,
            listing.bathrooms,
            listing.square_feet
        );
        println!("   {} (from {})", status, listing.available_from);
        println!("   Amenities: {}", listing.amenities.join(", "));
        println!();
    }

    let controls: Vec<String> = result
        .meta
        .visible_pages()
        .into_iter()
        .map(|link| match link {
            PageLink::Page(n) if n == result.meta.page => format!("[{}]", n),
            PageLink::Page(n) => n.to_string(),
            PageLink::Ellipsis => "...".to_string(),
        })
        .collect();
    if !controls.is_empty() {
        println!("Pages: {}", controls.join(" "));
    }

    info!("Locations: {}", catalog.locations().join(", "));

    Ok(())
}
