use estate_portal::api::ApiClient;
use estate_portal::auth::{FileSessionStore, SessionStore};
use estate_portal::config::ClientConfig;
use estate_portal::fallback::{list_or_degrade, DegradedContent, SampleContent};
use estate_portal::models::{AdminCredentials, BlogFilters, PartnerFilters, Property, PropertyFilters};
use estate_portal::models::{ContactFilters, PropertyType};
use estate_portal::pagination::Carousel;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn print_window(heading: &str, carousel: &Carousel<Property>) {
    let pager = carousel.paginator();
    println!("{} (page {}/{})", heading, pager.page_number(), pager.page_count().max(1));
    for property in carousel.visible() {
        println!("   {} - {} ({:.0} AED)", property.title, property.location, property.price);
    }
    println!();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("🏠 Estate Portal");
    info!("================");

    let config = ClientConfig::from_env()?;
    let client = ApiClient::new(&config)?;
    let samples = SampleContent;
    info!("Using API at {}", client.base_url());

    // Listings: both carousels come out of one fetch
    let properties = list_or_degrade(
        "properties",
        client.get_properties(&PropertyFilters::default()),
        || samples.properties(),
    )
    .await;
    if properties.is_degraded() {
        warn!("Backend unavailable, listings below are sample content");
    }

    let all_properties = properties.into_inner();
    let json = serde_json::to_string_pretty(&all_properties)?;
    tokio::fs::write("properties.json", json).await?;
    info!("💾 Saved {} properties to properties.json", all_properties.len());

    let (exclusive, off_plan) = Property::partition_by_type(all_properties);
    print_window(&format!("Exclusive ({})", PropertyType::Exclusive.as_str()), &Carousel::new(exclusive));
    print_window(&format!("Off-plan ({})", PropertyType::OffPlan.as_str()), &Carousel::new(off_plan));

    let partners = list_or_degrade("partners", client.get_partners(&PartnerFilters::default()), || {
        samples.partners()
    })
    .await;
    let partners = Carousel::new(partners.into_inner());
    println!("Partners");
    for partner in partners.visible() {
        println!("   {} ({:.1}★)", partner.name, partner.rating);
    }
    println!();

    let blogs = list_or_degrade("blogs", client.get_blogs(&BlogFilters::default()), || samples.blogs()).await;
    let blogs = Carousel::new(blogs.into_inner());
    println!("Latest posts");
    for post in blogs.visible() {
        println!("   {} - {} ({} min read)", post.title, post.derived_excerpt(80), post.reading_time_minutes());
    }
    println!();

    // Admin section runs only with credentials or a stored session
    let store = FileSessionStore::new(&config.session_file);
    if let (Ok(email), Ok(password)) = (
        std::env::var("ESTATE_PORTAL_ADMIN_EMAIL"),
        std::env::var("ESTATE_PORTAL_ADMIN_PASSWORD"),
    ) {
        if let Err(e) = client.login_and_store(&AdminCredentials::new(email, password), &store).await {
            warn!("Admin login failed: {}", e);
        }
    }

    let auth = store.auth().await?;
    if auth.is_authenticated() {
        match client.get_contacts(&auth, &ContactFilters::default()).await {
            Ok(contacts) => info!("📬 {} contact submissions", contacts.len()),
            Err(e) => warn!("Could not load contacts: {}", e),
        }
    }

    Ok(())
}
