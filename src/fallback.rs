//! Placeholder content for when the live API is unavailable.
//!
//! A marketing page should still render something plausible when the backend
//! is down, so listing screens ask a [`DegradedContent`] provider instead of
//! showing an error.

use crate::api::ListPage;
use crate::error::ApiError;
use crate::models::{BlogPost, BlogStatus, Partner, PartnerContact, Project, ProjectStatus, PriceRange, Property, PropertyStatus, PropertyType};
use std::future::Future;
use tracing::warn;

/// Data that came from the API or was substituted
#[derive(Debug, Clone, PartialEq)]
pub enum Content<T> {
    Live(T),
    Degraded { data: T, reason: String },
}

impl<T> Content<T> {
    pub fn is_degraded(&self) -> bool {
        matches!(self, Content::Degraded { .. })
    }

    pub fn data(&self) -> &T {
        match self {
            Content::Live(data) | Content::Degraded { data, .. } => data,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Content::Live(data) | Content::Degraded { data, .. } => data,
        }
    }
}

/// Provider of placeholder collections
pub trait DegradedContent: Send + Sync {
    fn properties(&self) -> Vec<Property>;
    fn projects(&self) -> Vec<Project>;
    fn blogs(&self) -> Vec<BlogPost>;
    fn partners(&self) -> Vec<Partner>;
}

/// Await a live fetch; on any error log it and use `fallback` instead
pub async fn fetch_or_degrade<T, Fut, F>(label: &str, live: Fut, fallback: F) -> Content<T>
where
    Fut: Future<Output = Result<T, ApiError>>,
    F: FnOnce() -> T,
{
    match live.await {
        Ok(data) => Content::Live(data),
        Err(e) => {
            warn!("Failed to load {} ({}), showing sample content", label, e);
            Content::Degraded {
                data: fallback(),
                reason: e.to_string(),
            }
        }
    }
}

/// Same as [`fetch_or_degrade`] for list accessors, unwrapping the page
pub async fn list_or_degrade<T, Fut, F>(label: &str, live: Fut, fallback: F) -> Content<Vec<T>>
where
    Fut: Future<Output = Result<ListPage<T>, ApiError>>,
    F: FnOnce() -> Vec<T>,
{
    match fetch_or_degrade(label, live, || ListPage::new(fallback())).await {
        Content::Live(page) => Content::Live(page.items),
        Content::Degraded { data, reason } => Content::Degraded {
            data: data.items,
            reason,
        },
    }
}

/// Built-in sample data
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleContent;

fn sample_property(id: &str, title: &str, location: &str, price: f64, property_type: PropertyType, bedrooms: u32) -> Property {
    Property {
        id: Some(id.to_string()),
        title: title.to_string(),
        description: format!("{title} in {location}."),
        price,
        location: location.to_string(),
        property_type,
        bedrooms,
        bathrooms: bedrooms + 1,
        area: 850.0 * bedrooms as f64,
        features: vec!["Sea view".to_string(), "Pool".to_string(), "Gym".to_string()],
        status: PropertyStatus::Available,
        ..Property::default()
    }
}

impl DegradedContent for SampleContent {
    fn properties(&self) -> Vec<Property> {
        vec![
            sample_property("sample-1", "Beachfront Penthouse", "Dubai Marina", 8_500_000.0, PropertyType::Exclusive, 4),
            sample_property("sample-2", "Signature Villa", "Palm Jumeirah", 15_750_000.0, PropertyType::Exclusive, 5),
            sample_property("sample-3", "Downtown Residence", "Downtown Dubai", 3_200_000.0, PropertyType::Exclusive, 2),
            Property {
                completion_date: Some("Q4 2027".to_string()),
                payment_plan: Some("60/40".to_string()),
                roi: Some(8.0),
                developer: Some("Emaar Properties".to_string()),
                ..sample_property("sample-4", "Creek Harbour Tower", "Dubai Creek Harbour", 1_850_000.0, PropertyType::OffPlan, 2)
            },
            Property {
                completion_date: Some("Q2 2028".to_string()),
                payment_plan: Some("70/30".to_string()),
                roi: Some(7.0),
                developer: Some("Sobha Realty".to_string()),
                ..sample_property("sample-5", "Hartland Townhouse", "Mohammed Bin Rashid City", 4_100_000.0, PropertyType::OffPlan, 3)
            },
        ]
    }

    fn projects(&self) -> Vec<Project> {
        vec![
            Project {
                id: Some("sample-project-1".to_string()),
                title: "Creek Rise".to_string(),
                description: "Twin towers overlooking the creek and the skyline.".to_string(),
                price_range: PriceRange {
                    min: 1_200_000.0,
                    max: 3_800_000.0,
                },
                location: "Dubai Creek Harbour".to_string(),
                status: ProjectStatus::UnderConstruction,
                category: "Residential".to_string(),
                developer: "Emaar Properties".to_string(),
                key_highlights: vec!["Waterfront promenade".to_string(), "Metro access".to_string()],
                amenities: vec!["Infinity pool".to_string(), "Kids play area".to_string()],
                completion_date: Some("2027".to_string()),
                ..Project::default()
            },
            Project {
                id: Some("sample-project-2".to_string()),
                title: "Marina Vista".to_string(),
                description: "Beachfront apartments with private beach access.".to_string(),
                price_range: PriceRange {
                    min: 2_000_000.0,
                    max: 9_500_000.0,
                },
                location: "Emaar Beachfront".to_string(),
                status: ProjectStatus::Ready,
                category: "Residential".to_string(),
                developer: "Emaar Properties".to_string(),
                ..Project::default()
            },
        ]
    }

    fn blogs(&self) -> Vec<BlogPost> {
        vec![
            BlogPost {
                id: Some("sample-blog-1".to_string()),
                title: "A buyer's guide to off-plan property".to_string(),
                excerpt: "Payment plans, escrow and what to check before you sign.".to_string(),
                content: "<p>Off-plan purchases are paid in stages during construction.</p>".to_string(),
                category: "Guides".to_string(),
                tags: vec!["off-plan".to_string(), "investment".to_string()],
                status: BlogStatus::Published,
                featured: true,
                ..BlogPost::default()
            },
            BlogPost {
                id: Some("sample-blog-2".to_string()),
                title: "Golden visa through property".to_string(),
                excerpt: "How a property investment can qualify you for long-term residency.".to_string(),
                content: "<p>Investors buying above the threshold may apply for a ten-year visa.</p>".to_string(),
                category: "News".to_string(),
                status: BlogStatus::Published,
                ..BlogPost::default()
            },
        ]
    }

    fn partners(&self) -> Vec<Partner> {
        ["Emaar Properties", "Sobha Realty", "Damac Properties", "Nakheel"]
            .into_iter()
            .enumerate()
            .map(|(i, name)| Partner {
                id: Some(format!("sample-partner-{}", i + 1)),
                name: name.to_string(),
                description: format!("{name} is one of our development partners."),
                contact: PartnerContact {
                    website: format!("https://www.{}.com", name.split_whitespace().next().unwrap_or(name).to_lowercase()),
                    ..PartnerContact::default()
                },
                featured: i == 0,
                rating: 4.5,
                ..Partner::default()
            })
            .collect()
    }
}
