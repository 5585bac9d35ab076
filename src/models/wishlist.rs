use super::{Draft, Property};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A saved property. The `property*` fields are a snapshot taken when the
/// item was saved and are used when the referenced property no longer exists.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_id: Option<String>,
    #[serde(default)]
    pub property_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_image: Option<String>,
    #[serde(default)]
    pub property_location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(default)]
    pub user_note: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// What a wishlist row shows
#[derive(Debug, Clone, PartialEq)]
pub struct WishlistDisplay {
    pub title: String,
    pub image: Option<String>,
    pub location: String,
    pub price: Option<f64>,
    pub property_type: Option<String>,
    /// False when the referenced property could not be found
    pub live: bool,
}

impl WishlistItem {
    /// Snapshot a property into a new wishlist item
    pub fn for_property(property: &Property, note: impl Into<String>) -> Self {
        Self {
            property_id: property.id.clone(),
            property_title: property.title.clone(),
            property_image: property.image.clone(),
            property_location: property.location.clone(),
            property_price: Some(property.price),
            property_type: Some(property.property_type.as_str().to_string()),
            user_note: note.into(),
            ..Self::default()
        }
    }

    /// Resolve against the current listings, falling back to the snapshot
    pub fn display(&self, properties: &[Property]) -> WishlistDisplay {
        let current = self
            .property_id
            .as_deref()
            .and_then(|id| properties.iter().find(|p| p.id.as_deref() == Some(id)));

        match current {
            Some(property) => WishlistDisplay {
                title: property.title.clone(),
                image: property.image.clone(),
                location: property.location.clone(),
                price: Some(property.price),
                property_type: Some(property.property_type.as_str().to_string()),
                live: true,
            },
            None => WishlistDisplay {
                title: self.property_title.clone(),
                image: self.property_image.clone(),
                location: self.property_location.clone(),
                price: self.property_price,
                property_type: self.property_type.clone(),
                live: false,
            },
        }
    }
}

impl Draft for WishlistItem {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let has_reference = self.property_id.as_deref().is_some_and(|id| !id.trim().is_empty());
        if has_reference || !self.property_title.trim().is_empty() {
            Vec::new()
        } else {
            vec!["propertyId"]
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistFilters {
    pub property_type: Option<String>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}
