use super::{blank_fields, compact_rows, Draft};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PartnerStatus {
    #[default]
    Active,
    Inactive,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub zip_code: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PartnerContact {
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub address: Address,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SocialMedia {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
}

/// A developer partner profile
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Partner {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Year the company was founded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub established: Option<u32>,
    #[serde(default)]
    pub total_projects: u32,
    #[serde(default)]
    pub completed_projects: u32,
    #[serde(default)]
    pub ongoing_projects: u32,
    #[serde(default)]
    pub contact: PartnerContact,
    #[serde(default)]
    pub specialties: Vec<String>,
    #[serde(default)]
    pub awards: Vec<String>,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub vision: String,
    #[serde(default)]
    pub mission: String,
    #[serde(default)]
    pub status: PartnerStatus,
    #[serde(default)]
    pub featured: bool,
    #[serde(default)]
    pub rating: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub social_media: SocialMedia,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Partner {
    pub fn compacted(&self) -> Self {
        Self {
            specialties: compact_rows(&self.specialties),
            awards: compact_rows(&self.awards),
            ..self.clone()
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == PartnerStatus::Active
    }
}

impl Draft for Partner {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        blank_fields(&[
            ("name", self.name.as_str()),
            ("description", self.description.as_str()),
        ])
    }
}

/// Best-effort duplicate check against partners already fetched.
///
/// Names compare trimmed and case-insensitive; the partner being edited
/// (`except_id`) does not count as a duplicate of itself.
pub fn name_taken(existing: &[Partner], name: &str, except_id: Option<&str>) -> bool {
    let wanted = name.trim().to_lowercase();
    if wanted.is_empty() {
        return false;
    }

    existing
        .iter()
        .filter(|p| except_id.is_none() || p.id.as_deref() != except_id)
        .any(|p| p.name.trim().to_lowercase() == wanted)
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerFilters {
    pub status: Option<String>,
    pub featured: Option<bool>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn partner(id: &str, name: &str) -> Partner {
        Partner {
            id: Some(id.to_string()),
            name: name.to_string(),
            ..Partner::default()
        }
    }

    #[test]
    fn duplicate_names_ignore_case_and_whitespace() {
        let existing = vec![partner("1", "Emaar Properties"), partner("2", "Damac")];
        assert!(name_taken(&existing, "  emaar properties ", None));
        assert!(!name_taken(&existing, "Sobha", None));
    }

    #[test]
    fn editing_partner_keeps_own_name() {
        let existing = vec![partner("1", "Emaar Properties")];
        assert!(!name_taken(&existing, "Emaar Properties", Some("1")));
        assert!(name_taken(&existing, "Emaar Properties", Some("9")));
    }

    #[test]
    fn nested_contact_round_trips_camel_case() {
        let partner: Partner = serde_json::from_value(json!({
            "name": "Nakheel",
            "totalProjects": 40,
            "contact": { "phone": "+971", "address": { "city": "Dubai", "zipCode": "00000" } },
            "socialMedia": { "instagram": "@nakheel" },
            "coverImage": "cover.jpg"
        }))
        .unwrap();

        assert_eq!(partner.total_projects, 40);
        assert_eq!(partner.contact.address.zip_code, "00000");
        assert_eq!(partner.social_media.instagram.as_deref(), Some("@nakheel"));
        assert_eq!(partner.cover_image.as_deref(), Some("cover.jpg"));
    }
}
