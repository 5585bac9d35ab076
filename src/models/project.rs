use super::{blank_fields, compact_rows, Draft};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ProjectStatus {
    #[default]
    Upcoming,
    UnderConstruction,
    Ready,
    Completed,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct PriceRange {
    #[serde(default)]
    pub min: f64,
    #[serde(default)]
    pub max: f64,
}

/// A development project
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub price_range: PriceRange,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub developer: String,
    #[serde(default)]
    pub key_highlights: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completion_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_plan: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Project {
    /// Copy with blank rows removed from every list field
    pub fn compacted(&self) -> Self {
        Self {
            key_highlights: compact_rows(&self.key_highlights),
            images: compact_rows(&self.images),
            amenities: compact_rows(&self.amenities),
            ..self.clone()
        }
    }
}

impl Draft for Project {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = blank_fields(&[
            ("title", self.title.as_str()),
            ("description", self.description.as_str()),
            ("location", self.location.as_str()),
            ("developer", self.developer.as_str()),
        ]);
        if self.price_range.max > 0.0 && self.price_range.min > self.price_range.max {
            missing.push("priceRange");
        }
        missing
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectFilters {
    pub status: Option<String>,
    pub category: Option<String>,
    pub developer: Option<String>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}
