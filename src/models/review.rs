use super::{blank_fields, Draft};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReviewStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Pending => "pending",
            ReviewStatus::Approved => "approved",
            ReviewStatus::Rejected => "rejected",
        }
    }
}

/// A customer review, publicly submitted and moderated by admins
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub rating: u8,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: ReviewStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Draft for Review {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = blank_fields(&[
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("message", self.message.as_str()),
        ]);
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            missing.push("rating");
        }
        missing
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewFilters {
    pub status: Option<String>,
    pub rating: Option<u8>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ReviewFilters {
    /// Only reviews an admin has approved, as shown on the public site
    pub fn approved() -> Self {
        Self {
            status: Some(ReviewStatus::Approved.as_str().to_string()),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: u8) -> Review {
        Review {
            name: "Omar".into(),
            email: "omar@example.com".into(),
            message: "Smooth handover".into(),
            rating,
            ..Review::default()
        }
    }

    #[test]
    fn rating_must_be_between_one_and_five() {
        assert!(review(1).missing_fields().is_empty());
        assert!(review(5).missing_fields().is_empty());
        assert_eq!(review(0).missing_fields(), vec!["rating"]);
        assert_eq!(review(6).missing_fields(), vec!["rating"]);
    }
}
