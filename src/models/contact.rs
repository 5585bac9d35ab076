use super::{blank_fields, Draft};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    New,
    Contacted,
    Resolved,
}

/// A contact-form submission
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(default, alias = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: ContactStatus,
    /// Set once an admin has edited the submission
    #[serde(default)]
    pub is_edited: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Draft for Contact {
    fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = blank_fields(&[
            ("name", self.name.as_str()),
            ("email", self.email.as_str()),
            ("message", self.message.as_str()),
        ]);
        if !self.email.trim().is_empty() && !self.email.contains('@') {
            missing.push("email");
        }
        missing
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFilters {
    pub status: Option<String>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_must_look_like_an_address() {
        let contact = Contact {
            name: "Sara".into(),
            email: "sara.example.com".into(),
            message: "Call me".into(),
            ..Contact::default()
        };
        assert_eq!(contact.missing_fields(), vec!["email"]);
    }

    #[test]
    fn is_edited_serializes_camel_case() {
        let contact = Contact {
            is_edited: true,
            ..Contact::default()
        };
        let value = serde_json::to_value(&contact).unwrap();
        assert_eq!(value["isEdited"], true);
        assert_eq!(value["status"], "new");
    }
}
