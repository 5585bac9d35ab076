pub mod auth;
pub mod blog;
pub mod contact;
pub mod partner;
pub mod project;
pub mod property;
pub mod review;
pub mod wishlist;

pub use auth::{AdminCredentials, AdminSession, AdminUser};
pub use blog::{BlogFilters, BlogPost, BlogStatus, Seo};
pub use contact::{Contact, ContactFilters, ContactStatus};
pub use partner::{Address, Partner, PartnerContact, PartnerFilters, PartnerStatus, SocialMedia};
pub use project::{PriceRange, Project, ProjectFilters, ProjectStatus};
pub use property::{Property, PropertyFilters, PropertyStatus, PropertyType};
pub use review::{Review, ReviewFilters, ReviewStatus};
pub use wishlist::{WishlistDisplay, WishlistFilters, WishlistItem};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Entity shape used both as admin form state and as the wire payload
pub trait Draft: Clone + Default + Serialize + DeserializeOwned + Send + Sync {
    /// Backend id, `None` until the entity has been created
    fn id(&self) -> Option<&str>;

    /// Names of required fields that are still blank
    fn missing_fields(&self) -> Vec<&'static str>;
}

/// Drop blank rows left behind by add/remove row editing
pub fn compact_rows(rows: &[String]) -> Vec<String> {
    rows.iter()
        .map(|row| row.trim())
        .filter(|row| !row.is_empty())
        .map(str::to_string)
        .collect()
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Collect the names of blank fields from `(name, value)` pairs
pub(crate) fn blank_fields(fields: &[(&'static str, &str)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| is_blank(value))
        .map(|(name, _)| *name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compact_rows_trims_and_drops_blanks() {
        let rows = vec![" Pool ".to_string(), String::new(), "   ".to_string(), "Gym".to_string()];
        assert_eq!(compact_rows(&rows), vec!["Pool", "Gym"]);
    }

    #[test]
    fn blank_fields_lists_only_empty_values() {
        assert_eq!(blank_fields(&[("title", "Villa"), ("location", " ")]), vec!["location"]);
    }
}
