//! Typed client for the real-estate portal REST API, plus the listing and
//! admin form state the site's screens are built on.

pub mod admin;
pub mod api;
pub mod auth;
pub mod config;
pub mod editor;
pub mod error;
pub mod fallback;
pub mod models;
pub mod pagination;

pub use api::{ApiClient, ListPage};
pub use auth::AuthContext;
pub use config::ClientConfig;
pub use error::ApiError;
