use super::{item_path, Ack, ApiClient, ListPage, RequestBody};
use crate::auth::AuthContext;
use crate::error::Result;
use crate::models::{Contact, ContactFilters};
use reqwest::Method;

const CONTACTS: &str = "/contacts";
/// Wrapper keys this resource's endpoints may use
const WRAPPERS: &[&str] = &["contact"];

impl ApiClient {
    /// Public contact form
    pub async fn submit_contact(&self, contact: &Contact) -> Result<Contact> {
        self.send_entity(Method::POST, CONTACTS, RequestBody::json(contact)?, WRAPPERS, None)
            .await
    }

    pub async fn get_contacts(&self, auth: &AuthContext, filters: &ContactFilters) -> Result<ListPage<Contact>> {
        self.fetch_list(CONTACTS, filters, Some(auth)).await
    }

    pub async fn update_contact(&self, auth: &AuthContext, id: &str, body: RequestBody) -> Result<Contact> {
        self.send_entity(Method::PUT, &item_path(CONTACTS, id), body, WRAPPERS, Some(auth))
            .await
    }

    pub async fn delete_contact(&self, auth: &AuthContext, id: &str) -> Result<Ack> {
        self.remove(&item_path(CONTACTS, id), auth).await
    }
}
