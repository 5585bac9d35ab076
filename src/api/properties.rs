use super::{item_path, Ack, ApiClient, ListPage, RequestBody};
use crate::auth::AuthContext;
use crate::error::Result;
use crate::models::{Property, PropertyFilters};
use reqwest::Method;

const PROPERTIES: &str = "/properties";
/// Wrapper keys this resource's endpoints may use
const WRAPPERS: &[&str] = &["property"];

impl ApiClient {
    pub async fn get_properties(&self, filters: &PropertyFilters) -> Result<ListPage<Property>> {
        self.fetch_list(PROPERTIES, filters, None).await
    }

    pub async fn get_property(&self, id: &str) -> Result<Property> {
        self.fetch_entity(&item_path(PROPERTIES, id), WRAPPERS, None).await
    }

    pub async fn create_property(&self, auth: &AuthContext, body: RequestBody) -> Result<Property> {
        self.send_entity(Method::POST, PROPERTIES, body, WRAPPERS, Some(auth)).await
    }

    pub async fn update_property(&self, auth: &AuthContext, id: &str, body: RequestBody) -> Result<Property> {
        self.send_entity(Method::PUT, &item_path(PROPERTIES, id), body, WRAPPERS, Some(auth))
            .await
    }

    pub async fn delete_property(&self, auth: &AuthContext, id: &str) -> Result<Ack> {
        self.remove(&item_path(PROPERTIES, id), auth).await
    }
}
